// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Persisted locale preferences.
//!
//! The dashboard remembers the user's language in two places: a key-value
//! storage entry (`preferred-locale`) and a cookie (`NEXT_LOCALE`) that the
//! server can read on the next request. Both are overwritten together on every
//! language switch.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

/// Storage key holding the user's preferred locale.
pub const STORAGE_KEY: &str = "preferred-locale";

/// Cookie carrying the locale to the server.
pub const LOCALE_COOKIE: &str = "NEXT_LOCALE";

/// One year, in seconds.
pub const LOCALE_COOKIE_MAX_AGE: u64 = 60 * 60 * 24 * 365;

/// Persistent string storage, such as browser local storage.
pub trait KeyValueStorage {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&mut self, key: &str, value: &str);
}

/// In-memory [`KeyValueStorage`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
	entries: HashMap<String, String>,
}

impl MemoryStorage {
	pub fn new() -> Self {
		Self::default()
	}
}

impl KeyValueStorage for MemoryStorage {
	fn get(&self, key: &str) -> Option<String> {
		self.entries.get(key).cloned()
	}

	fn set(&mut self, key: &str, value: &str) {
		self.entries.insert(key.to_string(), value.to_string());
	}
}

/// Cookies visible to the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
	cookies: BTreeMap<String, String>,
}

impl CookieJar {
	/// Parse a `Cookie` header value (`a=1; b=2`).
	///
	/// Pairs without `=` are skipped. A repeated name keeps its first value.
	pub fn parse(header: &str) -> Self {
		let mut cookies = BTreeMap::new();
		for pair in header.split(';') {
			let Some((name, value)) = pair.trim().split_once('=') else {
				continue;
			};
			let name = name.trim();
			if name.is_empty() {
				continue;
			}
			cookies
				.entry(name.to_string())
				.or_insert_with(|| value.trim().to_string());
		}
		Self { cookies }
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.cookies.get(name).map(String::as_str)
	}

	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.cookies.insert(name.into(), value.into());
	}

	pub fn len(&self) -> usize {
		self.cookies.len()
	}

	pub fn is_empty(&self) -> bool {
		self.cookies.is_empty()
	}
}

/// Build the `Set-Cookie` value for the locale cookie.
///
/// Not `HttpOnly`: client code reads it back on the next load.
pub fn locale_set_cookie(locale: &str) -> String {
	format!("{LOCALE_COOKIE}={locale}; Path=/; Max-Age={LOCALE_COOKIE_MAX_AGE}; SameSite=Lax")
}

/// Reads and writes the persisted locale layers.
#[derive(Debug, Clone, Default)]
pub struct LocalePersistence<S = MemoryStorage> {
	storage: S,
	cookies: CookieJar,
}

impl<S: KeyValueStorage> LocalePersistence<S> {
	pub fn new(storage: S, cookies: CookieJar) -> Self {
		Self { storage, cookies }
	}

	pub fn storage(&self) -> &S {
		&self.storage
	}

	pub fn cookies(&self) -> &CookieJar {
		&self.cookies
	}

	/// The `preferred-locale` storage value.
	pub fn stored(&self) -> Option<String> {
		self.storage.get(STORAGE_KEY)
	}

	/// The `NEXT_LOCALE` cookie value.
	pub fn cookie(&self) -> Option<&str> {
		self.cookies.get(LOCALE_COOKIE)
	}

	/// Overwrite both persisted values and return the `Set-Cookie` header to
	/// send.
	pub fn persist(&mut self, locale: &str) -> String {
		self.storage.set(STORAGE_KEY, locale);
		self.cookies.set(LOCALE_COOKIE, locale);
		debug!(locale, "persisted locale preference");
		locale_set_cookie(locale)
	}
}
