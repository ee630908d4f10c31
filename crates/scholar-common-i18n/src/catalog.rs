// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation tables keyed by locale and dot-separated message path.
//!
//! Each locale owns one nested JSON object. A key such as
//! `pages.dashboard.title` walks `pages` → `dashboard` → `title`, and only a
//! string at the end of the walk counts as a hit.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("invalid message file for locale '{locale}': {source}")]
	Parse {
		locale: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("message file for locale '{0}' must be a JSON object")]
	NotAnObject(String),
}

const BUILTIN_MESSAGES: &[(&str, &str)] = &[
	("en", include_str!("../locales/en.json")),
	("fr", include_str!("../locales/fr.json")),
	("es", include_str!("../locales/es.json")),
	("ar", include_str!("../locales/ar.json")),
];

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
	let mut catalog = Catalog::new();
	for (locale, source) in BUILTIN_MESSAGES {
		if let Err(e) = catalog.insert_json(locale, source) {
			tracing::error!(locale, error = %e, "failed to load built-in message file");
		}
	}
	catalog
});

/// A set of per-locale translation tables.
///
/// Build it once with [`Catalog::insert_json`] or [`Catalog::insert_table`],
/// then share it by reference; lookups never mutate.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	tables: HashMap<String, Map<String, Value>>,
}

impl Catalog {
	pub fn new() -> Self {
		Self::default()
	}

	/// The catalog compiled from the shipped message files.
	pub fn builtin() -> &'static Catalog {
		&BUILTIN
	}

	/// Parse a JSON message file and install it for `locale`, replacing any
	/// existing table.
	pub fn insert_json(&mut self, locale: &str, source: &str) -> Result<(), CatalogError> {
		let value: Value = serde_json::from_str(source).map_err(|e| CatalogError::Parse {
			locale: locale.to_string(),
			source: e,
		})?;
		self.insert_table(locale, value)
	}

	/// Install an already-parsed table for `locale`.
	pub fn insert_table(&mut self, locale: &str, table: Value) -> Result<(), CatalogError> {
		match table {
			Value::Object(map) => {
				self.tables.insert(locale.to_string(), map);
				Ok(())
			}
			_ => Err(CatalogError::NotAnObject(locale.to_string())),
		}
	}

	pub fn has_locale(&self, locale: &str) -> bool {
		self.tables.contains_key(locale)
	}

	/// Locale codes with a table, sorted.
	pub fn locales(&self) -> Vec<&str> {
		let mut codes: Vec<&str> = self.tables.keys().map(String::as_str).collect();
		codes.sort_unstable();
		codes
	}

	/// Walk `key` through the table for `locale`.
	///
	/// Returns `None` when the locale has no table, the key is empty, any
	/// segment is missing or lands on a non-object, or the terminal value is
	/// not a string.
	pub fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
		self.lookup_entry(locale, key).map(|(_, text)| text)
	}

	/// Like [`Catalog::lookup`], but also returns the catalog's own copy of
	/// the locale code.
	pub fn lookup_entry(&self, locale: &str, key: &str) -> Option<(&str, &str)> {
		let (code, table) = self.tables.get_key_value(locale)?;
		walk(table, key).map(|text| (code.as_str(), text))
	}
}

fn walk<'a>(table: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
	if key.is_empty() {
		return None;
	}

	let mut segments = key.split('.');
	let mut current = table.get(segments.next()?)?;
	for segment in segments {
		current = current.as_object()?.get(segment)?;
	}
	current.as_str()
}
