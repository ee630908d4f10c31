// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Key translation with locale fallback.
//!
//! A lookup tries, in order:
//!
//! 1. the active locale (from [`resolve_locale`])
//! 2. the process default locale, when it differs from the active one
//! 3. the system locale (`"en"`), when not already tried
//!
//! and then degrades to the caller's default, a `[missing: <key>]` marker in
//! development builds, or the raw key in production builds.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::locale::DEFAULT_LOCALE;
use crate::resolve::{resolve_locale, LocalePreferences};

/// Controls how missing keys are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildMode {
	/// Missing keys render as `[missing: <key>]`.
	#[serde(alias = "dev")]
	Development,
	/// Missing keys render as the raw key.
	#[serde(alias = "prod")]
	Production,
}

impl BuildMode {
	/// The mode implied by how this binary was compiled.
	pub fn current() -> Self {
		if cfg!(debug_assertions) {
			BuildMode::Development
		} else {
			BuildMode::Production
		}
	}

	/// Parse a mode label. Accepts `development`/`dev` and `production`/`prod`.
	pub fn parse(value: &str) -> Option<Self> {
		match value.trim().to_ascii_lowercase().as_str() {
			"development" | "dev" => Some(BuildMode::Development),
			"production" | "prod" => Some(BuildMode::Production),
			_ => None,
		}
	}
}

impl Default for BuildMode {
	fn default() -> Self {
		Self::current()
	}
}

/// A successful catalog hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation<'a> {
	pub text: &'a str,
	/// The locale whose table supplied `text`.
	pub locale: &'a str,
}

/// Translates keys against a catalog using the locale preference chain.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
	catalog: &'a Catalog,
	mode: BuildMode,
}

impl Translator<'static> {
	/// A translator over the built-in catalog in the compiled build mode.
	pub fn builtin() -> Self {
		Self::new(Catalog::builtin(), BuildMode::current())
	}
}

impl<'a> Translator<'a> {
	pub fn new(catalog: &'a Catalog, mode: BuildMode) -> Self {
		Self { catalog, mode }
	}

	pub fn with_mode(mut self, mode: BuildMode) -> Self {
		self.mode = mode;
		self
	}

	pub fn mode(&self) -> BuildMode {
		self.mode
	}

	pub fn catalog(&self) -> &'a Catalog {
		self.catalog
	}

	/// Look up `key`, walking the locale fallback chain.
	///
	/// Returns `None` only when every candidate locale misses.
	pub fn lookup(&self, prefs: &LocalePreferences, key: &str) -> Option<Translation<'a>> {
		let active = resolve_locale(prefs);
		for locale in candidate_locales(&active.code, prefs.process_default()) {
			if let Some((locale, text)) = self.catalog.lookup_entry(locale, key) {
				return Some(Translation { text, locale });
			}
		}
		None
	}

	/// Translate `key`. Never fails.
	///
	/// # Example
	///
	/// ```
	/// use scholar_common_i18n::{BuildMode, LocalePreferences, Translator};
	///
	/// let translator = Translator::builtin().with_mode(BuildMode::Production);
	/// let prefs = LocalePreferences::new().with_stored("es");
	///
	/// assert_eq!(translator.translate(&prefs, "nav.exams", None), "Exámenes");
	/// assert_eq!(translator.translate(&prefs, "no.such.key", Some("Fallback")), "Fallback");
	/// assert_eq!(translator.translate(&prefs, "no.such.key", None), "no.such.key");
	/// ```
	#[instrument(level = "trace", skip(self, prefs, default))]
	pub fn translate(&self, prefs: &LocalePreferences, key: &str, default: Option<&str>) -> String {
		if let Some(hit) = self.lookup(prefs, key) {
			return hit.text.to_string();
		}

		debug!(key, mode = ?self.mode, "translation missing in every fallback locale");
		match default {
			Some(default) => default.to_string(),
			None => self.missing(key),
		}
	}

	/// Translate `key` and substitute `{name}` placeholders from `vars`.
	///
	/// `default` is used exactly as in [`Translator::translate`], and is
	/// interpolated too. Placeholders with no matching variable are left
	/// untouched.
	pub fn translate_fmt(
		&self,
		prefs: &LocalePreferences,
		key: &str,
		default: Option<&str>,
		vars: &[(&str, &str)],
	) -> String {
		interpolate(self.translate(prefs, key, default), vars)
	}

	fn missing(&self, key: &str) -> String {
		match self.mode {
			BuildMode::Development => format!("[missing: {key}]"),
			BuildMode::Production => key.to_string(),
		}
	}
}

/// Ordered, de-duplicated locales to try for a lookup.
fn candidate_locales<'p>(active: &'p str, process_default: &'p str) -> Vec<&'p str> {
	let mut locales = Vec::with_capacity(3);
	for locale in [active, process_default, DEFAULT_LOCALE] {
		if !locales.contains(&locale) {
			locales.push(locale);
		}
	}
	locales
}

fn interpolate(mut text: String, vars: &[(&str, &str)]) -> String {
	for (name, value) in vars {
		text = text.replace(&format!("{{{name}}}"), value);
	}
	text
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	fn catalog() -> Catalog {
		let mut catalog = Catalog::new();
		catalog
			.insert_table(
				"en",
				json!({
					"pages": { "dashboard": "Dashboard" },
					"a": { "b": "from en" },
					"greeting": "Hello, {name}",
				}),
			)
			.unwrap();
		catalog
			.insert_table(
				"fr",
				json!({
					"pages": { "exams": "Examens" },
					"shared": "partagé",
				}),
			)
			.unwrap();
		catalog
			.insert_table(
				"es",
				json!({
					"shared": "compartido",
					"only_es": "solo es",
					"pages": { "dashboard": 7 },
				}),
			)
			.unwrap();
		catalog
	}

	fn fr_with_es_default() -> LocalePreferences {
		LocalePreferences::new()
			.with_stored("fr")
			.with_settings_default("es")
	}

	#[test]
	fn test_active_locale_hit_is_returned_verbatim() {
		let catalog = catalog();
		let t = Translator::new(&catalog, BuildMode::Development);
		assert_eq!(t.translate(&fr_with_es_default(), "pages.exams", None), "Examens");
		assert_eq!(t.translate(&fr_with_es_default(), "shared", None), "partagé");
	}

	#[test]
	fn test_process_default_is_tried_before_system_locale() {
		let catalog = catalog();
		let t = Translator::new(&catalog, BuildMode::Development);
		let hit = t.lookup(&fr_with_es_default(), "only_es").unwrap();
		assert_eq!(hit.text, "solo es");
		assert_eq!(hit.locale, "es");
	}

	#[test]
	fn test_system_locale_is_last_resort() {
		let catalog = catalog();
		let t = Translator::new(&catalog, BuildMode::Development);
		// es has a number at pages.dashboard, which counts as a miss.
		let hit = t.lookup(&fr_with_es_default(), "pages.dashboard").unwrap();
		assert_eq!(hit.text, "Dashboard");
		assert_eq!(hit.locale, "en");
	}

	#[test]
	fn test_unknown_active_locale_falls_through() {
		let catalog = catalog();
		let t = Translator::new(&catalog, BuildMode::Development);
		let prefs = LocalePreferences::new().with_cookie("klingon");
		assert_eq!(t.translate(&prefs, "a.b", None), "from en");
	}

	#[test]
	fn test_missing_key_renders_by_build_mode() {
		let catalog = catalog();
		let prefs = LocalePreferences::new();
		let dev = Translator::new(&catalog, BuildMode::Development);
		let prod = Translator::new(&catalog, BuildMode::Production);
		assert_eq!(dev.translate(&prefs, "nope.key", None), "[missing: nope.key]");
		assert_eq!(prod.translate(&prefs, "nope.key", None), "nope.key");
		assert_eq!(prod.translate(&prefs, "nope.key", Some("Default")), "Default");
		assert_eq!(dev.translate(&prefs, "nope.key", Some("Default")), "Default");
	}

	#[test]
	fn test_empty_key_is_missing() {
		let catalog = catalog();
		let dev = Translator::new(&catalog, BuildMode::Development);
		assert_eq!(dev.translate(&LocalePreferences::new(), "", None), "[missing: ]");
	}

	#[test]
	fn test_translate_fmt_substitutes_placeholders() {
		let catalog = catalog();
		let t = Translator::new(&catalog, BuildMode::Production);
		let text = t.translate_fmt(&LocalePreferences::new(), "greeting", None, &[("name", "Amina")]);
		assert_eq!(text, "Hello, Amina");
		let untouched = t.translate_fmt(&LocalePreferences::new(), "greeting", None, &[]);
		assert_eq!(untouched, "Hello, {name}");
	}

	#[test]
	fn test_translate_fmt_honours_default_for_missing_key() {
		let catalog = catalog();
		let t = Translator::new(&catalog, BuildMode::Production);
		let text = t.translate_fmt(
			&LocalePreferences::new(),
			"nonexistent.key",
			Some("Hi {name}"),
			&[("name", "Amina")],
		);
		assert_eq!(text, "Hi Amina");
	}

	#[test]
	fn test_candidate_locales_are_deduplicated() {
		assert_eq!(candidate_locales("en", "en"), vec!["en"]);
		assert_eq!(candidate_locales("fr", "en"), vec!["fr", "en"]);
		assert_eq!(candidate_locales("fr", "fr"), vec!["fr", "en"]);
		assert_eq!(candidate_locales("fr", "es"), vec!["fr", "es", "en"]);
	}

	#[test]
	fn test_build_mode_parse() {
		assert_eq!(BuildMode::parse("prod"), Some(BuildMode::Production));
		assert_eq!(BuildMode::parse(" Development "), Some(BuildMode::Development));
		assert_eq!(BuildMode::parse("staging"), None);
	}

	proptest! {
		#[test]
		fn translate_is_total(key in ".*", locale in "[a-z]{0,3}") {
			let catalog = catalog();
			let t = Translator::new(&catalog, BuildMode::Production);
			let prefs = LocalePreferences::new().with_stored(locale);
			let _ = t.translate(&prefs, &key, None);
		}

		#[test]
		fn production_miss_returns_raw_key(key in "zz[a-z.]{0,12}") {
			let catalog = catalog();
			let t = Translator::new(&catalog, BuildMode::Production);
			prop_assert_eq!(t.translate(&LocalePreferences::new(), &key, None), key);
		}
	}
}
