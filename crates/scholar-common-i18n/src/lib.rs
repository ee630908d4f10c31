// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for the Scholar dashboard.
//!
//! Translations live in per-locale JSON message files and are addressed by
//! hierarchical dot-notation keys:
//!
//! - `nav.` for navigation labels
//! - `pages.<page>.` for page content
//! - `portal.` and `auth.` for shell and access messages
//!
//! Example: `pages.exams.upcoming`
//!
//! The active locale comes from a fixed preference chain (explicit override,
//! stored preference, cookie, settings default, `"en"`), and a missing key
//! falls back through the process default and system locales before degrading
//! to a placeholder. Lookups never fail.
//!
//! # Example
//!
//! ```
//! use scholar_common_i18n::{is_rtl, t, t_fmt, LocalePreferences, Translator};
//!
//! // Simple translation against the built-in catalog
//! let title = t("fr", "nav.exams");
//! assert_eq!(title, "Examens");
//!
//! // Translation with variables
//! let greeting = t_fmt("en", "common.welcome", &[("name", "Amina")]);
//! assert_eq!(greeting, "Welcome back, Amina");
//!
//! // Check for RTL language
//! assert!(is_rtl("ar"));
//!
//! // Full preference chain
//! let prefs = LocalePreferences::new().with_cookie("es");
//! let label = Translator::builtin().translate(&prefs, "nav.fees", None);
//! assert_eq!(label, "Cuotas");
//! ```

mod catalog;
mod locale;
mod resolve;
mod translate;

pub use catalog::{Catalog, CatalogError};
pub use locale::{available_locales, is_rtl, is_supported, locale_info, Direction, LocaleInfo};
pub use resolve::{resolve_locale, LocaleLayer, LocalePreferences, ResolvedLocale};
pub use translate::{BuildMode, Translation, Translator};

pub use locale::{DEFAULT_LOCALE, LOCALES};

/// Translate `key` for `locale` using the built-in catalog.
pub fn t(locale: &str, key: &str) -> String {
	let prefs = LocalePreferences::new().with_explicit(locale);
	Translator::builtin().translate(&prefs, key, None)
}

/// Translate `key` for `locale` and substitute `{name}` placeholders.
pub fn t_fmt(locale: &str, key: &str, vars: &[(&str, &str)]) -> String {
	let prefs = LocalePreferences::new().with_explicit(locale);
	Translator::builtin().translate_fmt(&prefs, key, None, vars)
}
