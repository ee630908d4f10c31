// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use tracing::instrument;

use crate::locale::DEFAULT_LOCALE;

/// Raw locale preferences gathered from every layer the dashboard consults.
///
/// Values are taken as-is. Codes are not validated against the shipped
/// locales; an unknown code resolves normally and then misses in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalePreferences {
	/// Override passed by the caller for a single lookup.
	pub explicit: Option<String>,
	/// Value of the `preferred-locale` storage key.
	pub stored: Option<String>,
	/// Value of the `NEXT_LOCALE` cookie.
	pub cookie: Option<String>,
	/// `default_locale` from the application settings.
	pub settings_default: Option<String>,
}

impl LocalePreferences {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_explicit(mut self, locale: impl Into<String>) -> Self {
		self.explicit = Some(locale.into());
		self
	}

	pub fn with_stored(mut self, locale: impl Into<String>) -> Self {
		self.stored = Some(locale.into());
		self
	}

	pub fn with_cookie(mut self, locale: impl Into<String>) -> Self {
		self.cookie = Some(locale.into());
		self
	}

	pub fn with_settings_default(mut self, locale: impl Into<String>) -> Self {
		self.settings_default = Some(locale.into());
		self
	}

	/// The process-wide default: the settings locale, or the system locale.
	pub fn process_default(&self) -> &str {
		LocaleLayer::SettingsDefault
			.lookup(self)
			.unwrap_or(DEFAULT_LOCALE)
	}
}

/// One layer of the locale preference chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleLayer {
	Explicit,
	Stored,
	Cookie,
	SettingsDefault,
	SystemDefault,
}

impl LocaleLayer {
	/// Layers in precedence order, highest first.
	pub const ORDER: [LocaleLayer; 5] = [
		LocaleLayer::Explicit,
		LocaleLayer::Stored,
		LocaleLayer::Cookie,
		LocaleLayer::SettingsDefault,
		LocaleLayer::SystemDefault,
	];

	/// The non-blank value this layer contributes, if any.
	pub fn lookup(self, prefs: &LocalePreferences) -> Option<&str> {
		let value = match self {
			LocaleLayer::Explicit => prefs.explicit.as_deref(),
			LocaleLayer::Stored => prefs.stored.as_deref(),
			LocaleLayer::Cookie => prefs.cookie.as_deref(),
			LocaleLayer::SettingsDefault => prefs.settings_default.as_deref(),
			LocaleLayer::SystemDefault => Some(DEFAULT_LOCALE),
		};
		value.map(str::trim).filter(|v| !v.is_empty())
	}

	pub fn as_str(self) -> &'static str {
		match self {
			LocaleLayer::Explicit => "explicit",
			LocaleLayer::Stored => "stored",
			LocaleLayer::Cookie => "cookie",
			LocaleLayer::SettingsDefault => "settings_default",
			LocaleLayer::SystemDefault => "system_default",
		}
	}
}

/// The outcome of walking the preference chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
	pub code: String,
	/// The layer that produced `code`.
	pub layer: LocaleLayer,
}

/// Resolve the active locale from the preference chain.
///
/// Resolution order (highest to lowest priority):
/// 1. Explicit override
/// 2. `preferred-locale` storage value
/// 3. `NEXT_LOCALE` cookie
/// 4. Settings default locale
/// 5. System default (`"en"`)
///
/// Blank values are skipped. The last layer always yields, so this never fails.
///
/// # Example
///
/// ```
/// use scholar_common_i18n::{resolve_locale, LocaleLayer, LocalePreferences};
///
/// let prefs = LocalePreferences::new()
///     .with_cookie("fr")
///     .with_settings_default("es");
/// let resolved = resolve_locale(&prefs);
/// assert_eq!(resolved.code, "fr");
/// assert_eq!(resolved.layer, LocaleLayer::Cookie);
///
/// assert_eq!(resolve_locale(&LocalePreferences::new()).code, "en");
/// ```
#[instrument(level = "trace", skip_all)]
pub fn resolve_locale(prefs: &LocalePreferences) -> ResolvedLocale {
	for layer in LocaleLayer::ORDER {
		if let Some(code) = layer.lookup(prefs) {
			tracing::trace!(layer = layer.as_str(), locale = code, "resolved locale");
			return ResolvedLocale {
				code: code.to_string(),
				layer,
			};
		}
	}

	ResolvedLocale {
		code: DEFAULT_LOCALE.to_string(),
		layer: LocaleLayer::SystemDefault,
	}
}
