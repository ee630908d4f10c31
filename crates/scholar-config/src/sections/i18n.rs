// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localization configuration section.

use scholar_common_i18n::{BuildMode, DEFAULT_LOCALE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct I18nConfigLayer {
	pub default_locale: Option<String>,
	pub build_mode: Option<BuildMode>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.build_mode.is_some() {
			self.build_mode = other.build_mode;
		}
	}

	pub fn finalize(self) -> I18nConfig {
		I18nConfig {
			default_locale: self
				.default_locale
				.map(|l| l.trim().to_string())
				.filter(|l| !l.is_empty())
				.unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
			build_mode: self.build_mode.unwrap_or_default(),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct I18nConfig {
	/// Settings default locale, seeded into the application settings at startup.
	pub default_locale: String,
	/// How missing translation keys render.
	pub build_mode: BuildMode,
}

impl Default for I18nConfig {
	fn default() -> Self {
		I18nConfigLayer::default().finalize()
	}
}
