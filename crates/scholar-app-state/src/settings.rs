// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application settings held in the settings store.

use scholar_common_i18n::BuildMode;
use scholar_config::ScholarConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	/// Process-wide default locale.
	pub default_locale: String,
	pub build_mode: BuildMode,
	pub sign_in_path: String,
	pub unauthorized_path: String,
}

impl Default for Settings {
	fn default() -> Self {
		Self::from(&ScholarConfig::default())
	}
}

impl From<&ScholarConfig> for Settings {
	fn from(config: &ScholarConfig) -> Self {
		Self {
			default_locale: config.i18n.default_locale.clone(),
			build_mode: config.i18n.build_mode,
			sign_in_path: config.auth.sign_in_path.clone(),
			unauthorized_path: config.auth.unauthorized_path.clone(),
		}
	}
}

impl Settings {
	pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
		self.default_locale = locale.into();
		self
	}

	pub fn with_build_mode(mut self, mode: BuildMode) -> Self {
		self.build_mode = mode;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_follow_config_defaults() {
		let settings = Settings::default();
		assert_eq!(settings.default_locale, "en");
		assert_eq!(settings.sign_in_path, "/sign-in");
		assert_eq!(settings.unauthorized_path, "/unauthorized");
	}

	#[test]
	fn test_from_config_copies_every_field() {
		let mut config = ScholarConfig::default();
		config.i18n.default_locale = "ar".to_string();
		config.i18n.build_mode = BuildMode::Production;
		config.auth.sign_in_path = "/login".to_string();

		let settings = Settings::from(&config);
		assert_eq!(settings.default_locale, "ar");
		assert_eq!(settings.build_mode, BuildMode::Production);
		assert_eq!(settings.sign_in_path, "/login");
		assert_eq!(settings.unauthorized_path, "/unauthorized");
	}
}
