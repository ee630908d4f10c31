// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration for the Scholar dashboard.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`SCHOLAR_*`)
//!
//! # Usage
//!
//! ```ignore
//! use scholar_config::load_config;
//!
//! let config = load_config()?;
//! println!("default locale: {}", config.i18n.default_locale);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ScholarConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScholarConfig {
	pub i18n: I18nConfig,
	pub auth: AuthConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`SCHOLAR_*`)
/// 2. Config file (`scholar.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ScholarConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::local()),
		Box::new(EnvSource::new()),
	];
	load_from_sources(sources)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ScholarConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource::new()),
	];
	load_from_sources(sources)
}

/// Merge `sources` in precedence order and finalize the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ScholarConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ScholarConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ScholarConfigLayer) -> Result<ScholarConfig, ConfigError> {
	let i18n = layer.i18n.unwrap_or_default().finalize();
	let auth = layer.auth.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&auth)?;

	info!(
		default_locale = %i18n.default_locale,
		build_mode = ?i18n.build_mode,
		sign_in_path = %auth.sign_in_path,
		log_format = ?logging.format,
		"configuration loaded"
	);

	Ok(ScholarConfig {
		i18n,
		auth,
		logging,
	})
}

fn validate_config(auth: &AuthConfig) -> Result<(), ConfigError> {
	for (name, path) in [
		("auth.sign_in_path", &auth.sign_in_path),
		("auth.unauthorized_path", &auth.unauthorized_path),
	] {
		if !path.starts_with('/') {
			return Err(ConfigError::Validation(format!(
				"{name} must be an absolute path, got '{path}'"
			)));
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use scholar_common_i18n::BuildMode;
	use std::io::Write;

	#[test]
	fn test_defaults_only() {
		let sources: Vec<Box<dyn ConfigSource>> = vec![Box::new(DefaultsSource)];
		let config = load_from_sources(sources).unwrap();
		assert_eq!(config, ScholarConfig::default());
	}

	#[test]
	fn test_environment_overrides_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(
			file,
			"[i18n]\ndefault_locale = \"fr\"\nbuild_mode = \"development\"\n[auth]\nsign_in_path = \"/login\""
		)
		.unwrap();

		// Deliberately out of order; precedence sorting must fix it.
		let sources: Vec<Box<dyn ConfigSource>> = vec![
			Box::new(EnvSource::from_vars([("SCHOLAR_DEFAULT_LOCALE", "es")])),
			Box::new(TomlSource::new(file.path())),
			Box::new(DefaultsSource),
		];
		let config = load_from_sources(sources).unwrap();

		assert_eq!(config.i18n.default_locale, "es");
		assert_eq!(config.i18n.build_mode, BuildMode::Development);
		assert_eq!(config.auth.sign_in_path, "/login");
		assert_eq!(config.auth.unauthorized_path, "/unauthorized");
	}

	#[test]
	fn test_relative_paths_are_rejected() {
		let sources: Vec<Box<dyn ConfigSource>> = vec![Box::new(EnvSource::from_vars([(
			"SCHOLAR_AUTH_SIGN_IN_PATH",
			"sign-in",
		)]))];
		let err = load_from_sources(sources).unwrap_err();
		assert!(matches!(err, ConfigError::Validation(ref m) if m.contains("auth.sign_in_path")));
	}

	proptest! {
		#[test]
		fn absolute_paths_always_validate(path in "/[a-z/-]{0,20}") {
			let sources: Vec<Box<dyn ConfigSource>> = vec![Box::new(EnvSource::from_vars([
				("SCHOLAR_AUTH_UNAUTHORIZED_PATH", path.clone()),
			]))];
			let config = load_from_sources(sources).unwrap();
			prop_assert_eq!(config.auth.unauthorized_path, path);
		}
	}
}
