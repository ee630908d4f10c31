// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, TOML files and environment variables.

use std::collections::HashMap;
use std::path::PathBuf;

use scholar_common_i18n::BuildMode;
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ScholarConfigLayer;
use crate::sections::{AuthConfigLayer, I18nConfigLayer, LogFormat, LoggingConfigLayer};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ScholarConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ScholarConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ScholarConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file contributes nothing.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// `scholar.toml` in the working directory.
	pub fn local() -> Self {
		Self::new("scholar.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ScholarConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ScholarConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ScholarConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: `SCHOLAR_<SECTION>_<FIELD>`, except the i18n section which
/// uses `SCHOLAR_DEFAULT_LOCALE` and `SCHOLAR_BUILD_MODE`.
#[derive(Default)]
pub struct EnvSource {
	vars: Option<HashMap<String, String>>,
}

impl EnvSource {
	/// Read from the process environment.
	pub fn new() -> Self {
		Self::default()
	}

	/// Read from a fixed set of variables instead of the process environment.
	pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			vars: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
		}
	}

	fn var(&self, name: &str) -> Option<String> {
		let value = match &self.vars {
			Some(vars) => vars.get(name).cloned(),
			None => std::env::var(name).ok(),
		};
		value.filter(|s| !s.is_empty())
	}

	fn parsed<T>(&self, name: &str, parse: impl FnOnce(&str) -> Option<T>) -> Result<Option<T>, ConfigError> {
		match self.var(name) {
			Some(v) => parse(&v).map(Some).ok_or_else(|| ConfigError::InvalidValue {
				key: name.to_string(),
				message: format!("unrecognized value '{v}'"),
			}),
			None => Ok(None),
		}
	}

	fn load_i18n(&self) -> Result<I18nConfigLayer, ConfigError> {
		Ok(I18nConfigLayer {
			default_locale: self.var("SCHOLAR_DEFAULT_LOCALE"),
			build_mode: self.parsed("SCHOLAR_BUILD_MODE", BuildMode::parse)?,
		})
	}

	fn load_auth(&self) -> AuthConfigLayer {
		AuthConfigLayer {
			sign_in_path: self.var("SCHOLAR_AUTH_SIGN_IN_PATH"),
			unauthorized_path: self.var("SCHOLAR_AUTH_UNAUTHORIZED_PATH"),
		}
	}

	fn load_logging(&self) -> Result<LoggingConfigLayer, ConfigError> {
		Ok(LoggingConfigLayer {
			level: self.var("SCHOLAR_LOG_LEVEL"),
			format: self.parsed("SCHOLAR_LOG_FORMAT", LogFormat::parse)?,
		})
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ScholarConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ScholarConfigLayer {
			i18n: Some(self.load_i18n()?),
			auth: Some(self.load_auth()),
			logging: Some(self.load_logging()?),
		})
	}
}
