// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration as produced by a single source.

use serde::{Deserialize, Serialize};

use crate::sections::{AuthConfigLayer, I18nConfigLayer, LoggingConfigLayer};

/// One source's view of the configuration. Unset sections are `None` and
/// leave lower-precedence values untouched when merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScholarConfigLayer {
	pub i18n: Option<I18nConfigLayer>,
	pub auth: Option<AuthConfigLayer>,
	pub logging: Option<LoggingConfigLayer>,
}

impl ScholarConfigLayer {
	/// Overlay `other` on top of `self`, field by field.
	pub fn merge(&mut self, other: Self) {
		merge_section(&mut self.i18n, other.i18n, I18nConfigLayer::merge);
		merge_section(&mut self.auth, other.auth, AuthConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_section<T>(base: &mut Option<T>, other: Option<T>, merge: impl FnOnce(&mut T, T)) {
	match (base.as_mut(), other) {
		(Some(base), Some(other)) => merge(base, other),
		(None, Some(other)) => *base = Some(other),
		(_, None) => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_keeps_lower_values_not_overridden() {
		let mut base = ScholarConfigLayer {
			auth: Some(AuthConfigLayer {
				sign_in_path: Some("/login".to_string()),
				unauthorized_path: Some("/403".to_string()),
			}),
			..Default::default()
		};
		base.merge(ScholarConfigLayer {
			auth: Some(AuthConfigLayer {
				sign_in_path: None,
				unauthorized_path: Some("/denied".to_string()),
			}),
			..Default::default()
		});

		let auth = base.auth.unwrap();
		assert_eq!(auth.sign_in_path.as_deref(), Some("/login"));
		assert_eq!(auth.unauthorized_path.as_deref(), Some("/denied"));
	}

	#[test]
	fn test_merge_fills_missing_sections() {
		let mut base = ScholarConfigLayer::default();
		base.merge(ScholarConfigLayer {
			i18n: Some(I18nConfigLayer {
				default_locale: Some("es".to_string()),
				build_mode: None,
			}),
			..Default::default()
		});
		assert_eq!(base.i18n.unwrap().default_locale.as_deref(), Some("es"));
		assert!(base.logging.is_none());
	}
}
