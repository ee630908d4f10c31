// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Route guard configuration section.

use serde::{Deserialize, Serialize};

const DEFAULT_SIGN_IN_PATH: &str = "/sign-in";
const DEFAULT_UNAUTHORIZED_PATH: &str = "/unauthorized";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthConfigLayer {
	pub sign_in_path: Option<String>,
	pub unauthorized_path: Option<String>,
}

impl AuthConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.sign_in_path.is_some() {
			self.sign_in_path = other.sign_in_path;
		}
		if other.unauthorized_path.is_some() {
			self.unauthorized_path = other.unauthorized_path;
		}
	}

	pub fn finalize(self) -> AuthConfig {
		AuthConfig {
			sign_in_path: self
				.sign_in_path
				.unwrap_or_else(|| DEFAULT_SIGN_IN_PATH.to_string()),
			unauthorized_path: self
				.unauthorized_path
				.unwrap_or_else(|| DEFAULT_UNAUTHORIZED_PATH.to_string()),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthConfig {
	/// Where route protectors send signed-out visitors.
	pub sign_in_path: String,
	/// Redirect target for portal guards.
	pub unauthorized_path: String,
}

impl Default for AuthConfig {
	fn default() -> Self {
		Self {
			sign_in_path: DEFAULT_SIGN_IN_PATH.to_string(),
			unauthorized_path: DEFAULT_UNAUTHORIZED_PATH.to_string(),
		}
	}
}
