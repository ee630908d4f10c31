// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core type definitions for authentication and authorization.
//!
//! - **ID newtypes**: [`UserId`], a type-safe wrapper around a UUID
//! - **Roles**: the closed [`Role`] enumeration of dashboard roles
//! - **Role tokens**: [`RoleToken`], the normalized comparison form of any
//!   role label, used at the boundary where upstream role strings arrive
//!   inconsistently cased or separated

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

// =============================================================================
// ID Newtypes
// =============================================================================

macro_rules! define_id_type {
	($name:ident, $doc:expr) => {
		#[doc = $doc]
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(Uuid);

		impl $name {
			/// Create a new ID from a UUID.
			pub fn new(id: Uuid) -> Self {
				Self(id)
			}

			/// Generate a new random ID.
			pub fn generate() -> Self {
				Self(Uuid::new_v4())
			}

			/// Get the inner UUID value.
			pub fn into_inner(self) -> Uuid {
				self.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, "{}", self.0)
			}
		}

		impl From<Uuid> for $name {
			fn from(id: Uuid) -> Self {
				Self(id)
			}
		}
	};
}

define_id_type!(UserId, "Unique identifier for a dashboard user.");

// =============================================================================
// Role Tokens
// =============================================================================

/// A role label in comparison form.
///
/// Normalization lowercases the label and strips whitespace, hyphens and
/// underscores, so `"Super_Admin"`, `"super-admin"` and `"Super Admin"` are
/// all the token `superadmin`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RoleToken(String);

impl RoleToken {
	/// Normalize a raw role label.
	pub fn normalize(raw: &str) -> Self {
		Self(
			raw
				.chars()
				.flat_map(char::to_lowercase)
				.filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
				.collect(),
		)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// The known role this token names, if any.
	pub fn role(&self) -> Option<Role> {
		Role::all().iter().copied().find(|r| r.token_str() == self.0)
	}
}

impl fmt::Display for RoleToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<String> for RoleToken {
	fn from(raw: String) -> Self {
		Self::normalize(&raw)
	}
}

impl From<&str> for RoleToken {
	fn from(raw: &str) -> Self {
		Self::normalize(raw)
	}
}

impl From<RoleToken> for String {
	fn from(token: RoleToken) -> Self {
		token.0
	}
}

impl From<Role> for RoleToken {
	fn from(role: Role) -> Self {
		role.token()
	}
}

// =============================================================================
// Roles
// =============================================================================

/// Error returned when a role label names no known role.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

/// Roles recognised by the dashboard portals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
	/// Platform-wide administrator across every school.
	SuperAdmin,
	/// School administrator.
	Admin,
	Teacher,
	Student,
	Parent,
}

impl Role {
	/// Returns all known roles.
	pub fn all() -> &'static [Role] {
		&[
			Role::SuperAdmin,
			Role::Admin,
			Role::Teacher,
			Role::Student,
			Role::Parent,
		]
	}

	/// The normalized token for this role.
	pub fn token(self) -> RoleToken {
		RoleToken(self.token_str().to_string())
	}

	fn token_str(self) -> &'static str {
		match self {
			Role::SuperAdmin => "superadmin",
			Role::Admin => "admin",
			Role::Teacher => "teacher",
			Role::Student => "student",
			Role::Parent => "parent",
		}
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Role::SuperAdmin => write!(f, "Super Admin"),
			Role::Admin => write!(f, "Admin"),
			Role::Teacher => write!(f, "Teacher"),
			Role::Student => write!(f, "Student"),
			Role::Parent => write!(f, "Parent"),
		}
	}
}

impl FromStr for Role {
	type Err = RoleParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		RoleToken::normalize(s)
			.role()
			.ok_or_else(|| RoleParseError(s.to_string()))
	}
}
