// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Dashboard portals and the roles each admits.

use std::fmt;

use scholar_auth::{Role, RolePolicy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Portal {
	Admin,
	Teacher,
	Student,
	Parent,
}

impl Portal {
	pub fn all() -> &'static [Portal] {
		&[Portal::Admin, Portal::Teacher, Portal::Student, Portal::Parent]
	}

	/// Roles admitted to this portal.
	pub fn roles(self) -> &'static [Role] {
		match self {
			Portal::Admin => &[Role::SuperAdmin, Role::Admin],
			Portal::Teacher => &[Role::Teacher],
			Portal::Student => &[Role::Student],
			Portal::Parent => &[Role::Parent],
		}
	}

	/// A guard policy admitting this portal's roles, with no fallback or
	/// redirect configured.
	pub fn policy<F>(self) -> RolePolicy<F> {
		RolePolicy::allow(self.roles().iter().copied())
	}

	/// Landing path for the portal.
	pub fn home_path(self) -> &'static str {
		match self {
			Portal::Admin => "/admin",
			Portal::Teacher => "/teacher",
			Portal::Student => "/student",
			Portal::Parent => "/parent",
		}
	}

	/// Catalog key for the portal's display name.
	pub fn title_key(self) -> &'static str {
		match self {
			Portal::Admin => "portal.admin",
			Portal::Teacher => "portal.teacher",
			Portal::Student => "portal.student",
			Portal::Parent => "portal.parent",
		}
	}

	/// Where a user with `role` lands after signing in.
	pub fn for_role(role: Role) -> Self {
		match role {
			Role::SuperAdmin | Role::Admin => Portal::Admin,
			Role::Teacher => Portal::Teacher,
			Role::Student => Portal::Student,
			Role::Parent => Portal::Parent,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Portal::Admin => "admin",
			Portal::Teacher => "teacher",
			Portal::Student => "student",
			Portal::Parent => "parent",
		}
	}
}

impl fmt::Display for Portal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
