// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client session state as seen by guards.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Role, RoleToken, UserId};

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
	pub id: UserId,
	/// Raw role label as supplied upstream, e.g. `"Super_Admin"`.
	pub primary_role: String,
	/// Optional secondary grants, also raw labels.
	#[serde(default)]
	pub roles: BTreeSet<String>,
}

impl UserIdentity {
	pub fn new(id: UserId, primary_role: impl Into<String>) -> Self {
		Self {
			id,
			primary_role: primary_role.into(),
			roles: BTreeSet::new(),
		}
	}

	/// Add a secondary role grant.
	pub fn with_role(mut self, role: impl Into<String>) -> Self {
		self.roles.insert(role.into());
		self
	}

	pub fn primary_token(&self) -> RoleToken {
		RoleToken::normalize(&self.primary_role)
	}

	/// The primary role, if it names a known role.
	pub fn primary(&self) -> Option<Role> {
		self.primary_token().role()
	}

	/// Returns true if any secondary grant normalizes to `role`.
	pub fn has_secondary_role(&self, role: Role) -> bool {
		let wanted = role.token();
		self.roles.iter().any(|r| RoleToken::normalize(r) == wanted)
	}
}

/// Progress of the one-time session hydration performed on app load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hydration {
	/// Persisted session is still being read.
	#[default]
	Loading,
	/// Hydration finished; `user` is authoritative.
	Ready,
	/// Hydration finished with an error; treated as signed out.
	Failed,
}

/// Authentication state consumed by guards.
///
/// A fresh session is loading. Anything other than a ready hydration with a
/// user present counts as unauthenticated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
	pub user: Option<UserIdentity>,
	pub hydration: Hydration,
}

impl Session {
	pub fn new(user: Option<UserIdentity>, hydration: Hydration) -> Self {
		Self { user, hydration }
	}

	/// A session whose hydration has not completed.
	pub fn loading() -> Self {
		Self::default()
	}

	/// A hydrated session with no user.
	pub fn anonymous() -> Self {
		Self::new(None, Hydration::Ready)
	}

	/// A hydrated session for `user`.
	pub fn authenticated(user: UserIdentity) -> Self {
		Self::new(Some(user), Hydration::Ready)
	}

	/// A session whose hydration failed.
	pub fn failed() -> Self {
		Self::new(None, Hydration::Failed)
	}

	pub fn user(&self) -> Option<&UserIdentity> {
		self.user.as_ref()
	}

	pub fn is_loading(&self) -> bool {
		self.hydration == Hydration::Loading
	}

	pub fn is_authenticated(&self) -> bool {
		self.hydration == Hydration::Ready && self.user.is_some()
	}

	/// Who this session belongs to. Guards re-arm one-shot redirects when it
	/// changes.
	pub fn identity(&self) -> Option<UserId> {
		self.user.as_ref().map(|u| u.id)
	}
}
