// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-view role policies.

use std::collections::BTreeSet;

use crate::{Role, RoleToken};

/// Declares which roles may see a view and what happens otherwise.
///
/// `F` is whatever the caller renders in place of the view: a message, a
/// component handle, and so on. An empty policy denies everyone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePolicy<F = String> {
	pub allowed_roles: BTreeSet<RoleToken>,
	/// Rendered for signed-in users who are not allowed in.
	pub fallback: Option<F>,
	/// Navigated to, once, for signed-in users who are not allowed in.
	/// Wins over `fallback` when both are set.
	pub redirect_target: Option<String>,
}

impl<F> Default for RolePolicy<F> {
	fn default() -> Self {
		Self {
			allowed_roles: BTreeSet::new(),
			fallback: None,
			redirect_target: None,
		}
	}
}

impl<F> RolePolicy<F> {
	pub fn new() -> Self {
		Self::default()
	}

	/// A policy admitting exactly `roles`.
	pub fn allow(roles: impl IntoIterator<Item = Role>) -> Self {
		Self {
			allowed_roles: roles.into_iter().map(Role::token).collect(),
			..Self::default()
		}
	}

	pub fn with_role(mut self, role: Role) -> Self {
		self.allowed_roles.insert(role.token());
		self
	}

	/// Admit a role given as a raw upstream label.
	pub fn with_raw_role(mut self, raw: &str) -> Self {
		self.allowed_roles.insert(RoleToken::normalize(raw));
		self
	}

	pub fn with_fallback(mut self, fallback: F) -> Self {
		self.fallback = Some(fallback);
		self
	}

	pub fn with_redirect(mut self, target: impl Into<String>) -> Self {
		self.redirect_target = Some(target.into());
		self
	}

	pub fn allows(&self, token: &RoleToken) -> bool {
		self.allowed_roles.contains(token)
	}

	pub fn allows_role(&self, role: Role) -> bool {
		self.allows(&role.token())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_raw_and_typed_roles_are_interchangeable() {
		let typed: RolePolicy = RolePolicy::allow([Role::SuperAdmin, Role::Admin]);
		let raw: RolePolicy = RolePolicy::new()
			.with_raw_role("Super Admin")
			.with_raw_role("ADMIN");
		assert_eq!(typed, raw);
	}

	#[test]
	fn test_default_policy_is_empty() {
		let policy: RolePolicy = RolePolicy::default();
		assert!(policy.allowed_roles.is_empty());
		assert!(policy.fallback.is_none());
		assert!(policy.redirect_target.is_none());
		assert!(!policy.allows_role(Role::SuperAdmin));
	}

	#[test]
	fn test_builders() {
		let policy = RolePolicy::allow([Role::Teacher])
			.with_fallback("No access".to_string())
			.with_redirect("/403");
		assert!(policy.allows_role(Role::Teacher));
		assert_eq!(policy.fallback.as_deref(), Some("No access"));
		assert_eq!(policy.redirect_target.as_deref(), Some("/403"));
	}
}
