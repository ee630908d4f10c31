// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Access decision functions.
//!
//! [`has_access`] answers the role question alone. [`evaluate`] folds in
//! hydration and mount state to classify a view into one of four
//! [`AccessState`]s, and [`decide`] maps that state onto what a guard should
//! do. All three are pure; the one-shot redirect bookkeeping lives in
//! [`crate::AccessGuard`].

use tracing::instrument;

use crate::{Role, RolePolicy, Session, UserIdentity};

/// Where a `(session, policy)` pair stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
	/// Hydration in progress or the view has not mounted yet.
	Pending,
	/// Hydrated without a signed-in user.
	Unauthenticated,
	/// Signed in, but the policy does not admit the user.
	Unauthorized,
	/// Signed in and admitted.
	Authorized,
}

/// What a guard should do for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision<'p, F> {
	/// Render the caller's loading placeholder, or nothing.
	Pending,
	/// Render nothing.
	Nothing,
	/// Render the policy fallback.
	Fallback(&'p F),
	/// Navigate away; render nothing.
	Redirect(&'p str),
	/// Render the guarded view.
	Children,
}

/// Returns true if the session's user is admitted by `policy`.
///
/// The primary role is compared in normalized form against the policy's
/// allowed roles. In addition, the **secondary super admin grant** applies:
/// a user holding a secondary `super admin` role passes any policy that
/// itself admits super admin, whatever their primary role.
///
/// A session without a user is never admitted. Hydration state is not
/// consulted here; see [`evaluate`].
#[instrument(
    level = "debug",
    skip_all,
    fields(
        user_id = ?session.identity(),
        allowed = policy.allowed_roles.len(),
    )
)]
pub fn has_access<F>(session: &Session, policy: &RolePolicy<F>) -> bool {
	let Some(user) = session.user() else {
		return false;
	};

	let allowed = policy.allows(&user.primary_token()) || secondary_super_admin_grant(user, policy);
	tracing::debug!(primary_role = %user.primary_token(), allowed, "role check");
	allowed
}

/// Named rule: a secondary `super admin` role satisfies policies that admit
/// super admin.
fn secondary_super_admin_grant<F>(user: &UserIdentity, policy: &RolePolicy<F>) -> bool {
	policy.allows_role(Role::SuperAdmin) && user.has_secondary_role(Role::SuperAdmin)
}

/// Classify a session against a policy.
///
/// `mounted` is false until the view's first client-side render has
/// completed. Until then, and for as long as the session is loading, the
/// result is [`AccessState::Pending`].
pub fn evaluate<F>(session: &Session, policy: &RolePolicy<F>, mounted: bool) -> AccessState {
	if !mounted || session.is_loading() {
		return AccessState::Pending;
	}
	if !session.is_authenticated() {
		return AccessState::Unauthenticated;
	}
	if has_access(session, policy) {
		AccessState::Authorized
	} else {
		AccessState::Unauthorized
	}
}

/// Map an access state onto a guard action.
///
/// For unauthorized users a configured redirect wins over the fallback.
pub fn decide<F>(state: AccessState, policy: &RolePolicy<F>) -> Decision<'_, F> {
	match state {
		AccessState::Pending => Decision::Pending,
		AccessState::Unauthenticated => Decision::Nothing,
		AccessState::Unauthorized => match (&policy.redirect_target, &policy.fallback) {
			(Some(target), _) => Decision::Redirect(target.as_str()),
			(None, Some(fallback)) => Decision::Fallback(fallback),
			(None, None) => Decision::Nothing,
		},
		AccessState::Authorized => Decision::Children,
	}
}
