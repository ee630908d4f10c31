// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Render guards.
//!
//! [`AccessGuard`] wraps a view behind a [`RolePolicy`]; [`RouteProtector`]
//! wraps a route behind a signed-in check and sends anonymous visitors to
//! the sign-in page. Both are instantiated once per mounted view and
//! re-rendered whenever the session changes.
//!
//! Neither decides anything before the view has mounted or while the
//! session is hydrating, and each redirect fires once: repeated renders in
//! the same state do not navigate again until the session's identity
//! changes (guard) or the state is left and re-entered (protector).

use tracing::{debug, info};

use crate::access::{decide, evaluate, AccessState, Decision};
use crate::{Navigator, RolePolicy, Session, UserId};

/// What a guard asks its host to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Render<F> {
	/// The guarded view.
	Children,
	/// The policy fallback.
	Fallback(F),
	/// The caller's loading placeholder.
	Loading(F),
	Nothing,
}

impl<F> Render<F> {
	pub fn is_children(&self) -> bool {
		matches!(self, Render::Children)
	}

	pub fn is_nothing(&self) -> bool {
		matches!(self, Render::Nothing)
	}

	/// Convert the fallback or placeholder, e.g. from a message key to text.
	pub fn map<G>(self, f: impl FnOnce(F) -> G) -> Render<G> {
		match self {
			Render::Children => Render::Children,
			Render::Fallback(fallback) => Render::Fallback(f(fallback)),
			Render::Loading(placeholder) => Render::Loading(f(placeholder)),
			Render::Nothing => Render::Nothing,
		}
	}
}

/// A one-shot flag re-armed when the observed session identity changes.
#[derive(Debug, Clone, Default)]
struct OneShot {
	identity: Option<UserId>,
	fired: bool,
}

impl OneShot {
	fn observe(&mut self, identity: Option<UserId>) {
		if self.identity != identity {
			self.identity = identity;
			self.fired = false;
		}
	}

	/// Returns true the first time it is called since the last re-arm.
	fn fire(&mut self) -> bool {
		!std::mem::replace(&mut self.fired, true)
	}
}

/// Role gate for one mounted view.
#[derive(Debug, Clone)]
pub struct AccessGuard<F = String> {
	policy: RolePolicy<F>,
	loading: Option<F>,
	mounted: bool,
	redirect: OneShot,
}

impl<F: Clone> AccessGuard<F> {
	pub fn new(policy: RolePolicy<F>) -> Self {
		Self {
			policy,
			loading: None,
			mounted: false,
			redirect: OneShot::default(),
		}
	}

	/// Render `placeholder` instead of nothing while pending.
	pub fn with_loading(mut self, placeholder: F) -> Self {
		self.loading = Some(placeholder);
		self
	}

	pub fn policy(&self) -> &RolePolicy<F> {
		&self.policy
	}

	/// Record that the first client-side render has completed.
	pub fn mount(&mut self) {
		self.mounted = true;
	}

	/// The current access state, without side effects.
	pub fn state(&self, session: &Session) -> AccessState {
		evaluate(session, &self.policy, self.mounted)
	}

	/// Decide what to render for `session`, navigating at most once per
	/// session identity when the policy redirects unauthorized users.
	pub fn render(&mut self, session: &Session, navigator: &mut impl Navigator) -> Render<F> {
		let state = self.state(session);

		// Hydration must not re-arm the redirect; only a settled identity counts.
		if state != AccessState::Pending {
			self.redirect.observe(session.identity());
		}

		match decide(state, &self.policy) {
			Decision::Pending => self
				.loading
				.clone()
				.map(Render::Loading)
				.unwrap_or(Render::Nothing),
			Decision::Nothing => Render::Nothing,
			Decision::Fallback(fallback) => Render::Fallback(fallback.clone()),
			Decision::Redirect(target) => {
				if self.redirect.fire() {
					info!(path = target, user_id = ?session.identity(), "redirecting unauthorized user");
					navigator.navigate(target);
				} else {
					debug!(path = target, "redirect already issued");
				}
				Render::Nothing
			}
			Decision::Children => Render::Children,
		}
	}
}

/// Outcome of a route protection check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protection {
	/// Not mounted yet, or the session is hydrating.
	Pending,
	/// No signed-in user; render nothing.
	SignInRequired,
	/// Signed in; render the route.
	Allowed,
}

/// Sends anonymous visitors to the sign-in page.
#[derive(Debug, Clone)]
pub struct RouteProtector {
	sign_in_path: String,
	mounted: bool,
	signed_out: bool,
}

impl RouteProtector {
	pub fn new(sign_in_path: impl Into<String>) -> Self {
		Self {
			sign_in_path: sign_in_path.into(),
			mounted: false,
			signed_out: false,
		}
	}

	pub fn sign_in_path(&self) -> &str {
		&self.sign_in_path
	}

	/// Record that the first client-side render has completed.
	pub fn mount(&mut self) {
		self.mounted = true;
	}

	/// Check `session`, navigating to the sign-in path on each transition
	/// into the signed-out state.
	pub fn check(&mut self, session: &Session, navigator: &mut impl Navigator) -> Protection {
		if !self.mounted || session.is_loading() {
			return Protection::Pending;
		}

		if session.is_authenticated() {
			self.signed_out = false;
			return Protection::Allowed;
		}

		if !self.signed_out {
			self.signed_out = true;
			info!(path = %self.sign_in_path, "redirecting to sign-in");
			navigator.navigate(&self.sign_in_path);
		}
		Protection::SignInRequired
	}
}
