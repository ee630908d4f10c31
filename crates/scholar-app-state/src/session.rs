// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The session store.
//!
//! Starts in [`Hydration::Loading`]. Hydration finishes exactly once per app
//! load, either with the restored user (or none) or with a failure. Sign-in
//! and sign-out are only accepted afterwards.

use scholar_auth::{Hydration, Session, UserIdentity};
use tracing::{info, warn};

use crate::error::StateError;
use crate::store::{Store, SubscriptionId};

#[derive(Debug, Default)]
pub struct SessionStore {
	store: Store<Session>,
}

impl SessionStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn session(&self) -> &Session {
		self.store.get()
	}

	pub fn subscribe(&mut self, listener: impl FnMut(&Session) + 'static) -> SubscriptionId {
		self.store.subscribe(listener)
	}

	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		self.store.unsubscribe(id)
	}

	/// Finish hydration with the restored user, if any.
	pub fn hydrate(&mut self, user: Option<UserIdentity>) -> Result<(), StateError> {
		self.ensure_loading()?;
		info!(user_id = ?user.as_ref().map(|u| u.id), "session hydrated");
		self.store.set(Session::new(user, Hydration::Ready));
		Ok(())
	}

	/// Finish hydration after the session could not be restored.
	pub fn fail_hydration(&mut self) -> Result<(), StateError> {
		self.ensure_loading()?;
		warn!("session hydration failed");
		self.store.set(Session::failed());
		Ok(())
	}

	pub fn sign_in(&mut self, user: UserIdentity) -> Result<(), StateError> {
		self.ensure_hydrated()?;
		info!(user_id = %user.id, role = %user.primary_role, "signed in");
		self.store.set(Session::authenticated(user));
		Ok(())
	}

	/// Clear the user. Hydration stays complete.
	pub fn sign_out(&mut self) -> Result<(), StateError> {
		self.ensure_hydrated()?;
		info!(user_id = ?self.session().identity(), "signed out");
		self.store.set(Session::anonymous());
		Ok(())
	}

	fn ensure_loading(&self) -> Result<(), StateError> {
		if self.session().is_loading() {
			Ok(())
		} else {
			warn!("ignoring repeated session hydration");
			Err(StateError::AlreadyHydrated)
		}
	}

	fn ensure_hydrated(&self) -> Result<(), StateError> {
		if self.session().is_loading() {
			Err(StateError::StillHydrating)
		} else {
			Ok(())
		}
	}
}
