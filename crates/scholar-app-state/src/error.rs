// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for application state transitions.

use thiserror::Error;

/// Errors raised by out-of-order state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
	/// Session hydration already finished for this app load.
	#[error("session hydration already completed")]
	AlreadyHydrated,

	/// A sign-in or sign-out arrived before hydration finished.
	#[error("session is still hydrating")]
	StillHydrating,

	/// A language switch named an empty locale code.
	#[error("locale code must not be empty")]
	EmptyLocale,
}
