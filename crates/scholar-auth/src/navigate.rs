// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Navigation side effects issued by guards.

/// Performs client-side navigation. Calls are fire-and-forget.
pub trait Navigator {
	fn navigate(&mut self, path: &str);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
	fn navigate(&mut self, path: &str) {
		(**self).navigate(path)
	}
}

/// A navigator that records every call, newest last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationLog {
	history: Vec<String>,
}

impl NavigationLog {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn history(&self) -> &[String] {
		&self.history
	}

	pub fn len(&self) -> usize {
		self.history.len()
	}

	pub fn is_empty(&self) -> bool {
		self.history.is_empty()
	}
}

impl Navigator for NavigationLog {
	fn navigate(&mut self, path: &str) {
		self.history.push(path.to_string());
	}
}
