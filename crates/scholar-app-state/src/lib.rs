// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client application state for the Scholar dashboard.
//!
//! [`AppState`] owns the session, settings and active-locale stores and is
//! passed by reference into views. Views read from it, subscribe to the
//! slices they render, and call its update methods in response to UI events.
//!
//! # Example
//!
//! ```
//! use scholar_app_state::{AppState, Portal};
//! use scholar_auth::{NavigationLog, Render, UserId, UserIdentity};
//! use scholar_config::ScholarConfig;
//!
//! let mut app = AppState::from_config(&ScholarConfig::default());
//! app.session_store_mut()
//!     .hydrate(Some(UserIdentity::new(UserId::generate(), "Teacher")))
//!     .unwrap();
//!
//! let mut guard = app.portal_guard(Portal::Teacher);
//! guard.mount();
//! let mut nav = NavigationLog::new();
//! assert_eq!(app.render_guard(&mut guard, &mut nav), Render::Children);
//!
//! app.switch_locale("es").unwrap();
//! assert_eq!(app.t("nav.exams"), "Exámenes");
//! ```

pub mod app;
pub mod error;
pub mod portal;
pub mod preferences;
pub mod session;
pub mod settings;
pub mod store;

pub use app::AppState;
pub use error::StateError;
pub use portal::Portal;
pub use preferences::{
	locale_set_cookie, CookieJar, KeyValueStorage, LocalePersistence, MemoryStorage,
	LOCALE_COOKIE, LOCALE_COOKIE_MAX_AGE, STORAGE_KEY,
};
pub use session::SessionStore;
pub use settings::Settings;
pub use store::{Store, SubscriptionId};
