// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authentication state and role-based render guards for the Scholar
//! dashboard portals.
//!
//! # Decision Flow
//!
//! ```text
//! Session + RolePolicy → evaluate → AccessState → decide → Decision
//!                                       │
//!                                       ├── Pending         → loading placeholder / nothing
//!                                       ├── Unauthenticated → nothing (RouteProtector redirects)
//!                                       ├── Unauthorized    → redirect once, else fallback
//!                                       └── Authorized      → children
//! ```
//!
//! Role labels arriving from upstream are compared in normalized form (see
//! [`RoleToken`]). Nothing in this crate fails at decision time: a missing
//! user, an empty policy or a missing fallback all mean "deny, render nothing".
//!
//! # Example
//!
//! ```
//! use scholar_auth::{AccessGuard, NavigationLog, Render, Role, RolePolicy, Session, UserId, UserIdentity};
//!
//! let policy = RolePolicy::allow([Role::SuperAdmin, Role::Admin]).with_fallback("No access".to_string());
//! let mut guard = AccessGuard::new(policy);
//! guard.mount();
//!
//! let mut nav = NavigationLog::new();
//! let session = Session::authenticated(UserIdentity::new(UserId::generate(), "Teacher"));
//! assert_eq!(guard.render(&session, &mut nav), Render::Fallback("No access".to_string()));
//! ```

pub mod access;
pub mod guard;
pub mod navigate;
pub mod policy;
pub mod session;
pub mod types;

pub use access::{decide, evaluate, has_access, AccessState, Decision};
pub use guard::{AccessGuard, Protection, Render, RouteProtector};
pub use navigate::{NavigationLog, Navigator};
pub use policy::RolePolicy;
pub use session::{Hydration, Session, UserIdentity};
pub use types::{Role, RoleParseError, RoleToken, UserId};
