// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! End-to-end guard and translation scenarios driven through `AppState`.

use std::sync::Arc;

use proptest::prelude::*;
use scholar_app_state::{AppState, CookieJar, LocalePersistence, MemoryStorage, Portal, Settings};
use scholar_auth::{
	has_access, AccessGuard, NavigationLog, Protection, Render, RolePolicy, Session, UserId,
	UserIdentity,
};
use scholar_common_i18n::{BuildMode, Catalog};
use serde_json::json;

fn catalog() -> Arc<Catalog> {
	let mut catalog = Catalog::new();
	catalog
		.insert_table(
			"en",
			json!({
				"pages": { "dashboard": "Dashboard" },
				"a": { "b": "system only" },
			}),
		)
		.unwrap();
	catalog
		.insert_table(
			"es",
			json!({ "pages": { "dashboard": "Panel" } }),
		)
		.unwrap();
	catalog
		.insert_table(
			"fr",
			json!({ "pages": { "exams": "Examens" }, "count": 3 }),
		)
		.unwrap();
	Arc::new(catalog)
}

fn app(mode: BuildMode) -> AppState {
	AppState::new(
		Settings::default().with_build_mode(mode),
		LocalePersistence::default(),
	)
	.with_catalog(catalog())
}

fn user(role: &str) -> UserIdentity {
	UserIdentity::new(UserId::generate(), role)
}

#[test]
fn super_admin_with_separator_variant_sees_children() {
	let session = Session::authenticated(user("Super_Admin"));
	let policy: RolePolicy = RolePolicy::new().with_raw_role("superadmin");
	assert!(has_access(&session, &policy));

	let mut guard = AccessGuard::new(policy);
	guard.mount();
	let mut nav = NavigationLog::new();
	assert_eq!(guard.render(&session, &mut nav), Render::Children);
	assert!(nav.is_empty());
}

#[test]
fn teacher_outside_admin_policy_sees_fallback() {
	let session = Session::authenticated(user("Teacher"));
	let policy = RolePolicy::new()
		.with_raw_role("Super Admin")
		.with_raw_role("Admin")
		.with_fallback("No access".to_string());

	let mut guard = AccessGuard::new(policy);
	guard.mount();
	let mut nav = NavigationLog::new();
	assert_eq!(
		guard.render(&session, &mut nav),
		Render::Fallback("No access".to_string())
	);
	assert!(nav.is_empty());
}

#[test]
fn anonymous_visitor_is_redirected_to_sign_in_once() {
	let mut app = app(BuildMode::Production);
	app.session_store_mut().hydrate(None).unwrap();

	let mut guard = app.portal_guard(Portal::Admin);
	let mut protector = app.route_protector();
	guard.mount();
	protector.mount();
	let mut nav = NavigationLog::new();

	for _ in 0..3 {
		assert!(guard.render(app.session(), &mut nav).is_nothing());
		assert_eq!(protector.check(app.session(), &mut nav), Protection::SignInRequired);
	}
	assert_eq!(nav.history(), ["/sign-in"]);
}

#[test]
fn missing_key_in_active_locale_falls_back_to_process_default() {
	let mut app = app(BuildMode::Production);
	app.switch_locale("fr").unwrap();
	assert_eq!(app.active_locale().code, "fr");
	assert_eq!(app.t("pages.dashboard"), "Dashboard");
}

#[test]
fn caller_default_wins_in_production_when_key_missing() {
	let app = app(BuildMode::Production);
	assert_eq!(
		app.translate("nonexistent.key", Some("Fallback Text")),
		"Fallback Text"
	);
	assert_eq!(app.t("nonexistent.key"), "nonexistent.key");
}

#[test]
fn development_marks_missing_keys() {
	let app = app(BuildMode::Development);
	assert_eq!(app.t("nonexistent.key"), "[missing: nonexistent.key]");
}

#[test]
fn active_locale_hit_bypasses_fallbacks() {
	let mut app = app(BuildMode::Production);
	app.switch_locale("es").unwrap();
	assert_eq!(app.t("pages.dashboard"), "Panel");
}

#[test]
fn system_table_is_consulted_after_active_and_process_default() {
	let mut app = app(BuildMode::Production);
	app.update_settings(|s| s.default_locale = "es".to_string());
	app.switch_locale("fr").unwrap();

	// Present only in "en".
	assert_eq!(app.t("a.b"), "system only");
	// "es" is the process default and wins over "en".
	assert_eq!(app.t("pages.dashboard"), "Panel");
}

#[test]
fn non_string_terminal_is_not_found() {
	let mut app = app(BuildMode::Development);
	app.switch_locale("fr").unwrap();
	assert_eq!(app.t("count"), "[missing: count]");
	assert_eq!(app.t(""), "[missing: ]");
}

#[test]
fn unknown_persisted_locale_degrades_to_default_table() {
	let persistence = LocalePersistence::new(MemoryStorage::new(), CookieJar::parse("NEXT_LOCALE=zz"));
	let app = AppState::new(
		Settings::default().with_build_mode(BuildMode::Production),
		persistence,
	)
	.with_catalog(catalog());
	assert_eq!(app.active_locale().code, "zz");
	assert_eq!(app.t("pages.dashboard"), "Dashboard");
}

#[test]
fn loading_session_defers_every_decision() {
	let app = app(BuildMode::Production);
	let mut guard = app.portal_guard_redirecting(Portal::Admin);
	let mut protector = app.route_protector();
	guard.mount();
	protector.mount();
	let mut nav = NavigationLog::new();

	assert!(guard.render(app.session(), &mut nav).is_nothing());
	assert_eq!(protector.check(app.session(), &mut nav), Protection::Pending);
	assert!(nav.is_empty());
}

#[test]
fn sign_out_and_back_in_rearms_redirects() {
	let mut app = app(BuildMode::Production);
	app.session_store_mut().hydrate(Some(user("Parent"))).unwrap();

	let mut guard = app.portal_guard_redirecting(Portal::Teacher);
	let mut protector = app.route_protector();
	guard.mount();
	protector.mount();
	let mut nav = NavigationLog::new();

	guard.render(app.session(), &mut nav);
	guard.render(app.session(), &mut nav);
	assert_eq!(protector.check(app.session(), &mut nav), Protection::Allowed);

	app.session_store_mut().sign_out().unwrap();
	assert_eq!(protector.check(app.session(), &mut nav), Protection::SignInRequired);

	app.session_store_mut().sign_in(user("Student")).unwrap();
	guard.render(app.session(), &mut nav);
	assert_eq!(protector.check(app.session(), &mut nav), Protection::Allowed);

	assert_eq!(nav.history(), ["/unauthorized", "/sign-in", "/unauthorized"]);
}

proptest! {
	#[test]
	fn translate_is_total(key in ".{0,40}", production in any::<bool>()) {
		let mode = if production { BuildMode::Production } else { BuildMode::Development };
		let app = app(mode);
		let text = app.t(&key);
		if key != "pages.dashboard" && key != "a.b" {
			match mode {
				BuildMode::Production => prop_assert_eq!(text, key),
				BuildMode::Development => prop_assert_eq!(text, format!("[missing: {key}]")),
			}
		}
	}

	#[test]
	fn pending_guard_never_navigates(role in "[A-Za-z _-]{0,16}", mounted in any::<bool>()) {
		let app = app(BuildMode::Production);
		let mut guard = AccessGuard::new(
			RolePolicy::<String>::new().with_raw_role(&role).with_redirect("/unauthorized"),
		);
		if mounted {
			guard.mount();
		}
		let mut nav = NavigationLog::new();
		prop_assert!(guard.render(app.session(), &mut nav).is_nothing());
		prop_assert!(nav.is_empty());
	}
}
