// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The application state facade handed to every view.

use std::sync::Arc;

use scholar_auth::{AccessGuard, Navigator, Render, RouteProtector, Session};
use scholar_common_i18n::{
	resolve_locale, Catalog, LocalePreferences, ResolvedLocale, Translator,
};
use scholar_config::ScholarConfig;
use tracing::{debug, info, instrument};

use crate::error::StateError;
use crate::portal::Portal;
use crate::preferences::{CookieJar, KeyValueStorage, LocalePersistence, MemoryStorage};
use crate::session::SessionStore;
use crate::settings::Settings;
use crate::store::{Store, SubscriptionId};

/// Session, settings and locale state for one running client.
///
/// All mutation goes through `&mut self` methods that update the relevant
/// store and notify its subscribers before returning.
pub struct AppState<S = MemoryStorage> {
	settings: Store<Settings>,
	session: SessionStore,
	locale: Store<String>,
	persistence: LocalePersistence<S>,
	/// Replacement for the built-in catalog, if any.
	catalog: Option<Arc<Catalog>>,
}

impl AppState<MemoryStorage> {
	/// State seeded from loaded configuration, with empty storage and cookies.
	pub fn from_config(config: &ScholarConfig) -> Self {
		Self::new(Settings::from(config), LocalePersistence::default())
	}
}

impl<S: KeyValueStorage> AppState<S> {
	pub fn new(settings: Settings, persistence: LocalePersistence<S>) -> Self {
		let mut state = Self {
			settings: Store::new(settings),
			session: SessionStore::new(),
			locale: Store::default(),
			persistence,
			catalog: None,
		};
		let active = state.active_locale().code;
		state.locale = Store::new(active);
		state
	}

	/// Replace the built-in translation catalog.
	pub fn with_catalog(mut self, catalog: Arc<Catalog>) -> Self {
		self.catalog = Some(catalog);
		self
	}

	pub fn catalog(&self) -> &Catalog {
		match &self.catalog {
			Some(catalog) => catalog.as_ref(),
			None => Catalog::builtin(),
		}
	}

	// Settings

	pub fn settings(&self) -> &Settings {
		self.settings.get()
	}

	pub fn subscribe_settings(&mut self, listener: impl FnMut(&Settings) + 'static) -> SubscriptionId {
		self.settings.subscribe(listener)
	}

	/// Apply `f` to the settings, then re-resolve the active locale.
	pub fn update_settings(&mut self, f: impl FnOnce(&mut Settings)) {
		self.settings.update(f);
		debug!(default_locale = %self.settings().default_locale, "settings updated");
		self.refresh_locale();
	}

	// Session

	pub fn session(&self) -> &Session {
		self.session.session()
	}

	pub fn session_store(&self) -> &SessionStore {
		&self.session
	}

	pub fn session_store_mut(&mut self) -> &mut SessionStore {
		&mut self.session
	}

	/// The portal the signed-in user lands in, if their primary role is known.
	pub fn landing_portal(&self) -> Option<Portal> {
		let role = self.session().user()?.primary()?;
		Some(Portal::for_role(role))
	}

	pub fn landing_path(&self) -> Option<&'static str> {
		self.landing_portal().map(Portal::home_path)
	}

	// Locale

	/// Preferences gathered from storage, cookies and settings.
	pub fn locale_preferences(&self) -> LocalePreferences {
		LocalePreferences {
			explicit: None,
			stored: self.persistence.stored(),
			cookie: self.persistence.cookie().map(str::to_string),
			settings_default: Some(self.settings().default_locale.clone()),
		}
	}

	pub fn active_locale(&self) -> ResolvedLocale {
		resolve_locale(&self.locale_preferences())
	}

	pub fn persistence(&self) -> &LocalePersistence<S> {
		&self.persistence
	}

	pub fn cookies(&self) -> &CookieJar {
		self.persistence.cookies()
	}

	pub fn translator(&self) -> Translator<'_> {
		Translator::new(self.catalog(), self.settings().build_mode)
	}

	pub fn translate(&self, key: &str, default: Option<&str>) -> String {
		self.translator()
			.translate(&self.locale_preferences(), key, default)
	}

	/// Translate with an explicit locale overriding every persisted layer.
	pub fn translate_in(&self, locale: &str, key: &str, default: Option<&str>) -> String {
		let prefs = self.locale_preferences().with_explicit(locale);
		self.translator().translate(&prefs, key, default)
	}

	pub fn t(&self, key: &str) -> String {
		self.translate(key, None)
	}

	/// Translate `key`, falling back to `default`, then substitute `{name}`
	/// placeholders from `vars`.
	pub fn translate_fmt(&self, key: &str, default: Option<&str>, vars: &[(&str, &str)]) -> String {
		self.translator()
			.translate_fmt(&self.locale_preferences(), key, default, vars)
	}

	pub fn t_fmt(&self, key: &str, vars: &[(&str, &str)]) -> String {
		self.translate_fmt(key, None, vars)
	}

	/// Switch the interface language.
	///
	/// Overwrites the stored preference and the locale cookie, notifies
	/// locale subscribers, and returns the `Set-Cookie` value to emit.
	#[instrument(level = "debug", skip(self))]
	pub fn switch_locale(&mut self, locale: &str) -> Result<String, StateError> {
		let locale = locale.trim();
		if locale.is_empty() {
			return Err(StateError::EmptyLocale);
		}

		let set_cookie = self.persistence.persist(locale);
		let active = self.active_locale();
		info!(locale = %active.code, layer = active.layer.as_str(), "locale switched");
		self.locale.set(active.code);
		Ok(set_cookie)
	}

	pub fn subscribe_locale(&mut self, listener: impl FnMut(&String) + 'static) -> SubscriptionId {
		self.locale.subscribe(listener)
	}

	pub fn unsubscribe_locale(&mut self, id: SubscriptionId) -> bool {
		self.locale.unsubscribe(id)
	}

	fn refresh_locale(&mut self) {
		let active = self.active_locale().code;
		if *self.locale.get() != active {
			debug!(locale = %active, "active locale changed");
			self.locale.set(active);
		}
	}

	// Guards

	/// A guard for `portal` that shows the access-denied message to
	/// signed-in users of other roles.
	///
	/// The fallback and loading placeholder are message keys; render through
	/// [`AppState::render_guard`] to get text in the current locale.
	pub fn portal_guard(&self, portal: Portal) -> AccessGuard<&'static str> {
		AccessGuard::new(portal.policy().with_fallback("auth.access_denied"))
			.with_loading("common.loading")
	}

	/// A guard for `portal` that sends other roles to the unauthorized path.
	pub fn portal_guard_redirecting(&self, portal: Portal) -> AccessGuard<&'static str> {
		AccessGuard::new(portal.policy().with_redirect(self.settings().unauthorized_path.clone()))
	}

	/// Render `guard` against the current session, translating its message
	/// keys at render time.
	pub fn render_guard(
		&self,
		guard: &mut AccessGuard<&'static str>,
		navigator: &mut impl Navigator,
	) -> Render<String> {
		guard
			.render(self.session(), navigator)
			.map(|key| self.t(key))
	}

	/// Display name of `portal` in the current locale.
	pub fn portal_title(&self, portal: Portal) -> String {
		self.t(portal.title_key())
	}

	/// A protector sending signed-out visitors to the configured sign-in path.
	pub fn route_protector(&self) -> RouteProtector {
		RouteProtector::new(self.settings().sign_in_path.clone())
	}
}
