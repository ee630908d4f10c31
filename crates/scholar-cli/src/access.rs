// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use clap::{Args, ValueEnum};
use scholar_app_state::{AppState, Portal};
use scholar_auth::{AccessGuard, AccessState, NavigationLog, Render, RolePolicy, UserId, UserIdentity};
use scholar_config::ScholarConfig;
use serde::Serialize;
use uuid::Uuid;

#[derive(Args, Debug)]
pub struct AccessArgs {
	/// Primary role of the signed-in user; omit for an anonymous visitor
	#[arg(long)]
	pub role: Option<String>,

	/// Secondary role grants
	#[arg(long = "secondary")]
	pub secondary: Vec<String>,

	/// User id (random when omitted)
	#[arg(long)]
	pub user_id: Option<Uuid>,

	/// Roles admitted by the view
	#[arg(long = "allow", conflicts_with = "portal")]
	pub allow: Vec<String>,

	/// Use a portal's role policy instead of --allow
	#[arg(long, value_enum)]
	pub portal: Option<PortalArg>,

	/// Content shown to signed-in users without access
	#[arg(long)]
	pub fallback: Option<String>,

	/// Path unauthorized users are sent to
	#[arg(long)]
	pub redirect: Option<String>,

	/// Treat the session as still hydrating
	#[arg(long)]
	pub loading: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PortalArg {
	Admin,
	Teacher,
	Student,
	Parent,
}

impl From<PortalArg> for Portal {
	fn from(arg: PortalArg) -> Self {
		match arg {
			PortalArg::Admin => Portal::Admin,
			PortalArg::Teacher => Portal::Teacher,
			PortalArg::Student => Portal::Student,
			PortalArg::Parent => Portal::Parent,
		}
	}
}

#[derive(Debug, Serialize)]
struct AccessReport {
	state: &'static str,
	render: String,
	navigations: Vec<String>,
	landing_path: Option<&'static str>,
	/// Title of the checked portal, or of the landing portal with `--allow`.
	portal_title: Option<String>,
}

pub fn run(config: &ScholarConfig, args: AccessArgs, json: bool) -> anyhow::Result<()> {
	let report = evaluate(config, args)?;

	if json {
		println!("{}", serde_json::to_string_pretty(&report)?);
	} else {
		println!("state:  {}", report.state);
		println!("render: {}", report.render);
		for path in &report.navigations {
			println!("navigate: {path}");
		}
		if let Some(path) = report.landing_path {
			println!("landing: {path}");
		}
		if let Some(title) = &report.portal_title {
			println!("portal: {title}");
		}
	}
	Ok(())
}

fn evaluate(config: &ScholarConfig, args: AccessArgs) -> anyhow::Result<AccessReport> {
	let mut app = AppState::from_config(config);

	if !args.loading {
		let user = args.role.map(|role| {
			let id = args.user_id.map(UserId::new).unwrap_or_else(UserId::generate);
			args.secondary
				.into_iter()
				.fold(UserIdentity::new(id, role), UserIdentity::with_role)
		});
		app.session_store_mut().hydrate(user)?;
	}

	let portal = args.portal.map(Portal::from);
	let mut policy: RolePolicy = match portal {
		Some(portal) => portal.policy(),
		None => args
			.allow
			.iter()
			.fold(RolePolicy::new(), |policy, role| policy.with_raw_role(role)),
	};
	if let Some(fallback) = args.fallback {
		policy = policy.with_fallback(fallback);
	}
	if let Some(redirect) = args.redirect {
		policy = policy.with_redirect(redirect);
	}

	let mut guard = AccessGuard::new(policy);
	guard.mount();
	let mut nav = NavigationLog::new();
	let mut protector = app.route_protector();
	protector.mount();

	let state = guard.state(app.session());
	let render = guard.render(app.session(), &mut nav);
	protector.check(app.session(), &mut nav);

	Ok(AccessReport {
		state: state_label(state),
		render: render_label(render),
		navigations: nav.history().to_vec(),
		landing_path: app.landing_path(),
		portal_title: portal
			.or_else(|| app.landing_portal())
			.map(|portal| app.portal_title(portal)),
	})
}

fn state_label(state: AccessState) -> &'static str {
	match state {
		AccessState::Pending => "pending",
		AccessState::Unauthenticated => "unauthenticated",
		AccessState::Unauthorized => "unauthorized",
		AccessState::Authorized => "authorized",
	}
}

fn render_label(render: Render<String>) -> String {
	match render {
		Render::Children => "children".to_string(),
		Render::Fallback(text) => format!("fallback: {text}"),
		Render::Loading(text) => format!("loading: {text}"),
		Render::Nothing => "nothing".to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn args() -> AccessArgs {
		AccessArgs {
			role: None,
			secondary: Vec::new(),
			user_id: None,
			allow: Vec::new(),
			portal: None,
			fallback: None,
			redirect: None,
			loading: false,
		}
	}

	#[test]
	fn test_teacher_outside_admin_portal_gets_fallback() {
		let report = evaluate(
			&ScholarConfig::default(),
			AccessArgs {
				role: Some("Teacher".to_string()),
				portal: Some(PortalArg::Admin),
				fallback: Some("No access".to_string()),
				..args()
			},
		)
		.unwrap();
		assert_eq!(report.state, "unauthorized");
		assert_eq!(report.render, "fallback: No access");
		assert!(report.navigations.is_empty());
		assert_eq!(report.landing_path, Some("/teacher"));
		assert_eq!(report.portal_title.as_deref(), Some("Admin portal"));
	}

	#[test]
	fn test_portal_title_follows_landing_portal_and_locale() {
		let mut config = ScholarConfig::default();
		config.i18n.default_locale = "es".to_string();
		let report = evaluate(
			&config,
			AccessArgs {
				role: Some("teacher".to_string()),
				allow: vec!["teacher".to_string()],
				..args()
			},
		)
		.unwrap();
		assert_eq!(report.render, "children");
		assert_eq!(report.portal_title.as_deref(), Some("Portal docente"));
	}

	#[test]
	fn test_anonymous_visitor_is_sent_to_sign_in() {
		let report = evaluate(&ScholarConfig::default(), AccessArgs { allow: vec!["admin".to_string()], ..args() }).unwrap();
		assert_eq!(report.state, "unauthenticated");
		assert_eq!(report.render, "nothing");
		assert_eq!(report.navigations, vec!["/sign-in".to_string()]);
		assert_eq!(report.portal_title, None);
	}

	#[test]
	fn test_secondary_super_admin_grant() {
		let report = evaluate(
			&ScholarConfig::default(),
			AccessArgs {
				role: Some("teacher".to_string()),
				secondary: vec!["Super Admin".to_string()],
				allow: vec!["super_admin".to_string()],
				..args()
			},
		)
		.unwrap();
		assert_eq!(report.render, "children");
	}

	#[test]
	fn test_loading_session_is_pending() {
		let report = evaluate(
			&ScholarConfig::default(),
			AccessArgs {
				role: Some("admin".to_string()),
				redirect: Some("/unauthorized".to_string()),
				loading: true,
				..args()
			},
		)
		.unwrap();
		assert_eq!(report.state, "pending");
		assert!(report.navigations.is_empty());
	}
}
