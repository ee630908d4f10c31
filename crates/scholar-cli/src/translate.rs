// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use clap::Args;
use scholar_app_state::{
	AppState, CookieJar, KeyValueStorage, LocalePersistence, MemoryStorage, Settings, STORAGE_KEY,
};
use scholar_common_i18n::{available_locales, BuildMode, Direction};
use scholar_config::ScholarConfig;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct TranslateArgs {
	/// Dot-separated message key, e.g. `pages.exams.title`
	pub key: String,

	/// Explicit locale, overriding every persisted preference
	#[arg(long)]
	pub locale: Option<String>,

	/// Stored `preferred-locale` value
	#[arg(long)]
	pub stored: Option<String>,

	/// `Cookie` header to read `NEXT_LOCALE` from
	#[arg(long)]
	pub cookie: Option<String>,

	/// Returned when the key is missing everywhere
	#[arg(long)]
	pub default: Option<String>,

	/// Build mode for missing keys (`development` or `production`)
	#[arg(long, value_parser = parse_mode)]
	pub mode: Option<BuildMode>,

	/// Placeholder values as `name=value`
	#[arg(long = "var", value_parser = parse_var)]
	pub vars: Vec<(String, String)>,
}

#[derive(Debug, Serialize)]
struct TranslateReport {
	key: String,
	locale: String,
	layer: &'static str,
	text: String,
}

pub fn run(config: &ScholarConfig, args: TranslateArgs, json: bool) -> anyhow::Result<()> {
	let report = translate(config, args);
	if json {
		println!("{}", serde_json::to_string_pretty(&report)?);
	} else {
		println!("{}", report.text);
	}
	Ok(())
}

fn translate(config: &ScholarConfig, args: TranslateArgs) -> TranslateReport {
	let mut settings = Settings::from(config);
	if let Some(mode) = args.mode {
		settings = settings.with_build_mode(mode);
	}

	let mut storage = MemoryStorage::new();
	if let Some(stored) = &args.stored {
		storage.set(STORAGE_KEY, stored);
	}
	let cookies = args.cookie.as_deref().map(CookieJar::parse).unwrap_or_default();
	let app = AppState::new(settings, LocalePersistence::new(storage, cookies));

	let mut prefs = app.locale_preferences();
	if let Some(locale) = args.locale {
		prefs = prefs.with_explicit(locale);
	}
	let active = scholar_common_i18n::resolve_locale(&prefs);

	let vars: Vec<(&str, &str)> = args
		.vars
		.iter()
		.map(|(name, value)| (name.as_str(), value.as_str()))
		.collect();
	let text = app
		.translator()
		.translate_fmt(&prefs, &args.key, args.default.as_deref(), &vars);

	TranslateReport {
		key: args.key,
		locale: active.code,
		layer: active.layer.as_str(),
		text,
	}
}

pub fn list_locales(json: bool) -> anyhow::Result<()> {
	let locales = available_locales();
	if json {
		println!("{}", serde_json::to_string_pretty(&locales)?);
		return Ok(());
	}
	for info in locales {
		let rtl = if info.direction == Direction::Rtl { " (rtl)" } else { "" };
		println!("{}\t{}\t{}{rtl}", info.code, info.name, info.native_name);
	}
	Ok(())
}

fn parse_mode(value: &str) -> Result<BuildMode, String> {
	BuildMode::parse(value).ok_or_else(|| format!("unknown build mode '{value}'"))
}

fn parse_var(value: &str) -> Result<(String, String), String> {
	let (name, value) = value
		.split_once('=')
		.ok_or_else(|| format!("expected name=value, got '{value}'"))?;
	Ok((name.to_string(), value.to_string()))
}
