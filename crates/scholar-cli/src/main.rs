// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod access;
mod logging;
mod translate;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use scholar_config::{load_config, load_config_with_file, ScholarConfig};
use tracing::debug;

/// Scholar dashboard - inspect guard decisions and translations
#[derive(Parser, Debug)]
#[command(name = "scholar", version)]
struct Cli {
	/// Config file (default: ./scholar.toml)
	#[arg(long, global = true, env = "SCHOLAR_CONFIG")]
	config: Option<PathBuf>,

	/// Print results as JSON
	#[arg(long, global = true)]
	json: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Decide what a guarded view renders for a user
	Access(access::AccessArgs),

	/// Translate a message key through the locale fallback chain
	Translate(translate::TranslateArgs),

	/// List the shipped locales
	Locales,
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let config = load(cli.config.as_ref())?;
	logging::init(&config.logging);
	debug!(
		command = cli.command.name(),
		json = cli.json,
		config = ?cli.config,
		"dispatching command"
	);

	match cli.command {
		Command::Access(args) => access::run(&config, args, cli.json),
		Command::Translate(args) => translate::run(&config, args, cli.json),
		Command::Locales => translate::list_locales(cli.json),
	}
}

impl Command {
	fn name(&self) -> &'static str {
		match self {
			Command::Access(_) => "access",
			Command::Translate(_) => "translate",
			Command::Locales => "locales",
		}
	}
}

fn load(path: Option<&PathBuf>) -> anyhow::Result<ScholarConfig> {
	match path {
		Some(path) => load_config_with_file(path)
			.with_context(|| format!("failed to load config from {}", path.display())),
		None => load_config().context("failed to load configuration"),
	}
}
