// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The arke authors

//! The `arke` command-line tool.

mod cmd_check;
mod cmd_format;
mod cmd_hash;
mod cmd_tokens;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use arke::cli::{Cli, Command};
use arke::config::{Config, defaults};
use arke::error::ExitCode;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("arke: {e:#}");
            ExitCode::Usage.into()
        }
    }
}

/// Log filter: `ARKE_LOG` if set, else by verbosity. Logs go to stderr.
fn init_logging(verbose: bool) {
    let fallback = if verbose {
        defaults::log::VERBOSE
    } else {
        defaults::log::QUIET
    };
    let filter = std::env::var(defaults::LOG_ENV)
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Errors returned here are usage or config problems. Commands report
/// parse failures themselves and return [`ExitCode::Failure`].
fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = Config::resolve(cli.config.as_deref(), &cwd)?;

    match &cli.command {
        Command::Check(args) => cmd_check::run(args, &config),
        Command::Format(args) => cmd_format::run(args, &config),
        Command::Tokens(args) => cmd_tokens::run(args),
        Command::Hash(args) => cmd_hash::run(args),
    }
}
