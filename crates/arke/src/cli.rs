// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The arke authors

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{ColorMode, Config, OutputFormat};
use crate::domain::Domain;
use crate::error::Error;
use crate::rr::RrClass;

/// Read, check, and normalize DNS zone files
#[derive(Parser)]
#[command(name = "arke")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "ARKE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse zone files and report errors
    Check(CheckArgs),
    /// Print a zone in normalized form
    Format(FormatArgs),
    /// Print the token stream of a zone file
    Tokens(TokensArgs),
    /// Print catalog zone member hashes
    Hash(HashArgs),
}

/// Options shared by commands that parse zones.
#[derive(clap::Args)]
pub struct ZoneArgs {
    /// Origin for relative names (overrides zone.origin)
    #[arg(long, value_name = "NAME")]
    pub origin: Option<String>,

    /// Class for records without one (overrides zone.class)
    #[arg(long, value_name = "CLASS")]
    pub class: Option<String>,
}

/// Zone parsing settings after merging flags over config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSettings {
    pub origin: Domain,
    pub class: RrClass,
    pub default_ttl: Option<u32>,
}

impl ZoneArgs {
    /// Merge flags over `config`. Fails when no origin is given anywhere.
    pub fn settings(&self, config: &Config) -> Result<ZoneSettings, Error> {
        let origin = match &self.origin {
            Some(origin) => origin.parse::<Domain>()?,
            None => config.origin().ok_or_else(|| {
                Error::Usage(
                    "no origin given: pass --origin or set zone.origin in arke.toml".to_string(),
                )
            })?,
        };
        let class = match &self.class {
            Some(class) => class.parse::<RrClass>()?,
            None => config.class(),
        };
        Ok(ZoneSettings {
            origin,
            class,
            default_ttl: config.zone.default_ttl,
        })
    }
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Zone files to check
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub zone: ZoneArgs,

    /// Color output mode (overrides output.color)
    #[arg(long, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

impl CheckArgs {
    /// Effective color mode: `--no-color`, then `--color`, then config.
    pub fn color_mode(&self, config: &Config) -> ColorMode {
        if self.no_color {
            ColorMode::Never
        } else {
            self.color.unwrap_or(config.output.color)
        }
    }
}

#[derive(clap::Args)]
pub struct FormatArgs {
    /// Zone file to format
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub zone: ZoneArgs,

    /// Output format (overrides output.format)
    #[arg(short, long)]
    pub output: Option<OutputFormat>,
}

#[derive(clap::Args)]
pub struct TokensArgs {
    /// Zone file to tokenize
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(clap::Args)]
pub struct HashArgs {
    /// Member zone names
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,

    /// Print member owner names under this catalog zone
    #[arg(long, value_name = "ZONE")]
    pub catalog: Option<String>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
