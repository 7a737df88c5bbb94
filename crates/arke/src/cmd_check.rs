// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The arke authors

//! `arke check` command implementation.
//!
//! Parses every file in parallel and prints one status line per file, in
//! the order the files were given.

use std::io::Write;
use std::path::PathBuf;

use rayon::prelude::*;
use termcolor::{StandardStream, WriteColor};

use arke::cli::CheckArgs;
use arke::color::{self, scheme};
use arke::config::Config;
use arke::error::ExitCode;
use arke::zone::Zone;

/// Run the `arke check` command.
pub fn run(args: &CheckArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let settings = args.zone.settings(config)?;

    let results: Vec<(&PathBuf, arke::Result<Zone>)> = args
        .files
        .par_iter()
        .map(|path| {
            tracing::debug!(path = %path.display(), "checking");
            let zone = Zone::from_file_with_ttl(
                path,
                settings.origin.clone(),
                settings.class,
                settings.default_ttl,
            );
            (path, zone)
        })
        .collect();

    let mut out = StandardStream::stdout(color::choice(args.color_mode(config)));
    let mut failed = 0;
    for (path, result) in &results {
        match result {
            Ok(zone) => {
                out.set_color(&scheme::pass())?;
                write!(out, "ok")?;
                out.reset()?;
                write!(out, "   ")?;
                out.set_color(&scheme::path())?;
                write!(out, "{}", path.display())?;
                out.reset()?;
                let noun = if zone.len() == 1 { "record" } else { "records" };
                writeln!(out, " ({} {noun})", zone.len())?;
            }
            Err(e) => {
                failed += 1;
                out.set_color(&scheme::fail())?;
                write!(out, "FAIL")?;
                out.reset()?;
                writeln!(out, " {e}")?;
            }
        }
    }

    out.set_color(&scheme::summary())?;
    writeln!(out, "{} checked, {} failed", results.len(), failed)?;
    out.reset()?;

    Ok(if failed == 0 {
        ExitCode::Success
    } else {
        ExitCode::Failure
    })
}
