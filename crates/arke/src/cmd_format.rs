// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The arke authors

//! `arke format` command implementation.

use std::io::Write;

use arke::cli::FormatArgs;
use arke::config::{Config, OutputFormat};
use arke::error::ExitCode;
use arke::rr::Record;
use arke::zone::Zone;

/// Run the `arke format` command.
pub fn run(args: &FormatArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let settings = args.zone.settings(config)?;

    let zone = match Zone::from_file_with_ttl(
        &args.file,
        settings.origin,
        settings.class,
        settings.default_ttl,
    ) {
        Ok(zone) => zone,
        Err(e) => {
            eprintln!("arke: {e}");
            return Ok(ExitCode::Failure);
        }
    };

    let mut out = std::io::stdout().lock();
    match args.output.unwrap_or(config.output.format) {
        OutputFormat::Text => write!(out, "{zone}")?,
        OutputFormat::Json => {
            let records: Vec<&Record> = zone.records().collect();
            serde_json::to_writer_pretty(&mut out, &records)?;
            writeln!(out)?;
        }
    }
    Ok(ExitCode::Success)
}
