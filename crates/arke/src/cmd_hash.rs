// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The arke authors

//! `arke hash` command implementation.

use std::io::Write;

use anyhow::Context;

use arke::catalogue::{catalogue_hash, member_name};
use arke::cli::HashArgs;
use arke::domain::Domain;
use arke::error::ExitCode;

/// Run the `arke hash` command.
pub fn run(args: &HashArgs) -> anyhow::Result<ExitCode> {
    let catalog = args
        .catalog
        .as_deref()
        .map(str::parse::<Domain>)
        .transpose()
        .context("invalid --catalog")?;

    let mut out = std::io::stdout().lock();
    let mut code = ExitCode::Success;
    for name in &args.names {
        let line = name.parse::<Domain>().and_then(|member| match &catalog {
            Some(catalog) => member_name(&member, catalog).map(|owner| owner.fqdn()),
            None => catalogue_hash(&member).map(|hash| format!("{hash}  {}", member.fqdn())),
        });
        match line {
            Ok(line) => writeln!(out, "{line}")?,
            Err(e) => {
                eprintln!("arke: {name}: {e}");
                code = ExitCode::Failure;
            }
        }
    }
    Ok(code)
}
