// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The arke authors

//! `arke tokens` command implementation.

use std::io::Write;

use arke::cli::TokensArgs;
use arke::error::ExitCode;
use arke::file_reader::FileContent;
use arke::tokenizer::Tokenizer;

/// Run the `arke tokens` command.
pub fn run(args: &TokensArgs) -> anyhow::Result<ExitCode> {
    let path = &args.file;
    let content = match FileContent::read(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("arke: {}: {e}", path.display());
            return Ok(ExitCode::Failure);
        }
    };
    let mut out = std::io::stdout().lock();
    for token in Tokenizer::new(content.as_str()) {
        match token {
            Ok(token) => writeln!(out, "{token}")?,
            Err(e) => {
                out.flush()?;
                eprintln!("arke: {}: {e}", path.display());
                return Ok(ExitCode::Failure);
            }
        }
    }
    Ok(ExitCode::Success)
}
