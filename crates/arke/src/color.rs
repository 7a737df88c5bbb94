// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The arke authors

//! Terminal color handling for `arke check`.

use std::io::IsTerminal;

use termcolor::{Color, ColorChoice, ColorSpec};

use crate::config::ColorMode;

/// Resolve a [`ColorMode`] against the terminal and environment.
///
/// `auto` colors only when stdout is a terminal and `NO_COLOR` is unset.
pub fn choice(mode: ColorMode) -> ColorChoice {
    match mode {
        ColorMode::Always => resolve_color(true, false),
        ColorMode::Never => resolve_color(false, true),
        ColorMode::Auto => {
            let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
            resolve_color(false, no_color || !std::io::stdout().is_terminal())
        }
    }
}

/// `no_color` takes priority over `force`.
pub fn resolve_color(force: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force {
        ColorChoice::Always
    } else {
        ColorChoice::Auto
    }
}

pub mod scheme {
    use super::*;

    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Summary line.
    pub fn summary() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
