// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The arke authors

//! Configuration loaded from `arke.toml`.
//!
//! Every key is optional. Command-line flags override config values, which
//! override the built-in defaults in [`defaults`].

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::Domain;
use crate::error::ConfigError;
use crate::rr::RrClass;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Zone parsing settings.
    pub zone: ZoneConfig,

    /// Output settings.
    pub output: OutputConfig,

    /// Path the config was loaded from, if any.
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

/// `[zone]` section.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZoneConfig {
    /// Class for records without one: a mnemonic or CLASS###.
    pub class: Option<String>,

    /// Default TTL applied when a zone has no `$TTL`.
    pub default_ttl: Option<u32>,

    /// Origin used when the command line does not give one.
    pub origin: Option<String>,
}

/// `[output]` section.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: ColorMode,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Zone file text.
    #[default]
    Text,
    /// JSON array of records.
    Json,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl Config {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(&text, path)?;
        config.path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate config text. `path` is only used in messages.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|e| ConfigError::Invalid {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    /// Load the given file, or discover one from `start_dir`, or fall back
    /// to defaults.
    pub fn resolve(explicit: Option<&Path>, start_dir: &Path) -> Result<Self, ConfigError> {
        match explicit.map(Path::to_path_buf).or_else(|| find_config(start_dir)) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::Invalid {
            path: path.to_path_buf(),
            message,
        };
        if let Some(class) = &self.zone.class {
            class
                .parse::<RrClass>()
                .map_err(|e| invalid(format!("zone.class: {e}")))?;
        }
        if let Some(origin) = &self.zone.origin {
            origin
                .parse::<Domain>()
                .map_err(|e| invalid(format!("zone.origin: {e}")))?;
        }
        Ok(())
    }

    /// Configured record class, or the built-in default.
    pub fn class(&self) -> RrClass {
        self.zone
            .class
            .as_deref()
            .and_then(|c| c.parse().ok())
            .unwrap_or(defaults::zone::CLASS)
    }

    /// Configured origin, if set and valid.
    pub fn origin(&self) -> Option<Domain> {
        self.zone.origin.as_deref().and_then(|o| o.parse().ok())
    }
}

/// Nearest `arke.toml` in `start_dir` or its ancestors. The search ends at
/// the first directory holding `.git`.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(defaults::CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
