//! Test helpers for behavioral specifications.
//!
//! Provides helpers for running the arke binary against fixture zones.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the arke binary.
///
/// Logging and config env vars are cleared so the host environment
/// cannot leak into results.
pub fn arke_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("arke"));
    cmd.env_remove("ARKE_LOG")
        .env_remove("ARKE_CONFIG")
        .env_remove("NO_COLOR");
    cmd
}

/// Get path to a zone fixture.
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    Path::new(&manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A temp project root (marked as a git root so config discovery stops
/// there) with the given `arke.toml` content.
pub fn project(config: Option<&str>) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    if let Some(config) = config {
        std::fs::write(dir.path().join("arke.toml"), config).unwrap();
    }
    dir
}

/// Write a zone file into `dir` and return its path.
pub fn zone_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}
