//! Shared unit test utilities.
//!
//! Provides common fixtures and helpers for unit tests in the arke crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

/// The canonical sample zone: a parenthesised SOA with comments, an
/// indented record inheriting the owner, and a relative owner.
pub const SAMPLE_ZONE: &str = "\
@ IN SOA foo.example.com. hostmaster.example.com. (
            1 ; serial
            3600; refresh
            3600 ; retry
            2 ; expiry
            300; negttl )
    IN A 192.0.2.1
foo IN A 192.0.2.2";

/// Creates a temp directory with custom arke.toml content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("arke.toml"), config).unwrap();
    dir
}

/// Creates a temp file with the given content for testing.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_file_with_content(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}
