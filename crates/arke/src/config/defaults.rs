// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The arke authors

//! Centralized default values for configuration.
//!
//! Config structs and the CLI fall back to these when a value is not set.

/// Name of the config file searched for by discovery.
pub const CONFIG_FILE: &str = "arke.toml";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "ARKE_LOG";

/// File reading thresholds.
pub mod size {
    /// Files at or above this size (64KB) are memory-mapped.
    pub const MMAP_THRESHOLD: u64 = 64 * 1024;
}

/// Zone parsing defaults.
pub mod zone {
    use crate::rr::RrClass;

    /// Class assigned to records that do not name one.
    pub const CLASS: RrClass = RrClass::IN;
}

/// Logging defaults.
pub mod log {
    /// Filter used without `--verbose`.
    pub const QUIET: &str = "warn";

    /// Filter used with `--verbose`.
    pub const VERBOSE: &str = "debug";
}
