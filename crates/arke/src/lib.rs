// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The arke authors

//! # Arke
//!
//! A DNS library for reading and manipulating master (zone) files.
//!
//! ## Modules
//!
//! - [`tokenizer`] - Splits zone file text into positioned tokens
//! - [`zone`] - Zone container and the zone file parser
//! - [`domain`] - Domain names, relative and absolute, with wire form
//! - [`rr`] - Resource record types, classes, and records
//! - [`catalogue`] - Catalog zone member hashing
//! - [`config`] - `arke.toml` loading and defaults
//!
//! ## Example
//!
//! ```
//! use arke::domain::Domain;
//! use arke::rr::RrClass;
//! use arke::zone::Zone;
//!
//! let text = "@ 3600 IN A 192.0.2.1\nwww IN CNAME @\n";
//! let zone = Zone::parse(text, Domain::new("example.com", None), RrClass::IN).unwrap();
//! assert_eq!(zone.len(), 2);
//! ```

pub mod catalogue;
pub mod cli;
pub mod color;
pub mod config;
pub mod domain;
pub mod error;
pub mod file_reader;
pub mod rr;
pub mod tokenizer;
pub mod zone;

pub use domain::Domain;
pub use error::{Error, Result};
pub use rr::{Record, RrClass, RrType};
pub use zone::{RecordFilter, Zone};

#[cfg(test)]
mod test_utils;
