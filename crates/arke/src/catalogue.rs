// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The arke authors

//! Catalog zone helpers.
//!
//! Member zones of a catalog are listed under `<id>.zones.<catalog>`, where
//! the id is the SHA-1 of the member name's wire form.

use sha1::{Digest, Sha1};

use crate::domain::Domain;
use crate::error::DomainError;

/// Lowercase hex SHA-1 of the wire form of `domain`.
pub fn catalogue_hash(domain: &Domain) -> Result<String, DomainError> {
    let wire = domain.to_wire()?;
    let digest = Sha1::digest(&wire);
    Ok(format!("{digest:x}"))
}

/// Like [`catalogue_hash`], for a name given as text.
pub fn catalogue_hash_str(name: &str) -> Result<String, DomainError> {
    catalogue_hash(&name.parse()?)
}

/// Owner name of `member`'s entry in `catalog`.
pub fn member_name(member: &Domain, catalog: &Domain) -> Result<Domain, DomainError> {
    let hash = catalogue_hash(member)?;
    format!("{hash}.zones.{}", catalog.fqdn()).parse()
}

#[cfg(test)]
#[path = "catalogue_tests.rs"]
mod tests;
