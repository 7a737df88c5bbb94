// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The arke authors

//! Zones: resource records grouped by owner name.
//!
//! Owners keep their first-insertion order so a parsed zone prints back in
//! file order.

mod parser;

use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

use crate::domain::Domain;
use crate::error::{Error, ParserError, Result};
use crate::file_reader::FileContent;
use crate::rr::{Record, RrClass, RrType};

pub use parser::{ZoneParser, parse_ttl};

#[derive(Debug, Clone)]
pub struct Zone {
    name: Domain,
    default_ttl: Option<u32>,
    owners: Vec<(Domain, Vec<Record>)>,
    index: HashMap<Domain, usize>,
}

impl Zone {
    /// Create an empty zone. The name is made absolute.
    pub fn new(name: Domain) -> Self {
        Self {
            name: name.to_absolute(),
            default_ttl: None,
            owners: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_default_ttl(mut self, ttl: u32) -> Self {
        self.default_ttl = Some(ttl);
        self
    }

    pub fn set_default_ttl(&mut self, ttl: Option<u32>) {
        self.default_ttl = ttl;
    }

    pub fn name(&self) -> &Domain {
        &self.name
    }

    pub fn default_ttl(&self) -> Option<u32> {
        self.default_ttl
    }

    /// Parse zone file text.
    ///
    /// Relative names are completed with `name` until a `$ORIGIN`
    /// directive says otherwise. Records without an explicit class get
    /// `class`.
    pub fn parse(text: &str, name: Domain, class: RrClass) -> std::result::Result<Self, ParserError> {
        ZoneParser::new(text, name, class).parse()
    }

    /// Parse zone file text read from `reader`.
    pub fn from_reader<R: Read>(mut reader: R, name: Domain, class: RrClass) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text).map_err(|source| Error::Io {
            path: "<reader>".into(),
            source,
        })?;
        Ok(Self::parse(&text, name, class)?)
    }

    /// Parse a zone file from disk. Large files are memory-mapped.
    pub fn from_file(path: &Path, name: Domain, class: RrClass) -> Result<Self> {
        Self::from_file_with_ttl(path, name, class, None)
    }

    /// Like [`Zone::from_file`], with a TTL for records that precede any
    /// `$TTL` directive and carry none of their own.
    pub fn from_file_with_ttl(
        path: &Path,
        name: Domain,
        class: RrClass,
        default_ttl: Option<u32>,
    ) -> Result<Self> {
        let content = FileContent::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ZoneParser::new(content.as_str(), name, class)
            .with_default_ttl(default_ttl)
            .parse()
            .map_err(|source| Error::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Append a record to its owner's group.
    pub fn add_rr(&mut self, record: Record) {
        match self.index.get(record.owner()) {
            Some(&i) => self.owners[i].1.push(record),
            None => {
                let owner = record.owner().clone();
                self.index.insert(owner.clone(), self.owners.len());
                self.owners.push((owner, vec![record]));
            }
        }
    }

    /// Delete every record matching `filter`. Owners left without records
    /// are removed. Returns the number of records deleted.
    pub fn del_rr(&mut self, filter: &RecordFilter) -> usize {
        let mut removed = 0;
        for (_, records) in &mut self.owners {
            let before = records.len();
            records.retain(|rr| !filter.matches(rr));
            removed += before - records.len();
        }
        if removed > 0 {
            self.owners.retain(|(_, records)| !records.is_empty());
            self.reindex();
        }
        removed
    }

    fn reindex(&mut self) {
        self.index = self
            .owners
            .iter()
            .enumerate()
            .map(|(i, (owner, _))| (owner.clone(), i))
            .collect();
    }

    /// Records owned by `owner`, in insertion order.
    pub fn get(&self, owner: &Domain) -> Option<&[Record]> {
        self.index.get(owner).map(|&i| self.owners[i].1.as_slice())
    }

    pub fn owners(&self) -> impl Iterator<Item = &Domain> {
        self.owners.iter().map(|(owner, _)| owner)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.owners.iter().flat_map(|(_, records)| records)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.owners.iter().map(|(_, records)| records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

impl PartialEq for Zone {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.default_ttl == other.default_ttl && self.owners == other.owners
    }
}

impl Eq for Zone {}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ttl) = self.default_ttl {
            writeln!(f, "$TTL {ttl}")?;
        }
        for record in self.records() {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}

/// Selects records by attribute. Unset attributes match anything.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    owner: Option<Domain>,
    rtype: Option<RrType>,
    class: Option<RrClass>,
    ttl: Option<Option<u32>>,
    rdata: Vec<(String, String)>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(mut self, owner: Domain) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn rtype(mut self, rtype: RrType) -> Self {
        self.rtype = Some(rtype);
        self
    }

    pub fn class(mut self, class: RrClass) -> Self {
        self.class = Some(class);
        self
    }

    pub fn ttl(mut self, ttl: Option<u32>) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Require an RDATA field to hold `value`. Records whose type lacks
    /// the field never match.
    pub fn rdata(mut self, field: &str, value: &str) -> Self {
        self.rdata.push((field.to_string(), value.to_string()));
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.owner.as_ref().is_none_or(|o| o == record.owner())
            && self.rtype.is_none_or(|t| t == record.rtype())
            && self.class.is_none_or(|c| c == record.class())
            && self.ttl.is_none_or(|t| t == record.ttl())
            && self
                .rdata
                .iter()
                .all(|(field, value)| record.rdata().get(field) == Some(value.as_str()))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
