// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The arke authors

//! Domain names.
//!
//! A [`Domain`] is either absolute (its labels end with the empty root
//! label) or relative to an origin domain. Labels are stored unescaped with
//! respect to `.`; any other backslash escape is kept verbatim and only
//! decoded when producing wire form.
//!
//! Equality, hashing, and ordering operate on the fully qualified name,
//! compared case-insensitively. Ordering is DNSSEC canonical order
//! (RFC 4034 section 6.1).

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::error::DomainError;

/// Maximum octets in a single label.
pub const MAX_LABEL_LEN: usize = 63;

/// Maximum octets in a name's wire form.
pub const MAX_NAME_LEN: usize = 255;

#[derive(Clone)]
pub struct Domain {
    labels: Vec<String>,
    origin: Option<Arc<Domain>>,
}

impl Domain {
    /// Create a domain name, relative to `origin` unless `name` is already
    /// fully qualified (ends in an unescaped `.`).
    ///
    /// Without an origin the name is treated as fully qualified and a
    /// trailing `.` is implied.
    pub fn new(name: &str, origin: Option<&Domain>) -> Self {
        match origin {
            Some(origin) if !ends_with_unescaped_dot(name) => {
                let labels = if name.is_empty() {
                    Vec::new()
                } else {
                    split_labels(name)
                };
                Self {
                    labels,
                    origin: Some(Arc::new(origin.clone())),
                }
            }
            _ => {
                if name.is_empty() || name == "." {
                    return Self::root();
                }
                let mut labels = split_labels(name);
                if !ends_with_unescaped_dot(name) {
                    labels.push(String::new());
                }
                Self {
                    labels,
                    origin: None,
                }
            }
        }
    }

    /// The root name, `.`.
    pub fn root() -> Self {
        Self {
            labels: vec![String::new()],
            origin: None,
        }
    }

    /// Labels as stored. Absolute names end with the empty root label.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn origin(&self) -> Option<&Domain> {
        self.origin.as_deref()
    }

    pub fn is_absolute(&self) -> bool {
        self.origin.is_none()
    }

    pub fn is_root(&self) -> bool {
        self.origin.is_none() && self.labels.len() == 1 && self.labels[0].is_empty()
    }

    /// The fully qualified name, with origins appended recursively.
    pub fn fqdn(&self) -> String {
        match &self.origin {
            None => self.to_string(),
            Some(origin) if self.labels.is_empty() => origin.fqdn(),
            Some(origin) if origin.is_root() => format!("{self}."),
            Some(origin) => format!("{self}.{}", origin.fqdn()),
        }
    }

    /// An equivalent absolute name with no origin.
    pub fn to_absolute(&self) -> Domain {
        let mut labels: Vec<String> = self
            .absolute_labels()
            .into_iter()
            .map(str::to_string)
            .collect();
        labels.push(String::new());
        Domain {
            labels,
            origin: None,
        }
    }

    /// Fully qualified labels, root label excluded, leftmost first.
    fn absolute_labels(&self) -> Vec<&str> {
        let own = match (&self.origin, self.labels.split_last()) {
            (None, Some((root, rest))) if root.is_empty() => rest,
            _ => &self.labels[..],
        };
        let mut out: Vec<&str> = own.iter().map(String::as_str).collect();
        if let Some(origin) = &self.origin {
            out.extend(origin.absolute_labels());
        }
        out
    }

    /// Number of labels in the fully qualified name, not counting the root.
    pub fn label_count(&self) -> usize {
        self.absolute_labels().len()
    }

    /// True if `self` is `other` or lies below it.
    pub fn is_subdomain_of(&self, other: &Domain) -> bool {
        let mine = self.absolute_labels();
        let theirs = other.absolute_labels();
        if theirs.len() > mine.len() {
            return false;
        }
        mine.iter()
            .rev()
            .zip(theirs.iter().rev())
            .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }

    /// Uncompressed wire form: length-prefixed labels ending in a zero octet.
    pub fn to_wire(&self) -> Result<Vec<u8>, DomainError> {
        let mut wire = Vec::new();
        for label in self.absolute_labels() {
            if label.is_empty() {
                return Err(DomainError::EmptyLabel);
            }
            let bytes = decode_label(label)?;
            if bytes.len() > MAX_LABEL_LEN {
                return Err(DomainError::LabelTooLong {
                    label: label.to_string(),
                    len: bytes.len(),
                });
            }
            // Bounded by MAX_LABEL_LEN above.
            wire.push(bytes.len() as u8);
            wire.extend_from_slice(&bytes);
        }
        wire.push(0);
        if wire.len() > MAX_NAME_LEN {
            return Err(DomainError::NameTooLong { len: wire.len() });
        }
        Ok(wire)
    }

    /// Check label and name length limits.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.to_wire().map(|_| ())
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        let escaped: Vec<String> = self.labels.iter().map(|l| l.replace('.', "\\.")).collect();
        f.write_str(&escaped.join("."))
    }
}

impl fmt::Debug for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Domain").field(&self.fqdn()).finish()
    }
}

impl PartialEq for Domain {
    fn eq(&self, other: &Self) -> bool {
        let a = self.absolute_labels();
        let b = other.absolute_labels();
        a.len() == b.len() && a.iter().zip(&b).all(|(x, y)| x.eq_ignore_ascii_case(y))
    }
}

impl Eq for Domain {}

impl Hash for Domain {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for label in self.absolute_labels() {
            label.to_ascii_lowercase().hash(state);
        }
    }
}

impl Ord for Domain {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = self.absolute_labels();
        let b = other.absolute_labels();
        for (x, y) in a.iter().rev().zip(b.iter().rev()) {
            let ord = x
                .bytes()
                .map(|c| c.to_ascii_lowercase())
                .cmp(y.bytes().map(|c| c.to_ascii_lowercase()));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        a.len().cmp(&b.len())
    }
}

impl PartialOrd for Domain {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Domain {
    type Err = DomainError;

    /// Parse an absolute name and check its length limits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let domain = Domain::new(s, None);
        domain.validate()?;
        Ok(domain)
    }
}

impl Serialize for Domain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.fqdn())
    }
}

/// True if `name` ends with a `.` that is not itself escaped.
fn ends_with_unescaped_dot(name: &str) -> bool {
    let Some(stem) = name.strip_suffix('.') else {
        return false;
    };
    let backslashes = stem.chars().rev().take_while(|&c| c == '\\').count();
    backslashes % 2 == 0
}

/// Split a textual name into labels.
///
/// `\.` becomes a literal `.` in the label. Other escapes are kept as
/// written so that `\DDD` sequences survive until wire conversion.
fn split_labels(name: &str) -> Vec<String> {
    let mut labels = Vec::new();
    let mut current = String::new();
    let mut chars = name.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('.') => current.push('.'),
                Some(next) => {
                    current.push('\\');
                    current.push(next);
                }
                None => current.push('\\'),
            },
            '.' => labels.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    labels.push(current);
    labels
}

/// Decode `\DDD` and `\X` escapes into raw label octets.
fn decode_label(label: &str) -> Result<Vec<u8>, DomainError> {
    let mut out = Vec::with_capacity(label.len());
    let mut chars = label.chars().peekable();
    let mut buf = [0u8; 4];
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        match chars.next() {
            Some(d) if d.is_ascii_digit() => {
                let mut digits = String::from(d);
                for _ in 0..2 {
                    match chars.next_if(char::is_ascii_digit) {
                        Some(next) => digits.push(next),
                        None => return Err(DomainError::InvalidEscape(format!("\\{digits}"))),
                    }
                }
                let value: u8 = digits
                    .parse()
                    .map_err(|_| DomainError::InvalidEscape(format!("\\{digits}")))?;
                out.push(value);
            }
            Some(other) => out.extend_from_slice(other.encode_utf8(&mut buf).as_bytes()),
            None => return Err(DomainError::InvalidEscape("\\".to_string())),
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "domain_tests.rs"]
mod tests;
