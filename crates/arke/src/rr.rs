// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The arke authors

//! Resource record types, classes, and records.
//!
//! Types and classes are thin wrappers around their 16-bit codes, so any
//! value is representable. Known codes carry a mnemonic and, for types, the
//! ordered list of RDATA field names. Unknown codes use the RFC 3597
//! `TYPE###` / `CLASS###` notation and a single opaque `rdata` field.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::domain::Domain;
use crate::error::RecordError;

// =============================================================================
// CLASSES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RrClass(pub u16);

struct ClassInfo {
    class: RrClass,
    mnemonic: &'static str,
    long_name: &'static str,
}

const CLASSES: &[ClassInfo] = &[
    ClassInfo {
        class: RrClass::IN,
        mnemonic: "IN",
        long_name: "Internet",
    },
    ClassInfo {
        class: RrClass::CH,
        mnemonic: "CH",
        long_name: "Chaos",
    },
    ClassInfo {
        class: RrClass::HS,
        mnemonic: "HS",
        long_name: "Hesiod",
    },
];

impl RrClass {
    pub const IN: RrClass = RrClass(1);
    pub const CH: RrClass = RrClass(3);
    pub const HS: RrClass = RrClass(4);

    fn info(self) -> Option<&'static ClassInfo> {
        CLASSES.iter().find(|c| c.class == self)
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn is_known(self) -> bool {
        self.info().is_some()
    }

    /// Text mnemonic, e.g. `IN`, or `CLASS###` for unknown classes.
    pub fn mnemonic(self) -> Cow<'static, str> {
        match self.info() {
            Some(info) => Cow::Borrowed(info.mnemonic),
            None => Cow::Owned(format!("CLASS{}", self.0)),
        }
    }

    /// Long name, e.g. `Internet`. Unknown classes fall back to the mnemonic.
    pub fn long_name(self) -> Cow<'static, str> {
        match self.info() {
            Some(info) => Cow::Borrowed(info.long_name),
            None => self.mnemonic(),
        }
    }
}

impl Default for RrClass {
    fn default() -> Self {
        RrClass::IN
    }
}

impl From<u16> for RrClass {
    fn from(value: u16) -> Self {
        RrClass(value)
    }
}

impl FromStr for RrClass {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        if let Some(info) = CLASSES.iter().find(|c| c.mnemonic == upper) {
            return Ok(info.class);
        }
        upper
            .strip_prefix("CLASS")
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<u16>().ok())
            .map(RrClass)
            .ok_or_else(|| RecordError::UnknownClass(s.to_string()))
    }
}

impl fmt::Display for RrClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mnemonic())
    }
}

impl Serialize for RrClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.mnemonic())
    }
}

/// True if `s` names a class: a known mnemonic or `CLASS###`.
pub fn is_class(s: &str) -> bool {
    s.parse::<RrClass>().is_ok()
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RrType(pub u16);

struct TypeInfo {
    mnemonic: &'static str,
    value: u16,
    fields: &'static [&'static str],
    /// Classes the type may appear in; `None` means any class.
    classes: Option<&'static [RrClass]>,
}

const fn t(mnemonic: &'static str, value: u16, fields: &'static [&'static str]) -> TypeInfo {
    TypeInfo {
        mnemonic,
        value,
        fields,
        classes: None,
    }
}

const OPAQUE: &[&str] = &["rdata"];
const ADDRESS: &[&str] = &["ip"];
const HOST: &[&str] = &["host"];
const PREF_HOST: &[&str] = &["preference", "host"];
const TEXT: &[&str] = &["txt"];
const DELEGATION_SIGNER: &[&str] = &["keytag", "algorithm", "dtype", "digest"];
const CERT_ASSOCIATION: &[&str] = &["usage", "selector", "matching", "association"];

// Registry entries follow the IANA DNS Parameters registry. Obsolete,
// experimental, and meta types are left out.
const TYPES: &[TypeInfo] = &[
    t("A", 1, ADDRESS),
    t("NS", 2, HOST),
    t("CNAME", 5, HOST),
    t(
        "SOA",
        6,
        &["mname", "rname", "serial", "refresh", "retry", "expiry", "negttl"],
    ),
    t("MB", 7, HOST),
    t("MG", 8, &["mgname"]),
    t("MR", 9, &["newname"]),
    t("WKS", 11, &["ip", "protocol", "bitmap"]),
    t("PTR", 12, HOST),
    t("HINFO", 13, &["cpu", "os"]),
    t("MINFO", 14, &["rmailbox", "emailbox"]),
    t("MX", 15, PREF_HOST),
    t("TXT", 16, TEXT),
    t("RP", 17, &["mbox", "host"]),
    t("AFSDB", 18, PREF_HOST),
    t("X25", 19, &["psdn"]),
    t("ISDN", 20, &["pstn", "sa"]),
    t("RT", 21, PREF_HOST),
    t("NSAP", 22, OPAQUE),
    t("NSAP-PTR", 23, HOST),
    t("PX", 26, &["preference", "map822", "mapx400"]),
    t("GPOS", 27, &["longitude", "latitude", "altitude"]),
    t("AAAA", 28, ADDRESS),
    t(
        "LOC",
        29,
        &[
            "version",
            "size",
            "hprecision",
            "vprecision",
            "longitude",
            "latitude",
            "altitude",
        ],
    ),
    t("SRV", 33, &["priority", "weight", "port", "target"]),
    t(
        "NAPTR",
        35,
        &["order", "preference", "flags", "services", "regexp", "replacement"],
    ),
    t("KX", 36, PREF_HOST),
    t("CERT", 37, &["type", "keytag", "algorithm", "certificate"]),
    t("DNAME", 39, HOST),
    TypeInfo {
        mnemonic: "APL",
        value: 42,
        fields: &["family", "prefix", "n", "afdlength", "afdpart"],
        classes: Some(&[RrClass::IN]),
    },
    t("DS", 43, DELEGATION_SIGNER),
    t("SSHFP", 44, &["algorithm", "fptype", "fingerprint"]),
    t(
        "IPSECKEY",
        45,
        &["precedence", "gatewaytype", "algorithm", "gateway", "key"],
    ),
    t(
        "RRSIG",
        46,
        &[
            "covered",
            "algorithm",
            "labels",
            "origttl",
            "expire",
            "inception",
            "keytag",
            "signer",
            "signature",
        ],
    ),
    t("NSEC", 47, &["next", "typemap"]),
    t("DNSKEY", 48, &["flags", "protocol", "algorithm", "key"]),
    t("DHCID", 49, OPAQUE),
    t(
        "NSEC3",
        50,
        &["algorithm", "flags", "iterations", "salt", "next", "typemap"],
    ),
    t("NSEC3PARAM", 51, &["algorithm", "flags", "iterations", "salt"]),
    t("TLSA", 52, CERT_ASSOCIATION),
    t("SMIMEA", 53, CERT_ASSOCIATION),
    t("HIP", 55, &["algorithm", "hit", "pubkey", "serverlist"]),
    t("CDS", 59, OPAQUE),
    t("CDNSKEY", 60, OPAQUE),
    t("OPENPGPKEY", 61, &["key"]),
    t("CSYNC", 62, &["soa", "flags", "typemap"]),
    t("SPF", 99, TEXT),
    t("NID", 104, &["preference", "node"]),
    t("L32", 105, &["preference", "ip"]),
    t("L64", 106, &["preference", "locator"]),
    t("LP", 107, PREF_HOST),
    t("EUI48", 108, &["address"]),
    t("EUI64", 109, &["address"]),
    t("URI", 256, &["priority", "weight", "target"]),
    t("CAA", 257, &["flags", "tag", "value"]),
    t("DLV", 32769, DELEGATION_SIGNER),
];

impl RrType {
    pub const A: RrType = RrType(1);
    pub const NS: RrType = RrType(2);
    pub const CNAME: RrType = RrType(5);
    pub const SOA: RrType = RrType(6);
    pub const PTR: RrType = RrType(12);
    pub const MX: RrType = RrType(15);
    pub const TXT: RrType = RrType(16);
    pub const AAAA: RrType = RrType(28);
    pub const SRV: RrType = RrType(33);
    pub const APL: RrType = RrType(42);
    pub const DS: RrType = RrType(43);
    pub const RRSIG: RrType = RrType(46);
    pub const NSEC: RrType = RrType(47);
    pub const DNSKEY: RrType = RrType(48);
    pub const CAA: RrType = RrType(257);

    fn info(self) -> Option<&'static TypeInfo> {
        TYPES.iter().find(|t| t.value == self.0)
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn is_known(self) -> bool {
        self.info().is_some()
    }

    /// Text mnemonic, e.g. `MX`, or `TYPE###` for unknown types.
    pub fn mnemonic(self) -> Cow<'static, str> {
        match self.info() {
            Some(info) => Cow::Borrowed(info.mnemonic),
            None => Cow::Owned(format!("TYPE{}", self.0)),
        }
    }

    /// Names of the RDATA fields, in presentation order.
    pub fn rdata_fields(self) -> &'static [&'static str] {
        self.info().map_or(OPAQUE, |info| info.fields)
    }

    /// Classes this type is restricted to, if any.
    pub fn valid_classes(self) -> Option<&'static [RrClass]> {
        self.info().and_then(|info| info.classes)
    }

    pub fn allows_class(self, class: RrClass) -> bool {
        self.valid_classes().is_none_or(|classes| classes.contains(&class))
    }
}

impl From<u16> for RrType {
    fn from(value: u16) -> Self {
        RrType(value)
    }
}

impl FromStr for RrType {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        if let Some(info) = TYPES.iter().find(|t| t.mnemonic == upper) {
            return Ok(RrType(info.value));
        }
        upper
            .strip_prefix("TYPE")
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<u16>().ok())
            .map(RrType)
            .ok_or_else(|| RecordError::UnknownType(s.to_string()))
    }
}

impl fmt::Display for RrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mnemonic())
    }
}

impl Serialize for RrType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.mnemonic())
    }
}

/// True if `s` names a type: a known mnemonic or `TYPE###`.
pub fn is_type(s: &str) -> bool {
    s.parse::<RrType>().is_ok()
}

// =============================================================================
// RECORDS
// =============================================================================

/// RDATA as ordered `(field, value)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rdata {
    fields: Vec<(&'static str, String)>,
}

impl Rdata {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(name, value)| (*name, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Rdata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (_, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(value)?;
        }
        Ok(())
    }
}

impl Serialize for Rdata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// A single resource record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    owner: Domain,
    ttl: Option<u32>,
    class: RrClass,
    #[serde(rename = "type")]
    rtype: RrType,
    rdata: Rdata,
}

impl Record {
    /// Build a record from named RDATA fields.
    ///
    /// Every field the type defines must be present; unrecognised keys are
    /// ignored.
    pub fn generate<I, K, V>(
        rtype: RrType,
        owner: Domain,
        class: RrClass,
        ttl: Option<u32>,
        fields: I,
    ) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        check_class(rtype, class)?;
        let mut given: HashMap<String, String> = fields
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.into()))
            .collect();
        let fields = rtype
            .rdata_fields()
            .iter()
            .map(|&name| {
                given
                    .remove(name)
                    .map(|value| (name, value))
                    .ok_or(RecordError::MissingField(name))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            owner,
            ttl,
            class,
            rtype,
            rdata: Rdata { fields },
        })
    }

    /// Build a record from RDATA values in field order.
    ///
    /// Surplus values are joined with spaces into the last field, which is
    /// how multi-string TXT data and split base64 keys arrive from a zone
    /// file.
    pub fn from_values(
        rtype: RrType,
        owner: Domain,
        class: RrClass,
        ttl: Option<u32>,
        values: Vec<String>,
    ) -> Result<Self, RecordError> {
        check_class(rtype, class)?;
        let names = rtype.rdata_fields();
        if values.len() < names.len() {
            return Err(RecordError::MissingField(names[values.len()]));
        }

        let mut values = values.into_iter();
        let mut fields: Vec<(&'static str, String)> = names
            .iter()
            .zip(values.by_ref())
            .map(|(&name, value)| (name, value))
            .collect();
        let surplus: Vec<String> = values.collect();
        if !surplus.is_empty() {
            if let Some((_, last)) = fields.last_mut() {
                last.push(' ');
                last.push_str(&surplus.join(" "));
            }
        }

        Ok(Self {
            owner,
            ttl,
            class,
            rtype,
            rdata: Rdata { fields },
        })
    }

    pub fn owner(&self) -> &Domain {
        &self.owner
    }

    pub fn ttl(&self) -> Option<u32> {
        self.ttl
    }

    pub fn class(&self) -> RrClass {
        self.class
    }

    pub fn rtype(&self) -> RrType {
        self.rtype
    }

    pub fn rdata(&self) -> &Rdata {
        &self.rdata
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.owner.fqdn())?;
        if let Some(ttl) = self.ttl {
            write!(f, " {ttl}")?;
        }
        write!(f, " {} {} {}", self.class, self.rtype, self.rdata)
    }
}

fn check_class(rtype: RrType, class: RrClass) -> Result<(), RecordError> {
    if rtype.allows_class(class) {
        Ok(())
    } else {
        Err(RecordError::InvalidClass {
            rtype: rtype.mnemonic().into_owned(),
            class: class.mnemonic().into_owned(),
        })
    }
}

#[cfg(test)]
#[path = "rr_tests.rs"]
mod tests;
