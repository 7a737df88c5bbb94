// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The arke authors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::test_utils::{SAMPLE_ZONE, temp_file_with_content};

fn example() -> Domain {
    Domain::new("example.com", None)
}

fn a(owner: &str, ip: &str) -> Record {
    Record::generate(
        RrType::A,
        Domain::new(owner, None),
        RrClass::IN,
        None,
        [("ip", ip)],
    )
    .unwrap()
}

fn mx(owner: &str, preference: &str, host: &str) -> Record {
    Record::generate(
        RrType::MX,
        Domain::new(owner, None),
        RrClass::IN,
        Some(300),
        [("preference", preference), ("host", host)],
    )
    .unwrap()
}

/// The zone the sample text should parse into.
fn sample_zone() -> Zone {
    let mut zone = Zone::new(example());
    zone.add_rr(
        Record::generate(
            RrType::SOA,
            example(),
            RrClass::IN,
            None,
            [
                ("mname", "foo.example.com."),
                ("rname", "hostmaster.example.com."),
                ("serial", "1"),
                ("refresh", "3600"),
                ("retry", "3600"),
                ("expiry", "2"),
                ("negttl", "300"),
            ],
        )
        .unwrap(),
    );
    zone.add_rr(a("example.com", "192.0.2.1"));
    zone.add_rr(a("foo.example.com.", "192.0.2.2"));
    zone
}

#[test]
fn zone_name_is_made_absolute() {
    let origin = Domain::new("com", None);
    let zone = Zone::new(Domain::new("example", Some(&origin)));
    assert!(zone.name().is_absolute());
    assert_eq!(zone.name().to_string(), "example.com.");
}

#[test]
fn add_rr_groups_by_owner_in_insertion_order() {
    let mut zone = Zone::new(example());
    zone.add_rr(a("www.example.com.", "192.0.2.1"));
    zone.add_rr(a("example.com.", "192.0.2.2"));
    zone.add_rr(a("WWW.example.com.", "192.0.2.3"));

    let owners: Vec<String> = zone.owners().map(Domain::fqdn).collect();
    assert_eq!(owners, vec!["www.example.com.", "example.com."]);
    assert_eq!(zone.get(&Domain::new("www.example.com", None)).unwrap().len(), 2);
    assert_eq!(zone.len(), 3);
}

#[test]
fn get_unknown_owner_is_none() {
    let zone = sample_zone();
    assert!(zone.get(&Domain::new("nope.example.com", None)).is_none());
}

#[test]
fn del_rr_by_type_removes_matching_records() {
    let mut zone = Zone::new(example());
    zone.add_rr(a("example.com.", "192.0.2.1"));
    zone.add_rr(mx("example.com.", "10", "mx1.example.com."));
    zone.add_rr(mx("example.com.", "20", "mx2.example.com."));

    let removed = zone.del_rr(&RecordFilter::new().rtype(RrType::MX));
    assert_eq!(removed, 2);
    assert_eq!(zone.len(), 1);
    assert_eq!(zone.records().next().unwrap().rtype(), RrType::A);
}

#[test]
fn del_rr_matches_all_given_attributes() {
    let mut zone = Zone::new(example());
    zone.add_rr(mx("example.com.", "10", "mx1.example.com."));
    zone.add_rr(mx("example.com.", "20", "mx2.example.com."));

    let filter = RecordFilter::new()
        .rtype(RrType::MX)
        .rdata("preference", "20")
        .ttl(Some(300));
    assert_eq!(zone.del_rr(&filter), 1);
    assert_eq!(
        zone.records().next().unwrap().rdata().get("host"),
        Some("mx1.example.com.")
    );
}

#[test]
fn del_rr_drops_empty_owners_and_keeps_lookup_working() {
    let mut zone = Zone::new(example());
    zone.add_rr(a("a.example.com.", "192.0.2.1"));
    zone.add_rr(a("b.example.com.", "192.0.2.2"));
    zone.add_rr(a("c.example.com.", "192.0.2.3"));

    let filter = RecordFilter::new().owner(Domain::new("a.example.com", None));
    assert_eq!(zone.del_rr(&filter), 1);

    let owners: Vec<String> = zone.owners().map(Domain::fqdn).collect();
    assert_eq!(owners, vec!["b.example.com.", "c.example.com."]);
    let c = zone.get(&Domain::new("c.example.com", None)).unwrap();
    assert_eq!(c[0].rdata().get("ip"), Some("192.0.2.3"));

    zone.add_rr(a("a.example.com.", "192.0.2.9"));
    assert_eq!(zone.owners().last().unwrap().fqdn(), "a.example.com.");
}

#[test]
fn del_rr_with_field_absent_from_type_matches_nothing() {
    let mut zone = sample_zone();
    let filter = RecordFilter::new().rdata("host", "foo.example.com.");
    assert_eq!(zone.del_rr(&filter), 0);
    assert_eq!(zone.len(), 3);
}

#[test]
fn empty_filter_deletes_everything() {
    let mut zone = sample_zone();
    assert_eq!(zone.del_rr(&RecordFilter::new()), 3);
    assert!(zone.is_empty());
}

#[test]
fn display_emits_default_ttl_then_records() {
    let mut zone = Zone::new(example()).with_default_ttl(3600);
    zone.add_rr(a("example.com.", "192.0.2.1"));
    zone.add_rr(mx("example.com.", "10", "mx.example.com."));

    similar_asserts::assert_eq!(
        zone.to_string(),
        "$TTL 3600\n\
         example.com. IN A 192.0.2.1\n\
         example.com. 300 IN MX 10 mx.example.com.\n"
    );
}

#[test]
fn equality_considers_default_ttl() {
    let plain = sample_zone();
    let mut with_ttl = sample_zone();
    with_ttl.set_default_ttl(Some(60));
    assert_ne!(plain, with_ttl);
    assert_eq!(plain, sample_zone());
}

#[test]
fn parse_sample_matches_hand_built_zone() {
    let zone = Zone::parse(SAMPLE_ZONE, example(), RrClass::IN).unwrap();
    assert_eq!(zone, sample_zone());
}

#[test]
fn from_reader_parses() {
    let zone = Zone::from_reader(SAMPLE_ZONE.as_bytes(), example(), RrClass::IN).unwrap();
    assert_eq!(zone.len(), 3);
}

#[test]
fn from_file_parses() {
    let file = temp_file_with_content(SAMPLE_ZONE);
    let zone = Zone::from_file(file.path(), example(), RrClass::IN).unwrap();
    assert_eq!(zone, sample_zone());
}

#[test]
fn from_file_reports_path_on_parse_error() {
    let file = temp_file_with_content("www IN A\n");
    let err = Zone::from_file(file.path(), example(), RrClass::IN).unwrap_err();
    match err {
        Error::Parse { path, source } => {
            assert_eq!(path, file.path());
            assert!(matches!(source, ParserError::UnexpectedEol { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn from_file_missing_is_io_error() {
    let err = Zone::from_file(Path::new("/nonexistent/db.example"), example(), RrClass::IN)
        .unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
