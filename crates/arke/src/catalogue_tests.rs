#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

const EXAMPLE_ORG_HASH: &str = "47ac1a4d93b61fffdb4762c18c9e7d1a6b046d33";

#[test]
fn hash_from_string() {
    assert_eq!(catalogue_hash_str("example.org.").unwrap(), EXAMPLE_ORG_HASH);
}

#[test]
fn hash_from_domain() {
    let domain = Domain::new("example.org.", None);
    assert_eq!(catalogue_hash(&domain).unwrap(), EXAMPLE_ORG_HASH);
}

#[test]
fn hash_of_relative_name_uses_fqdn() {
    let origin = Domain::new("org", None);
    let domain = Domain::new("example", Some(&origin));
    assert_eq!(catalogue_hash(&domain).unwrap(), EXAMPLE_ORG_HASH);
}

#[test]
fn hash_is_case_sensitive_on_wire() {
    // The wire form preserves case, so differently cased names hash apart.
    let upper = catalogue_hash_str("EXAMPLE.org.").unwrap();
    assert_ne!(upper, EXAMPLE_ORG_HASH);
    assert_eq!(upper.len(), 40);
}

#[test]
fn invalid_name_is_rejected() {
    assert!(catalogue_hash_str("a..org.").is_err());
}

#[test]
fn member_entry_lives_under_zones() {
    let member = Domain::new("example.org.", None);
    let catalog = Domain::new("catalog.invalid.", None);
    let name = member_name(&member, &catalog).unwrap();
    assert_eq!(
        name.to_string(),
        format!("{EXAMPLE_ORG_HASH}.zones.catalog.invalid.")
    );
    assert!(name.is_subdomain_of(&catalog));
}
