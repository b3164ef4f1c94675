/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

//! Tests for the form-boundary validators

extern crate core as registry_core;
use registry_core::input::*;

#[test]
fn test_port_in_range() {
    assert_eq!(port_in_range("3000"), Ok(3000));
    assert!(port_in_range("0").is_err());
    assert!(port_in_range("65536").is_err());
    assert!(port_in_range("not-a-port").is_err());
}

#[test]
fn test_validate_month() {
    assert_eq!(validate_month(1), Ok(1));
    assert_eq!(validate_month(12), Ok(12));
    assert_eq!(
        validate_month(1234),
        Err("Please enter a month number from 1-12".to_string())
    );
    assert!(validate_month(0).is_err());
}

#[test]
fn test_validate_year() {
    assert_eq!(validate_year(1900), Ok(1900));
    assert_eq!(validate_year(2024), Ok(2024));
    assert_eq!(validate_year(2100), Ok(2100));
    assert!(validate_year(1899).is_err());
    assert!(validate_year(2101).is_err());
}

#[test]
fn test_validate_link() {
    assert!(validate_link("https://www.gov.uk/government/publications/example").is_ok());
    assert!(validate_link("http://example.com").is_ok());
    assert!(validate_link("ftp://example.com").is_err());
    assert!(validate_link("www.gov.uk").is_err());

    let long = format!("https://example.com/{}", "a".repeat(1024));
    assert!(validate_link(&long).is_err());
}

#[test]
fn test_normalize_email() {
    assert_eq!(
        normalize_email("  First.Last@Cabinetoffice.GOV.UK "),
        Ok("first.last@cabinetoffice.gov.uk".to_string())
    );
    assert!(normalize_email("not-an-email").is_err());
    assert!(normalize_email("missing@domain@double.com").is_err());
}

#[test]
fn test_email_domain_allowed() {
    let allowed = "gov.uk,cabinetoffice.gov.uk";

    assert!(email_domain_allowed("a.b@cabinetoffice.gov.uk", allowed));
    // subdomain of an allowed domain
    assert!(email_domain_allowed("a.b@dwp.gov.uk", allowed));
    assert!(!email_domain_allowed("a.b@example.com", allowed));
    // suffix match must be on a domain boundary
    assert!(!email_domain_allowed("a.b@notgov.uk", allowed));
    assert!(!email_domain_allowed("no-at-sign", allowed));
}
