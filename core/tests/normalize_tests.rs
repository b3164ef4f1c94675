/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

//! Tests for RSM client-name and month normalization

extern crate core as registry_core;
use registry_core::normalize::*;

#[test]
fn test_known_single_department() {
    assert_eq!(
        normalize_department("Cabinet office"),
        NormalizedDepartments::Known(vec!["cabinet-office"])
    );
}

#[test]
fn test_lookup_is_case_and_whitespace_insensitive() {
    assert_eq!(
        normalize_department("  HM REVENUE & CUSTOMS  "),
        NormalizedDepartments::Known(vec!["hm-revenue-customs"])
    );
}

#[test]
fn test_known_multiple_departments() {
    assert_eq!(
        normalize_department("Ministry of justice | hm prison and probation service"),
        NormalizedDepartments::Known(vec![
            "ministry-of-justice",
            "hm-prison-and-probation-service"
        ])
    );
}

#[test]
fn test_known_name_with_no_department() {
    // Listed in the table but deliberately maps to nothing
    assert_eq!(
        normalize_department("World bank"),
        NormalizedDepartments::NoDepartment
    );
    assert_eq!(normalize_department(""), NormalizedDepartments::NoDepartment);
    assert_eq!(
        normalize_department("   "),
        NormalizedDepartments::NoDepartment
    );
}

#[test]
fn test_unrecognised_name() {
    assert_eq!(
        normalize_department("Ministry of Silly Walks"),
        NormalizedDepartments::Unrecognised
    );
}

#[test]
fn test_scottish_government_directorates_collapse() {
    assert_eq!(
        normalize_department("Scottish government - population health directorate"),
        NormalizedDepartments::Known(vec!["the-scottish-government"])
    );
}

#[test]
fn test_month_number() {
    assert_eq!(month_number("January"), Some(1));
    assert_eq!(month_number("December"), Some(12));
    // abbreviations as they appear in the export
    assert_eq!(month_number("Jul"), Some(7));
    assert_eq!(month_number("Oct"), Some(10));
    assert_eq!(month_number("November"), Some(11));
    assert_eq!(month_number("Smarch"), None);
    assert_eq!(month_number(""), None);
}
