/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

//! Tests for the evaluation list query composition, asserting on the
//! generated SQL.

extern crate core as registry_core;
use chrono::Utc;
use registry_core::search::{
    authorised_evaluations, filter_by_departments_and_types, full_text_search,
};
use registry_core::types::MUser;
use sea_orm::{DbBackend, QueryTrait};
use uuid::Uuid;

fn test_user() -> MUser {
    let now = Utc::now().naive_utc();
    MUser {
        id: Uuid::new_v4(),
        email: "analyst@cabinetoffice.gov.uk".to_string(),
        is_staff: false,
        is_active: true,
        created_at: now,
        modified_at: now,
    }
}

#[test]
fn test_anonymous_viewers_only_see_public_evaluations() {
    let sql = authorised_evaluations(None)
        .build(DbBackend::Postgres)
        .to_string();

    assert!(sql.contains("'public'"));
    assert!(!sql.contains("'civil_service'"));
    assert!(!sql.contains("'draft'"));
}

#[test]
fn test_signed_in_viewers_see_civil_service_and_own_drafts() {
    let user = test_user();
    let sql = authorised_evaluations(Some(&user))
        .build(DbBackend::Postgres)
        .to_string();

    assert!(sql.contains("'civil_service'"));
    assert!(sql.contains("'draft'"));
    assert!(sql.contains(&user.id.to_string()));
}

#[test]
fn test_full_text_search_uses_weighted_rank_ordering() {
    let select = full_text_search(authorised_evaluations(None), "school meals");
    let sql = select.build(DbBackend::Postgres).to_string();

    assert!(sql.contains("plainto_tsquery('english'"));
    assert!(sql.contains("ts_rank"));
    assert!(sql.contains("setweight"));
    assert!(sql.contains("school meals"));
}

#[test]
fn test_empty_search_term_leaves_select_unchanged() {
    let base = authorised_evaluations(None)
        .build(DbBackend::Postgres)
        .to_string();
    let searched = full_text_search(authorised_evaluations(None), "   ")
        .build(DbBackend::Postgres)
        .to_string();

    assert_eq!(base, searched);
}

#[test]
fn test_code_filters_join_and_deduplicate() {
    let select = filter_by_departments_and_types(
        authorised_evaluations(None),
        &["cabinet-office".to_string()],
        &["impact".to_string()],
    );
    let sql = select.build(DbBackend::Postgres).to_string();

    assert!(sql.contains("DISTINCT"));
    assert!(sql.contains("evaluation_department_association"));
    assert!(sql.contains("evaluation_design_type_detail"));
    assert!(sql.contains("cabinet-office"));
    assert!(sql.contains("impact"));
}

#[test]
fn test_no_filters_means_no_joins() {
    let sql = filter_by_departments_and_types(authorised_evaluations(None), &[], &[])
        .build(DbBackend::Postgres)
        .to_string();

    assert!(!sql.contains("DISTINCT"));
    assert!(!sql.contains("JOIN"));
}
