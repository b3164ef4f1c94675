/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

//! Tests for the multi-select reconciliation planner

extern crate core as registry_core;
use registry_core::reconcile::*;

#[test]
fn test_identical_selection_is_a_noop() {
    let existing = vec![Link::new("impact"), Link::with_text("other", "bespoke")];
    let selected = existing.clone();

    assert!(reconcile_links(&existing, &selected).is_empty());
}

#[test]
fn test_new_codes_are_created() {
    let existing = vec![Link::new("impact")];
    let selected = vec![Link::new("impact"), Link::new("process")];

    let plan = reconcile_links(&existing, &selected);

    assert_eq!(plan.create, vec![Link::new("process")]);
    assert!(plan.delete.is_empty());
    assert!(plan.update_text.is_empty());
}

#[test]
fn test_deselected_codes_are_deleted() {
    let existing = vec![Link::new("impact"), Link::new("process")];
    let selected = vec![Link::new("process")];

    let plan = reconcile_links(&existing, &selected);

    assert!(plan.create.is_empty());
    assert_eq!(plan.delete, vec!["impact".to_string()]);
}

#[test]
fn test_changed_text_is_updated_in_place() {
    let existing = vec![Link::with_text("other", "old wording")];
    let selected = vec![Link::with_text("other", "new wording")];

    let plan = reconcile_links(&existing, &selected);

    assert!(plan.create.is_empty());
    assert!(plan.delete.is_empty());
    assert_eq!(plan.update_text, vec![Link::with_text("other", "new wording")]);
}

#[test]
fn test_mixed_plan() {
    let existing = vec![
        Link::new("impact"),
        Link::new("economic"),
        Link::with_text("other", "before"),
    ];
    let selected = vec![
        Link::new("impact"),
        Link::new("process"),
        Link::with_text("other", "after"),
    ];

    let plan = reconcile_links(&existing, &selected);

    assert_eq!(plan.create, vec![Link::new("process")]);
    assert_eq!(plan.delete, vec!["economic".to_string()]);
    assert_eq!(plan.update_text, vec![Link::with_text("other", "after")]);
}

#[test]
fn test_clearing_text_counts_as_update() {
    let existing = vec![Link::with_text("other", "something")];
    let selected = vec![Link::new("other")];

    let plan = reconcile_links(&existing, &selected);

    assert_eq!(plan.update_text, vec![Link::new("other")]);
}
