/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

//! Tests for the share wizard step scan

extern crate core as registry_core;
use registry_core::wizard::*;

fn context_with_types(codes: &[&str]) -> WizardContext {
    WizardContext {
        design_type_codes: codes.iter().map(|c| c.to_string()).collect(),
        status_complete: false,
        final_report_published: false,
    }
}

#[test]
fn test_first_page_is_root_design_types() {
    let ctx = WizardContext::default();

    assert_eq!(
        resolve(&ctx, 1),
        Some(Resolution::Step {
            step: Step::DesignTypes { parent: None },
            next_page: 2
        })
    );
}

#[test]
fn test_parent_pages_skipped_without_matching_type() {
    let ctx = WizardContext::default();

    // no design types linked, so pages 2-8 fall through to description
    assert_eq!(
        resolve(&ctx, 2),
        Some(Resolution::Step {
            step: Step::Description,
            next_page: 10
        })
    );
}

#[test]
fn test_impact_page_served_when_impact_linked() {
    let ctx = context_with_types(&["impact"]);

    assert_eq!(
        resolve(&ctx, 2),
        Some(Resolution::Step {
            step: Step::DesignTypes {
                parent: Some("impact")
            },
            next_page: 3
        })
    );

    // rct not linked, so page 3 skips ahead to the next applicable page
    assert_eq!(
        resolve(&ctx, 3),
        Some(Resolution::Step {
            step: Step::Description,
            next_page: 10
        })
    );
}

#[test]
fn test_rct_page_follows_impact_selection() {
    let ctx = context_with_types(&["impact", "rct"]);

    assert_eq!(
        resolve(&ctx, 3),
        Some(Resolution::Step {
            step: Step::DesignTypes {
                parent: Some("rct")
            },
            next_page: 4
        })
    );
}

#[test]
fn test_links_page_requires_complete_status() {
    let mut ctx = WizardContext::default();

    // incomplete evaluations skip straight from dates to user confirmation
    assert_eq!(
        resolve(&ctx, 12),
        Some(Resolution::Step {
            step: Step::UserConfirmation,
            next_page: 15
        })
    );

    ctx.status_complete = true;
    assert_eq!(
        resolve(&ctx, 12),
        Some(Resolution::Step {
            step: Step::Links,
            next_page: 13
        })
    );
}

#[test]
fn test_cost_page_requires_published_final_report() {
    let mut ctx = WizardContext::default();

    assert_eq!(
        resolve(&ctx, 13),
        Some(Resolution::Step {
            step: Step::UserConfirmation,
            next_page: 15
        })
    );

    ctx.final_report_published = true;
    assert_eq!(
        resolve(&ctx, 13),
        Some(Resolution::Step {
            step: Step::Cost,
            next_page: 14
        })
    );
}

#[test]
fn test_last_page_is_confirmation() {
    let ctx = WizardContext::default();

    assert_eq!(
        resolve(&ctx, page_count()),
        Some(Resolution::Step {
            step: Step::Confirmation,
            next_page: page_count() + 1
        })
    );
}

#[test]
fn test_out_of_range_page_is_none() {
    let ctx = WizardContext::default();

    assert_eq!(resolve(&ctx, 0), None);
    assert_eq!(resolve(&ctx, page_count() + 1), None);
}
