/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

//! Reconciliation planner for the wizard's multi-select steps. Works on
//! plain code/text pairs so the design-type and policy-area steps share
//! one implementation and it stays testable without a database.

/// One evaluation↔lookup link, identified by the lookup row's code. `text`
/// is only meaningful for description-collecting design types and stays
/// `None` for everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub text: Option<String>,
}

impl Link {
    pub fn new(code: &str) -> Self {
        Link {
            code: code.to_string(),
            text: None,
        }
    }

    pub fn with_text(code: &str, text: &str) -> Self {
        Link {
            code: code.to_string(),
            text: Some(text.to_string()),
        }
    }
}

/// What has to happen to move the stored links to the submitted selection.
/// A code appears in at most one of the three lists.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReconcilePlan {
    pub create: Vec<Link>,
    pub delete: Vec<String>,
    pub update_text: Vec<Link>,
}

impl ReconcilePlan {
    pub fn is_empty(&self) -> bool {
        self.create.is_empty() && self.delete.is_empty() && self.update_text.is_empty()
    }
}

/// Plans the difference between stored and submitted links. Newly selected
/// codes are created, deselected codes deleted, and a code present on both
/// sides with changed text is updated in place rather than recreated, so
/// the link row keeps its identity.
pub fn reconcile_links(existing: &[Link], selected: &[Link]) -> ReconcilePlan {
    let mut plan = ReconcilePlan::default();

    for link in selected {
        match existing.iter().find(|e| e.code == link.code) {
            None => plan.create.push(link.clone()),
            Some(stored) if stored.text != link.text => plan.update_text.push(link.clone()),
            Some(_) => {}
        }
    }

    for stored in existing {
        if !selected.iter().any(|s| s.code == stored.code) {
            plan.delete.push(stored.code.clone());
        }
    }

    plan
}
