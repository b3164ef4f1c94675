/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

//! Step machine for the share wizard. Steps live in a fixed ordered list;
//! whether a step applies depends on the evaluation's current state, so
//! selecting "impact" on the root design-type page makes the impact
//! sub-type page appear on the very next request. Page numbers are
//! positions in the full list (1-based), not positions among the
//! applicable steps, which keeps "next page" stable while conditions
//! change mid-flow.

/// Parent code shown on each design-type page, in page order. `None` is
/// the root page listing the top-level types.
pub const DESIGN_TYPE_PAGE_PARENTS: [Option<&str>; 8] = [
    None,
    Some("impact"),
    Some("rct"),
    Some("quasi_experimental"),
    Some("theory"),
    Some("generic"),
    Some("process"),
    Some("economic"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    DesignTypes { parent: Option<&'static str> },
    Description,
    Policies,
    Dates,
    Links,
    Cost,
    UserConfirmation,
    Confirmation,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::DesignTypes { .. } => "design-types",
            Step::Description => "description",
            Step::Policies => "policies",
            Step::Dates => "dates",
            Step::Links => "links",
            Step::Cost => "cost",
            Step::UserConfirmation => "user-confirmation",
            Step::Confirmation => "confirmation",
        }
    }
}

/// The slice of evaluation state the step conditions read.
#[derive(Debug, Default, Clone)]
pub struct WizardContext {
    /// Codes of the design types currently linked to the evaluation.
    pub design_type_codes: Vec<String>,
    pub status_complete: bool,
    pub final_report_published: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Serve this step; a successful POST continues at `next_page`.
    Step { step: Step, next_page: usize },
    /// Every remaining step was inapplicable; return to the detail view.
    Finished,
}

fn steps(ctx: &WizardContext) -> Vec<(Step, bool)> {
    let mut list: Vec<(Step, bool)> = DESIGN_TYPE_PAGE_PARENTS
        .iter()
        .map(|parent| {
            let applicable = match parent {
                None => true,
                Some(code) => ctx.design_type_codes.iter().any(|c| c == code),
            };
            (Step::DesignTypes { parent: *parent }, applicable)
        })
        .collect();

    list.push((Step::Description, true));
    list.push((Step::Policies, true));
    list.push((Step::Dates, true));
    list.push((Step::Links, ctx.status_complete));
    list.push((Step::Cost, ctx.final_report_published));
    list.push((Step::UserConfirmation, true));
    list.push((Step::Confirmation, true));
    list
}

pub fn page_count() -> usize {
    DESIGN_TYPE_PAGE_PARENTS.len() + 7
}

/// Resolves a 1-based page number to the first applicable step at or after
/// it. `None` means the page number itself is out of range (a 404 at the
/// HTTP layer).
pub fn resolve(ctx: &WizardContext, page: usize) -> Option<Resolution> {
    let list = steps(ctx);

    if page == 0 || page > list.len() {
        return None;
    }

    for (i, (step, applicable)) in list.iter().enumerate().skip(page - 1) {
        if *applicable {
            return Some(Resolution::Step {
                step: *step,
                next_page: i + 2,
            });
        }
    }

    Some(Resolution::Finished)
}
