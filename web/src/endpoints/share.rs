/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

//! The share wizard: one GET/POST pair serving every step. Each request
//! resolves the page number against the evaluation's current state, so
//! selecting a design-type branch makes its sub-type page appear on the
//! next request and skipped pages fall through to the following step.

use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use core::database::{design_type_children, linked_design_types, linked_taxonomy_codes};
use core::input::{validate_link, validate_month, validate_year};
use core::reconcile::{Link, reconcile_links};
use core::types::*;
use core::wizard::{self, Resolution, Step, WizardContext};
use entity::evaluation::{EvaluationStatus, ReasonUnpublished};
use entity::event_date::{EventDateCategory, EventDateStatus};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{FieldErrors, WebError, WebResult};
use crate::requests::*;

const DESCRIPTION_REQUIRED: &str = "Please provide additional description for the 'Other' choice";

/// Loads an evaluation for editing. Only the creator may see or change an
/// evaluation through the wizard, whatever its visibility.
async fn owned_evaluation(
    state: &Arc<ServerState>,
    user: &MUser,
    evaluation_id: Uuid,
) -> WebResult<MEvaluation> {
    let evaluation = EEvaluation::find_by_id(evaluation_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Evaluation"))?;

    if evaluation.created_by != Some(user.id) {
        return Err(WebError::not_your_evaluation());
    }

    Ok(evaluation)
}

async fn wizard_context(
    state: Arc<ServerState>,
    evaluation: &MEvaluation,
) -> WebResult<WizardContext> {
    let design_type_codes = linked_design_types(state, evaluation.id)
        .await
        .map_err(WebError::Internal)?
        .into_iter()
        .map(|(code, _)| code)
        .collect();

    Ok(WizardContext {
        design_type_codes,
        status_complete: evaluation.status == Some(EvaluationStatus::Complete),
        final_report_published: evaluation.is_final_report_published == Some(true),
    })
}

pub async fn get_share_page(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path((evaluation_id, page)): Path<(Uuid, usize)>,
) -> WebResult<Json<BaseResponse<SharePageResponse>>> {
    let evaluation = owned_evaluation(&state, &user, evaluation_id).await?;
    let ctx = wizard_context(Arc::clone(&state), &evaluation).await?;

    let (step, next_page) = match wizard::resolve(&ctx, page) {
        None => return Err(WebError::not_found("Page")),
        Some(Resolution::Finished) => {
            return Ok(Json(BaseResponse {
                error: false,
                message: SharePageResponse::finished(page),
            }));
        }
        Some(Resolution::Step { step, next_page }) => (step, next_page),
    };

    let mut res = SharePageResponse::step(page, step.name(), next_page);

    match step {
        Step::DesignTypes { parent } => {
            let options = design_type_children(Arc::clone(&state), parent)
                .await
                .map_err(WebError::Internal)?;

            if parent.is_some() && options.is_empty() {
                return Err(WebError::not_found("Page"));
            }

            let linked = linked_design_types(Arc::clone(&state), evaluation.id)
                .await
                .map_err(WebError::Internal)?;

            res.selected = Some(
                linked
                    .into_iter()
                    .filter(|(code, _)| options.iter().any(|o| &o.code == code))
                    .map(|(code, text)| DesignTypeLink { code, text })
                    .collect(),
            );
            res.options = Some(
                options
                    .into_iter()
                    .map(|o| DesignTypeOption {
                        code: o.code,
                        display: o.display,
                        collect_description: o.collect_description,
                    })
                    .collect(),
            );
        }
        Step::Policies => {
            let options = ETaxonomy::find()
                .filter(CTaxonomy::Parent.is_null())
                .order_by_asc(CTaxonomy::Display)
                .all(&state.db)
                .await?;

            res.policy_options = Some(
                options
                    .into_iter()
                    .map(|t| LookupItem {
                        code: t.code,
                        display: t.display,
                    })
                    .collect(),
            );
            res.selected_policies = Some(
                linked_taxonomy_codes(Arc::clone(&state), evaluation.id)
                    .await
                    .map_err(WebError::Internal)?,
            );
        }
        Step::Dates => {
            let dates = EEventDate::find()
                .filter(CEventDate::Evaluation.eq(evaluation.id))
                .order_by_asc(CEventDate::Year)
                .all(&state.db)
                .await?;

            if dates.is_empty() {
                res.suggested_categories = Some(vec![
                    EventDateCategory::EvaluationStart,
                    EventDateCategory::EvaluationEnd,
                    EventDateCategory::PublicationFinalResults,
                ]);
            }
            res.dates = Some(dates);
        }
        Step::Description
        | Step::Links
        | Step::Cost
        | Step::UserConfirmation
        | Step::Confirmation => {
            res.evaluation = Some(evaluation);
        }
    }

    Ok(Json(BaseResponse {
        error: false,
        message: res,
    }))
}

pub async fn post_share_page(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path((evaluation_id, page)): Path<(Uuid, usize)>,
    Json(form): Json<ShareStepRequest>,
) -> WebResult<Json<BaseResponse<SharePageResponse>>> {
    let evaluation = owned_evaluation(&state, &user, evaluation_id).await?;
    let ctx = wizard_context(Arc::clone(&state), &evaluation).await?;

    let (step, next_page) = match wizard::resolve(&ctx, page) {
        None => return Err(WebError::not_found("Page")),
        Some(Resolution::Finished) => {
            return Ok(Json(BaseResponse {
                error: false,
                message: SharePageResponse::finished(page),
            }));
        }
        Some(Resolution::Step { step, next_page }) => (step, next_page),
    };

    match step {
        Step::DesignTypes { parent } => {
            apply_design_types(Arc::clone(&state), &evaluation, parent, &form).await?;
        }
        Step::Description => {
            apply_description(&state, evaluation, &form).await?;
        }
        Step::Policies => {
            apply_policies(Arc::clone(&state), &evaluation, &form).await?;
        }
        Step::Dates => {
            apply_dates(&state, &evaluation, &form).await?;
        }
        Step::Links => {
            apply_links(&state, evaluation, &form).await?;
        }
        Step::Cost => {
            let cost = form.cost.clone();
            update_evaluation(&state, evaluation, |a| {
                a.cost = Set(cost);
            })
            .await?;
        }
        Step::UserConfirmation => {
            apply_user_confirmation(&state, evaluation, &form).await?;
        }
        // The closing page only confirms what the earlier steps stored.
        Step::Confirmation => {}
    }

    Ok(Json(BaseResponse {
        error: false,
        message: SharePageResponse::step(page, step.name(), next_page),
    }))
}

async fn update_evaluation(
    state: &Arc<ServerState>,
    evaluation: MEvaluation,
    apply: impl FnOnce(&mut AEvaluation),
) -> WebResult<MEvaluation> {
    let mut aevaluation: AEvaluation = evaluation.into();
    apply(&mut aevaluation);
    aevaluation.modified_at = Set(Utc::now().naive_utc());

    Ok(aevaluation.update(&state.db).await?)
}

/// Reconciles the selection on one design-type page. Links to types that
/// belong to other pages are left alone, so deselecting "impact" on the
/// root page does not silently drop the sub-types chosen under it; the
/// step machine stops showing their page instead.
async fn apply_design_types(
    state: Arc<ServerState>,
    evaluation: &MEvaluation,
    parent: Option<&str>,
    form: &ShareStepRequest,
) -> WebResult<()> {
    let options = design_type_children(Arc::clone(&state), parent)
        .await
        .map_err(WebError::Internal)?;

    // A sub-type page only exists while its parent is both seeded and
    // selected; no children means the page is gone, not empty.
    if parent.is_some() && options.is_empty() {
        return Err(WebError::not_found("Page"));
    }

    let codes = form.codes.clone().unwrap_or_default();
    let descriptions = form.descriptions.clone().unwrap_or_default();

    let mut fields = FieldErrors::default();
    let mut selected: Vec<Link> = Vec::new();

    if parent.is_none() && codes.is_empty() {
        fields.add("codes", "Select at least one evaluation type");
    }

    for code in &codes {
        let option = match options.iter().find(|o| &o.code == code) {
            Some(option) => option,
            None => {
                fields.add("codes", format!("Select a valid choice: {}", code));
                continue;
            }
        };

        if option.collect_description {
            match descriptions.get(code).map(|d| d.trim()).filter(|d| !d.is_empty()) {
                Some(text) => selected.push(Link::with_text(code, text)),
                None => fields.add("descriptions", DESCRIPTION_REQUIRED),
            }
        } else {
            selected.push(Link::new(code));
        }
    }

    fields.into_result()?;

    let existing: Vec<Link> = linked_design_types(Arc::clone(&state), evaluation.id)
        .await
        .map_err(WebError::Internal)?
        .into_iter()
        .filter(|(code, _)| options.iter().any(|o| &o.code == code))
        .map(|(code, text)| Link { code, text })
        .collect();

    let plan = reconcile_links(&existing, &selected);
    let design_type_id = |code: &str| options.iter().find(|o| o.code == code).map(|o| o.id);

    for link in &plan.create {
        if let Some(id) = design_type_id(&link.code) {
            let adetail = AEvaluationDesignTypeDetail {
                id: Set(Uuid::new_v4()),
                evaluation: Set(evaluation.id),
                design_type: Set(id),
                text: Set(link.text.clone()),
            };

            adetail.insert(&state.db).await?;
        }
    }

    let delete_ids: Vec<Uuid> = plan
        .delete
        .iter()
        .filter_map(|code| design_type_id(code))
        .collect();

    if !delete_ids.is_empty() {
        EEvaluationDesignTypeDetail::delete_many()
            .filter(
                Condition::all()
                    .add(CEvaluationDesignTypeDetail::Evaluation.eq(evaluation.id))
                    .add(CEvaluationDesignTypeDetail::DesignType.is_in(delete_ids)),
            )
            .exec(&state.db)
            .await?;
    }

    for link in &plan.update_text {
        let Some(id) = design_type_id(&link.code) else {
            continue;
        };

        let detail = EEvaluationDesignTypeDetail::find()
            .filter(
                Condition::all()
                    .add(CEvaluationDesignTypeDetail::Evaluation.eq(evaluation.id))
                    .add(CEvaluationDesignTypeDetail::DesignType.eq(id)),
            )
            .one(&state.db)
            .await?;

        if let Some(detail) = detail {
            let mut adetail: AEvaluationDesignTypeDetail = detail.into();
            adetail.text = Set(link.text.clone());
            adetail.update(&state.db).await?;
        }
    }

    Ok(())
}

/// The description step also carries the grant and major-project number
/// questions; answering "yes" to either requires the number itself.
async fn apply_description(
    state: &Arc<ServerState>,
    evaluation: MEvaluation,
    form: &ShareStepRequest,
) -> WebResult<()> {
    let mut fields = FieldErrors::default();

    let description = trimmed(&form.brief_description);
    let grant_number = trimmed(&form.grant_number);
    let major_project_number = trimmed(&form.major_project_number);

    let has_grant_number = form.has_grant_number.unwrap_or(evaluation.has_grant_number);
    let has_major_project_number = form
        .has_major_project_number
        .unwrap_or(evaluation.has_major_project_number);

    if has_grant_number && grant_number.is_none() && evaluation.grant_number.is_none() {
        fields.add("grant_number", "Please provide the grant number");
    }

    if has_major_project_number
        && major_project_number.is_none()
        && evaluation.major_project_number.is_none()
    {
        fields.add("major_project_number", "Please provide the major project number");
    }

    fields.into_result()?;

    let grant_number = if has_grant_number {
        grant_number.or(evaluation.grant_number.clone())
    } else {
        None
    };
    let major_project_number = if has_major_project_number {
        major_project_number.or(evaluation.major_project_number.clone())
    } else {
        None
    };

    update_evaluation(state, evaluation, |a| {
        a.brief_description = Set(description);
        a.has_grant_number = Set(has_grant_number);
        a.grant_number = Set(grant_number);
        a.has_major_project_number = Set(has_major_project_number);
        a.major_project_number = Set(major_project_number);
    })
    .await?;

    Ok(())
}

async fn apply_policies(
    state: Arc<ServerState>,
    evaluation: &MEvaluation,
    form: &ShareStepRequest,
) -> WebResult<()> {
    let options = ETaxonomy::find()
        .filter(CTaxonomy::Parent.is_null())
        .all(&state.db)
        .await?;
    let codes = form.codes.clone().unwrap_or_default();

    let mut fields = FieldErrors::default();
    for code in &codes {
        if !options.iter().any(|o| &o.code == code) {
            fields.add("codes", format!("Select a valid choice: {}", code));
        }
    }
    fields.into_result()?;

    let existing: Vec<Link> = linked_taxonomy_codes(Arc::clone(&state), evaluation.id)
        .await
        .map_err(WebError::Internal)?
        .into_iter()
        .map(|code| Link { code, text: None })
        .collect();
    let selected: Vec<Link> = codes.iter().map(|c| Link::new(c)).collect();

    let plan = reconcile_links(&existing, &selected);
    let taxonomy_id = |code: &str| options.iter().find(|o| o.code == code).map(|o| o.id);

    for link in &plan.create {
        if let Some(id) = taxonomy_id(&link.code) {
            let alink = AEvaluationTaxonomy {
                id: Set(Uuid::new_v4()),
                evaluation: Set(evaluation.id),
                taxonomy: Set(id),
            };

            alink.insert(&state.db).await?;
        }
    }

    let delete_ids: Vec<Uuid> = plan
        .delete
        .iter()
        .filter_map(|code| taxonomy_id(code))
        .collect();

    if !delete_ids.is_empty() {
        EEvaluationTaxonomy::delete_many()
            .filter(
                Condition::all()
                    .add(CEvaluationTaxonomy::Evaluation.eq(evaluation.id))
                    .add(CEvaluationTaxonomy::Taxonomy.is_in(delete_ids)),
            )
            .exec(&state.db)
            .await?;
    }

    Ok(())
}

async fn apply_dates(
    state: &Arc<ServerState>,
    evaluation: &MEvaluation,
    form: &ShareStepRequest,
) -> WebResult<()> {
    let rows = form.dates.clone().unwrap_or_default();
    let mut fields = FieldErrors::default();

    for (i, row) in rows.iter().enumerate() {
        if row.delete || is_blank_date(row) {
            continue;
        }

        match row.year {
            None => fields.add(&format!("dates.{}.year", i), "Please enter a year"),
            Some(year) => {
                if let Err(message) = validate_year(year) {
                    fields.add(&format!("dates.{}.year", i), message);
                }
            }
        }

        if let Some(month) = row.month {
            if let Err(message) = validate_month(month) {
                fields.add(&format!("dates.{}.month", i), message);
            }
        }

        if row.category == EventDateCategory::Other
            && row
                .other_description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .is_none()
        {
            fields.add(&format!("dates.{}.other_description", i), DESCRIPTION_REQUIRED);
        }
    }

    fields.into_result()?;

    let now = Utc::now().naive_utc();

    for row in &rows {
        if row.delete {
            if let Some(id) = row.id {
                EEventDate::delete_many()
                    .filter(
                        Condition::all()
                            .add(CEventDate::Id.eq(id))
                            .add(CEventDate::Evaluation.eq(evaluation.id)),
                    )
                    .exec(&state.db)
                    .await?;
            }
            continue;
        }

        if is_blank_date(row) {
            continue;
        }

        let year = row.year.unwrap_or_default();

        match row.id {
            Some(id) => {
                let date = EEventDate::find_by_id(id)
                    .filter(CEventDate::Evaluation.eq(evaluation.id))
                    .one(&state.db)
                    .await?
                    .ok_or_else(|| WebError::not_found("Event date"))?;

                let mut adate: AEventDate = date.into();
                adate.category = Set(row.category);
                adate.month = Set(row.month);
                adate.year = Set(year);
                adate.other_description = Set(row.other_description.clone());
                adate.status = Set(row.status);
                adate.modified_at = Set(now);
                adate.update(&state.db).await?;
            }
            None => {
                let adate = AEventDate {
                    id: Set(Uuid::new_v4()),
                    evaluation: Set(evaluation.id),
                    month: Set(row.month),
                    year: Set(year),
                    other_description: Set(row.other_description.clone()),
                    category: Set(row.category),
                    status: Set(row.status),
                    created_at: Set(now),
                    modified_at: Set(now),
                };

                adate.insert(&state.db).await?;
            }
        }
    }

    Ok(())
}

fn is_blank_date(row: &EventDateForm) -> bool {
    row.id.is_none()
        && row.month.is_none()
        && row.year.is_none()
        && row.status == EventDateStatus::NotSet
}

async fn apply_links(
    state: &Arc<ServerState>,
    evaluation: MEvaluation,
    form: &ShareStepRequest,
) -> WebResult<()> {
    let mut fields = FieldErrors::default();

    let published = match form.is_final_report_published {
        Some(published) => published,
        None => {
            fields.add("is_final_report_published", "Select yes or no");
            false
        }
    };

    let link = form
        .link_to_published_evaluation
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty());
    let plan_link = form
        .plan_link
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty());

    if published && link.is_none() && plan_link.is_none() {
        fields.add(
            "link_to_published_evaluation",
            "Please provide a link to the published evaluation",
        );
    }

    for (field, value) in [
        ("link_to_published_evaluation", link),
        ("plan_link", plan_link),
    ] {
        if let Some(value) = value {
            if let Err(message) = validate_link(value) {
                fields.add(field, message);
            }
        }
    }

    fields.into_result()?;

    let link = link.map(str::to_string);
    let plan_link = plan_link.map(str::to_string);

    update_evaluation(state, evaluation, |a| {
        a.is_final_report_published = Set(Some(published));
        a.link_to_published_evaluation = Set(link);
        a.plan_link = Set(plan_link);
    })
    .await?;

    Ok(())
}

async fn apply_user_confirmation(
    state: &Arc<ServerState>,
    evaluation: MEvaluation,
    form: &ShareStepRequest,
) -> WebResult<()> {
    let mut fields = FieldErrors::default();

    let visibility = match form.visibility {
        Some(visibility) => visibility,
        None => {
            fields.add("visibility", "Select who can see this evaluation");
            evaluation.visibility
        }
    };

    let reasons = form.reasons_unpublished.clone().unwrap_or_default();
    let mut parsed = Vec::new();

    for code in &reasons {
        match ReasonUnpublished::parse(code) {
            Some(reason) => parsed.push(reason),
            None => fields.add("reasons_unpublished", format!("Select a valid choice: {}", code)),
        }
    }

    let quality_description = trimmed(&form.quality_reasons_unpublished_description);
    let other_description = trimmed(&form.other_reasons_unpublished_description);

    if parsed.contains(&ReasonUnpublished::Quality) && quality_description.is_none() {
        fields.add("quality_reasons_unpublished_description", DESCRIPTION_REQUIRED);
    }

    if parsed.contains(&ReasonUnpublished::Other) && other_description.is_none() {
        fields.add("other_reasons_unpublished_description", DESCRIPTION_REQUIRED);
    }

    fields.into_result()?;

    let reasons = if parsed.is_empty() {
        None
    } else {
        Some(parsed.iter().map(|r| r.code().to_string()).collect())
    };

    update_evaluation(state, evaluation, |a| {
        a.visibility = Set(visibility);
        a.reasons_unpublished = Set(reasons);
        a.quality_reasons_unpublished_description = Set(quality_description);
        a.other_reasons_unpublished_description = Set(other_description);
    })
    .await?;

    Ok(())
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
