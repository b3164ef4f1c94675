/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

//! The three-page create wizard. Nothing is stored until the final page
//! validates, so abandoning the flow leaves no half-made records; the
//! client carries the earlier answers forward into the last submission.

use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use core::database::get_departments_by_codes;
use core::types::*;
use entity::evaluation::{EvaluationStatus, Visibility};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{FieldErrors, WebError, WebResult};
use crate::requests::{EvaluationCreatedResponse, LookupItem, MakeEvaluationRequest};

const PAGE_INTRO: usize = 1;
const PAGE_STATUS: usize = 2;
const PAGE_DETAILS: usize = 3;

fn step_name(page: usize) -> Option<&'static str> {
    match page {
        PAGE_INTRO => Some("intro"),
        PAGE_STATUS => Some("status"),
        PAGE_DETAILS => Some("details"),
        _ => None,
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreatePageResponse {
    pub page: usize,
    pub step: String,
    pub next_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statuses: Option<Vec<EvaluationStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departments: Option<Vec<LookupItem>>,
}

pub async fn get_create_page(
    state: State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Path(page): Path<usize>,
) -> WebResult<Json<BaseResponse<CreatePageResponse>>> {
    let step = step_name(page).ok_or_else(|| WebError::not_found("Page"))?;

    let statuses = (page == PAGE_STATUS).then(|| {
        vec![
            EvaluationStatus::Planned,
            EvaluationStatus::Ongoing,
            EvaluationStatus::Complete,
        ]
    });

    let departments = if page == PAGE_DETAILS {
        Some(department_options(&state.db).await?)
    } else {
        None
    };

    let res = BaseResponse {
        error: false,
        message: CreatePageResponse {
            page,
            step: step.to_string(),
            next_page: (page < PAGE_DETAILS).then_some(page + 1),
            statuses,
            departments,
        },
    };

    Ok(Json(res))
}

async fn department_options(db: &sea_orm::DatabaseConnection) -> Result<Vec<LookupItem>, WebError> {
    Ok(EDepartment::find()
        .order_by_asc(CDepartment::Display)
        .all(db)
        .await?
        .into_iter()
        .map(|d| LookupItem {
            code: d.code,
            display: d.display,
        })
        .collect())
}

pub async fn post_create_page(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(page): Path<usize>,
    Json(body): Json<serde_json::Value>,
) -> WebResult<Json<BaseResponse<EvaluationCreatedResponse>>> {
    match page {
        // The first two pages hold nothing the server needs to keep; the
        // client re-submits their answers with the final page.
        PAGE_INTRO | PAGE_STATUS => Err(WebError::BadRequest(
            "Nothing to submit before the details page".to_string(),
        )),
        PAGE_DETAILS => {
            let form: MakeEvaluationRequest = serde_json::from_value(body)
                .map_err(|err| WebError::BadRequest(format!("Invalid form: {}", err)))?;

            let evaluation = create_evaluation(Arc::clone(&state), &user, &form).await?;

            let res = BaseResponse {
                error: false,
                message: EvaluationCreatedResponse {
                    id: evaluation.id,
                    next_page: 1,
                },
            };

            Ok(Json(res))
        }
        _ => Err(WebError::not_found("Page")),
    }
}

async fn create_evaluation(
    state: Arc<ServerState>,
    user: &MUser,
    form: &MakeEvaluationRequest,
) -> WebResult<MEvaluation> {
    let mut fields = FieldErrors::default();

    if form.title.trim().is_empty() {
        fields.add("title", "Title is required");
    }

    let mut codes: Vec<String> = vec![form.lead_department.clone()];
    codes.extend(form.departments.iter().cloned());

    let departments = get_departments_by_codes(Arc::clone(&state), &codes)
        .await
        .map_err(WebError::Internal)?;

    for code in &codes {
        if !departments.iter().any(|d| &d.code == code) {
            fields.add("departments", format!("Unknown department: {}", code));
        }
    }

    for department in &departments {
        if codes.iter().filter(|c| *c == &department.code).count() > 1 {
            fields.add(
                "departments",
                format!(
                    "This department has been listed more than once: {}",
                    department.display
                ),
            );
        }
    }

    fields.into_result()?;

    let now = Utc::now().naive_utc();
    let aevaluation = AEvaluation {
        id: Set(Uuid::new_v4()),
        created_by: Set(Some(user.id)),
        title: Set(Some(form.title.trim().to_string())),
        status: Set(Some(form.status)),
        brief_description: Set(None),
        rsm_evaluation_id: Set(None),
        has_grant_number: Set(false),
        grant_number: Set(None),
        has_major_project_number: Set(false),
        major_project_number: Set(None),
        plan_link: Set(None),
        link_to_published_evaluation: Set(None),
        is_final_report_published: Set(None),
        cost: Set(None),
        visibility: Set(Visibility::Draft),
        reasons_unpublished: Set(None),
        quality_reasons_unpublished_description: Set(None),
        other_reasons_unpublished_description: Set(None),
        created_at: Set(now),
        modified_at: Set(now),
    };

    let evaluation = aevaluation.insert(&state.db).await?;

    for department in &departments {
        let aassociation = AEvaluationDepartment {
            id: Set(Uuid::new_v4()),
            evaluation: Set(evaluation.id),
            department: Set(department.id),
            is_lead: Set(department.code == form.lead_department),
        };

        aassociation.insert(&state.db).await?;
    }

    tracing::info!("Created evaluation {:?} ({})", evaluation.title, evaluation.id);
    Ok(evaluation)
}
