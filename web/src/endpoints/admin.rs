/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

use axum::extract::{Multipart, Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use core::types::*;
use entity::evaluation::{EvaluationStatus, Visibility};
use loader::ai::AiClient;
use loader::csv::{LoadCounts, load_rsm_csv_data};
use loader::reformat::reformat_description;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::requests::{ExtractedEvaluationResponse, MakeDocumentRequest, ReformatResponse};

fn require_staff(user: &MUser) -> WebResult<()> {
    if user.is_staff {
        Ok(())
    } else {
        Err(WebError::staff_only())
    }
}

fn ai_client(state: &Arc<ServerState>) -> WebResult<AiClient> {
    AiClient::from_cli(&state.cli)
        .map_err(|err| WebError::BadRequest(format!("AI is not configured: {}", err)))
}

/// Takes an RSM CSV export as a multipart `file` field and loads it
/// directly, without staging on disk.
pub async fn post_load_rsm_csv(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    mut multipart: Multipart,
) -> WebResult<Json<BaseResponse<LoadCounts>>> {
    require_staff(&user)?;

    let mut contents: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| WebError::BadRequest(format!("Invalid upload: {}", err)))?
    {
        if field.name() == Some("file") {
            contents = Some(
                field
                    .text()
                    .await
                    .map_err(|err| WebError::BadRequest(format!("Invalid upload: {}", err)))?,
            );
        }
    }

    let contents =
        contents.ok_or_else(|| WebError::BadRequest("Missing 'file' field".to_string()))?;

    tracing::info!("{} uploaded an RSM CSV export", user.email);

    let counts = load_rsm_csv_data(&state.db, &contents)
        .await
        .map_err(WebError::Internal)?;

    let res = BaseResponse {
        error: false,
        message: counts,
    };

    Ok(Json(res))
}

/// Drafts an evaluation from the text of an uploaded report. The AI answer
/// seeds title, description and status; department and design types come
/// back as free text for the author to match up in the wizard.
pub async fn post_evaluation_from_document(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<MakeDocumentRequest>,
) -> WebResult<Json<BaseResponse<ExtractedEvaluationResponse>>> {
    require_staff(&user)?;

    if body.document_text.trim().is_empty() {
        return Err(WebError::BadRequest("Document text is empty".to_string()));
    }

    let client = ai_client(&state)?;
    let extracted = client
        .extract_evaluation(&body.document_text)
        .await
        .map_err(WebError::Internal)?;

    let status = match extracted.status.as_str() {
        "planned" => Some(EvaluationStatus::Planned),
        "ongoing" => Some(EvaluationStatus::Ongoing),
        "complete" => Some(EvaluationStatus::Complete),
        _ => None,
    };

    let now = Utc::now().naive_utc();
    let aevaluation = AEvaluation {
        id: Set(Uuid::new_v4()),
        created_by: Set(Some(user.id)),
        title: Set(Some(extracted.title.clone())),
        status: Set(status),
        brief_description: Set(Some(extracted.brief_description.clone())),
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

    tracing::info!(
        "Drafted evaluation {:?} ({}) from a document",
        evaluation.title,
        evaluation.id
    );

    let res = BaseResponse {
        error: false,
        message: ExtractedEvaluationResponse {
            id: evaluation.id,
            extracted,
        },
    };

    Ok(Json(res))
}

pub async fn post_reformat_description(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(evaluation_id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<ReformatResponse>>> {
    require_staff(&user)?;

    let evaluation = EEvaluation::find_by_id(evaluation_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Evaluation"))?;

    let description = evaluation
        .brief_description
        .clone()
        .ok_or_else(|| WebError::BadRequest("Evaluation has no description".to_string()))?;

    let client = ai_client(&state)?;
    let reformatted = reformat_description(&client, &description)
        .await
        .map_err(WebError::Internal)?;

    let mut aevaluation: AEvaluation = evaluation.into();
    aevaluation.brief_description = Set(Some(reformatted.clone()));
    aevaluation.modified_at = Set(Utc::now().naive_utc());
    aevaluation.update(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: ReformatResponse {
            brief_description: reformatted,
        },
    };

    Ok(Json(res))
}
