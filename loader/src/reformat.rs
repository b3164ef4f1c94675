/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

//! Batch cleanup of the imported RSM descriptions, which arrive with
//! broken capitalization and whitespace from the source spreadsheets.

use anyhow::{Context, Result};
use chrono::Utc;
use core::types::*;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use super::ai::AiClient;

const REFORMAT_ROLE: &str = "\
You are a plain text formatter.

You will receive badly formatted text and reformat it with:
* proper capitalization of abbreviations, proper nouns and sentences
* sensible whitespace

Do not:
* remove or add words
* change the tone of the text

Please return the reformatted text without explanation.";

pub async fn reformat_description(client: &AiClient, text: &str) -> Result<String> {
    client.chat(REFORMAT_ROLE, text).await
}

/// Rewrites descriptions of imported evaluations in `rsm_evaluation_id`
/// order, at most `max` of them. Returns the number updated.
pub async fn reformat_descriptions(
    db: &DatabaseConnection,
    client: &AiClient,
    max: Option<usize>,
) -> Result<usize> {
    let evaluations = EEvaluation::find()
        .filter(CEvaluation::BriefDescription.is_not_null())
        .order_by_asc(CEvaluation::RsmEvaluationId)
        .all(db)
        .await
        .context("Failed to query evaluations")?;

    let max = max.unwrap_or(evaluations.len());
    let mut updated = 0;

    for evaluation in evaluations.into_iter().take(max) {
        let description = match &evaluation.brief_description {
            Some(description) => description.clone(),
            None => continue,
        };

        tracing::info!(
            "updating rsm-evaluation-id: {:?}",
            evaluation.rsm_evaluation_id
        );

        let reformatted = reformat_description(client, &description).await?;

        let mut aevaluation: AEvaluation = evaluation.into();
        aevaluation.brief_description = Set(Some(reformatted));
        aevaluation.modified_at = Set(Utc::now().naive_utc());
        aevaluation
            .update(db)
            .await
            .context("Failed to update evaluation")?;

        updated += 1;
    }

    tracing::info!("reformatting text complete");
    Ok(updated)
}
