/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

//! Importer for the RSM JSON export, which groups rows by evaluation id
//! and report id and so can express evaluations with several reports.
//! Values are accumulated across an evaluation's rows before being
//! written, because the export repeats columns on every row and only
//! fills some of them on the first.

use anyhow::{Context, Result};
use chrono::Utc;
use core::types::*;
use entity::evaluation::Visibility;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use uuid::Uuid;

use super::rsm::{
    DATE_COLUMNS, RsmRecord, associate_departments, impact_design_code, link_design_type,
    make_event_date,
};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct JsonLoadCounts {
    pub created: usize,
    pub aborted_major_project: usize,
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

pub async fn load_rsm_json(db: &DatabaseConnection, path: &str) -> Result<JsonLoadCounts> {
    tracing::info!("loading {:?}", path);

    let contents =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;

    let data: serde_json::Map<String, Value> =
        serde_json::from_str(&contents).context("Failed to parse JSON export")?;

    let mut counts = JsonLoadCounts::default();

    'evaluations: for (evaluation_id, reports) in data {
        let rsm_evaluation_id: i32 = evaluation_id
            .parse()
            .with_context(|| format!("Evaluation id is not a number: {}", evaluation_id))?;

        let reports = reports
            .as_object()
            .with_context(|| format!("Evaluation {} is not an object", evaluation_id))?;

        let now = Utc::now().naive_utc();
        let aevaluation = AEvaluation {
            id: Set(Uuid::new_v4()),
            created_by: Set(None),
            title: Set(None),
            status: Set(None),
            brief_description: Set(None),
            rsm_evaluation_id: Set(Some(rsm_evaluation_id)),
            has_grant_number: Set(false),
            grant_number: Set(None),
            has_major_project_number: Set(false),
            major_project_number: Set(None),
            plan_link: Set(None),
            link_to_published_evaluation: Set(None),
            is_final_report_published: Set(None),
            cost: Set(None),
            visibility: Set(Visibility::Public),
            reasons_unpublished: Set(None),
            quality_reasons_unpublished_description: Set(None),
            other_reasons_unpublished_description: Set(None),
            created_at: Set(now),
            modified_at: Set(now),
        };

        let evaluation = aevaluation
            .insert(db)
            .await
            .context("Failed to insert evaluation")?;

        let mut title: Option<String> = None;
        let mut descriptions: Vec<String> = Vec::new();
        let mut design_types: Vec<String> = Vec::new();
        let mut design_type_descriptions: Vec<String> = Vec::new();
        let mut clients: Vec<String> = Vec::new();
        let mut seen_reports: HashSet<String> = HashSet::new();

        for (report_id, rows) in reports {
            let rows = rows
                .as_array()
                .with_context(|| format!("Report {} is not an array", report_id))?;

            for row in rows {
                let cells = row
                    .as_object()
                    .with_context(|| format!("Row in report {} is not an object", report_id))?;
                let record = RsmRecord::from_object(
                    cells.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
                );

                if record.is_major_project() {
                    // The whole evaluation is out of scope; children
                    // created so far go with it via the cascade.
                    EEvaluation::delete_by_id(evaluation.id)
                        .exec(db)
                        .await
                        .context("Failed to delete evaluation")?;
                    tracing::warn!(
                        "Did not create record for evaluation id {:?}, as is a Major Project",
                        evaluation_id
                    );
                    counts.aborted_major_project += 1;
                    continue 'evaluations;
                }

                if title.is_none() {
                    title = record.text("Evaluation title").map(str::to_string);
                }

                // Title and link often only appear on a report's first row
                if seen_reports.insert(report_id.clone()) {
                    let areport = AReport {
                        id: Set(Uuid::new_v4()),
                        evaluation: Set(evaluation.id),
                        title: Set(record.text("Report title").map(str::to_string)),
                        link: Set(record.text("gov_uk_link").map(str::to_string)),
                        rsm_report_id: Set(report_id.parse().ok()),
                        created_at: Set(now),
                        modified_at: Set(now),
                    };

                    areport
                        .insert(db)
                        .await
                        .context("Failed to insert report")?;
                }

                for column in ["Process", "Impact", "Economic"] {
                    if record.flag(column) {
                        push_unique(&mut design_types, &column.to_lowercase());
                    }
                }

                if let Some(description) = record.other_type_description() {
                    push_unique(&mut design_types, "other");
                    push_unique(&mut design_type_descriptions, description);
                }

                // non-standard "Impact - Design" text has no code and is dropped
                if let Some(code) = record.text("Impact - Design").and_then(impact_design_code) {
                    push_unique(&mut design_types, code);
                }

                if let Some(summary) = record.text("Evaluation summary") {
                    push_unique(&mut descriptions, summary);
                }

                if let Some(client) = record.text("Client") {
                    push_unique(&mut clients, client);
                }

                for (key, category) in DATE_COLUMNS {
                    make_event_date(db, evaluation.id, &record, category, key).await?;
                }
            }
        }

        let mut aevaluation: AEvaluation = evaluation.clone().into();
        aevaluation.title = Set(title);
        aevaluation.brief_description = Set(if descriptions.is_empty() {
            None
        } else {
            Some(descriptions.join(" "))
        });
        aevaluation.modified_at = Set(Utc::now().naive_utc());
        aevaluation
            .update(db)
            .await
            .context("Failed to update evaluation")?;

        for code in &design_types {
            if code == "other" {
                continue;
            }
            link_design_type(db, evaluation.id, code, None).await?;
        }

        if design_types.iter().any(|c| c == "other") {
            if design_type_descriptions.is_empty() {
                link_design_type(db, evaluation.id, "other", None).await?;
            }
            for description in &design_type_descriptions {
                link_design_type(db, evaluation.id, "other", Some(description)).await?;
            }
        }

        for client in &clients {
            associate_departments(db, evaluation.id, client).await?;
        }

        counts.created += 1;
        tracing::info!("Successfully created Evaluation {:?}", evaluation_id);
    }

    Ok(counts)
}
