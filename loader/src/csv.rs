/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

//! Importer for the RSM CSV export. Rows commit one record at a time, as
//! the periodic hand-delivered files are loaded into an otherwise empty
//! table; re-running against a partially loaded database duplicates rows.

use anyhow::{Context, Result};
use chrono::Utc;
use core::consts::MAX_LINK_LENGTH;
use core::types::*;
use entity::evaluation::Visibility;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

use super::rsm::{
    DATE_COLUMNS, RsmRecord, associate_departments, link_design_type, make_event_date, parse_row,
};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct LoadCounts {
    pub created: usize,
    pub skipped_duplicate_id: usize,
    pub skipped_major_project: usize,
    pub skipped_no_title: usize,
}

pub async fn load_rsm_csv(db: &DatabaseConnection, path: &str) -> Result<LoadCounts> {
    tracing::info!("loading {:?}", path);

    let contents =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;

    load_rsm_csv_data(db, &contents).await
}

/// Loads from file contents directly; the admin upload endpoint feeds the
/// multipart body through here without touching disk.
pub async fn load_rsm_csv_data(db: &DatabaseConnection, contents: &str) -> Result<LoadCounts> {
    let mut lines = contents.lines().filter(|l| !l.trim().is_empty());

    let header: Vec<String> = match lines.next() {
        Some(line) => parse_row(line)?
            .into_iter()
            .map(|v| match v {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        None => anyhow::bail!("File is empty"),
    };

    let mut records = Vec::new();
    for line in lines {
        records.push(RsmRecord::new(&header, parse_row(line)?));
    }

    // An evaluation id appearing on several rows means the evaluation has
    // several reports; those need the JSON export to load correctly, so
    // the CSV importer only takes ids that appear exactly once.
    let mut id_counts: HashMap<i64, usize> = HashMap::new();
    for record in &records {
        if let Some(id) = record.number("Evaluation ID") {
            *id_counts.entry(id).or_default() += 1;
        }
    }

    let mut counts = LoadCounts {
        skipped_duplicate_id: id_counts.values().filter(|&&c| c > 1).count(),
        ..Default::default()
    };

    for record in &records {
        let evaluation_id = match record.number("Evaluation ID") {
            Some(id) if id_counts.get(&id) == Some(&1) => id,
            _ => continue,
        };

        if record.is_major_project() {
            counts.skipped_major_project += 1;
            continue;
        }

        let title = match record.text("Evaluation title") {
            Some(title) => title,
            None => {
                tracing::warn!("No title found, skipping evaluation {}", evaluation_id);
                counts.skipped_no_title += 1;
                continue;
            }
        };

        let published_link = record
            .text("gov_uk_link")
            .filter(|link| link.len() <= MAX_LINK_LENGTH);

        let now = Utc::now().naive_utc();
        let aevaluation = AEvaluation {
            id: Set(Uuid::new_v4()),
            created_by: Set(None),
            title: Set(Some(title.to_string())),
            status: Set(None),
            brief_description: Set(record.text("Evaluation summary").map(str::to_string)),
            rsm_evaluation_id: Set(Some(evaluation_id as i32)),
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

        let areport = AReport {
            id: Set(Uuid::new_v4()),
            evaluation: Set(evaluation.id),
            title: Set(record.text("Report title").map(str::to_string)),
            link: Set(published_link.map(str::to_string)),
            rsm_report_id: Set(record.number("Report ID").map(|id| id as i32)),
            created_at: Set(now),
            modified_at: Set(now),
        };

        areport
            .insert(db)
            .await
            .context("Failed to insert report")?;

        for column in ["Process", "Impact", "Economic"] {
            if record.flag(column) {
                link_design_type(db, evaluation.id, &column.to_lowercase(), None).await?;
            }
        }

        if let Some(description) = record.other_type_description() {
            link_design_type(db, evaluation.id, "other", Some(description)).await?;
        }

        for (key, category) in DATE_COLUMNS {
            make_event_date(db, evaluation.id, record, category, key).await?;
        }

        if let Some(client) = record.text("Client") {
            let associated = associate_departments(db, evaluation.id, client).await?;
            if associated > 0 {
                tracing::info!("Associated {:?} with {} departments", title, associated);
            }
        }

        counts.created += 1;
        tracing::info!("Successfully created Evaluation {:?}", title);
    }

    Ok(counts)
}
