/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

//! Row access shared by the RSM importers. The CSV export is not real
//! CSV: each line is a JSON array without its surrounding brackets, so a
//! row parses as `[{line}]`. Cells are JSON values (string, number or
//! null) keyed by the header row.

use anyhow::{Context, Result};
use chrono::Utc;
use core::consts::OTHER_TYPE_SENTINELS;
use core::normalize::{NormalizedDepartments, month_number, normalize_department};
use core::types::*;
use entity::event_date::{EventDateCategory, EventDateStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

pub fn parse_row(line: &str) -> Result<Vec<Value>> {
    serde_json::from_str(&format!("[{}]", line))
        .with_context(|| format!("Failed to parse row: {}", line))
}

/// One RSM row as a column-name → cell map.
#[derive(Debug, Clone)]
pub struct RsmRecord {
    cells: HashMap<String, Value>,
}

impl RsmRecord {
    pub fn new(header: &[String], row: Vec<Value>) -> Self {
        RsmRecord {
            cells: header.iter().cloned().zip(row).collect(),
        }
    }

    /// The JSON export carries a BOM on its first column name; accept the
    /// key with or without it.
    pub fn from_object(cells: HashMap<String, Value>) -> Self {
        let cells = cells
            .into_iter()
            .map(|(k, v)| (k.trim_start_matches('\u{feff}').to_string(), v))
            .collect();
        RsmRecord { cells }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.cells.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    pub fn number(&self, key: &str) -> Option<i64> {
        match self.cells.get(key) {
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn is_major_project(&self) -> bool {
        self.text("Major projects identifier").is_some_and(|v| v == "Y")
    }

    pub fn flag(&self, key: &str) -> bool {
        self.text(key).is_some_and(|v| v == "Y")
    }

    /// The "other evaluation type" free text, unless it is one of the
    /// cell values that mean "nothing to report".
    pub fn other_type_description(&self) -> Option<&str> {
        self.text("Other evaluation type (please state)")
            .filter(|v| !OTHER_TYPE_SENTINELS.contains(v))
    }
}

/// Date column groups present in the export, with the category each one
/// maps to. "Event start date" has no better match than `other`.
pub const DATE_COLUMNS: [(&str, EventDateCategory); 4] = [
    ("Intervention start date", EventDateCategory::InterventionStart),
    ("Intervention end date", EventDateCategory::InterventionEnd),
    ("Publication date", EventDateCategory::PublicationFinalResults),
    ("Event start date", EventDateCategory::Other),
];

/// Creates an event date from the `"{key} (Month)"` / `"{key} (Year)"`
/// cell pair. A missing or unparseable year drops the date; a month name
/// that fails to parse is stored as no month.
pub async fn make_event_date(
    db: &DatabaseConnection,
    evaluation_id: Uuid,
    record: &RsmRecord,
    category: EventDateCategory,
    key: &str,
) -> Result<()> {
    let month = record
        .text(&format!("{} (Month)", key))
        .and_then(month_number);

    let year: i16 = match record.number(&format!("{} (Year)", key)) {
        Some(year) if i16::try_from(year).is_ok() => year as i16,
        _ => return Ok(()),
    };

    let now = Utc::now().naive_utc();
    let aevent_date = AEventDate {
        id: Set(Uuid::new_v4()),
        evaluation: Set(evaluation_id),
        month: Set(month),
        year: Set(year),
        other_description: Set(None),
        category: Set(category),
        status: Set(EventDateStatus::NotSet),
        created_at: Set(now),
        modified_at: Set(now),
    };

    aevent_date
        .insert(db)
        .await
        .context("Failed to insert event date")?;

    Ok(())
}

/// Links a design type to an evaluation by code. The code must be one of
/// the seeded types; anything else is a data error worth failing on.
pub async fn link_design_type(
    db: &DatabaseConnection,
    evaluation_id: Uuid,
    code: &str,
    text: Option<&str>,
) -> Result<()> {
    let design_type = EEvaluationDesignType::find()
        .filter(CEvaluationDesignType::Code.eq(code))
        .one(db)
        .await
        .context("Failed to query design type")?
        .with_context(|| format!("Unknown design type code: {}", code))?;

    let adetail = AEvaluationDesignTypeDetail {
        id: Set(Uuid::new_v4()),
        evaluation: Set(evaluation_id),
        design_type: Set(design_type.id),
        text: Set(text.map(str::to_string)),
    };

    adetail
        .insert(db)
        .await
        .context("Failed to insert design type detail")?;

    Ok(())
}

/// Resolves an RSM client name and associates the matching departments.
/// Unrecognised names are logged so the normalization table can be
/// extended; either way the evaluation is kept without the association.
pub async fn associate_departments(
    db: &DatabaseConnection,
    evaluation_id: Uuid,
    client: &str,
) -> Result<usize> {
    let codes = match normalize_department(client) {
        NormalizedDepartments::Known(codes) => codes,
        NormalizedDepartments::NoDepartment => return Ok(0),
        NormalizedDepartments::Unrecognised => {
            tracing::warn!("Unrecognised department name: {:?}", client);
            return Ok(0);
        }
    };

    let mut associated = 0;
    for code in codes {
        let department = EDepartment::find()
            .filter(CDepartment::Code.eq(code))
            .one(db)
            .await
            .context("Failed to query department")?;

        if let Some(department) = department {
            let aassociation = AEvaluationDepartment {
                id: Set(Uuid::new_v4()),
                evaluation: Set(evaluation_id),
                department: Set(department.id),
                is_lead: Set(false),
            };

            aassociation
                .insert(db)
                .await
                .context("Failed to insert department association")?;
            associated += 1;
        }
    }

    Ok(associated)
}

/// Maps the free-text "Impact - Design" cell of the JSON export to a
/// design-type code. The strings are reproduced as they occur in the
/// data, typos included; anything unlisted is non-standard text and is
/// dropped by the caller.
pub fn impact_design_code(text: &str) -> Option<&'static str> {
    let code = match text {
        "surveys and polling"
        | "Surveys and polling"
        | "Surveys (ECTs)"
        | "Surveys, focus groups and interviews conducted"
        | "Survey and polling"
        | "Survey respondents (landlords)"
        | "Mix of methods including surveys and group interviews"
        | "Review of data from Adult Tobacco Policy Survey"
        | "Surveys (senior leaders)"
        | "Survyes and case study"
        | "Participant Survey"
        | "Surveys and interviews"
        | "Surveys" => "surveys_process",
        "individual interviews"
        | "Individual interviews"
        | "Telephone interviews (housing advisers)"
        | "interviews"
        | "Interviews (landlords)"
        | "Interview"
        | "INTERVIEW"
        | "Individual interviews along with surveys and review of monitoring data to carry out quantitative modelling approach" => {
            "individual_process"
        }
        "output or performance monitoring"
        | "Output or performance review"
        | "Output or performance modelling"
        | "Performance or output monitoring" => "output_process",
        "Randomised Controlled Trial (RCT)"
        | "Randomised Controlled Trial"
        | "Other (RCT - Quasi-Experimentl approaches)" => "rct",
        "Interviews and group sessions"
        | "Focus groups or group interviews alongwith individual interviews & case studies"
        | "Focus groups or group interviews"
        | "Focus group"
        | "focus groups"
        | "Focus groups, interviews, and surveys"
        | "Focus groups (housing advisers)"
        | "Forcus group" => "group_process",
        "Cluster randomised RCT" => "cluster",
        "Propensity Score Matching" => "propensity",
        "Difference in Difference" | "regression adjusted Difference-in-Difference (DiD)" => {
            "difference"
        }
        "Case studies" | "Case Studies" | "Case studies and interviews" => "case_study_process",
        "Simulation model developed"
        | "Simulation modelling"
        | "Simulation modelling: Asset Liability Modelling (ALM)" => "simulation",
        "Outcome letter review" | "Outcome harvesting" => "outcome",
        "Semi structured qualitative interviews" => "qca",
        "Other (Qualitative research)" | "qualitative depth interviews and focus groups" => {
            "qualitative_process"
        }
        "Consultative/deliberative methods" => "consultative_process",
        "Synthetic Control Methods" => "synthetic",
        "Process Tracing" => "process_tracing",
        "Contribution Tracing" => "contribution_tracing",
        _ => return None,
    };

    Some(code)
}
