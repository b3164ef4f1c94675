/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

use core::types::{MEvaluation, MEventDate, MReport};
use entity::evaluation::{EvaluationStatus, Visibility};
use entity::event_date::{EventDateCategory, EventDateStatus};
use loader::ai::EvaluationInitialData;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeLoginRequest {
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub token: String,
}

/// Query string of the evaluation list. `departments` and
/// `evaluation_types` are comma-separated code lists.
#[derive(Deserialize, Debug, Default)]
pub struct EvaluationListQuery {
    pub search_term: Option<String>,
    pub departments: Option<String>,
    pub evaluation_types: Option<String>,
    pub page: Option<u64>,
}

impl EvaluationListQuery {
    pub fn department_codes(&self) -> Vec<String> {
        split_codes(&self.departments)
    }

    pub fn evaluation_type_codes(&self) -> Vec<String> {
        split_codes(&self.evaluation_types)
    }
}

fn split_codes(raw: &Option<String>) -> Vec<String> {
    raw.as_deref()
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EvaluationListItem {
    pub id: Uuid,
    pub title: Option<String>,
    pub brief_description: Option<String>,
    pub status: Option<EvaluationStatus>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EvaluationListResponse {
    pub page: u64,
    pub total_pages: u64,
    pub total_evaluations: u64,
    pub evaluations: Vec<EvaluationListItem>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DepartmentItem {
    pub code: String,
    pub display: String,
    pub is_lead: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DesignTypeLink {
    pub code: String,
    pub text: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EvaluationDetailResponse {
    pub evaluation: MEvaluation,
    pub departments: Vec<DepartmentItem>,
    pub design_types: Vec<DesignTypeLink>,
    pub policy_areas: Vec<String>,
    pub event_dates: Vec<MEventDate>,
    pub reports: Vec<MReport>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LookupItem {
    pub code: String,
    pub display: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DesignTypeOption {
    pub code: String,
    pub display: String,
    pub collect_description: bool,
}

#[derive(Deserialize, Debug)]
pub struct DesignTypeListQuery {
    pub parent: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeEvaluationRequest {
    #[serde(default)]
    pub title: String,
    pub status: EvaluationStatus,
    pub lead_department: String,
    #[serde(default)]
    pub departments: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EvaluationCreatedResponse {
    pub id: Uuid,
    pub next_page: usize,
}

/// One row of the dates formset. A row with neither month nor year is
/// ignored, which is how the pre-seeded blank rows come back untouched.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EventDateForm {
    pub id: Option<Uuid>,
    pub category: EventDateCategory,
    pub month: Option<i16>,
    pub year: Option<i16>,
    pub other_description: Option<String>,
    pub status: EventDateStatus,
    #[serde(default)]
    pub delete: bool,
}

/// Union of the share wizard's step payloads; each step only reads its own
/// fields and ignores the rest.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ShareStepRequest {
    pub codes: Option<Vec<String>>,
    pub descriptions: Option<BTreeMap<String, String>>,
    pub brief_description: Option<String>,
    pub has_grant_number: Option<bool>,
    pub grant_number: Option<String>,
    pub has_major_project_number: Option<bool>,
    pub major_project_number: Option<String>,
    pub dates: Option<Vec<EventDateForm>>,
    pub plan_link: Option<String>,
    pub link_to_published_evaluation: Option<String>,
    pub is_final_report_published: Option<bool>,
    pub cost: Option<String>,
    pub visibility: Option<Visibility>,
    pub reasons_unpublished: Option<Vec<String>>,
    pub quality_reasons_unpublished_description: Option<String>,
    pub other_reasons_unpublished_description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SharePageResponse {
    pub page: usize,
    pub step: Option<String>,
    pub next_page: Option<usize>,
    pub finished: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<DesignTypeOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<Vec<DesignTypeLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_options: Option<Vec<LookupItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_policies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<Vec<MEventDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_categories: Option<Vec<EventDateCategory>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<MEvaluation>,
}

impl SharePageResponse {
    pub fn finished(page: usize) -> Self {
        SharePageResponse {
            page,
            step: None,
            next_page: None,
            finished: true,
            options: None,
            selected: None,
            policy_options: None,
            selected_policies: None,
            dates: None,
            suggested_categories: None,
            evaluation: None,
        }
    }

    pub fn step(page: usize, step: &str, next_page: usize) -> Self {
        SharePageResponse {
            step: Some(step.to_string()),
            next_page: Some(next_page),
            finished: false,
            ..SharePageResponse::finished(page)
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeDocumentRequest {
    pub document_text: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ExtractedEvaluationResponse {
    pub id: Uuid,
    pub extracted: EvaluationInitialData,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ReformatResponse {
    pub brief_description: String,
}
