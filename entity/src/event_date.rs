/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Serde names mirror the stored string values so the JSON surface and the
// column share one vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(25))")]
pub enum EventDateCategory {
    #[sea_orm(string_value = "eval_start")]
    #[serde(rename = "eval_start")]
    EvaluationStart,
    #[sea_orm(string_value = "eval_end")]
    #[serde(rename = "eval_end")]
    EvaluationEnd,
    #[sea_orm(string_value = "first_recruit")]
    #[serde(rename = "first_recruit")]
    FirstParticipantRecruited,
    #[sea_orm(string_value = "last_recruit")]
    #[serde(rename = "last_recruit")]
    LastParticipantRecruited,
    #[sea_orm(string_value = "intervention_start")]
    #[serde(rename = "intervention_start")]
    InterventionStart,
    #[sea_orm(string_value = "intervention_end")]
    #[serde(rename = "intervention_end")]
    InterventionEnd,
    #[sea_orm(string_value = "interim_extract")]
    #[serde(rename = "interim_extract")]
    InterimDataExtraction,
    #[sea_orm(string_value = "interim_analysis_start")]
    #[serde(rename = "interim_analysis_start")]
    InterimDataAnalysisStart,
    #[sea_orm(string_value = "interim_analysis_end")]
    #[serde(rename = "interim_analysis_end")]
    InterimDataAnalysisEnd,
    #[sea_orm(string_value = "pub_interim")]
    #[serde(rename = "pub_interim")]
    PublicationInterimResults,
    #[sea_orm(string_value = "final_extract")]
    #[serde(rename = "final_extract")]
    FinalDataExtraction,
    #[sea_orm(string_value = "final_analysis_start")]
    #[serde(rename = "final_analysis_start")]
    FinalDataAnalysisStart,
    #[sea_orm(string_value = "final_analysis_end")]
    #[serde(rename = "final_analysis_end")]
    FinalDataAnalysisEnd,
    #[sea_orm(string_value = "pub_final")]
    #[serde(rename = "pub_final")]
    PublicationFinalResults,
    #[sea_orm(string_value = "other")]
    #[serde(rename = "other")]
    Other,
    #[sea_orm(string_value = "not set")]
    #[serde(rename = "not set")]
    NotSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(25))")]
pub enum EventDateStatus {
    #[sea_orm(string_value = "intended")]
    #[serde(rename = "intended")]
    Intended,
    #[sea_orm(string_value = "actual")]
    #[serde(rename = "actual")]
    Actual,
    #[sea_orm(string_value = "not set")]
    #[serde(rename = "not set")]
    NotSet,
}

/// One calendar event tied to an evaluation. Month is optional; year is
/// required and bounded 1900-2100 at the form boundary.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "event_date")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub evaluation: Uuid,
    pub month: Option<i16>,
    pub year: i16,
    pub other_description: Option<String>,
    pub category: EventDateCategory,
    pub status: EventDateStatus,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::evaluation::Entity",
        from = "Column::Evaluation",
        to = "super::evaluation::Column::Id"
    )]
    Evaluation,
}

impl Related<super::evaluation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
