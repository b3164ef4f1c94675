/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    #[sea_orm(string_value = "planned")]
    Planned,
    #[sea_orm(string_value = "ongoing")]
    Ongoing,
    #[sea_orm(string_value = "complete")]
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "civil_service")]
    CivilService,
    #[sea_orm(string_value = "public")]
    Public,
}

/// Closed vocabulary for the `reasons_unpublished` array column. The column
/// itself is `text[]`; every write must pass through `parse` so unknown
/// codes are rejected at the boundary rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonUnpublished {
    Signoff,
    Procurement,
    Resource,
    Quality,
    Changes,
    Other,
}

impl ReasonUnpublished {
    pub const ALL: [ReasonUnpublished; 6] = [
        ReasonUnpublished::Signoff,
        ReasonUnpublished::Procurement,
        ReasonUnpublished::Resource,
        ReasonUnpublished::Quality,
        ReasonUnpublished::Changes,
        ReasonUnpublished::Other,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ReasonUnpublished::Signoff => "signoff",
            ReasonUnpublished::Procurement => "procurement",
            ReasonUnpublished::Resource => "resource",
            ReasonUnpublished::Quality => "quality",
            ReasonUnpublished::Changes => "changes",
            ReasonUnpublished::Other => "other",
        }
    }

    pub fn parse(code: &str) -> Option<ReasonUnpublished> {
        ReasonUnpublished::ALL.into_iter().find(|r| r.code() == code)
    }
}

/// The central record describing one policy evaluation exercise.
///
/// Evaluations are never hard-deleted in normal operation; `visibility`
/// moves them between draft, civil-service and public states instead.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "evaluation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub created_by: Option<Uuid>,
    pub title: Option<String>,
    pub status: Option<EvaluationStatus>,
    #[sea_orm(column_type = "Text", nullable)]
    pub brief_description: Option<String>,
    #[sea_orm(unique)]
    pub rsm_evaluation_id: Option<i32>,
    pub has_grant_number: bool,
    pub grant_number: Option<String>,
    pub has_major_project_number: bool,
    pub major_project_number: Option<String>,
    pub plan_link: Option<String>,
    pub link_to_published_evaluation: Option<String>,
    pub is_final_report_published: Option<bool>,
    pub cost: Option<String>,
    pub visibility: Visibility,
    pub reasons_unpublished: Option<Vec<String>>,
    #[sea_orm(column_type = "Text", nullable)]
    pub quality_reasons_unpublished_description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub other_reasons_unpublished_description: Option<String>,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id"
    )]
    CreatedBy,
    #[sea_orm(has_many = "super::evaluation_department_association::Entity")]
    EvaluationDepartmentAssociation,
    #[sea_orm(has_many = "super::evaluation_design_type_detail::Entity")]
    EvaluationDesignTypeDetail,
    #[sea_orm(has_many = "super::evaluation_taxonomy::Entity")]
    EvaluationTaxonomy,
    #[sea_orm(has_many = "super::event_date::Entity")]
    EventDate,
    #[sea_orm(has_many = "super::report::Entity")]
    Report,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatedBy.def()
    }
}

impl Related<super::event_date::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventDate.def()
    }
}

impl Related<super::report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Report.def()
    }
}

impl Related<super::evaluation_department_association::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EvaluationDepartmentAssociation.def()
    }
}

impl Related<super::evaluation_design_type_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EvaluationDesignTypeDetail.def()
    }
}

impl Related<super::evaluation_taxonomy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EvaluationTaxonomy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
