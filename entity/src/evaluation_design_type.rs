/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Methodology taxonomy tag (impact, process, rct, ...) arranged in a
/// shallow parent/child tree. `collect_description` marks "other"-style
/// types whose selection must carry free text.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "evaluation_design_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub display: String,
    pub collect_description: bool,
    pub parent: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::evaluation_design_type::Entity",
        from = "Column::Parent",
        to = "super::evaluation_design_type::Column::Id"
    )]
    Parent,
    #[sea_orm(has_many = "super::evaluation_design_type_detail::Entity")]
    EvaluationDesignTypeDetail,
}

impl Related<super::evaluation_design_type_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EvaluationDesignTypeDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
