/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Government department reference row. `code` is a unique slug, `display`
/// the human-readable name. Seeded at startup, read-only afterwards.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "department")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub display: String,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::evaluation_department_association::Entity")]
    EvaluationDepartmentAssociation,
}

impl Related<super::evaluation_department_association::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EvaluationDepartmentAssociation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
