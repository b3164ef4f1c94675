/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Policy-area taxonomy node, a shallow tree scraped from the gov.uk topic
/// taxonomy. Root nodes have no parent.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "taxonomy")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub display: String,
    pub parent: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::taxonomy::Entity",
        from = "Column::Parent",
        to = "super::taxonomy::Column::Id"
    )]
    Parent,
    #[sea_orm(has_many = "super::evaluation_taxonomy::Entity")]
    EvaluationTaxonomy,
}

impl Related<super::evaluation_taxonomy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EvaluationTaxonomy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
