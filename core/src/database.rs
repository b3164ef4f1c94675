/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

use anyhow::{Context, Result};
use chrono::Utc;
use migration::Migrator;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectOptions, Database,
    DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
};
use sea_orm_migration::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tracing::log::LevelFilter;
use uuid::Uuid;

use super::seeds;
use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file).context("Failed to read database url from file")?
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    update_db(&db).await.context("Failed to update database")?;
    Ok(db)
}

/// Seeds the lookup tables on every start. Rows are matched by `code` and
/// inserted when missing, so the operation is idempotent; display strings
/// of existing rows are refreshed so corrections to the seed tables take
/// effect without a migration.
async fn update_db(db: &DatabaseConnection) -> Result<(), DbErr> {
    let now = Utc::now().naive_utc();

    for seed in seeds::DEPARTMENTS {
        let department = EDepartment::find()
            .filter(CDepartment::Code.eq(seed.code))
            .one(db)
            .await?;

        match department {
            None => {
                let adepartment = ADepartment {
                    id: Set(Uuid::new_v4()),
                    code: Set(seed.code.to_string()),
                    display: Set(seed.display.to_string()),
                    created_at: Set(now),
                    modified_at: Set(now),
                };

                adepartment.insert(db).await?;
            }
            Some(department) if department.display != seed.display => {
                let mut adepartment: ADepartment = department.into();
                adepartment.display = Set(seed.display.to_string());
                adepartment.modified_at = Set(now);
                adepartment.update(db).await?;
            }
            Some(_) => {}
        }
    }

    // Parents are listed first in the seed table, so the parent row always
    // exists by the time a child looks it up.
    for seed in seeds::DESIGN_TYPES {
        let parent_id = match seed.parent {
            Some(parent_code) => EEvaluationDesignType::find()
                .filter(CEvaluationDesignType::Code.eq(parent_code))
                .one(db)
                .await?
                .map(|p| p.id),
            None => None,
        };

        let design_type = EEvaluationDesignType::find()
            .filter(CEvaluationDesignType::Code.eq(seed.code))
            .one(db)
            .await?;

        if design_type.is_none() {
            let adesign_type = AEvaluationDesignType {
                id: Set(Uuid::new_v4()),
                code: Set(seed.code.to_string()),
                display: Set(seed.display.to_string()),
                collect_description: Set(seed.collect_description),
                parent: Set(parent_id),
                created_at: Set(now),
                modified_at: Set(now),
            };

            adesign_type.insert(db).await?;
        }
    }

    for seed in seeds::TAXONOMIES {
        let parent_id = match seed.parent {
            Some(parent_code) => ETaxonomy::find()
                .filter(CTaxonomy::Code.eq(parent_code))
                .one(db)
                .await?
                .map(|p| p.id),
            None => None,
        };

        let taxonomy = ETaxonomy::find()
            .filter(CTaxonomy::Code.eq(seed.code))
            .one(db)
            .await?;

        if taxonomy.is_none() {
            let ataxonomy = ATaxonomy {
                id: Set(Uuid::new_v4()),
                code: Set(seed.code.to_string()),
                display: Set(seed.display.to_string()),
                parent: Set(parent_id),
                created_at: Set(now),
                modified_at: Set(now),
            };

            ataxonomy.insert(db).await?;
        }
    }

    Ok(())
}

pub async fn get_department_by_code(
    state: Arc<ServerState>,
    code: &str,
) -> Result<Option<MDepartment>> {
    Ok(EDepartment::find()
        .filter(CDepartment::Code.eq(code))
        .one(&state.db)
        .await
        .context("Failed to query department")?)
}

pub async fn get_departments_by_codes(
    state: Arc<ServerState>,
    codes: &[String],
) -> Result<Vec<MDepartment>> {
    Ok(EDepartment::find()
        .filter(CDepartment::Code.is_in(codes.iter().map(String::as_str)))
        .order_by_asc(CDepartment::Display)
        .all(&state.db)
        .await
        .context("Failed to query departments")?)
}

pub async fn get_design_type_by_code(
    state: Arc<ServerState>,
    code: &str,
) -> Result<Option<MEvaluationDesignType>> {
    Ok(EEvaluationDesignType::find()
        .filter(CEvaluationDesignType::Code.eq(code))
        .one(&state.db)
        .await
        .context("Failed to query design type")?)
}

/// Children of a parent design-type code, ordered for display. `None`
/// selects the root types.
pub async fn design_type_children(
    state: Arc<ServerState>,
    parent_code: Option<&str>,
) -> Result<Vec<MEvaluationDesignType>> {
    let select = match parent_code {
        Some(code) => {
            let parent = match get_design_type_by_code(state.clone(), code).await? {
                Some(parent) => parent,
                None => return Ok(Vec::new()),
            };

            EEvaluationDesignType::find().filter(CEvaluationDesignType::Parent.eq(parent.id))
        }
        None => EEvaluationDesignType::find().filter(CEvaluationDesignType::Parent.is_null()),
    };

    Ok(select
        .order_by_asc(CEvaluationDesignType::Display)
        .all(&state.db)
        .await
        .context("Failed to query design types")?)
}

/// Design-type codes currently linked to an evaluation, with the free text
/// stored on each link.
pub async fn linked_design_types(
    state: Arc<ServerState>,
    evaluation_id: Uuid,
) -> Result<Vec<(String, Option<String>)>> {
    let rows = EEvaluationDesignTypeDetail::find()
        .filter(CEvaluationDesignTypeDetail::Evaluation.eq(evaluation_id))
        .find_also_related(entity::evaluation_design_type::Entity)
        .all(&state.db)
        .await
        .context("Failed to query linked design types")?;

    Ok(rows
        .into_iter()
        .filter_map(|(detail, design_type)| design_type.map(|d| (d.code, detail.text)))
        .collect())
}

pub async fn evaluation_has_design_type(
    state: Arc<ServerState>,
    evaluation_id: Uuid,
    code: &str,
) -> Result<bool> {
    Ok(EEvaluationDesignTypeDetail::find()
        .join_rev(
            JoinType::InnerJoin,
            EEvaluationDesignType::belongs_to(entity::evaluation_design_type_detail::Entity)
                .from(CEvaluationDesignType::Id)
                .to(CEvaluationDesignTypeDetail::DesignType)
                .into(),
        )
        .filter(
            Condition::all()
                .add(CEvaluationDesignTypeDetail::Evaluation.eq(evaluation_id))
                .add(CEvaluationDesignType::Code.eq(code)),
        )
        .one(&state.db)
        .await
        .context("Failed to query design type link")?
        .is_some())
}

pub async fn lead_department(
    state: Arc<ServerState>,
    evaluation_id: Uuid,
) -> Result<Option<MDepartment>> {
    let association = EEvaluationDepartment::find()
        .filter(
            Condition::all()
                .add(CEvaluationDepartment::Evaluation.eq(evaluation_id))
                .add(CEvaluationDepartment::IsLead.eq(true)),
        )
        .one(&state.db)
        .await
        .context("Failed to query lead department")?;

    match association {
        Some(association) => Ok(EDepartment::find_by_id(association.department)
            .one(&state.db)
            .await
            .context("Failed to query department")?),
        None => Ok(None),
    }
}

pub async fn linked_taxonomy_codes(
    state: Arc<ServerState>,
    evaluation_id: Uuid,
) -> Result<Vec<String>> {
    let rows = EEvaluationTaxonomy::find()
        .filter(CEvaluationTaxonomy::Evaluation.eq(evaluation_id))
        .find_also_related(entity::taxonomy::Entity)
        .all(&state.db)
        .await
        .context("Failed to query linked taxonomies")?;

    Ok(rows
        .into_iter()
        .filter_map(|(_, taxonomy)| taxonomy.map(|t| t.code))
        .collect())
}

pub async fn get_user_by_email(state: Arc<ServerState>, email: &str) -> Result<Option<MUser>> {
    Ok(EUser::find()
        .filter(CUser::Email.eq(email))
        .one(&state.db)
        .await
        .context("Failed to query user")?)
}
