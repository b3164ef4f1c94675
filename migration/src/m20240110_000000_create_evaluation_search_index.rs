/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

use sea_orm_migration::prelude::*;

/// GIN index over the weighted title/description vector used by the
/// evaluation search endpoint. The expression must stay byte-identical to
/// the one built in `core::search` for the planner to use it.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX \"evaluation-search-vector\" ON \"evaluation\" USING GIN ((\
                 setweight(to_tsvector('english', coalesce(\"title\", '')), 'A') || \
                 setweight(to_tsvector('english', coalesce(\"brief_description\", '')), 'B')))",
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX \"evaluation-search-vector\"")
            .await?;
        Ok(())
    }
}
