/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EvaluationDesignType::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EvaluationDesignType::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EvaluationDesignType::Code)
                            .string_len(128)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(EvaluationDesignType::Display)
                            .string_len(512)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationDesignType::CollectDescription)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EvaluationDesignType::Parent).uuid())
                    .col(
                        ColumnDef::new(EvaluationDesignType::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationDesignType::ModifiedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-evaluation_design_type-parent")
                            .from(EvaluationDesignType::Table, EvaluationDesignType::Parent)
                            .to(EvaluationDesignType::Table, EvaluationDesignType::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EvaluationDesignType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EvaluationDesignType {
    Table,
    Id,
    Code,
    Display,
    CollectDescription,
    Parent,
    CreatedAt,
    ModifiedAt,
}
