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
                    .table(EvaluationDesignTypeDetail::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EvaluationDesignTypeDetail::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EvaluationDesignTypeDetail::Evaluation)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationDesignTypeDetail::DesignType)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EvaluationDesignTypeDetail::Text).string_len(1024))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-evaluation_design_type_detail-evaluation")
                            .from(
                                EvaluationDesignTypeDetail::Table,
                                EvaluationDesignTypeDetail::Evaluation,
                            )
                            .to(Evaluation::Table, Evaluation::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-evaluation_design_type_detail-design_type")
                            .from(
                                EvaluationDesignTypeDetail::Table,
                                EvaluationDesignTypeDetail::DesignType,
                            )
                            .to(EvaluationDesignType::Table, EvaluationDesignType::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(EvaluationDesignTypeDetail::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum EvaluationDesignTypeDetail {
    Table,
    Id,
    Evaluation,
    DesignType,
    Text,
}

#[derive(DeriveIden)]
enum Evaluation {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum EvaluationDesignType {
    Table,
    Id,
}
