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
                    .table(EvaluationTaxonomy::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EvaluationTaxonomy::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EvaluationTaxonomy::Evaluation)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationTaxonomy::Taxonomy)
                            .uuid()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-evaluation_taxonomy-evaluation")
                            .from(EvaluationTaxonomy::Table, EvaluationTaxonomy::Evaluation)
                            .to(Evaluation::Table, Evaluation::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-evaluation_taxonomy-taxonomy")
                            .from(EvaluationTaxonomy::Table, EvaluationTaxonomy::Taxonomy)
                            .to(Taxonomy::Table, Taxonomy::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("unique-evaluation-taxonomy")
                    .table(EvaluationTaxonomy::Table)
                    .col(EvaluationTaxonomy::Evaluation)
                    .col(EvaluationTaxonomy::Taxonomy)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EvaluationTaxonomy::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EvaluationTaxonomy {
    Table,
    Id,
    Evaluation,
    Taxonomy,
}

#[derive(DeriveIden)]
enum Evaluation {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Taxonomy {
    Table,
    Id,
}
