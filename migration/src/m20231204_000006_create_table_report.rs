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
                    .table(Report::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Report::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Report::Evaluation).uuid().not_null())
                    .col(ColumnDef::new(Report::Title).string_len(1024))
                    .col(ColumnDef::new(Report::Link).string_len(1024))
                    .col(ColumnDef::new(Report::RsmReportId).integer())
                    .col(ColumnDef::new(Report::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Report::ModifiedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-report-evaluation")
                            .from(Report::Table, Report::Evaluation)
                            .to(Evaluation::Table, Evaluation::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Report::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Report {
    Table,
    Id,
    Evaluation,
    Title,
    Link,
    RsmReportId,
    CreatedAt,
    ModifiedAt,
}

#[derive(DeriveIden)]
enum Evaluation {
    Table,
    Id,
}
