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
                    .table(Evaluation::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Evaluation::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Evaluation::CreatedBy).uuid())
                    .col(ColumnDef::new(Evaluation::Title).string_len(1024))
                    .col(ColumnDef::new(Evaluation::Status).string_len(32))
                    .col(ColumnDef::new(Evaluation::BriefDescription).text())
                    .col(
                        ColumnDef::new(Evaluation::RsmEvaluationId)
                            .integer()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Evaluation::HasGrantNumber)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Evaluation::GrantNumber).string_len(256))
                    .col(
                        ColumnDef::new(Evaluation::HasMajorProjectNumber)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Evaluation::MajorProjectNumber).string_len(256))
                    .col(ColumnDef::new(Evaluation::PlanLink).string_len(1024))
                    .col(
                        ColumnDef::new(Evaluation::LinkToPublishedEvaluation)
                            .string_len(1024),
                    )
                    .col(ColumnDef::new(Evaluation::IsFinalReportPublished).boolean())
                    .col(ColumnDef::new(Evaluation::Cost).string_len(256))
                    .col(
                        ColumnDef::new(Evaluation::Visibility)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Evaluation::ReasonsUnpublished)
                            .array(ColumnType::Text),
                    )
                    .col(
                        ColumnDef::new(Evaluation::QualityReasonsUnpublishedDescription)
                            .text(),
                    )
                    .col(
                        ColumnDef::new(Evaluation::OtherReasonsUnpublishedDescription)
                            .text(),
                    )
                    .col(ColumnDef::new(Evaluation::CreatedAt).date_time().not_null())
                    .col(
                        ColumnDef::new(Evaluation::ModifiedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-evaluation-created_by")
                            .from(Evaluation::Table, Evaluation::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Evaluation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Evaluation {
    Table,
    Id,
    CreatedBy,
    Title,
    Status,
    BriefDescription,
    RsmEvaluationId,
    HasGrantNumber,
    GrantNumber,
    HasMajorProjectNumber,
    MajorProjectNumber,
    PlanLink,
    LinkToPublishedEvaluation,
    IsFinalReportPublished,
    Cost,
    Visibility,
    ReasonsUnpublished,
    QualityReasonsUnpublishedDescription,
    OtherReasonsUnpublishedDescription,
    CreatedAt,
    ModifiedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
