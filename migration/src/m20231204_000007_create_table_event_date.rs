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
                    .table(EventDate::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventDate::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EventDate::Evaluation).uuid().not_null())
                    .col(ColumnDef::new(EventDate::Month).small_integer())
                    .col(ColumnDef::new(EventDate::Year).small_integer().not_null())
                    .col(ColumnDef::new(EventDate::OtherDescription).string_len(256))
                    .col(
                        ColumnDef::new(EventDate::Category)
                            .string_len(25)
                            .not_null(),
                    )
                    .col(ColumnDef::new(EventDate::Status).string_len(25).not_null())
                    .col(ColumnDef::new(EventDate::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(EventDate::ModifiedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-event_date-evaluation")
                            .from(EventDate::Table, EventDate::Evaluation)
                            .to(Evaluation::Table, Evaluation::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventDate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EventDate {
    Table,
    Id,
    Evaluation,
    Month,
    Year,
    OtherDescription,
    Category,
    Status,
    CreatedAt,
    ModifiedAt,
}

#[derive(DeriveIden)]
enum Evaluation {
    Table,
    Id,
}
