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
                    .table(Taxonomy::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Taxonomy::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Taxonomy::Code)
                            .string_len(128)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Taxonomy::Display)
                            .string_len(512)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Taxonomy::Parent).uuid())
                    .col(ColumnDef::new(Taxonomy::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Taxonomy::ModifiedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-taxonomy-parent")
                            .from(Taxonomy::Table, Taxonomy::Parent)
                            .to(Taxonomy::Table, Taxonomy::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Taxonomy::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Taxonomy {
    Table,
    Id,
    Code,
    Display,
    Parent,
    CreatedAt,
    ModifiedAt,
}
