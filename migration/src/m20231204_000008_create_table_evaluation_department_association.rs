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
                    .table(EvaluationDepartmentAssociation::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EvaluationDepartmentAssociation::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EvaluationDepartmentAssociation::Evaluation)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationDepartmentAssociation::Department)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationDepartmentAssociation::IsLead)
                            .boolean()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-evaluation_department_association-evaluation")
                            .from(
                                EvaluationDepartmentAssociation::Table,
                                EvaluationDepartmentAssociation::Evaluation,
                            )
                            .to(Evaluation::Table, Evaluation::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-evaluation_department_association-department")
                            .from(
                                EvaluationDepartmentAssociation::Table,
                                EvaluationDepartmentAssociation::Department,
                            )
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("unique-evaluation-department")
                    .table(EvaluationDepartmentAssociation::Table)
                    .col(EvaluationDepartmentAssociation::Evaluation)
                    .col(EvaluationDepartmentAssociation::Department)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Partial unique indexes are not expressible through the schema
        // builder, so the one-lead-per-evaluation constraint is raw SQL.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX \"unique-lead-department\" \
                 ON \"evaluation_department_association\" (\"evaluation\") \
                 WHERE \"is_lead\"",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(EvaluationDepartmentAssociation::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum EvaluationDepartmentAssociation {
    Table,
    Id,
    Evaluation,
    Department,
    IsLead,
}

#[derive(DeriveIden)]
enum Evaluation {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Department {
    Table,
    Id,
}
