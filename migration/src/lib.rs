/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

pub use sea_orm_migration::prelude::*;

mod m20231204_000001_create_table_user;
mod m20231204_000002_create_table_department;
mod m20231204_000003_create_table_evaluation;
mod m20231204_000004_create_table_evaluation_design_type;
mod m20231204_000005_create_table_taxonomy;
mod m20231204_000006_create_table_report;
mod m20231204_000007_create_table_event_date;
mod m20231204_000008_create_table_evaluation_department_association;
mod m20231204_000009_create_table_evaluation_design_type_detail;
mod m20231204_000010_create_table_evaluation_taxonomy;
mod m20240110_000000_create_evaluation_search_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20231204_000001_create_table_user::Migration),
            Box::new(m20231204_000002_create_table_department::Migration),
            Box::new(m20231204_000003_create_table_evaluation::Migration),
            Box::new(m20231204_000004_create_table_evaluation_design_type::Migration),
            Box::new(m20231204_000005_create_table_taxonomy::Migration),
            Box::new(m20231204_000006_create_table_report::Migration),
            Box::new(m20231204_000007_create_table_event_date::Migration),
            Box::new(m20231204_000008_create_table_evaluation_department_association::Migration),
            Box::new(m20231204_000009_create_table_evaluation_design_type_detail::Migration),
            Box::new(m20231204_000010_create_table_evaluation_taxonomy::Migration),
            Box::new(m20240110_000000_create_evaluation_search_index::Migration),
        ]
    }
}
