/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

pub mod tests;

pub mod department;
pub mod evaluation;
pub mod evaluation_department_association;
pub mod evaluation_design_type;
pub mod evaluation_design_type_detail;
pub mod evaluation_taxonomy;
pub mod event_date;
pub mod report;
pub mod taxonomy;
pub mod user;
