/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

pub mod ai;
pub mod csv;
pub mod json;
pub mod reformat;
pub mod rsm;

mod tests;
