/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const YEAR_RANGE: RangeInclusive<i16> = 1900..=2100;
pub const MONTH_RANGE: RangeInclusive<i16> = 1..=12;

/// Evaluations per search-results page.
pub const PAGE_SIZE: u64 = 25;

pub const MAX_LINK_LENGTH: usize = 1024;

/// RSM "other evaluation type" cell values that mean "no other type".
pub const OTHER_TYPE_SENTINELS: [&str; 2] = ["Information not easily found within the report", "N"];
