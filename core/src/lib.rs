/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

pub mod consts;
pub mod database;
pub mod input;
pub mod normalize;
pub mod reconcile;
pub mod search;
pub mod seeds;
pub mod types;
pub mod wizard;

use anyhow::Result;
use clap::Parser;
use database::connect_db;
use std::sync::Arc;
use types::*;

pub async fn init_state() -> Result<Arc<ServerState>> {
    let cli = Cli::parse();

    tracing::info!("Starting Evaluation Registry on {}:{}", cli.ip, cli.port);

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState { db, cli }))
}
