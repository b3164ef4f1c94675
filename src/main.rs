/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

use registry_core::init_state;
use registry_core::types::Command;
use loader::ai::AiClient;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("REGISTRY_LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let state = init_state().await?;

    match &state.cli.command {
        None | Some(Command::Serve) => {
            web::serve_web(Arc::clone(&state)).await?;
        }
        Some(Command::LoadRsmCsv { file }) => {
            let counts = loader::csv::load_rsm_csv(&state.db, file).await?;
            tracing::info!(
                "Loaded {} evaluations ({} duplicate ids, {} major projects, {} without title skipped)",
                counts.created,
                counts.skipped_duplicate_id,
                counts.skipped_major_project,
                counts.skipped_no_title,
            );
        }
        Some(Command::LoadRsmJson { file }) => {
            let counts = loader::json::load_rsm_json(&state.db, file).await?;
            tracing::info!(
                "Loaded {} evaluations ({} major projects dropped)",
                counts.created,
                counts.aborted_major_project,
            );
        }
        Some(Command::ReformatDescriptions { max }) => {
            let client = AiClient::from_cli(&state.cli)?;
            let updated = loader::reformat::reformat_descriptions(&state.db, &client, *max).await?;
            tracing::info!("Reformatted {} descriptions", updated);
        }
    }

    Ok(())
}
