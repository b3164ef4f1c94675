/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

use core::types::*;
use sea_orm::{DatabaseBackend, MockDatabase};
use std::sync::Arc;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        jwt_secret_file: "test_jwt".to_string(),
        allowed_email_domains: "gov.uk,cabinetoffice.gov.uk".to_string(),
        environment: "local".to_string(),
        ai_api_url: "https://api.openai.com/v1".to_string(),
        ai_api_key_file: None,
        ai_model: "gpt-4o-mini".to_string(),
        command: None,
    }
}

pub fn create_mock_state() -> Arc<ServerState> {
    let cli = create_mock_cli();
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    Arc::new(ServerState { db, cli })
}
