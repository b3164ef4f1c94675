/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

//! Tests for types and data structures

extern crate core as registry_core;
use registry_core::types::*;
use sea_orm::{DatabaseBackend, MockDatabase};

fn create_mock_cli() -> Cli {
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

fn create_mock_db() -> sea_orm::DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MDepartment>::new()])
        .into_connection()
}

#[test]
fn test_server_state_creation() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let cli = create_mock_cli();
        let db = create_mock_db();

        let state = ServerState { db, cli };

        assert_eq!(state.cli.port, 3000);
        assert_eq!(state.cli.ip, "127.0.0.1");
        assert_eq!(state.cli.environment, "local");
    });
}

#[test]
fn test_base_response_serialization() {
    let response = BaseResponse {
        error: false,
        message: "ok".to_string(),
    };

    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"error":false,"message":"ok"}"#);
}
