/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

mod common;

use axum_test::TestServer;
use http::StatusCode;
use serde_json::json;

fn test_server() -> TestServer {
    let state = common::create_mock_state();
    TestServer::new(web::build_router(state)).unwrap()
}

#[test]
fn test_health_endpoint() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let server = test_server();

        let response = server.get("/api/health").await;
        response.assert_status_ok();
        response.assert_text_contains("200 ALIVE");
    });
}

#[test]
fn test_unknown_route_is_404() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let server = test_server();

        let response = server.get("/api/does-not-exist").await;
        response.assert_status(StatusCode::NOT_FOUND);
    });
}

#[test]
fn test_login_rejects_malformed_email() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let server = test_server();

        let response = server
            .post("/api/auth/login")
            .json(&json!({"email": "not-an-email"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_text_contains("Please enter a valid email address");
    });
}

#[test]
fn test_login_rejects_non_civil_service_domain() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let server = test_server();

        let response = server
            .post("/api/auth/login")
            .json(&json!({"email": "someone@example.com"}))
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
        response.assert_text_contains("Please enter a valid Civil Service email");
    });
}

#[test]
fn test_wizard_requires_authentication() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let server = test_server();

        let response = server.get("/api/evaluations/create/1").await;
        response.assert_status(StatusCode::FORBIDDEN);
        response.assert_text_contains("Authorization header not found");
    });
}

#[test]
fn test_admin_requires_authentication() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let server = test_server();

        let response = server
            .post("/api/admin/evaluations/from-document")
            .json(&json!({"document_text": "some report"}))
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
    });
}
