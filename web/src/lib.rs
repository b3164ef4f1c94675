/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

pub mod auth;
pub mod endpoints;
pub mod error;
pub mod requests;
mod tests;

use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use core::types::ServerState;
use std::sync::Arc;

pub fn build_router(state: Arc<ServerState>) -> Router {
    let protected = Router::new()
        .route(
            "/api/evaluations/create/{page}",
            get(endpoints::create::get_create_page).post(endpoints::create::post_create_page),
        )
        .route(
            "/api/evaluations/{evaluation}/share/{page}",
            get(endpoints::share::get_share_page).post(endpoints::share::post_share_page),
        )
        .route("/api/admin/load-rsm-csv", post(endpoints::admin::post_load_rsm_csv))
        .route(
            "/api/admin/evaluations/from-document",
            post(endpoints::admin::post_evaluation_from_document),
        )
        .route(
            "/api/admin/evaluations/{evaluation}/reformat",
            post(endpoints::admin::post_reformat_description),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            auth::authorize,
        ));

    // Browsing works signed out; a token widens what is visible.
    let browse = Router::new()
        .route("/api/evaluations", get(endpoints::evaluations::get_evaluations))
        .route(
            "/api/evaluations/{evaluation}",
            get(endpoints::evaluations::get_evaluation),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            auth::identify,
        ));

    Router::new()
        .merge(protected)
        .merge(browse)
        .route("/api/auth/login", post(endpoints::auth::post_login))
        .route("/api/departments", get(endpoints::evaluations::get_departments))
        .route("/api/design-types", get(endpoints::evaluations::get_design_types))
        .route("/api/policy-areas", get(endpoints::evaluations::get_policy_areas))
        .route("/api/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip.clone(), state.cli.port.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    axum::serve(listener, app).await
}
