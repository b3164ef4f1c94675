/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{Json, Response};
use chrono::{Duration, Utc};
use core::input::load_secret;
use core::types::*;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize,
    pub iat: usize,
    pub id: Uuid,
}

/// Requires a valid bearer token and an active account; inserts the user
/// model as a request extension.
pub async fn authorize(
    state: State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, (StatusCode, Json<BaseResponse<String>>)> {
    let user = match user_from_request(&state, req.headers()).await {
        Ok(user) => user,
        Err(rejection) => return Err(rejection),
    };

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

/// Like `authorize`, but a missing or invalid token is not an error: the
/// handler gets `Option<MUser>` and serves the public view. The search
/// endpoints use this, as what they list depends on who is asking.
pub async fn identify(
    state: State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> Response<Body> {
    let user = user_from_request(&state, req.headers()).await.ok();

    req.extensions_mut().insert(user);
    next.run(req).await
}

async fn user_from_request(
    state: &State<Arc<ServerState>>,
    headers: &axum::http::HeaderMap,
) -> Result<MUser, (StatusCode, Json<BaseResponse<String>>)> {
    let auth_header = match headers.get(axum::http::header::AUTHORIZATION) {
        Some(header) => header
            .to_str()
            .map_err(|_| rejection(StatusCode::FORBIDDEN, "Authorization header empty"))?,
        None => {
            return Err(rejection(
                StatusCode::FORBIDDEN,
                "Authorization header not found",
            ));
        }
    };

    let mut header = auth_header.split_whitespace();
    let (bearer, token) = (header.next(), header.next());

    let token = match (bearer, token) {
        (Some("Bearer"), Some(token)) => token,
        _ => {
            return Err(rejection(
                StatusCode::FORBIDDEN,
                "Invalid Authorization header",
            ));
        }
    };

    let token_data = decode_jwt(&state.cli, token)
        .map_err(|_| rejection(StatusCode::UNAUTHORIZED, "Unable to decode token"))?;

    let user = EUser::find_by_id(token_data.claims.id)
        .one(&state.db)
        .await
        .map_err(|err| {
            tracing::error!("Database error during authorization: {}", err);
            rejection(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        })?;

    match user {
        Some(user) if user.is_active => Ok(user),
        Some(_) => Err(rejection(StatusCode::UNAUTHORIZED, "Account is disabled")),
        None => Err(rejection(StatusCode::UNAUTHORIZED, "User not found")),
    }
}

fn rejection(status: StatusCode, message: &str) -> (StatusCode, Json<BaseResponse<String>>) {
    (
        status,
        Json(BaseResponse {
            error: true,
            message: message.to_string(),
        }),
    )
}

pub fn encode_jwt(cli: &Cli, id: Uuid) -> Result<String, StatusCode> {
    let now = Utc::now();
    let expire: chrono::TimeDelta = Duration::hours(24);
    let exp: usize = (now + expire).timestamp() as usize;
    let iat: usize = now.timestamp() as usize;

    let claim = Claims { iat, exp, id };
    let secret = load_secret(&cli.jwt_secret_file);

    encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

pub fn decode_jwt(cli: &Cli, jwt: &str) -> Result<TokenData<Claims>, StatusCode> {
    let secret = load_secret(&cli.jwt_secret_file);

    decode(
        jwt,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|_| StatusCode::UNAUTHORIZED)
}
