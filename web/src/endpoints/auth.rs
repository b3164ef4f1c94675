/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use core::database::get_user_by_email;
use core::input::{email_domain_allowed, normalize_email};
use core::types::*;
use sea_orm::ActiveModelTrait;
use sea_orm::ActiveValue::Set;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::encode_jwt;
use crate::error::{WebError, WebResult};
use crate::requests::{MakeLoginRequest, TokenResponse};

/// Passwordless sign-in: any address on an allowed civil-service domain
/// gets an account on first login. Possession of the mailbox is checked
/// upstream by the single sign-on proxy, so the address is trusted here.
pub async fn post_login(
    state: State<Arc<ServerState>>,
    Json(body): Json<MakeLoginRequest>,
) -> WebResult<Json<BaseResponse<TokenResponse>>> {
    let email = normalize_email(&body.email).map_err(WebError::BadRequest)?;

    if !email_domain_allowed(&email, &state.cli.allowed_email_domains) {
        return Err(WebError::Forbidden(
            "Please enter a valid Civil Service email".to_string(),
        ));
    }

    let user = match get_user_by_email(Arc::clone(&state), &email).await? {
        Some(user) => user,
        None => {
            let now = Utc::now().naive_utc();
            let auser = AUser {
                id: Set(Uuid::new_v4()),
                email: Set(email.clone()),
                is_staff: Set(false),
                is_active: Set(true),
                created_at: Set(now),
                modified_at: Set(now),
            };

            let user = auser.insert(&state.db).await?;
            tracing::info!("Created account for {}", email);
            user
        }
    };

    if !user.is_active {
        return Err(WebError::Unauthorized("Account is disabled".to_string()));
    }

    let token = encode_jwt(&state.cli, user.id)
        .map_err(|_| WebError::InternalServerError("Failed to generate token".to_string()))?;

    let res = BaseResponse {
        error: false,
        message: TokenResponse { token },
    };

    Ok(Json(res))
}
