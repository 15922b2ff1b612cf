// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Login endpoint: validates primary credentials and issues a token.

use axum::{extract::State, Json};

use crate::{
    error::ApiError,
    models::{LoginRequest, LoginResponse},
    state::AppState,
};

/// Authenticate with username and password and receive a bearer token.
///
/// Unknown usernames and wrong passwords produce byte-identical 401
/// responses; the caller cannot probe which usernames exist.
#[utoipa::path(
    post,
    path = "/v1/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 401, description = "Invalid username or password"),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let store = state.store.read().await;

    let user = match store.find_by_username(&request.username) {
        Some(user) if user.password == request.password => user,
        _ => return Err(ApiError::unauthorized("Invalid username or password")),
    };

    let access_token = state.codec.issue(&user.user_id, user.role).map_err(|error| {
        tracing::error!(error_code = error.error_code(), "token issuance failed: {error}");
        ApiError::internal("Failed to issue token")
    })?;

    tracing::info!(user_id = %user.user_id, role = %user.role, "issued token");

    Ok(Json(LoginResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.codec.lifetime().as_secs(),
    }))
}
