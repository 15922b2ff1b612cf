// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User endpoints: self-read plus admin-only user management.
//!
//! Access levels are bound in the route table (`api::router`), not here:
//! `/v1/users/me` admits any authenticated role, the rest are admin-only.
//! Handlers receive an already-verified [`Principal`] via the `Auth`
//! extractor.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    auth::{Auth, Principal, Role},
    error::ApiError,
    models::{CreateUserRequest, UserResponse},
    state::AppState,
};

/// Response for GET /v1/users/me
#[derive(Debug, Serialize, ToSchema)]
pub struct UserMeResponse {
    /// Caller's unique ID (token `sub` claim)
    pub user_id: String,
    /// Caller's role
    pub role: Role,
}

impl From<Principal> for UserMeResponse {
    fn from(principal: Principal) -> Self {
        Self {
            user_id: principal.subject_id,
            role: principal.role,
        }
    }
}

/// Get the current authenticated caller's identity.
///
/// Reflects the verified token only; no store lookup.
#[utoipa::path(
    get,
    path = "/v1/users/me",
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Caller identity", body = UserMeResponse),
        (status = 401, description = "Unauthorized - invalid or missing token"),
    )
)]
pub async fn get_current_user(Auth(principal): Auth) -> Json<UserMeResponse> {
    Json(principal.into())
}

/// List all users.
#[utoipa::path(
    get,
    path = "/v1/users",
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 401, description = "Unauthorized - invalid or missing token"),
        (status = 403, description = "Forbidden - admin role required"),
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserResponse>> {
    let store = state.store.read().await;
    let users = store.list_users().into_iter().map(UserResponse::from).collect();
    Json(users)
}

/// Create a new user.
#[utoipa::path(
    post,
    path = "/v1/users",
    tag = "Users",
    security(("bearer" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Unauthorized - invalid or missing token"),
        (status = 403, description = "Forbidden - admin role required"),
        (status = 409, description = "Username already taken"),
    )
)]
pub async fn create_user(
    Auth(actor): Auth,
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    if request.username.trim().is_empty() {
        return Err(ApiError::bad_request("Username must not be empty"));
    }
    if request.password.is_empty() {
        return Err(ApiError::bad_request("Password must not be empty"));
    }

    let mut store = state.store.write().await;
    let user = store.insert_user(request.username, request.password, request.role)?;

    tracing::info!(
        actor = %actor.subject_id,
        user_id = %user.user_id,
        role = %user.role,
        "user created"
    );

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Delete a user by ID.
#[utoipa::path(
    delete,
    path = "/v1/users/{user_id}",
    tag = "Users",
    security(("bearer" = [])),
    params(
        ("user_id" = String, Path, description = "ID of the user to delete")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Unauthorized - invalid or missing token"),
        (status = 403, description = "Forbidden - admin role required"),
        (status = 404, description = "User not found"),
    )
)]
pub async fn delete_user(
    Auth(actor): Auth,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    let user = store.delete_user(&user_id)?;

    tracing::info!(actor = %actor.subject_id, user_id = %user.user_id, "user deleted");

    Ok(StatusCode::NO_CONTENT)
}
