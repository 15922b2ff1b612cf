// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Route table and OpenAPI document.
//!
//! Every operation is registered through [`bind`] with an explicit
//! [`Access`] value. `Access::Public` routes (health, login) are the only
//! ones reachable without a verified token; everything else names the role
//! set allowed to invoke it.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::{bind, Access, Role},
    models::{CreateUserRequest, LoginRequest, LoginResponse, UserResponse},
    state::AppState,
};

pub mod auth;
pub mod health;
pub mod users;

pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/auth/login", post(auth::login));

    let self_service = Router::new()
        .route("/users/me", get(users::get_current_user));

    let admin = Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{user_id}", delete(users::delete_user));

    let v1_routes = Router::new()
        .merge(bind(public, Access::Public, &state))
        .merge(bind(self_service, Access::authenticated(), &state))
        .merge(bind(admin, Access::allow(&[Role::Admin]), &state));

    let health_route = bind(
        Router::new().route("/health", get(health::health)),
        Access::Public,
        &state,
    );

    Router::new()
        .nest("/v1", v1_routes)
        .merge(health_route)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        auth::login,
        users::get_current_user,
        users::list_users,
        users::create_user,
        users::delete_user
    ),
    components(
        schemas(
            Role,
            LoginRequest,
            LoginResponse,
            CreateUserRequest,
            UserResponse,
            users::UserMeResponse,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Auth", description = "Login and token issuance"),
        (name = "Users", description = "User management")
    )
)]
struct ApiDoc;
