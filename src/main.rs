// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::env;

use tracing_subscriber::EnvFilter;

use relational_gatekeeper::api::router;
use relational_gatekeeper::auth::{Role, SigningKeyMaterial, TokenCodec};
use relational_gatekeeper::config::{
    AuthSettings, ServerConfig, SEED_ADMIN_PASSWORD_ENV, SEED_ADMIN_USERNAME_ENV,
};
use relational_gatekeeper::state::AppState;
use relational_gatekeeper::store::InMemoryStore;

#[tokio::main]
async fn main() {
    init_tracing();

    // Signing configuration is loaded once and immutable from here on.
    let auth_settings = AuthSettings::from_env().expect("Invalid auth configuration");
    let keys = SigningKeyMaterial::from_secret(
        auth_settings.secret.as_bytes(),
        auth_settings.algorithm,
    );
    tracing::info!(
        algorithm = %auth_settings.algorithm,
        lifetime_secs = auth_settings.lifetime.as_secs(),
        "loaded signing key material"
    );
    let codec = TokenCodec::new(keys, auth_settings.lifetime);

    // Seed the first admin account from the environment; without one the
    // admin-only endpoints are unreachable until a token is issued some
    // other way.
    let mut store = InMemoryStore::new();
    if let (Ok(username), Ok(password)) = (
        env::var(SEED_ADMIN_USERNAME_ENV),
        env::var(SEED_ADMIN_PASSWORD_ENV),
    ) {
        let admin = store
            .insert_user(username, password, Role::Admin)
            .expect("Failed to seed admin user");
        tracing::info!(user_id = %admin.user_id, "seeded admin account");
    } else {
        tracing::warn!("no admin account seeded; set {SEED_ADMIN_USERNAME_ENV} and {SEED_ADMIN_PASSWORD_ENV}");
    }

    let state = AppState::new(store, codec);
    let app = router(state);

    let server = ServerConfig::from_env();
    let listener = tokio::net::TcpListener::bind(server.bind_addr())
        .await
        .expect("Failed to bind server address");
    tracing::info!(
        "Gatekeeper listening on http://{} (docs at /docs)",
        server.bind_addr()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install shutdown signal handler");
    tracing::info!("shutdown signal received");
}
