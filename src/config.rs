// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Environment variable names and typed loaders. Configuration is read
//! once at startup; the signing settings become immutable key material
//! for the life of the process, so changing `AUTH_SECRET` invalidates
//! every previously issued token on the next start.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `AUTH_SECRET` | Shared secret for token signing/verification | Required |
//! | `AUTH_ALGORITHM` | HMAC algorithm (`HS256`, `HS384`, `HS512`) | `HS256` |
//! | `TOKEN_LIFETIME_SECS` | Token lifetime in seconds | `3600` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `SEED_ADMIN_USERNAME` | Username of the seeded admin account | Optional |
//! | `SEED_ADMIN_PASSWORD` | Password of the seeded admin account | Optional |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::auth::SigningAlgorithm;

/// Environment variable name for the token signing secret.
pub const AUTH_SECRET_ENV: &str = "AUTH_SECRET";

/// Environment variable name for the signing algorithm identifier.
pub const AUTH_ALGORITHM_ENV: &str = "AUTH_ALGORITHM";

/// Environment variable name for the token lifetime in seconds.
pub const TOKEN_LIFETIME_ENV: &str = "TOKEN_LIFETIME_SECS";

/// Environment variable names for the seeded admin account.
pub const SEED_ADMIN_USERNAME_ENV: &str = "SEED_ADMIN_USERNAME";
pub const SEED_ADMIN_PASSWORD_ENV: &str = "SEED_ADMIN_PASSWORD";

/// Default token lifetime (one hour).
pub const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 3600;

/// Configuration loading failure; fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{AUTH_SECRET_ENV} must be set")]
    MissingSecret,
    #[error("{AUTH_ALGORITHM_ENV} is not a supported HMAC algorithm: {0}")]
    InvalidAlgorithm(String),
    #[error("{TOKEN_LIFETIME_ENV} is not a positive integer: {0}")]
    InvalidLifetime(String),
}

/// Signing configuration for the token codec.
///
/// An explicitly constructed value, not ambient global state: tests build
/// their own with per-test secrets.
#[derive(Debug)]
pub struct AuthSettings {
    pub secret: String,
    pub algorithm: SigningAlgorithm,
    pub lifetime: Duration,
}

impl AuthSettings {
    /// Load signing settings from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = env::var(AUTH_SECRET_ENV).map_err(|_| ConfigError::MissingSecret)?;
        if secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }

        let algorithm = match env::var(AUTH_ALGORITHM_ENV) {
            Ok(value) => SigningAlgorithm::from_str(&value)
                .ok_or(ConfigError::InvalidAlgorithm(value))?,
            Err(_) => SigningAlgorithm::default(),
        };

        let lifetime = match env::var(TOKEN_LIFETIME_ENV) {
            Ok(value) => {
                let secs: u64 = value
                    .parse()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or(ConfigError::InvalidLifetime(value))?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_TOKEN_LIFETIME_SECS),
        };

        Ok(Self {
            secret,
            algorithm,
            lifetime,
        })
    }
}

/// HTTP bind configuration.
#[derive(Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load bind settings from the environment, with defaults.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080);
        Self { host, port }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
