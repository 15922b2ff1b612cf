// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication and authorization errors.
//!
//! The variants stay distinguishable internally (logging, tests); the HTTP
//! rendering collapses every authentication failure into one 401 body so a
//! caller probing the token scheme learns nothing about which check failed.
//! `NotAuthorized` is the exception: the caller's identity is already
//! verified, so answering 403 discloses nothing sensitive.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Authentication error type.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No bearer credential present on the request
    #[error("No bearer credential presented")]
    MissingCredential,
    /// Token cannot be parsed into the expected structure
    #[error("Token is malformed")]
    Malformed,
    /// Token signature does not match (tampering, wrong secret, wrong algorithm)
    #[error("Token signature is invalid")]
    InvalidSignature,
    /// Token signature is valid but the lifetime has passed
    #[error("Token has expired")]
    Expired,
    /// Caller is authenticated but lacks the required role
    #[error("Insufficient permissions for this operation")]
    NotAuthorized,
    /// Internal failure during token construction
    #[error("Internal authentication error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
    error_code: String,
}

impl AuthError {
    /// Internal diagnostic code for this error. Logged, never sent.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingCredential => "missing_credential",
            AuthError::Malformed => "malformed_token",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::Expired => "token_expired",
            AuthError::NotAuthorized => "not_authorized",
            AuthError::Internal(_) => "internal_error",
        }
    }

    /// HTTP status this error renders as.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingCredential
            | AuthError::Malformed
            | AuthError::InvalidSignature
            | AuthError::Expired => StatusCode::UNAUTHORIZED,
            AuthError::NotAuthorized => StatusCode::FORBIDDEN,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!(error_code = self.error_code(), "request rejected: {self}");

        let status = self.status_code();
        // Authentication failures share one body regardless of cause.
        let body = match status {
            StatusCode::UNAUTHORIZED => AuthErrorBody {
                error: "Authentication required".to_string(),
                error_code: "unauthenticated".to_string(),
            },
            StatusCode::FORBIDDEN => AuthErrorBody {
                error: "Insufficient permissions for this operation".to_string(),
                error_code: "forbidden".to_string(),
            },
            _ => AuthErrorBody {
                error: "Internal authentication error".to_string(),
                error_code: "internal_error".to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn authentication_failures_share_one_401_body() {
        let mut bodies = Vec::new();
        for error in [
            AuthError::MissingCredential,
            AuthError::Malformed,
            AuthError::InvalidSignature,
            AuthError::Expired,
        ] {
            let response = error.into_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            bodies.push(body_json(response).await);
        }
        // No detail leaks about why a token failed.
        assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(bodies[0]["error_code"], "unauthenticated");
    }

    #[tokio::test]
    async fn not_authorized_returns_403() {
        let response = AuthError::NotAuthorized.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body["error_code"], "forbidden");
    }

    #[tokio::test]
    async fn internal_returns_500_without_detail() {
        let response = AuthError::Internal("key failure".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(!body["error"].as_str().unwrap().contains("key failure"));
    }

    #[test]
    fn error_codes_stay_distinguishable_internally() {
        assert_eq!(AuthError::Malformed.error_code(), "malformed_token");
        assert_eq!(AuthError::InvalidSignature.error_code(), "invalid_signature");
        assert_eq!(AuthError::Expired.error_code(), "token_expired");
        assert_eq!(AuthError::MissingCredential.error_code(), "missing_credential");
        assert_eq!(AuthError::NotAuthorized.error_code(), "not_authorized");
    }
}
