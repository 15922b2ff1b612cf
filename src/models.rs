// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response data structures used by the REST API. All types
//! derive `Serialize`/`Deserialize` and `ToSchema` for automatic JSON
//! handling and OpenAPI documentation.
//!
//! Responses never carry credentials: [`UserResponse`] is built from a
//! stored record and drops the password field by construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::Role;
use crate::store::UserRecord;

// =============================================================================
// Authentication
// =============================================================================

/// Request body for POST /v1/auth/login.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Username to authenticate as
    pub username: String,
    /// Primary credential
    pub password: String,
}

/// Response for a successful login.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Signed bearer token
    pub access_token: String,
    /// Always `Bearer`
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
}

// =============================================================================
// User management
// =============================================================================

/// Request body for POST /v1/users.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Username; must be unique
    pub username: String,
    /// Primary credential for the new user
    pub password: String,
    /// Role granted to the new user
    pub role: Role,
}

/// A stored user, as exposed by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    /// User's unique ID
    pub user_id: String,
    /// Username
    pub username: String,
    /// User's role
    pub role: Role,
    /// When the user was created
    pub created_at: DateTime<Utc>,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_drops_password() {
        let record = UserRecord {
            user_id: "u1".to_string(),
            username: "alice".to_string(),
            password: "hunter2".to_string(),
            role: Role::Viewer,
            created_at: Utc::now(),
        };

        let response: UserResponse = record.into();
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("alice"));
        assert!(!json.contains("hunter2"));
    }

    #[test]
    fn login_request_deserializes() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"username":"alice","password":"pw"}"#).unwrap();
        assert_eq!(request.username, "alice");
        assert_eq!(request.password, "pw");
    }

    #[test]
    fn create_user_request_rejects_unknown_role() {
        let result: Result<CreateUserRequest, _> =
            serde_json::from_str(r#"{"username":"bob","password":"pw","role":"root"}"#);
        assert!(result.is_err());
    }
}
