// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token claims and the authenticated principal.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::roles::Role;

/// Claims signed into a token.
///
/// `role` is the closed [`Role`] enum, not a free string: a token carrying
/// an unrecognized role fails deserialization and therefore verification.
/// A token is valid strictly before `exp`; at `exp` it is already expired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Role granted to the subject
    pub role: Role,

    /// Issued at (Unix seconds)
    pub iat: i64,

    /// Expiration (Unix seconds), `iat` + configured lifetime
    pub exp: i64,
}

/// Authenticated identity extracted from a verified token.
///
/// Constructed only from claims that passed signature and expiry checks.
/// Lives for one request: the guard middleware inserts it into request
/// extensions and handlers read it through the `Auth` extractor.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Principal {
    /// Canonical user ID (token `sub` claim)
    pub subject_id: String,

    /// Role carried by the token
    pub role: Role,
}

impl Principal {
    /// Create from verified claims.
    pub fn from_claims(claims: TokenClaims) -> Self {
        Self {
            subject_id: claims.sub,
            role: claims.role,
        }
    }
}
