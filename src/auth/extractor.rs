// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for authenticated principals.
//!
//! Use the `Auth` extractor in handlers to require authentication:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(principal): Auth) -> impl IntoResponse {
//!     // principal is the verified Principal
//! }
//! ```
//!
//! Routes bound through the guard middleware already carry a verified
//! principal in request extensions; the extractor picks that up without
//! re-verifying. On unguarded (public) routes the extractor performs the
//! full bearer extraction and verification itself.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use super::claims::Principal;
use super::codec::TokenCodec;
use super::error::AuthError;
use crate::state::AppState;

/// Pull the bearer credential off a request and verify it.
///
/// This is the single seam between the wire-level request representation
/// and the rest of the core: both the `Auth` extractor and the guard
/// middleware authenticate through here. A missing header, a non-UTF-8
/// header value, and a non-Bearer scheme are all `MissingCredential`;
/// verification failures keep their internal kind.
pub fn authenticate(headers: &HeaderMap, codec: &TokenCodec) -> Result<Principal, AuthError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingCredential)?
        .to_str()
        .map_err(|_| AuthError::MissingCredential)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingCredential)?;

    let claims = codec.verify(token.trim())?;
    Ok(Principal::from_claims(claims))
}

/// Extractor for authenticated principals.
pub struct Auth(pub Principal);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Guard middleware already verified and stashed the principal.
        if let Some(principal) = parts.extensions.get::<Principal>().cloned() {
            return Ok(Auth(principal));
        }

        let principal = authenticate(&parts.headers, &state.codec)?;
        Ok(Auth(principal))
    }
}
