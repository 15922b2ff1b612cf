// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication and Authorization Module
//!
//! This module is the access-control core of the Gatekeeper API: it issues
//! signed identity tokens, verifies them, and gates operations by role.
//!
//! ## Auth Flow
//!
//! 1. Client logs in with primary credentials; the login handler calls
//!    [`TokenCodec::issue`] and returns a signed JWT
//! 2. Client sends `Authorization: Bearer <token>` on subsequent requests
//! 3. Server, per guarded route:
//!    - extracts the bearer credential
//!    - verifies signature and expiry, producing a [`Principal`]
//!    - checks the principal's role against the route's allowed-role set
//!
//! ## Security
//!
//! - Tokens are HMAC-signed with a process-wide shared secret; the
//!   signature is the sole integrity boundary for the role claim
//! - Tokens are stateless: expiry is the only invalidation, there is no
//!   revocation list
//! - Verification failures all render as one undifferentiated 401; only a
//!   role mismatch on a verified principal renders 403
//! - Expiry has zero leeway and the boundary is strict: a token is valid
//!   only while `now < exp`

pub mod claims;
pub mod clock;
pub mod codec;
pub mod error;
pub mod extractor;
pub mod guard;
pub mod keys;
pub mod middleware;
pub mod roles;

pub use claims::{Principal, TokenClaims};
pub use clock::{Clock, SystemClock};
pub use codec::TokenCodec;
pub use error::AuthError;
pub use extractor::Auth;
pub use guard::{Guard, RoleSet};
pub use keys::{SigningAlgorithm, SigningKeyMaterial};
pub use middleware::{bind, Access};
pub use roles::Role;
