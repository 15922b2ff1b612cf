// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Signing key material for token issuance and verification.
//!
//! Built once from configuration at startup and shared read-only for the
//! life of the process. Changing the secret invalidates every outstanding
//! token on the next restart; there is no rotation or grace window.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};

/// HMAC signing algorithms accepted by this service.
///
/// The set is closed to symmetric algorithms: issuance and verification
/// share one secret, and an asymmetric identifier in configuration is a
/// misconfiguration, not a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningAlgorithm {
    Hs256,
    Hs384,
    Hs512,
}

impl SigningAlgorithm {
    /// Parse an algorithm identifier (case-insensitive).
    pub fn from_str(s: &str) -> Option<SigningAlgorithm> {
        match s.to_uppercase().as_str() {
            "HS256" => Some(SigningAlgorithm::Hs256),
            "HS384" => Some(SigningAlgorithm::Hs384),
            "HS512" => Some(SigningAlgorithm::Hs512),
            _ => None,
        }
    }

    /// The jsonwebtoken algorithm tag.
    pub fn as_jwt(&self) -> Algorithm {
        match self {
            SigningAlgorithm::Hs256 => Algorithm::HS256,
            SigningAlgorithm::Hs384 => Algorithm::HS384,
            SigningAlgorithm::Hs512 => Algorithm::HS512,
        }
    }
}

impl Default for SigningAlgorithm {
    fn default() -> Self {
        SigningAlgorithm::Hs256
    }
}

impl std::fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SigningAlgorithm::Hs256 => write!(f, "HS256"),
            SigningAlgorithm::Hs384 => write!(f, "HS384"),
            SigningAlgorithm::Hs512 => write!(f, "HS512"),
        }
    }
}

/// Shared-secret key material with precomputed encoding and decoding keys.
pub struct SigningKeyMaterial {
    algorithm: SigningAlgorithm,
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKeyMaterial {
    /// Build key material from a shared secret.
    pub fn from_secret(secret: &[u8], algorithm: SigningAlgorithm) -> Self {
        Self {
            algorithm,
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    pub fn algorithm(&self) -> SigningAlgorithm {
        self.algorithm
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }
}

impl std::fmt::Debug for SigningKeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the secret.
        f.debug_struct("SigningKeyMaterial")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}
