// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token issuance and verification.
//!
//! Tokens are compact HMAC-signed JWTs (`header.claims.signature`, each
//! segment base64url) so off-the-shelf bearer-token clients can hold and
//! present them unmodified. The signature is the sole integrity boundary:
//! the guard trusts the role inside a verified token completely, so every
//! verification failure mode must surface here, never past here.

use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::{decode, encode, errors::ErrorKind, Header, Validation};

use super::claims::TokenClaims;
use super::clock::{Clock, SystemClock};
use super::error::AuthError;
use super::keys::SigningKeyMaterial;
use super::roles::Role;

/// Issues and verifies signed identity tokens.
///
/// Holds the process-wide key material, the configured token lifetime, and
/// the clock used for expiry checks. No mutable state; one codec instance
/// serves all concurrent requests via `Arc`.
pub struct TokenCodec {
    keys: SigningKeyMaterial,
    lifetime: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    /// Create a codec with the system clock.
    pub fn new(keys: SigningKeyMaterial, lifetime: Duration) -> Self {
        Self {
            keys,
            lifetime,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock. Used by tests to drive expiry deterministically.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Configured token lifetime.
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Issue a signed token for the given subject and role.
    ///
    /// Claims carry `iat = now` and `exp = now + lifetime`. Pure
    /// computation; the only failure path is key/serialization trouble
    /// inside the JWT library, which no well-formed input triggers.
    pub fn issue(&self, subject_id: &str, role: Role) -> Result<String, AuthError> {
        let iat = self.clock.now_unix();
        let claims = TokenClaims {
            sub: subject_id.to_string(),
            role,
            iat,
            exp: iat + self.lifetime.as_secs() as i64,
        };

        let header = Header::new(self.keys.algorithm().as_jwt());
        encode(&header, &claims, self.keys.encoding_key())
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// Checks, in order: structure, signature (with the configured
    /// algorithm pinned; a header naming any other algorithm fails as
    /// `InvalidSignature`), then expiry against the injected clock. A
    /// token is valid strictly before `exp` with zero leeway; at exactly
    /// `exp` it is expired.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::new(self.keys.algorithm().as_jwt());
        // Expiry is checked below against the injected clock, not the
        // library's system-time read.
        validation.validate_exp = false;
        validation.validate_aud = false;

        let token_data = decode::<TokenClaims>(token, self.keys.decoding_key(), &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    AuthError::InvalidSignature
                }
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::Malformed,
            })?;

        let claims = token_data.claims;
        if self.clock.now_unix() >= claims.exp {
            return Err(AuthError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::clock::TestClock;
    use crate::auth::keys::SigningAlgorithm;

    const SECRET: &[u8] = b"test-secret-at-least-32-bytes-long!!";
    const T0: i64 = 1_700_000_000;

    fn test_codec(clock: Arc<TestClock>) -> TokenCodec {
        let keys = SigningKeyMaterial::from_secret(SECRET, SigningAlgorithm::Hs256);
        TokenCodec::new(keys, Duration::from_secs(60)).with_clock(clock)
    }

    #[test]
    fn round_trip_preserves_subject_and_role() {
        let codec = test_codec(Arc::new(TestClock::at(T0)));

        let token = codec.issue("42", Role::Admin).unwrap();
        let claims = codec.verify(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.role, Role::Admin);

        let token = codec.issue("user_abc", Role::Viewer).unwrap();
        let claims = codec.verify(&token).unwrap();
        assert_eq!(claims.sub, "user_abc");
        assert_eq!(claims.role, Role::Viewer);
    }

    #[test]
    fn issue_stamps_iat_and_exp_from_clock_and_lifetime() {
        let codec = test_codec(Arc::new(TestClock::at(T0)));
        let token = codec.issue("42", Role::Viewer).unwrap();
        let claims = codec.verify(&token).unwrap();
        assert_eq!(claims.iat, T0);
        assert_eq!(claims.exp, T0 + 60);
    }

    #[test]
    fn token_is_valid_strictly_before_expiry() {
        let clock = Arc::new(TestClock::at(T0));
        let codec = test_codec(clock.clone());
        let token = codec.issue("42", Role::Admin).unwrap();

        clock.set(T0 + 59);
        assert!(codec.verify(&token).is_ok());

        // Expiry is inclusive-exclusive: at exactly `exp` the token is dead.
        clock.set(T0 + 60);
        assert!(matches!(codec.verify(&token), Err(AuthError::Expired)));

        clock.set(T0 + 3600);
        assert!(matches!(codec.verify(&token), Err(AuthError::Expired)));
    }

    #[test]
    fn one_second_lifetime_expires_after_two_seconds() {
        let clock = Arc::new(TestClock::at(T0));
        let keys = SigningKeyMaterial::from_secret(SECRET, SigningAlgorithm::Hs256);
        let codec = TokenCodec::new(keys, Duration::from_secs(1)).with_clock(clock.clone());

        let token = codec.issue("42", Role::Admin).unwrap();
        assert!(codec.verify(&token).is_ok());

        clock.advance(2);
        assert!(matches!(codec.verify(&token), Err(AuthError::Expired)));
    }

    #[test]
    fn tampered_payload_fails_as_invalid_signature() {
        let codec = test_codec(Arc::new(TestClock::at(T0)));
        let token = codec.issue("42", Role::Viewer).unwrap();

        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        assert_eq!(parts.len(), 3);

        // Flip one character of the claims segment, keeping it valid
        // base64url so only the signature check can catch the change.
        for index in 0..parts[1].len() {
            let mut payload: Vec<u8> = parts[1].clone().into_bytes();
            payload[index] = if payload[index] == b'A' { b'B' } else { b'A' };
            let tampered_segment = String::from_utf8(payload).unwrap();
            if tampered_segment == parts[1] {
                continue;
            }
            parts[1] = tampered_segment;
            break;
        }
        let tampered = parts.join(".");
        assert_ne!(tampered, token);

        assert!(matches!(
            codec.verify(&tampered),
            Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn token_signed_with_other_secret_fails_as_invalid_signature() {
        let clock = Arc::new(TestClock::at(T0));
        let codec = test_codec(clock.clone());
        let other = TokenCodec::new(
            SigningKeyMaterial::from_secret(b"another-secret-entirely-here!!!!", SigningAlgorithm::Hs256),
            Duration::from_secs(60),
        )
        .with_clock(clock);

        let token = other.issue("42", Role::Admin).unwrap();
        assert!(matches!(
            codec.verify(&token),
            Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn token_signed_with_other_algorithm_fails_as_invalid_signature() {
        let clock = Arc::new(TestClock::at(T0));
        let codec = test_codec(clock.clone());
        let other = TokenCodec::new(
            SigningKeyMaterial::from_secret(SECRET, SigningAlgorithm::Hs384),
            Duration::from_secs(60),
        )
        .with_clock(clock);

        let token = other.issue("42", Role::Admin).unwrap();
        assert!(matches!(
            codec.verify(&token),
            Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn garbage_input_fails_as_malformed() {
        let codec = test_codec(Arc::new(TestClock::at(T0)));
        for garbage in ["", "not-a-token", "a.b", "a.b.c", "  .  .  "] {
            assert!(
                matches!(codec.verify(garbage), Err(AuthError::Malformed)),
                "expected Malformed for {garbage:?}"
            );
        }
    }

    #[test]
    fn unknown_role_with_valid_signature_fails_as_malformed() {
        let codec = test_codec(Arc::new(TestClock::at(T0)));

        // Correctly signed, structurally sound, but the role is outside
        // the closed set.
        let keys = SigningKeyMaterial::from_secret(SECRET, SigningAlgorithm::Hs256);
        let claims = serde_json::json!({
            "sub": "42",
            "role": "superuser",
            "iat": T0,
            "exp": T0 + 60,
        });
        let token = encode(
            &Header::new(SigningAlgorithm::Hs256.as_jwt()),
            &claims,
            keys.encoding_key(),
        )
        .unwrap();

        assert!(matches!(codec.verify(&token), Err(AuthError::Malformed)));
    }

    #[test]
    fn isolated_codecs_use_distinct_secrets() {
        let clock = Arc::new(TestClock::at(T0));
        let codec_a = TokenCodec::new(
            SigningKeyMaterial::from_secret(b"secret-a-secret-a-secret-a-32byte", SigningAlgorithm::Hs256),
            Duration::from_secs(60),
        )
        .with_clock(clock.clone());
        let codec_b = TokenCodec::new(
            SigningKeyMaterial::from_secret(b"secret-b-secret-b-secret-b-32byte", SigningAlgorithm::Hs256),
            Duration::from_secs(60),
        )
        .with_clock(clock);

        let token = codec_a.issue("42", Role::Viewer).unwrap();
        assert!(codec_a.verify(&token).is_ok());
        assert!(codec_b.verify(&token).is_err());
    }
}
