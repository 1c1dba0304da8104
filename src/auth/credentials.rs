// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Admin credential checks and session token issuance.
//!
//! The administrator is a single identity read from configuration. Its
//! password is hashed with argon2id once at startup and the plaintext is
//! dropped. Session tokens are HS256 JWTs signed with the process-wide
//! secret.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use super::{AdminClaims, AuthError};

/// Clock skew tolerance (60 seconds).
const CLOCK_SKEW_LEEWAY: u64 = 60;

/// Hash a password into an argon2id PHC string with a random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::InternalError(format!("password hashing failed: {e}")))
}

/// Check a password against a PHC hash. A malformed hash never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            debug!(error = %e, "Stored password hash is malformed");
            false
        }
    }
}

/// The configured administrator identity.
#[derive(Clone)]
pub struct AdminCredentials {
    email: String,
    password_hash: String,
}

impl AdminCredentials {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Hash `password` and build the identity from it.
    pub fn from_plaintext(email: impl Into<String>, password: &str) -> Result<Self, AuthError> {
        Ok(Self::new(email, hash_password(password)?))
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Verifies admin logins and the session tokens handed out for them.
pub struct CredentialVerifier {
    admin: AdminCredentials,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl CredentialVerifier {
    pub fn new(admin: AdminCredentials, secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = CLOCK_SKEW_LEEWAY;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            admin,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn admin_email(&self) -> &str {
        self.admin.email()
    }

    /// Whether `email` and `password` identify the administrator.
    ///
    /// The password hash is always checked, even for an unknown email, so
    /// both failure modes take the same time.
    pub fn check_login(&self, email: &str, password: &str) -> bool {
        let password_ok = verify_password(password, &self.admin.password_hash);
        password_ok && email == self.admin.email
    }

    /// Check a login and issue a token for it.
    pub fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        if !self.check_login(email, password) {
            return Err(AuthError::InvalidCredentials);
        }
        self.issue_token(email)
    }

    /// Sign a session token for `email`, valid for the configured TTL.
    pub fn issue_token(&self, email: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = AdminClaims::new(
            email,
            now.timestamp(),
            (now + self.ttl).timestamp(),
        );
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InternalError(format!("token signing failed: {e}")))
    }

    /// Decode and check a session token.
    ///
    /// Returns `None` for malformed, tampered, or expired tokens.
    pub fn verify_token(&self, token: &str) -> Option<AdminClaims> {
        match decode::<AdminClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                debug!(error = %e, "Session token rejected");
                None
            }
        }
    }
}

impl std::fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialVerifier")
            .field("admin", &self.admin)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
