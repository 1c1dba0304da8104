// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor guarding admin routes.
//!
//! Take `AdminOnly` as the first handler argument:
//!
//! ```rust,ignore
//! async fn my_handler(AdminOnly(admin): AdminOnly) -> impl IntoResponse {
//!     // admin is AdminClaims
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::{AdminClaims, AuthError, CredentialVerifier};
use crate::state::AppState;

/// Decide whether a raw `Authorization` header grants admin access.
///
/// Pure check with no side effects. A valid token issued for anyone other
/// than the configured administrator is rejected exactly like a forged one.
pub fn authorize(
    verifier: &CredentialVerifier,
    header: Option<&str>,
) -> Result<AdminClaims, AuthError> {
    let header = header.ok_or(AuthError::MissingAuthHeader)?;
    let token = header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::InvalidAuthHeader)?;

    let claims = verifier.verify_token(token).ok_or(AuthError::InvalidToken)?;

    if !claims.is_admin() || claims.email != verifier.admin_email() {
        tracing::warn!("Rejected token issued for a non-admin identity");
        return Err(AuthError::InvalidToken);
    }

    Ok(claims)
}

/// Extractor that requires a valid admin session token.
pub struct AdminOnly(pub AdminClaims);

impl FromRequestParts<AppState> for AdminOnly {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = match parts.headers.get(AUTHORIZATION) {
            Some(value) => Some(value.to_str().map_err(|_| AuthError::InvalidAuthHeader)?),
            None => None,
        };

        authorize(&state.credentials, header).map(AdminOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AdminCredentials;
    use crate::test_support::{admin_token, test_state};
    use axum::http::Request;
    use chrono::Duration;

    fn parts_with_header(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/api/admin/services");
        if let Some(value) = value {
            builder = builder.header("Authorization", value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn admin_only_requires_auth_header() {
        let (state, _temp_dir) = test_state();
        let mut parts = parts_with_header(None);

        let result = AdminOnly::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MissingAuthHeader)));
    }

    #[tokio::test]
    async fn admin_only_rejects_non_bearer_scheme() {
        let (state, _temp_dir) = test_state();
        let mut parts = parts_with_header(Some("Basic YWRtaW46cHc="));

        let result = AdminOnly::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::InvalidAuthHeader)));
    }

    #[tokio::test]
    async fn admin_only_rejects_empty_bearer() {
        let (state, _temp_dir) = test_state();
        let mut parts = parts_with_header(Some("Bearer "));

        let result = AdminOnly::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::InvalidAuthHeader)));
    }

    #[tokio::test]
    async fn admin_only_succeeds_with_issued_token() {
        let (state, _temp_dir) = test_state();
        let token = admin_token(&state);
        let mut parts = parts_with_header(Some(&format!("Bearer {token}")));

        let AdminOnly(claims) = AdminOnly::from_request_parts(&mut parts, &state)
            .await
            .expect("token should be accepted");
        assert_eq!(claims.email, state.credentials.admin_email());
    }

    #[tokio::test]
    async fn admin_only_rejects_garbage_token() {
        let (state, _temp_dir) = test_state();
        let mut parts = parts_with_header(Some("Bearer abc.def.ghi"));

        let result = AdminOnly::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn authorize_rejects_token_for_other_email() {
        let admin = AdminCredentials::new("admin@example.com", "unused");
        let verifier = CredentialVerifier::new(
            admin,
            b"test-secret-that-is-at-least-32-bytes-long",
            Duration::hours(1),
        );
        let token = verifier.issue_token("someone@example.com").unwrap();

        let result = authorize(&verifier, Some(&format!("Bearer {token}")));
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn authorize_rejects_expired_token() {
        let admin = AdminCredentials::new("admin@example.com", "unused");
        let verifier = CredentialVerifier::new(
            admin,
            b"test-secret-that-is-at-least-32-bytes-long",
            Duration::hours(-3),
        );
        let token = verifier.issue_token("admin@example.com").unwrap();

        let result = authorize(&verifier, Some(&format!("Bearer {token}")));
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
