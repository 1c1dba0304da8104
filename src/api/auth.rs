// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Admin session endpoints.

use axum::{extract::State, Json};
use tracing::{info, warn};

use crate::{
    auth::{AdminOnly, AuthError},
    models::{LoginRequest, LoginResponse, VerifyResponse},
    state::AppState,
};

/// Exchange the admin email and password for a session token.
///
/// Wrong email and wrong password produce the same response.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = LoginRequest,
    tag = "Admin",
    responses(
        (status = 200, body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let credentials = state.credentials.clone();
    let email = request.email.clone();

    // argon2 verification is CPU-bound
    let token = tokio::task::spawn_blocking(move || {
        credentials.login(&request.email, &request.password)
    })
    .await
    .map_err(|e| AuthError::InternalError(format!("login task failed: {e}")))?;

    match token {
        Ok(token) => {
            info!("Admin logged in");
            Ok(Json(LoginResponse { token, email }))
        }
        Err(e) => {
            warn!("Rejected admin login attempt");
            Err(e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/verify",
    tag = "Admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, body = VerifyResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn verify(AdminOnly(admin): AdminOnly) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        valid: true,
        email: admin.email,
    })
}
