// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Admin management of the service catalog.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    auth::AdminOnly,
    error::ApiError,
    models::{CreateServiceRequest, MessageResponse, UpdateServiceRequest},
    state::AppState,
    storage::{Service, ServiceRepository, SERVICE_LISTING},
};

#[utoipa::path(
    get,
    path = "/api/admin/services",
    tag = "Admin Services",
    security(("bearer_auth" = [])),
    responses((status = 200, body = [Service]), (status = 401))
)]
pub async fn list_services(
    _admin: AdminOnly,
    State(state): State<AppState>,
) -> Result<Json<Vec<Service>>, ApiError> {
    let services = ServiceRepository::new(state.storage()).list(&SERVICE_LISTING)?;
    Ok(Json(services))
}

#[utoipa::path(
    post,
    path = "/api/admin/services",
    request_body = CreateServiceRequest,
    tag = "Admin Services",
    security(("bearer_auth" = [])),
    responses((status = 201, body = Service), (status = 401))
)]
pub async fn create_service(
    _admin: AdminOnly,
    State(state): State<AppState>,
    Json(request): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<Service>), ApiError> {
    let service = ServiceRepository::new(state.storage()).create(request)?;
    info!(service_id = %service.id, "Service created");
    Ok((StatusCode::CREATED, Json(service)))
}

#[utoipa::path(
    put,
    path = "/api/admin/services/{service_id}",
    params(
        ("service_id" = String, Path, description = "Identifier of the service to update")
    ),
    request_body = UpdateServiceRequest,
    tag = "Admin Services",
    security(("bearer_auth" = [])),
    responses((status = 200, body = Service), (status = 401), (status = 404))
)]
pub async fn update_service(
    _admin: AdminOnly,
    Path(service_id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<UpdateServiceRequest>,
) -> Result<Json<Service>, ApiError> {
    let service = ServiceRepository::new(state.storage()).update(&service_id, request)?;
    info!(service_id = %service.id, "Service updated");
    Ok(Json(service))
}

#[utoipa::path(
    delete,
    path = "/api/admin/services/{service_id}",
    params(
        ("service_id" = String, Path, description = "Identifier of the service to delete")
    ),
    tag = "Admin Services",
    security(("bearer_auth" = [])),
    responses((status = 200, body = MessageResponse), (status = 401), (status = 404))
)]
pub async fn delete_service(
    _admin: AdminOnly,
    Path(service_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    ServiceRepository::new(state.storage()).delete(&service_id)?;
    info!(service_id = %service_id, "Service deleted");
    Ok(Json(MessageResponse::new("Service deleted successfully")))
}
