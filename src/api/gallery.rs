// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Admin management of gallery items.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    auth::AdminOnly,
    error::ApiError,
    models::{CreateGalleryItemRequest, MessageResponse, UpdateGalleryItemRequest},
    state::AppState,
    storage::{GalleryItem, GalleryRepository, GALLERY_ADMIN_LISTING},
};

/// Newest first. The public listing keeps insertion order instead.
#[utoipa::path(
    get,
    path = "/api/admin/gallery",
    tag = "Admin Gallery",
    security(("bearer_auth" = [])),
    responses((status = 200, body = [GalleryItem]), (status = 401))
)]
pub async fn list_gallery(
    _admin: AdminOnly,
    State(state): State<AppState>,
) -> Result<Json<Vec<GalleryItem>>, ApiError> {
    let items = GalleryRepository::new(state.storage()).list(&GALLERY_ADMIN_LISTING)?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/admin/gallery",
    request_body = CreateGalleryItemRequest,
    tag = "Admin Gallery",
    security(("bearer_auth" = [])),
    responses((status = 201, body = GalleryItem), (status = 401))
)]
pub async fn create_gallery_item(
    _admin: AdminOnly,
    State(state): State<AppState>,
    Json(request): Json<CreateGalleryItemRequest>,
) -> Result<(StatusCode, Json<GalleryItem>), ApiError> {
    let item = GalleryRepository::new(state.storage()).create(request)?;
    info!(item_id = %item.id, category = %item.category, "Gallery item created");
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/api/admin/gallery/{item_id}",
    params(
        ("item_id" = String, Path, description = "Identifier of the gallery item to update")
    ),
    request_body = UpdateGalleryItemRequest,
    tag = "Admin Gallery",
    security(("bearer_auth" = [])),
    responses((status = 200, body = GalleryItem), (status = 401), (status = 404))
)]
pub async fn update_gallery_item(
    _admin: AdminOnly,
    Path(item_id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<UpdateGalleryItemRequest>,
) -> Result<Json<GalleryItem>, ApiError> {
    let item = GalleryRepository::new(state.storage()).update(&item_id, request)?;
    info!(item_id = %item.id, "Gallery item updated");
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/admin/gallery/{item_id}",
    params(
        ("item_id" = String, Path, description = "Identifier of the gallery item to delete")
    ),
    tag = "Admin Gallery",
    security(("bearer_auth" = [])),
    responses((status = 200, body = MessageResponse), (status = 401), (status = 404))
)]
pub async fn delete_gallery_item(
    _admin: AdminOnly,
    Path(item_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    GalleryRepository::new(state.storage()).delete(&item_id)?;
    info!(item_id = %item_id, "Gallery item deleted");
    Ok(Json(MessageResponse::new("Gallery item deleted successfully")))
}
