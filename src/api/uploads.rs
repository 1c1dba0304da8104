// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Image upload and removal.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{
    auth::AdminOnly,
    error::ApiError,
    models::{MessageResponse, UploadResponse},
    providers::FileStoreError,
    state::AppState,
};

/// Multipart field carrying the image.
pub const UPLOAD_FIELD: &str = "file";

/// Largest accepted upload body.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// OpenAPI shape of the upload form.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

/// Store an image and return the URL to put in a service or gallery item.
#[utoipa::path(
    post,
    path = "/api/admin/upload-image",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    tag = "Admin Uploads",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, body = UploadResponse),
        (status = 401),
        (status = 422, description = "No `file` field in the form"),
        (status = 500, description = "The file could not be stored")
    )
)]
pub async fn upload_image(
    _admin: AdminOnly,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {e}")))?;

        let stored = state
            .file_store
            .save(&original_name, &bytes)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to store uploaded file");
                ApiError::internal(format!("Error uploading file: {e}"))
            })?;

        info!(url = %stored.url, original = %original_name, "Image uploaded");
        return Ok(Json(UploadResponse {
            url: stored.url,
            filename: original_name,
        }));
    }

    Err(ApiError::unprocessable(format!(
        "Missing `{UPLOAD_FIELD}` field"
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/uploads/{filename}",
    params(
        ("filename" = String, Path, description = "Stored file name, as in the upload URL")
    ),
    tag = "Admin Uploads",
    security(("bearer_auth" = [])),
    responses((status = 200, body = MessageResponse), (status = 401), (status = 404))
)]
pub async fn delete_upload(
    _admin: AdminOnly,
    Path(filename): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    match state.file_store.delete(&filename).await {
        Ok(true) => {
            info!(filename = %filename, "Upload deleted");
            Ok(Json(MessageResponse::new("File deleted successfully")))
        }
        Ok(false) | Err(FileStoreError::InvalidReference(_)) => {
            Err(ApiError::not_found("File not found"))
        }
        Err(e) => {
            error!(error = %e, filename = %filename, "Failed to delete upload");
            Err(ApiError::internal("Error deleting file"))
        }
    }
}
