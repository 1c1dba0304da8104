// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Admin review of contact submissions. Submissions cannot be edited.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::{
    auth::AdminOnly,
    error::ApiError,
    models::MessageResponse,
    state::AppState,
    storage::{ContactRepository, ContactSubmission, CONTACT_LISTING},
};

#[utoipa::path(
    get,
    path = "/api/admin/contacts",
    tag = "Admin Contacts",
    security(("bearer_auth" = [])),
    responses((status = 200, body = [ContactSubmission]), (status = 401))
)]
pub async fn list_contacts(
    _admin: AdminOnly,
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactSubmission>>, ApiError> {
    let contacts = ContactRepository::new(state.storage()).list(&CONTACT_LISTING)?;
    Ok(Json(contacts))
}

#[utoipa::path(
    delete,
    path = "/api/admin/contacts/{contact_id}",
    params(
        ("contact_id" = String, Path, description = "Identifier of the submission to delete")
    ),
    tag = "Admin Contacts",
    security(("bearer_auth" = [])),
    responses((status = 200, body = MessageResponse), (status = 401), (status = 404))
)]
pub async fn delete_contact(
    _admin: AdminOnly,
    Path(contact_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    ContactRepository::new(state.storage()).delete(&contact_id)?;
    info!(contact_id = %contact_id, "Contact deleted");
    Ok(Json(MessageResponse::new("Contact deleted successfully")))
}
