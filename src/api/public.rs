// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Unauthenticated endpoints used by the public site.

use axum::{extract::State, Json};
use tracing::{info, warn};

use crate::{
    error::ApiError,
    models::{ContactSubmittedResponse, CreateContactRequest},
    state::AppState,
    storage::{
        ContactRepository, GalleryItem, GalleryRepository, Service, ServiceRepository,
        GALLERY_PUBLIC_LISTING, SERVICE_LISTING,
    },
};

#[utoipa::path(
    get,
    path = "/api/services",
    tag = "Public",
    responses((status = 200, body = [Service]))
)]
pub async fn list_services(State(state): State<AppState>) -> Result<Json<Vec<Service>>, ApiError> {
    let services = ServiceRepository::new(state.storage()).list(&SERVICE_LISTING)?;
    Ok(Json(services))
}

#[utoipa::path(
    get,
    path = "/api/gallery",
    tag = "Public",
    responses((status = 200, body = [GalleryItem]))
)]
pub async fn list_gallery(State(state): State<AppState>) -> Result<Json<Vec<GalleryItem>>, ApiError> {
    let items = GalleryRepository::new(state.storage()).list(&GALLERY_PUBLIC_LISTING)?;
    Ok(Json(items))
}

/// Store a contact submission, then try to notify the site owner.
///
/// The submission is persisted before the notification is attempted and a
/// failed notification never fails the request.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = CreateContactRequest,
    tag = "Public",
    responses(
        (status = 200, body = ContactSubmittedResponse),
        (status = 422, description = "A required field is missing or blank")
    )
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<CreateContactRequest>,
) -> Result<Json<ContactSubmittedResponse>, ApiError> {
    let blank = request.blank_fields();
    if !blank.is_empty() {
        return Err(ApiError::unprocessable(format!(
            "Required fields are empty: {}",
            blank.join(", ")
        )));
    }

    let contact = ContactRepository::new(state.storage()).create(request)?;
    info!(contact_id = %contact.id, "Contact form submitted");

    let email_sent = match state.notifier.notify_contact(&contact).await {
        Ok(()) => true,
        Err(e) => {
            warn!(contact_id = %contact.id, error = %e, "Contact notification not sent");
            false
        }
    };

    Ok(Json(ContactSubmittedResponse {
        message: "Contact form submitted successfully".to_string(),
        id: contact.id,
        email_sent,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::StatusCode;

    use crate::models::{CreateGalleryItemRequest, CreateServiceRequest};
    use crate::storage::CONTACT_LISTING;
    use crate::test_support::{test_state, FailingNotifier, RecordingNotifier};

    fn contact_request() -> CreateContactRequest {
        CreateContactRequest {
            name: "Marie".into(),
            email: "marie@example.com".into(),
            phone: None,
            postal_code: Some("4000".into()),
            subject: "Devis".into(),
            message: "Cave à vider".into(),
        }
    }

    fn service(title: &str, order: i64) -> CreateServiceRequest {
        CreateServiceRequest {
            title: title.into(),
            description: "desc".into(),
            image: "/uploads/x.jpg".into(),
            order,
        }
    }

    #[tokio::test]
    async fn services_are_listed_by_order() {
        let (state, _dir) = test_state();
        let repo = ServiceRepository::new(state.storage());
        repo.create(service("B", 2)).unwrap();
        repo.create(service("A", 1)).unwrap();

        let Json(services) = list_services(State(state.clone())).await.unwrap();
        let titles: Vec<&str> = services.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn empty_catalog_lists_nothing() {
        let (state, _dir) = test_state();
        let Json(services) = list_services(State(state.clone())).await.unwrap();
        assert!(services.is_empty());
        let Json(items) = list_gallery(State(state)).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn gallery_keeps_insertion_order() {
        let (state, _dir) = test_state();
        let repo = GalleryRepository::new(state.storage());
        for title in ["one", "two", "three"] {
            repo.create(CreateGalleryItemRequest {
                title: title.into(),
                description: "d".into(),
                category: "cleaning".into(),
                image_before: None,
                image_after: None,
                image: Some("/uploads/i.jpg".into()),
            })
            .unwrap();
        }

        let Json(items) = list_gallery(State(state)).await.unwrap();
        let titles: Vec<&str> = items.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn contact_is_stored_and_notified() {
        let (state, _dir) = test_state();
        let notifier = Arc::new(RecordingNotifier::default());
        let state = state.with_notifier(notifier.clone());

        let Json(response) = submit_contact(State(state.clone()), Json(contact_request()))
            .await
            .expect("submission succeeds");

        assert!(response.email_sent);
        assert_eq!(response.message, "Contact form submitted successfully");
        assert_eq!(*notifier.sent.lock().unwrap(), vec![response.id.clone()]);

        let stored = ContactRepository::new(state.storage()).get(&response.id).unwrap();
        assert_eq!(stored.postal_code.as_deref(), Some("4000"));
    }

    #[tokio::test]
    async fn contact_survives_notification_failure() {
        let (state, _dir) = test_state();
        let state = state.with_notifier(Arc::new(FailingNotifier));

        let Json(response) = submit_contact(State(state.clone()), Json(contact_request()))
            .await
            .expect("submission still succeeds");

        assert!(!response.email_sent);
        let stored = ContactRepository::new(state.storage())
            .list(&CONTACT_LISTING)
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, response.id);
    }

    #[tokio::test]
    async fn contact_with_default_notifier_reports_not_sent() {
        let (state, _dir) = test_state();
        let Json(response) = submit_contact(State(state), Json(contact_request()))
            .await
            .unwrap();
        assert!(!response.email_sent);
    }

    #[tokio::test]
    async fn blank_required_field_is_rejected_without_storing() {
        let (state, _dir) = test_state();
        let mut request = contact_request();
        request.message = "   ".into();

        let err = submit_contact(State(state.clone()), Json(request))
            .await
            .expect_err("blank message must be rejected");

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.message.contains("message"));
        assert_eq!(ContactRepository::new(state.storage()).count().unwrap(), 0);
    }
}
