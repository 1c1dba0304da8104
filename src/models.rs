// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response bodies of the REST API. Stored records live next
//! to their repositories in [`crate::storage`]; the create requests below
//! double as the drafts those records are built from.
//!
//! ## Partial updates
//!
//! `Update*Request` types carry every mutable field as an `Option`. Absent
//! and `null` fields both mean "leave unchanged", so an optional image can
//! be replaced but not cleared through an update.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Services
// =============================================================================

/// Body of `POST /api/admin/services`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CreateServiceRequest {
    pub title: String,
    pub description: String,
    /// Image reference, typically a URL returned by the upload endpoint.
    pub image: String,
    /// Display position; lower values are listed first.
    #[serde(default)]
    pub order: i64,
}

/// Body of `PUT /api/admin/services/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UpdateServiceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub order: Option<i64>,
}

// =============================================================================
// Gallery
// =============================================================================

/// Body of `POST /api/admin/gallery`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CreateGalleryItemRequest {
    pub title: String,
    pub description: String,
    /// Free-form category, usually `before-after`, `clearance` or `cleaning`.
    pub category: String,
    pub image_before: Option<String>,
    pub image_after: Option<String>,
    pub image: Option<String>,
}

/// Body of `PUT /api/admin/gallery/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UpdateGalleryItemRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_before: Option<String>,
    pub image_after: Option<String>,
    pub image: Option<String>,
}

// =============================================================================
// Contact Form
// =============================================================================

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(rename = "postalCode")]
    pub postal_code: Option<String>,
    pub subject: String,
    pub message: String,
}

impl CreateContactRequest {
    /// Names of required fields that are blank.
    pub fn blank_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// Response of `POST /api/contact`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ContactSubmittedResponse {
    pub message: String,
    /// Identifier of the stored submission.
    pub id: String,
    /// Whether the notification email went out. The submission is stored
    /// either way.
    pub email_sent: bool,
}

// =============================================================================
// Admin Session
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct LoginResponse {
    /// Bearer token for the `Authorization` header.
    pub token: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct VerifyResponse {
    pub valid: bool,
    pub email: String,
}

// =============================================================================
// Misc
// =============================================================================

/// Response of `POST /api/admin/upload-image`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UploadResponse {
    /// Stable URL of the stored image, usable as an `image` field.
    pub url: String,
    /// Name of the file as uploaded.
    pub filename: String,
}

/// Plain confirmation body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_order_defaults_to_zero() {
        let request: CreateServiceRequest =
            serde_json::from_str(r#"{"title":"T","description":"D","image":"/uploads/x.png"}"#)
                .unwrap();
        assert_eq!(request.order, 0);
    }

    #[test]
    fn update_request_treats_null_and_absent_alike() {
        let request: UpdateServiceRequest =
            serde_json::from_str(r#"{"title":null,"order":3}"#).unwrap();
        assert_eq!(
            request,
            UpdateServiceRequest {
                order: Some(3),
                ..Default::default()
            }
        );
    }

    #[test]
    fn contact_request_uses_camel_case_postal_code() {
        let request: CreateContactRequest = serde_json::from_str(
            r#"{"name":"N","email":"n@example.com","postalCode":"1000","subject":"S","message":"M"}"#,
        )
        .unwrap();
        assert_eq!(request.postal_code.as_deref(), Some("1000"));
        assert!(request.phone.is_none());
    }

    #[test]
    fn contact_request_without_subject_is_rejected() {
        let result = serde_json::from_str::<CreateContactRequest>(
            r#"{"name":"N","email":"n@example.com","message":"M"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn blank_fields_lists_whitespace_only_values() {
        let request = CreateContactRequest {
            name: " ".into(),
            email: "n@example.com".into(),
            phone: None,
            postal_code: None,
            subject: "".into(),
            message: "hello".into(),
        };
        assert_eq!(request.blank_fields(), vec!["name", "subject"]);
    }
}
