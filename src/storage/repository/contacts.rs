// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Contact form submissions.
//!
//! Submissions are append-only: they can be listed, created and deleted,
//! never edited, so `ContactSubmission` has no `Updatable` impl.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Entity, EntityRepository, ListOptions, SortDirection, SortField, SortKey};
use crate::models::CreateContactRequest;
use crate::storage::paths::CONTACTS_COLLECTION;

/// A message left through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ContactSubmission {
    /// Unique submission identifier (UUID)
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, rename = "postalCode")]
    pub postal_code: Option<String>,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Admin listing: newest first.
pub const CONTACT_LISTING: ListOptions =
    ListOptions::sorted(SortField::CreatedAt, SortDirection::Descending);

pub type ContactRepository<'a> = EntityRepository<'a, ContactSubmission>;

impl Entity for ContactSubmission {
    const COLLECTION: &'static str = CONTACTS_COLLECTION;
    const NOT_FOUND: &'static str = "Contact not found";

    type Draft = CreateContactRequest;

    fn from_draft(id: String, draft: CreateContactRequest, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            postal_code: draft.postal_code,
            subject: draft.subject,
            message: draft.message,
            created_at: now,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn sort_key(&self, field: SortField) -> Option<SortKey> {
        match field {
            SortField::CreatedAt => Some(SortKey::Time(self.created_at)),
            SortField::Order => None,
        }
    }
}
