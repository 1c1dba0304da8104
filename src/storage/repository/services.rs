// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Service catalog records.
//!
//! Each service is stored as a separate JSON document under `services/`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    Entity, EntityRepository, ListOptions, SortDirection, SortField, SortKey, Updatable,
};
use crate::models::{CreateServiceRequest, UpdateServiceRequest};
use crate::storage::paths::SERVICES_COLLECTION;

/// A service offered on the site.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Service {
    /// Unique service identifier (UUID)
    pub id: String,
    pub title: String,
    pub description: String,
    /// Image reference URL
    pub image: String,
    /// Display position, ascending
    #[serde(default)]
    pub order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public and admin listings: ascending display order.
pub const SERVICE_LISTING: ListOptions =
    ListOptions::sorted(SortField::Order, SortDirection::Ascending);

pub type ServiceRepository<'a> = EntityRepository<'a, Service>;

impl Entity for Service {
    const COLLECTION: &'static str = SERVICES_COLLECTION;
    const NOT_FOUND: &'static str = "Service not found";

    type Draft = CreateServiceRequest;

    fn from_draft(id: String, draft: CreateServiceRequest, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            image: draft.image,
            order: draft.order,
            created_at: now,
            updated_at: now,
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
            SortField::Order => Some(SortKey::Int(self.order)),
            SortField::CreatedAt => Some(SortKey::Time(self.created_at)),
        }
    }
}

impl Updatable for Service {
    type Patch = UpdateServiceRequest;

    fn apply(&mut self, patch: UpdateServiceRequest) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(order) = patch.order {
            self.order = order;
        }
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}
