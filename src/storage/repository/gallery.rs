// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Gallery item records.
//!
//! Each item is stored as a separate JSON document under `gallery/`. The
//! three image fields are independent: a before/after pair, a single
//! image, or any mix of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    Entity, EntityRepository, ListOptions, SortDirection, SortField, SortKey, Updatable,
};
use crate::models::{CreateGalleryItemRequest, UpdateGalleryItemRequest};
use crate::storage::paths::GALLERY_COLLECTION;

/// A gallery entry showing completed work.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct GalleryItem {
    /// Unique item identifier (UUID)
    pub id: String,
    pub title: String,
    pub description: String,
    /// `before-after`, `clearance`, `cleaning`, or any other label
    pub category: String,
    #[serde(default)]
    pub image_before: Option<String>,
    #[serde(default)]
    pub image_after: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Admin listing: newest first.
pub const GALLERY_ADMIN_LISTING: ListOptions =
    ListOptions::sorted(SortField::CreatedAt, SortDirection::Descending);

/// Public listing: store-native order, no explicit sort.
pub const GALLERY_PUBLIC_LISTING: ListOptions = ListOptions::native();

pub type GalleryRepository<'a> = EntityRepository<'a, GalleryItem>;

impl Entity for GalleryItem {
    const COLLECTION: &'static str = GALLERY_COLLECTION;
    const NOT_FOUND: &'static str = "Gallery item not found";

    type Draft = CreateGalleryItemRequest;

    fn from_draft(id: String, draft: CreateGalleryItemRequest, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            image_before: draft.image_before,
            image_after: draft.image_after,
            image: draft.image,
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
            SortField::CreatedAt => Some(SortKey::Time(self.created_at)),
            SortField::Order => None,
        }
    }
}

impl Updatable for GalleryItem {
    type Patch = UpdateGalleryItemRequest;

    fn apply(&mut self, patch: UpdateGalleryItemRequest) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if patch.image_before.is_some() {
            self.image_before = patch.image_before;
        }
        if patch.image_after.is_some() {
            self.image_after = patch.image_after;
        }
        if patch.image.is_some() {
            self.image = patch.image;
        }
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DocumentStorage, StorageError, StoragePaths};
    use tempfile::TempDir;

    fn test_storage() -> (DocumentStorage, TempDir) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut storage = DocumentStorage::new(StoragePaths::new(dir.path()));
        storage.initialize().expect("Failed to initialize");
        (storage, dir)
    }

    fn draft(title: &str) -> CreateGalleryItemRequest {
        CreateGalleryItemRequest {
            title: title.to_string(),
            description: "Avant/Après".to_string(),
            category: "before-after".to_string(),
            image_before: Some("/uploads/before.jpg".to_string()),
            image_after: Some("/uploads/after.jpg".to_string()),
            image: None,
        }
    }

    #[test]
    fn admin_listing_is_newest_first_and_public_is_insertion_order() {
        let (storage, _dir) = test_storage();
        let repo = GalleryRepository::new(&storage);

        let first = repo.create(draft("first")).unwrap();
        let second = repo.create(draft("second")).unwrap();
        let third = repo.create(draft("third")).unwrap();

        let admin: Vec<String> = repo
            .list(&GALLERY_ADMIN_LISTING)
            .unwrap()
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(admin, vec![third.id.clone(), second.id.clone(), first.id.clone()]);

        let public: Vec<String> = repo
            .list(&GALLERY_PUBLIC_LISTING)
            .unwrap()
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(public, vec![first.id, second.id, third.id]);
    }

    #[test]
    fn update_sets_single_image_without_touching_pair() {
        let (storage, _dir) = test_storage();
        let repo = GalleryRepository::new(&storage);
        let item = repo.create(draft("hangar")).unwrap();

        let updated = repo
            .update(
                &item.id,
                UpdateGalleryItemRequest {
                    image: Some("/uploads/single.webp".into()),
                    category: Some("clearance".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.image.as_deref(), Some("/uploads/single.webp"));
        assert_eq!(updated.category, "clearance");
        assert_eq!(updated.image_before, item.image_before);
        assert_eq!(updated.image_after, item.image_after);
        assert_eq!(updated.title, item.title);
    }

    #[test]
    fn stored_item_without_image_fields_still_loads() {
        let (storage, _dir) = test_storage();
        let repo = GalleryRepository::new(&storage);
        let id = "legacy-item";
        let raw = serde_json::json!({
            "id": id,
            "title": "Cave",
            "description": "Vide cave",
            "category": "cleaning",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        });
        storage
            .write_json(storage.paths().document(GALLERY_COLLECTION, id), &raw)
            .unwrap();

        let item = repo.get(id).unwrap();
        assert!(item.image.is_none() && item.image_before.is_none() && item.image_after.is_none());
    }

    #[test]
    fn delete_unknown_item_reports_gallery_message() {
        let (storage, _dir) = test_storage();
        let repo = GalleryRepository::new(&storage);
        let result = repo.delete("nope");
        assert!(matches!(result, Err(StorageError::NotFound(msg)) if msg == "Gallery item not found"));
    }
}
