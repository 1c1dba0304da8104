// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Path utilities for the document store layout.

use std::path::{Path, PathBuf};

/// Collection holding [`Service`](super::Service) documents.
pub const SERVICES_COLLECTION: &str = "services";
/// Collection holding [`GalleryItem`](super::GalleryItem) documents.
pub const GALLERY_COLLECTION: &str = "gallery";
/// Collection holding [`ContactSubmission`](super::ContactSubmission) documents.
pub const CONTACTS_COLLECTION: &str = "contacts";

/// All collections created by [`DocumentStorage::initialize`](super::DocumentStorage::initialize).
pub const COLLECTIONS: [&str; 3] = [SERVICES_COLLECTION, GALLERY_COLLECTION, CONTACTS_COLLECTION];

/// Storage path utilities for one database directory.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    root: PathBuf,
}

impl StoragePaths {
    /// Create paths rooted at a database directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory of the database.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory containing all documents of a collection.
    pub fn collection_dir(&self, collection: &str) -> PathBuf {
        self.root.join(collection)
    }

    /// Path to a single document file.
    pub fn document(&self, collection: &str, id: &str) -> PathBuf {
        self.collection_dir(collection).join(format!("{id}.json"))
    }
}

/// Whether `id` could have been produced by the store's id generator.
///
/// Anything else (path separators, dots, empty strings) never names a
/// document and must not be turned into a path.
pub fn is_valid_document_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 64
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
