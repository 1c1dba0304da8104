// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Document Storage Module
//!
//! Persistent storage for the site's managed content, one JSON document per
//! record.
//!
//! ## Storage Layout
//!
//! ```text
//! <DATA_DIR>/<DB_NAME>/
//!   services/
//!     {service_id}.json
//!   gallery/
//!     {item_id}.json
//!   contacts/
//!     {submission_id}.json
//! ```
//!
//! Uploaded images are not stored here; see [`crate::providers::file_store`].

pub mod documents;
pub mod paths;
pub mod repository;
pub mod seed;

pub use documents::{DocumentStorage, StorageError, StorageResult};
pub use paths::StoragePaths;
pub use repository::{
    ContactRepository, ContactSubmission, EntityRepository, GalleryItem, GalleryRepository,
    ListOptions, Service, ServiceRepository, CONTACT_LISTING, GALLERY_ADMIN_LISTING,
    GALLERY_PUBLIC_LISTING, SERVICE_LISTING,
};
