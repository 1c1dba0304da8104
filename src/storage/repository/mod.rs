// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Repository layer providing typed access to the document store.
//!
//! [`EntityRepository`] implements the CRUD lifecycle once for every
//! managed kind. Each kind configures it through [`Entity`] (collection,
//! sort keys, construction from a create request) and, when it may be
//! edited after creation, [`Updatable`]. Contact submissions do not
//! implement `Updatable`, so no update path exists for them.

use std::cmp::Ordering;
use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use super::paths::is_valid_document_id;
use super::{DocumentStorage, StorageError, StorageResult};

pub mod contacts;
pub mod gallery;
pub mod services;

pub use contacts::{ContactRepository, ContactSubmission, CONTACT_LISTING};
pub use gallery::{GalleryItem, GalleryRepository, GALLERY_ADMIN_LISTING, GALLERY_PUBLIC_LISTING};
pub use services::{Service, ServiceRepository, SERVICE_LISTING};

/// Maximum number of records returned by a listing.
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// Fields a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Order,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Comparable value of a sort field on one record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Int(i64),
    Time(DateTime<Utc>),
}

/// How a listing is ordered and capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// `None` keeps the store's native (insertion) order.
    pub sort: Option<(SortField, SortDirection)>,
    pub limit: usize,
}

impl ListOptions {
    pub const fn native() -> Self {
        Self {
            sort: None,
            limit: DEFAULT_LIST_LIMIT,
        }
    }

    pub const fn sorted(field: SortField, direction: SortDirection) -> Self {
        Self {
            sort: Some((field, direction)),
            limit: DEFAULT_LIST_LIMIT,
        }
    }

    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// A document kind managed through [`EntityRepository`].
pub trait Entity: Serialize + DeserializeOwned + Clone {
    /// Collection (directory) holding this kind.
    const COLLECTION: &'static str;
    /// Caller-facing message for unknown ids.
    const NOT_FOUND: &'static str;

    /// Validated create request this kind is built from.
    type Draft;

    /// Build a new record from a draft with a freshly assigned id.
    fn from_draft(id: String, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    fn id(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;

    /// Value of `field` on this record, `None` if the kind lacks the field.
    fn sort_key(&self, field: SortField) -> Option<SortKey>;
}

/// A kind whose records can be edited after creation.
pub trait Updatable: Entity {
    /// Partial update: `None` fields leave the stored value untouched.
    type Patch;

    fn apply(&mut self, patch: Self::Patch);

    /// Record a mutation time.
    fn touch(&mut self, at: DateTime<Utc>);
}

/// Generic CRUD over one collection of the document store.
pub struct EntityRepository<'a, T> {
    storage: &'a DocumentStorage,
    _kind: PhantomData<T>,
}

impl<'a, T: Entity> EntityRepository<'a, T> {
    pub fn new(storage: &'a DocumentStorage) -> Self {
        Self {
            storage,
            _kind: PhantomData,
        }
    }

    fn not_found() -> StorageError {
        StorageError::NotFound(T::NOT_FOUND.to_string())
    }

    /// Check if a record exists.
    pub fn exists(&self, id: &str) -> bool {
        is_valid_document_id(id)
            && self
                .storage
                .exists(self.storage.paths().document(T::COLLECTION, id))
    }

    /// Get a record by id.
    pub fn get(&self, id: &str) -> StorageResult<T> {
        if !self.exists(id) {
            return Err(Self::not_found());
        }
        self.storage
            .read_json(self.storage.paths().document(T::COLLECTION, id))
            .map_err(|e| match e {
                StorageError::NotFound(_) => Self::not_found(),
                other => other,
            })
    }

    /// Assign an id and timestamps, persist, and return the stored record.
    pub fn create(&self, draft: T::Draft) -> StorageResult<T> {
        let id = Uuid::new_v4().to_string();
        let entity = T::from_draft(id, draft, Utc::now());
        self.storage
            .write_json(self.storage.paths().document(T::COLLECTION, entity.id()), &entity)?;
        Ok(entity)
    }

    /// Hard delete. No other collection is touched.
    pub fn delete(&self, id: &str) -> StorageResult<()> {
        let _guard = self.storage.lock_writes();
        if !self.exists(id) {
            return Err(Self::not_found());
        }
        self.storage
            .delete(self.storage.paths().document(T::COLLECTION, id))
            .map_err(|e| match e {
                StorageError::NotFound(_) => Self::not_found(),
                other => other,
            })
    }

    /// Every readable record in native (insertion) order.
    fn load_all(&self) -> StorageResult<Vec<T>> {
        let ids = self
            .storage
            .list_ids(self.storage.paths().collection_dir(T::COLLECTION))?;

        let mut records = Vec::with_capacity(ids.len());
        for id in ids {
            match self.get(&id) {
                Ok(record) => records.push(record),
                // Deleted between listing and reading.
                Err(StorageError::NotFound(_)) => {}
                Err(e) => {
                    tracing::warn!(collection = T::COLLECTION, id = %id, error = %e, "Skipping unreadable document");
                }
            }
        }

        records.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(records)
    }

    /// List up to `options.limit` records, sorted as requested.
    pub fn list(&self, options: &ListOptions) -> StorageResult<Vec<T>> {
        let mut records = self.load_all()?;

        if let Some((field, direction)) = options.sort {
            records.sort_by(|a, b| compare_keys(a.sort_key(field), b.sort_key(field), direction));
        }

        records.truncate(options.limit);
        Ok(records)
    }

    /// Number of records in the collection.
    pub fn count(&self) -> StorageResult<usize> {
        Ok(self
            .storage
            .list_ids(self.storage.paths().collection_dir(T::COLLECTION))?
            .len())
    }
}

impl<T: Updatable> EntityRepository<'_, T> {
    /// Merge `patch` into the stored record and return the record as re-read
    /// from the store.
    ///
    /// An empty patch only refreshes the update timestamp. Runs under the
    /// store's write lock, so a record deleted first stays deleted and the
    /// update reports it as not found.
    pub fn update(&self, id: &str, patch: T::Patch) -> StorageResult<T> {
        let _guard = self.storage.lock_writes();
        let mut entity = self.get(id)?;
        entity.apply(patch);
        entity.touch(Utc::now());

        self.storage
            .write_json(self.storage.paths().document(T::COLLECTION, id), &entity)?;

        self.get(id)
    }
}

/// Records lacking the sort field go last in either direction.
fn compare_keys(a: Option<SortKey>, b: Option<SortKey>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Ascending => a.cmp(&b),
            SortDirection::Descending => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_sort_last_in_both_directions() {
        let one = Some(SortKey::Int(1));
        assert_eq!(compare_keys(one.clone(), None, SortDirection::Ascending), Ordering::Less);
        assert_eq!(compare_keys(one, None, SortDirection::Descending), Ordering::Less);
    }

    #[test]
    fn descending_reverses_present_keys() {
        let a = Some(SortKey::Int(1));
        let b = Some(SortKey::Int(2));
        assert_eq!(compare_keys(a.clone(), b.clone(), SortDirection::Ascending), Ordering::Less);
        assert_eq!(compare_keys(a, b, SortDirection::Descending), Ordering::Greater);
    }

    #[test]
    fn list_options_default_to_the_fixed_cap() {
        assert_eq!(ListOptions::native().limit, DEFAULT_LIST_LIMIT);
        assert_eq!(
            ListOptions::sorted(SortField::Order, SortDirection::Ascending).with_limit(3),
            ListOptions {
                sort: Some((SortField::Order, SortDirection::Ascending)),
                limit: 3
            }
        );
    }
}
