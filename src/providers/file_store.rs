// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Storage for uploaded images.
//!
//! Files are written under `UPLOADS_DIR` with a fresh `<uuid>.<ext>` name
//! and served back at `/uploads/<name>`. The URL is the stable reference
//! stored in service and gallery records.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

/// URL prefix under which uploaded files are served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

const MAX_EXTENSION_LEN: usize = 10;

/// A file accepted by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Public URL, e.g. `/uploads/3f2a...c1.jpg`
    pub url: String,
    /// Name on disk
    pub filename: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FileStoreError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid file reference: {0}")]
    InvalidReference(String),
}

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Store `bytes` under a new unique name derived from `original_name`.
    async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<StoredFile, FileStoreError>;

    /// Delete a file by its URL or bare name. `Ok(false)` if it did not exist.
    async fn delete(&self, reference: &str) -> Result<bool, FileStoreError>;
}

/// File store backed by a local directory.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the uploads directory if needed.
    pub fn initialize(&self) -> Result<(), FileStoreError> {
        std::fs::create_dir_all(&self.root)?;
        Ok(())
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<StoredFile, FileStoreError> {
        let filename = unique_filename(original_name);
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&filename), bytes).await?;

        tracing::info!(filename = %filename, size = bytes.len(), "Stored uploaded file");
        Ok(StoredFile {
            url: format!("{UPLOADS_URL_PREFIX}/{filename}"),
            filename,
        })
    }

    async fn delete(&self, reference: &str) -> Result<bool, FileStoreError> {
        let name = stored_name(reference)
            .ok_or_else(|| FileStoreError::InvalidReference(reference.to_string()))?;

        match tokio::fs::remove_file(self.root.join(name)).await {
            Ok(()) => {
                tracing::info!(filename = %name, "Deleted uploaded file");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// New on-disk name keeping the original extension, if it has a sane one.
pub fn unique_filename(original_name: &str) -> String {
    let id = Uuid::new_v4();
    let extension = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| {
            !ext.is_empty()
                && ext.len() <= MAX_EXTENSION_LEN
                && ext.chars().all(|c| c.is_ascii_alphanumeric())
        });

    match extension {
        Some(ext) => format!("{id}.{ext}"),
        None => id.to_string(),
    }
}

/// Strip the URL prefix and reject anything that is not a plain file name.
fn stored_name(reference: &str) -> Option<&str> {
    let name = reference
        .strip_prefix(UPLOADS_URL_PREFIX)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(reference);

    let plain = !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_');
    plain.then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn unique_filename_keeps_extension() {
        let name = unique_filename("photo.JPG");
        assert!(name.ends_with(".JPG"));
        assert_eq!(name.len(), 36 + 4);
        assert!(unique_filename("scan.WebP").ends_with(".WebP"));
        assert_ne!(unique_filename("photo.jpg"), unique_filename("photo.jpg"));
    }

    #[test]
    fn unique_filename_drops_odd_extensions() {
        assert_eq!(unique_filename("no_extension").len(), 36);
        assert_eq!(unique_filename("evil.p/hp").len(), 36);
        assert_eq!(unique_filename("x.verylongextension").len(), 36);
    }

    #[test]
    fn stored_name_rejects_traversal() {
        assert_eq!(stored_name("/uploads/abc.png"), Some("abc.png"));
        assert_eq!(stored_name("abc.png"), Some("abc.png"));
        assert_eq!(stored_name("/uploads/../secret"), None);
        assert_eq!(stored_name("../etc/passwd"), None);
        assert_eq!(stored_name(""), None);
    }

    #[tokio::test]
    async fn save_writes_bytes_and_returns_url() {
        let dir = TempDir::new().unwrap();
        let store = LocalFileStore::new(dir.path().join("uploads"));

        let stored = store.save("before.png", b"\x89PNG").await.unwrap();
        assert_eq!(stored.url, format!("/uploads/{}", stored.filename));
        assert!(stored.filename.ends_with(".png"));

        let on_disk = std::fs::read(store.root().join(&stored.filename)).unwrap();
        assert_eq!(on_disk, b"\x89PNG");
    }

    #[tokio::test]
    async fn delete_by_url_then_again_reports_missing() {
        let dir = TempDir::new().unwrap();
        let store = LocalFileStore::new(dir.path());
        let stored = store.save("a.webp", b"data").await.unwrap();

        assert!(store.delete(&stored.url).await.unwrap());
        assert!(!store.delete(&stored.url).await.unwrap());
    }

    #[tokio::test]
    async fn delete_rejects_paths_outside_root() {
        let dir = TempDir::new().unwrap();
        let store = LocalFileStore::new(dir.path());
        let result = store.delete("../outside.txt").await;
        assert!(matches!(result, Err(FileStoreError::InvalidReference(_))));
    }
}
