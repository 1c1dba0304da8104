// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Shared fixtures for handler and router tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Duration;
use tempfile::TempDir;

use crate::auth::{AdminCredentials, CredentialVerifier};
use crate::providers::{LocalFileStore, Notifier, NotifyError};
use crate::state::AppState;
use crate::storage::{ContactSubmission, DocumentStorage, StoragePaths};

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";
pub const JWT_SECRET: &[u8] = b"test-secret-that-is-at-least-32-bytes-long";

/// Fresh state over a temporary data and uploads directory.
pub fn test_state() -> (AppState, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut storage = DocumentStorage::new(StoragePaths::new(temp_dir.path().join("db")));
    storage.initialize().expect("Failed to initialize storage");

    let admin = AdminCredentials::from_plaintext(ADMIN_EMAIL, ADMIN_PASSWORD)
        .expect("Failed to hash test password");
    let credentials = CredentialVerifier::new(admin, JWT_SECRET, Duration::hours(24));
    let file_store = Arc::new(LocalFileStore::new(temp_dir.path().join("uploads")));

    (AppState::new(storage, credentials, file_store), temp_dir)
}

pub fn admin_token(state: &AppState) -> String {
    state
        .credentials
        .issue_token(ADMIN_EMAIL)
        .expect("Failed to issue test token")
}

/// Notifier that always fails, as if the provider were down.
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify_contact(&self, _contact: &ContactSubmission) -> Result<(), NotifyError> {
        Err(NotifyError::Request("connection refused".into()))
    }
}

/// Notifier that records the ids it was asked to send.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<String>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_contact(&self, contact: &ContactSubmission) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(contact.id.clone());
        Ok(())
    }
}
