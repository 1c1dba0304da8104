// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::CredentialVerifier;
use crate::providers::{DisabledNotifier, FileStore, Notifier};
use crate::storage::DocumentStorage;

/// Shared request state. Everything in it is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<DocumentStorage>,
    pub credentials: Arc<CredentialVerifier>,
    pub notifier: Arc<dyn Notifier>,
    pub file_store: Arc<dyn FileStore>,
}

impl AppState {
    /// State with notifications disabled.
    pub fn new(
        storage: DocumentStorage,
        credentials: CredentialVerifier,
        file_store: Arc<dyn FileStore>,
    ) -> Self {
        Self {
            storage: Arc::new(storage),
            credentials: Arc::new(credentials),
            notifier: Arc::new(DisabledNotifier),
            file_store,
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn storage(&self) -> &DocumentStorage {
        &self.storage
    }
}
