// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! External collaborators: outbound email and uploaded file storage.

pub mod email;
pub mod file_store;

pub use email::{DisabledNotifier, Notifier, NotifyError, ResendNotifier};
pub use file_store::{FileStore, FileStoreError, LocalFileStore, StoredFile, UPLOADS_URL_PREFIX};
