// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Site Backend - marketing site API
//!
//! Serves the public service catalog and gallery, accepts contact form
//! submissions, and exposes a single-admin management API for the same
//! content plus image uploads.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Admin credentials and session tokens
//! - `providers` - Outbound email and uploaded file storage
//! - `storage` - JSON document store and typed repositories

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod state;
pub mod storage;

#[cfg(test)]
mod test_support;
