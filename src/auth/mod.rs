// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Single-administrator authentication for the management API.
//!
//! ## Auth Flow
//!
//! 1. The admin panel posts `{email, password}` to `/api/admin/login`
//! 2. The server checks them against the configured identity (argon2id)
//!    and returns a signed session token
//! 3. The panel sends `Authorization: Bearer <token>` on every admin call
//! 4. [`AdminOnly`] verifies signature, expiry and identity before the
//!    handler body runs
//!
//! ## Security
//!
//! - Every `/api/admin/*` route except login requires a token
//! - Tokens are HS256 and expire after `TOKEN_TTL_HOURS`
//! - Rejections never say which check failed
//! - Clock skew tolerance is 60 seconds

pub mod claims;
pub mod credentials;
pub mod error;
pub mod extractor;

pub use claims::{AdminClaims, ADMIN_ROLE};
pub use credentials::{hash_password, verify_password, AdminCredentials, CredentialVerifier};
pub use error::AuthError;
pub use extractor::{authorize, AdminOnly};
