// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Session token claims.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role stamped into every issued token.
pub const ADMIN_ROLE: &str = "admin";

/// Claims carried by an admin session token.
///
/// Tokens are never persisted: a token is valid as long as its signature
/// checks out and `exp` has not passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminClaims {
    /// Email of the authenticated administrator
    pub email: String,

    /// Always `"admin"`
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration (Unix timestamp)
    pub exp: i64,
}

impl AdminClaims {
    pub fn new(email: impl Into<String>, iat: i64, exp: i64) -> Self {
        Self {
            email: email.into(),
            role: ADMIN_ROLE.to_string(),
            iat,
            exp,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_claims_carry_admin_role() {
        let claims = AdminClaims::new("admin@example.com", 1_700_000_000, 1_700_086_400);
        assert!(claims.is_admin());
        assert_eq!(claims.email, "admin@example.com");
    }

    #[test]
    fn serialized_claims_use_plain_field_names() {
        let claims = AdminClaims::new("admin@example.com", 1, 2);
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["email"], "admin@example.com");
        assert_eq!(json["role"], "admin");
        assert_eq!(json["iat"], 1);
        assert_eq!(json["exp"], 2);
    }
}
