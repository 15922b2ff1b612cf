// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User roles for authorization.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User roles for authorization.
///
/// Every issued token carries exactly one role. The set is closed: a token
/// whose role claim is not one of these variants fails verification as
/// malformed. Adding a variant here (and to [`Role::ALL`]) is the only code
/// change needed to grow the role set; guards operate on role sets and are
/// unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access (user management)
    Admin,
    /// Read-only access to own resources
    Viewer,
}

impl Role {
    /// Every role in the closed set, in declaration order.
    pub const ALL: [Role; 2] = [Role::Admin, Role::Viewer];

    /// Parse role from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Role> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "viewer" => Some(Role::Viewer),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Viewer => write!(f, "viewer"),
        }
    }
}
