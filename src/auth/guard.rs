// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Role-based authorization guard.

use super::claims::Principal;
use super::error::AuthError;
use super::roles::Role;

/// Immutable set of roles allowed to invoke one operation.
///
/// Bound at route registration and never mutated afterwards, so a single
/// value is shared by every concurrent request for that operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSet {
    allowed: &'static [Role],
}

impl RoleSet {
    /// A set containing exactly the given roles.
    pub const fn of(allowed: &'static [Role]) -> Self {
        Self { allowed }
    }

    /// The full role set: any authenticated principal qualifies.
    pub const fn all() -> Self {
        Self { allowed: &Role::ALL }
    }

    /// Membership test.
    pub fn contains(&self, role: Role) -> bool {
        self.allowed.iter().any(|allowed| *allowed == role)
    }

    /// The roles in this set.
    pub fn roles(&self) -> &'static [Role] {
        self.allowed
    }
}

impl std::fmt::Display for RoleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for role in self.allowed {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{role}")?;
            first = false;
        }
        Ok(())
    }
}

/// Authorization decision for one operation.
///
/// Holds the operation's allowed-role set and nothing else; `check` is a
/// pure membership test with no I/O and no per-request state.
#[derive(Debug, Clone, Copy)]
pub struct Guard {
    allowed: RoleSet,
}

impl Guard {
    /// Create a guard for the given allowed-role set.
    pub const fn new(allowed: RoleSet) -> Self {
        Self { allowed }
    }

    /// Allow iff the principal's role is a member of the allowed set.
    ///
    /// `NotAuthorized` is distinct from every authentication failure: the
    /// caller is known, it just lacks permission.
    pub fn check(&self, principal: &Principal) -> Result<(), AuthError> {
        if self.allowed.contains(principal.role) {
            Ok(())
        } else {
            Err(AuthError::NotAuthorized)
        }
    }

    /// The allowed-role set this guard enforces.
    pub fn allowed(&self) -> RoleSet {
        self.allowed
    }
}
