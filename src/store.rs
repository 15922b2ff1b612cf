// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory user store.
//!
//! User records back the login operation and the admin user-management
//! endpoints. Persistence is out of scope for this service; the store
//! lives behind an `RwLock` in [`crate::state::AppState`].

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::Role;
use crate::error::ApiError;

/// Stored user record.
///
/// `password` is the primary credential compared at login. It never leaves
/// the store module in an API response.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user_id: String,
    pub username: String,
    pub password: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct InMemoryStore {
    users: HashMap<String, UserRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new user. Usernames are unique.
    pub fn insert_user(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Result<UserRecord, ApiError> {
        let username = username.into();
        if self.find_by_username(&username).is_some() {
            return Err(ApiError::conflict("Username is already taken"));
        }

        let user = UserRecord {
            user_id: Uuid::new_v4().to_string(),
            username,
            password: password.into(),
            role,
            created_at: Utc::now(),
        };
        self.users.insert(user.user_id.clone(), user.clone());
        Ok(user)
    }

    pub fn find_by_username(&self, username: &str) -> Option<&UserRecord> {
        self.users.values().find(|user| user.username == username)
    }

    pub fn get(&self, user_id: &str) -> Option<&UserRecord> {
        self.users.get(user_id)
    }

    /// All users, newest first.
    pub fn list_users(&self) -> Vec<UserRecord> {
        let mut users: Vec<UserRecord> = self.users.values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.username.cmp(&b.username)));
        users
    }

    pub fn delete_user(&mut self, user_id: &str) -> Result<UserRecord, ApiError> {
        self.users
            .remove(user_id)
            .ok_or_else(|| ApiError::not_found("User not found"))
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_find_by_username() {
        let mut store = InMemoryStore::new();
        let user = store.insert_user("alice", "pw", Role::Admin).unwrap();
        assert_eq!(user.role, Role::Admin);

        let found = store.find_by_username("alice").unwrap();
        assert_eq!(found.user_id, user.user_id);
        assert!(store.find_by_username("bob").is_none());
    }

    #[test]
    fn duplicate_username_is_a_conflict() {
        let mut store = InMemoryStore::new();
        store.insert_user("alice", "pw", Role::Viewer).unwrap();
        let result = store.insert_user("alice", "other", Role::Admin);
        assert!(result.is_err());
        assert_eq!(store.user_count(), 1);
    }

    #[test]
    fn delete_removes_user() {
        let mut store = InMemoryStore::new();
        let user = store.insert_user("alice", "pw", Role::Viewer).unwrap();

        assert!(store.delete_user(&user.user_id).is_ok());
        assert!(store.get(&user.user_id).is_none());
        assert!(store.delete_user(&user.user_id).is_err());
    }

    #[test]
    fn list_users_returns_all() {
        let mut store = InMemoryStore::new();
        store.insert_user("alice", "pw", Role::Admin).unwrap();
        store.insert_user("bob", "pw", Role::Viewer).unwrap();

        let users = store.list_users();
        assert_eq!(users.len(), 2);
    }
}
