// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::TokenCodec;
use crate::store::InMemoryStore;

/// Shared application state.
///
/// The codec (and the key material inside it) is immutable after startup
/// and shared without locking; the user store is the only mutable state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<InMemoryStore>>,
    pub codec: Arc<TokenCodec>,
}

impl AppState {
    pub fn new(store: InMemoryStore, codec: TokenCodec) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            codec: Arc::new(codec),
        }
    }
}
