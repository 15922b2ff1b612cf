// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Guard middleware and route access binding.
//!
//! Every route in the API is registered through [`bind`] with an explicit
//! [`Access`] value: either `Public` or `Allow(role_set)`. There is no
//! variant for "unspecified", so an operation cannot silently skip the
//! guard; public routes are a visible, greppable choice in the route table.
//!
//! For guarded routes the middleware authenticates first and evaluates the
//! guard second. A request that fails authentication is rejected before
//! the guard ever sees it, and the handler only runs with a verified
//! principal already in the request extensions.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};

use super::codec::TokenCodec;
use super::extractor::authenticate;
use super::guard::{Guard, RoleSet};
use super::roles::Role;
use crate::state::AppState;

/// Access policy bound to one operation at registration time.
#[derive(Debug, Clone, Copy)]
pub enum Access {
    /// Explicitly public: no credential required.
    Public,
    /// Requires a verified principal whose role is in the set.
    Allow(RoleSet),
}

impl Access {
    /// Allow exactly the given roles.
    pub const fn allow(roles: &'static [Role]) -> Self {
        Access::Allow(RoleSet::of(roles))
    }

    /// Allow any authenticated principal.
    pub const fn authenticated() -> Self {
        Access::Allow(RoleSet::all())
    }
}

/// State handed to the guard middleware: the shared codec plus the
/// operation's guard.
#[derive(Clone)]
pub struct GuardContext {
    codec: Arc<TokenCodec>,
    guard: Guard,
}

/// Attach the access policy to a router.
///
/// `Access::Public` returns the router untouched; `Access::Allow` wraps it
/// in the guard middleware so authentication and authorization run before
/// any handler in the subtree.
pub fn bind(router: Router<AppState>, access: Access, state: &AppState) -> Router<AppState> {
    match access {
        Access::Public => router,
        Access::Allow(allowed) => router.route_layer(middleware::from_fn_with_state(
            GuardContext {
                codec: state.codec.clone(),
                guard: Guard::new(allowed),
            },
            require_roles,
        )),
    }
}

/// Guard middleware: authenticate, check the role, stash the principal.
pub async fn require_roles(
    State(ctx): State<GuardContext>,
    mut request: Request,
    next: Next,
) -> Response {
    let principal = match authenticate(request.headers(), &ctx.codec) {
        Ok(principal) => principal,
        Err(error) => return error.into_response(),
    };

    if let Err(error) = ctx.guard.check(&principal) {
        tracing::debug!(
            subject_id = %principal.subject_id,
            role = %principal.role,
            allowed = %ctx.guard.allowed(),
            "principal lacks required role"
        );
        return error.into_response();
    }

    request.extensions_mut().insert(principal);
    next.run(request).await
}
