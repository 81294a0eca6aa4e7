// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The axum application: two managers (`python`, `java`) multiplexed under
//! one listener, per spec.md §2 ("Two independent manager instances...
//! sharing no state") and §6.1 (one HTTP surface on port 10000).

use std::sync::Arc;

use axum::routing::post;
use axum::Router;
use lintfleet_manager::FleetController;
use tower_http::trace::TraceLayer;

use crate::routes;

/// Shared state handed to every handler: one controller per supported
/// language. Cloning `AppState` only clones the two `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub python: Arc<FleetController>,
    pub java: Arc<FleetController>,
}

impl AppState {
    /// Resolve `<lang>` to its controller, or `None` for anything outside
    /// spec.md §6.1's `{python, java}`.
    pub fn resolve(&self, lang: &str) -> Option<&Arc<FleetController>> {
        match lang {
            "python" => Some(&self.python),
            "java" => Some(&self.java),
            _ => None,
        }
    }
}

/// Build the router (spec.md §6.1). A thin layer over `lintfleet-manager`:
/// every handler validates its request, resolves `<lang>`, and delegates.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/lint/:lang", post(routes::lint::handle_lint))
        .route(
            "/v1/admin/workers/:lang",
            post(routes::admin::handle_add_worker).delete(routes::admin::handle_remove_worker),
        )
        .route("/v1/admin/version/:lang", post(routes::admin::handle_new_version))
        .route("/v1/admin/rollback/:lang", post(routes::admin::handle_rollback))
        .route("/v1/admin/balance/:lang", post(routes::admin::handle_balance))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
