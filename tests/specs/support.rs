// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared harness: boots the real axum app in-process against
//! [`FakeWorkerAdapter`]s, the way the teacher's root `tests/specs.rs`
//! package drives the compiled daemon binary via `assert_cmd` — except
//! here there's no compiled worker binary to spawn, so the server runs
//! in-process on a `TcpListener` bound to port 0 instead (see SPEC_FULL.md
//! §8).

use std::sync::Arc;

use lintfleet_adapters::fake::FakeWorkerAdapter;
use lintfleet_daemon::{build_router, AppState};
use lintfleet_manager::FleetController;
use tokio_util::sync::CancellationToken;

pub const PYTHON_V1: &str = "bin/python-linter-1.0";
pub const JAVA_V1: &str = "bin/java-linter-1.0";

pub struct Harness {
    pub base_url: String,
    pub client: reqwest::Client,
    pub cancel: CancellationToken,
}

impl Harness {
    pub async fn boot() -> Self {
        let cancel = CancellationToken::new();

        let python = Arc::new(FleetController::new(PYTHON_V1, Arc::new(FakeWorkerAdapter::new())));
        let java = Arc::new(FleetController::new(JAVA_V1, Arc::new(FakeWorkerAdapter::new())));
        python.spawn_loops(cancel.clone());
        java.spawn_loops(cancel.clone());

        let router = build_router(AppState { python, java });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("binding a loopback listener on port 0 never fails");
        let addr = listener.local_addr().expect("bound listener always has a local address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self { base_url: format!("http://{addr}"), client: reqwest::Client::new(), cancel }
    }

    pub async fn lint(&self, lang: &str, content: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/v1/lint/{lang}", self.base_url))
            .json(&serde_json::json!({ "content": content }))
            .send()
            .await
            .expect("request to in-process server never fails at the transport level")
    }

    pub async fn add_worker(&self, lang: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/v1/admin/workers/{lang}", self.base_url))
            .send()
            .await
            .expect("request to in-process server never fails at the transport level")
    }

    pub async fn remove_worker(&self, lang: &str) -> reqwest::Response {
        self.client
            .delete(format!("{}/v1/admin/workers/{lang}", self.base_url))
            .send()
            .await
            .expect("request to in-process server never fails at the transport level")
    }

    pub async fn new_version(&self, lang: &str, version: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/v1/admin/version/{lang}", self.base_url))
            .json(&serde_json::json!({ "version": version }))
            .send()
            .await
            .expect("request to in-process server never fails at the transport level")
    }

    pub async fn rollback(&self, lang: &str, version: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/v1/admin/rollback/{lang}", self.base_url))
            .json(&serde_json::json!({ "version": version }))
            .send()
            .await
            .expect("request to in-process server never fails at the transport level")
    }

    pub async fn balance(&self, lang: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/v1/admin/balance/{lang}", self.base_url))
            .send()
            .await
            .expect("request to in-process server never fails at the transport level")
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Advance virtual time past one reconcile tick and let its detached
/// spawn/shutdown tasks settle. Requires a `#[tokio::test(start_paused =
/// true)]` runtime.
pub async fn advance_one_tick() {
    tokio::time::advance(lintfleet_manager::RECONCILE_INTERVAL + std::time::Duration::from_millis(1))
        .await;
    tokio::task::yield_now().await;
    tokio::task::yield_now().await;
}
