// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `lintfleetd` process entrypoint: initializes tracing, boots one
//! [`FleetController`] per supported language on the hard-coded initial
//! versions (spec.md §6.4), serves the axum router on
//! [`lintfleet_daemon::config::port`], and drains on SIGINT/SIGTERM
//! (spec.md §5).

use std::sync::Arc;

use lintfleet_adapters::ProcessWorkerAdapter;
use lintfleet_daemon::{build_router, config, AppState};
use lintfleet_manager::FleetController;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let adapter = Arc::new(ProcessWorkerAdapter::new());
    let cancel = CancellationToken::new();

    let python = Arc::new(FleetController::new(config::python_initial_version(), adapter.clone()));
    let java = Arc::new(FleetController::new(config::java_initial_version(), adapter));

    let python_tasks = python.spawn_loops(cancel.clone());
    let java_tasks = java.spawn_loops(cancel.clone());

    let router = build_router(AppState { python, java });

    let port = config::port();
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "lintfleetd listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(lintfleet_daemon::signal::shutdown_signal(config::shutdown_deadline()))
        .await?;

    cancel.cancel();
    let _ = python_tasks.reconciler.await;
    let _ = python_tasks.prober.await;
    let _ = java_tasks.reconciler.await;
    let _ = java_tasks.prober.await;

    Ok(())
}
