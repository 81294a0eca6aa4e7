// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Two-signal, deadline-bounded shutdown (spec.md §5): the first
//! SIGINT/SIGTERM starts a graceful axum shutdown; a second signal, or the
//! `config::shutdown_deadline` (30s) elapsing first, forces immediate exit.
//! Grounded in the teacher's own `tokio::signal::ctrl_c()` usage
//! (`cli/src/output.rs`, `cli/src/commands/workspace.rs`), generalized from
//! one signal to two plus a timeout.

use std::time::Duration;

use tokio::signal::unix::SignalKind;

async fn ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to install ctrl-c handler");
    }
}

async fn terminate() {
    match tokio::signal::unix::signal(SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to install SIGTERM handler");
            std::future::pending::<()>().await;
        }
    }
}

/// Resolves on the first SIGINT/SIGTERM, then spawns a watcher that forces
/// `std::process::exit` on whichever comes first: a second signal, or
/// `deadline` elapsing — so a graceful drain that stalls on an in-flight
/// connection still bounds the process lifetime at `deadline`.
pub async fn shutdown_signal(deadline: Duration) {
    tokio::select! {
        _ = ctrl_c() => {},
        _ = terminate() => {},
    }
    tracing::info!(deadline_secs = deadline.as_secs(), "shutdown signal received, draining");

    tokio::spawn(async move {
        tokio::select! {
            _ = ctrl_c() => {
                tracing::warn!("second shutdown signal received, exiting immediately");
            }
            _ = terminate() => {
                tracing::warn!("second shutdown signal received, exiting immediately");
            }
            _ = tokio::time::sleep(deadline) => {
                tracing::warn!("graceful shutdown deadline elapsed, exiting immediately");
            }
        }
        std::process::exit(1);
    });
}
