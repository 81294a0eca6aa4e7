// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;
use std::time::Duration;

use lintfleet_adapters::WorkerAdapter;
use lintfleet_core::FleetState;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Reconciler cadence (spec.md §4.1).
pub const RECONCILE_INTERVAL: Duration = Duration::from_secs(5);
/// Health prober warmup before the first sweep (spec.md §4.3).
pub const PROBE_WARMUP: Duration = Duration::from_secs(5);
/// Health prober cadence (spec.md §4.3).
pub const PROBE_INTERVAL: Duration = Duration::from_secs(1);

/// Owns one manager's fleet state and the adapter used to act on it.
///
/// The fleet mutex is `tokio::sync::Mutex`, not `parking_lot::Mutex`: the
/// health prober (see `probe.rs`) must hold the lock across its `/healthz`
/// awaits per spec.md §4.3 ("Acquires the manager lock for the duration of
/// the probe sweep"), and a `parking_lot::MutexGuard` held across an
/// `.await` point makes the enclosing future `!Send`, which `tokio::spawn`
/// rejects on the multi-threaded runtime spec.md §5 calls for. The
/// reconciler and dispatcher never hold the guard across an await, so this
/// costs them nothing; see DESIGN.md for the full rationale.
pub struct FleetController {
    /// `Arc`-wrapped so detached spawn/probe tasks (spec.md §5: spawning
    /// and shutdown happen outside the lock) can reacquire it after an
    /// `.await` without requiring `FleetController` itself be held behind
    /// an `Arc` at every call site — only `spawn_loops` needs that.
    pub(crate) state: Arc<Mutex<FleetState>>,
    pub(crate) adapter: Arc<dyn WorkerAdapter>,
}

/// Handles to a controller's two background loops, so a caller can abort
/// them on shutdown if the cancellation token isn't enough (e.g. tests).
pub struct ManagerTasks {
    pub reconciler: JoinHandle<()>,
    pub prober: JoinHandle<()>,
}

impl FleetController {
    pub fn new(initial_version: impl Into<String>, adapter: Arc<dyn WorkerAdapter>) -> Self {
        Self { state: Arc::new(Mutex::new(FleetState::new(initial_version))), adapter }
    }

    /// A clone of the current fleet state, for introspection (tests, and a
    /// future status endpoint). Never held past the call site.
    pub async fn snapshot(&self) -> FleetState {
        self.state.lock().await.clone()
    }

    /// Spawn the reconciler and health-prober loops as detached tasks,
    /// both stopped by `cancel`. Mirrors the teacher's
    /// `UsageMetricsCollector::spawn_collector` shape: a `tokio::spawn`ed
    /// loop driven by `tokio::time::interval`.
    pub fn spawn_loops(self: &Arc<Self>, cancel: CancellationToken) -> ManagerTasks {
        let reconciler = {
            let controller = Arc::clone(self);
            let cancel = cancel.clone();
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(RECONCILE_INTERVAL);
                loop {
                    tokio::select! {
                        _ = cancel.cancelled() => break,
                        _ = interval.tick() => controller.reconcile_tick().await,
                    }
                }
            })
        };

        let prober = {
            let controller = Arc::clone(self);
            let cancel = cancel.clone();
            tokio::spawn(async move {
                tokio::select! {
                    _ = cancel.cancelled() => return,
                    _ = tokio::time::sleep(PROBE_WARMUP) => {}
                }
                let mut interval = tokio::time::interval(PROBE_INTERVAL);
                loop {
                    tokio::select! {
                        _ = cancel.cancelled() => break,
                        _ = interval.tick() => controller.probe_sweep().await,
                    }
                }
            })
        };

        ManagerTasks { reconciler, prober }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
