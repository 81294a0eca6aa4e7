// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The manager's in-memory record of one child worker process.

use serde::{Deserialize, Serialize};
use url::Url;

/// Lifecycle state of a [`Worker`].
///
/// A worker is created in `Creating` and transitions to `Running` exactly
/// once, when the spawn routine has assigned a port and launched the
/// process. There is no state for "stopped" — a removed worker is simply
/// dropped from the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerState {
    Creating,
    Running,
}

/// The manager's record of one child process.
///
/// `address` is `None` until the spawn routine assigns a port — this is the
/// Rust rendition of the source's `"uninitialized"` sentinel string; an
/// absent address simply isn't representable as a [`Url`].
///
/// `slot` exists purely for correlation: a detached spawn or probe task
/// can't hold a reference into the fleet's `Vec` across an `.await`, since
/// the fleet can be mutated concurrently (swap-remove, admin pruning) while
/// the task is suspended. `slot` lets such a task reacquire the lock later
/// and find its worker again, or discover it's already gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worker {
    pub address: Option<Url>,
    pub version: String,
    pub state: WorkerState,
    pub slot: u64,
}

impl Worker {
    /// A freshly appended worker awaiting spawn.
    pub fn creating(version: impl Into<String>, slot: u64) -> Self {
        Self { address: None, version: version.into(), state: WorkerState::Creating, slot }
    }

    pub fn is_running(&self) -> bool {
        self.state == WorkerState::Running
    }

    /// Mark the worker live at the given loopback address.
    pub fn mark_running(&mut self, address: Url) {
        self.address = Some(address);
        self.state = WorkerState::Running;
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
