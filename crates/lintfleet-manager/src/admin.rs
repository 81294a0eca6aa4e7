// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The admin surface (spec.md §4.5). All five operations take the fleet
//! lock, fixing the source's known race (REDESIGN FLAG #3 / §9 defect #1:
//! "`AddNewWorker`/`RemoveWorker` mutate `desired_size` without acquiring
//! the lock").

use lintfleet_core::FleetError;
use tracing::info;

use crate::controller::FleetController;

impl FleetController {
    /// `desired_size += 1`.
    pub async fn add_worker(&self) {
        let mut state = self.state.lock().await;
        state.desired_size += 1;
        info!(desired_size = state.desired_size, "admin: add_worker");
    }

    /// `desired_size -= 1` iff `desired_size > 1`; otherwise a no-op.
    pub async fn remove_worker(&self) {
        let mut state = self.state.lock().await;
        if state.desired_size > 1 {
            state.desired_size -= 1;
        }
        info!(desired_size = state.desired_size, "admin: remove_worker");
    }

    /// Declare a new version: append it, point the rollout at it, and reset
    /// `ratio` to 0 so the next tick starts the canary from scratch
    /// (spec.md §4.5, I5).
    pub async fn new_version(&self, version: impl Into<String>) {
        let mut state = self.state.lock().await;
        let version = version.into();
        state.versions.push(version.clone());
        state.target_version = version.clone();
        state.ratio = 0.0;
        info!(version, "admin: new_version");
    }

    /// Reassign `target_version`, draining every strictly-newer worker on
    /// the next reconcile tick. Validates `version` is already declared
    /// (REDESIGN FLAG #4): the source accepts an unknown version silently
    /// and prunes the entire fleet as a result (spec.md §9 item 2); this
    /// rendition rejects it instead. `ratio` is deliberately left alone —
    /// see spec.md §9 item 6 and DESIGN.md.
    pub async fn rollback(&self, version: &str) -> Result<(), FleetError> {
        let mut state = self.state.lock().await;
        if state.version_rank(version).is_none() {
            return Err(FleetError::UnknownVersion(version.to_string()));
        }
        state.target_version = version.to_string();
        info!(version, "admin: rollback");
        Ok(())
    }

    /// Reserved for a future dispatch policy; a no-op today (spec.md §4.5).
    pub async fn balance(&self) {}
}

#[cfg(test)]
#[path = "admin_tests.rs"]
mod tests;
