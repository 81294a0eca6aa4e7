// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inline request dispatch: pick one running worker uniformly at random
//! and forward the lint payload (spec.md §4.4).

use lintfleet_core::FleetError;
use rand::Rng;

use crate::controller::FleetController;
use crate::error::ManagerError;

impl FleetController {
    /// Dispatch a lint request for `language`, returning whether the
    /// worker's reply matches the submitted content verbatim — the
    /// manager's sole notion of "already lint-clean" (spec.md §4.4 step 5).
    pub async fn dispatch(&self, language: &str, content: &str) -> Result<bool, ManagerError> {
        let address = {
            let guard = self.state.lock().await;
            let running: Vec<_> = guard.workers.iter().filter(|w| w.is_running()).collect();
            if running.is_empty() {
                return Err(FleetError::NoRunningWorker.into());
            }
            let idx = rand::thread_rng().gen_range(0..running.len());
            // Allow expect: address is set in the same call that flips a
            // worker to Running, so a running worker always carries one.
            #[allow(clippy::expect_used)]
            running[idx].address.clone().expect("running worker has an address")
        };

        let reply = self.adapter.lint(&address, language, content).await?;
        Ok(reply == content)
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
