// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One reconcile tick: prune too-new workers, grow/shrink to `desired_size`,
//! advance the rollout ratio, and enforce it. spec.md §4.1 is the
//! authoritative step-by-step description; this is its direct translation.
//!
//! The lock is held only across the synchronous list manipulation. Spawn
//! and shutdown side effects are collected while the lock is held, then
//! dispatched as detached tasks after it's released, per spec.md §5
//! ("work done under the lock is purely local... side effects... are
//! dispatched to detached tasks so the lock is not held across external
//! I/O").

use std::sync::Arc;

use tracing::{info, warn};
use url::Url;

use crate::controller::FleetController;

impl FleetController {
    pub async fn reconcile_tick(&self) {
        let (to_shutdown, to_spawn) = {
            let mut state = self.state.lock().await;

            let mut to_shutdown: Vec<Url> = Vec::new();
            let mut to_spawn: Vec<(u64, String)> = Vec::new();

            // 1. Prune workers strictly newer than target_version, or on an
            // unknown version (spec.md §4.1 step 1).
            let mut i = 0;
            while i < state.workers.len() {
                if state.is_newer_than_target(&state.workers[i].version) {
                    let removed = state.swap_remove(i);
                    if let Some(addr) = removed.address {
                        to_shutdown.push(addr);
                    }
                } else {
                    i += 1;
                }
            }

            // 2. Grow to desired_size (step 2).
            while state.workers.len() < state.desired_size {
                let target = state.target_version.clone();
                let slot = state.push_creating(target.clone());
                to_spawn.push((slot, target));
            }

            // 3. Shrink to desired_size (step 3): swap-remove index 0.
            while state.workers.len() > state.desired_size {
                let removed = state.swap_remove(0);
                if let Some(addr) = removed.address {
                    to_shutdown.push(addr);
                }
            }

            // 4. Advance the rollout ratio (step 4).
            state.ratio = state.next_ratio();

            // 5. Enforce the ratio (step 5).
            let need = (state.ratio * state.desired_size as f32).floor() as usize;
            let mut have = state.count_on_target();
            while have < need {
                let mismatch =
                    state.workers.iter().position(|w| w.version != state.target_version);
                if let Some(idx) = mismatch {
                    let removed = state.swap_remove(idx);
                    if let Some(addr) = removed.address {
                        to_shutdown.push(addr);
                    }
                }
                let target = state.target_version.clone();
                let slot = state.push_creating(target.clone());
                to_spawn.push((slot, target));
                have += 1;
            }

            info!(
                worker_count = state.workers.len(),
                desired_size = state.desired_size,
                target_version = %state.target_version,
                ratio = state.ratio,
                "reconcile tick complete"
            );

            (to_shutdown, to_spawn)
        };

        for addr in to_shutdown {
            self.adapter.shutdown(addr);
        }

        for (slot, version) in to_spawn {
            self.dispatch_spawn(slot, version);
        }
    }

    /// Spawn a worker process for a `Creating` slot in a detached task, and
    /// feed the result back into fleet state once it completes (spec.md
    /// §4.2). On failure the `Creating` record is removed immediately
    /// rather than left as a permanent zombie (REDESIGN FLAG #2).
    fn dispatch_spawn(&self, slot: u64, version: String) {
        let adapter = Arc::clone(&self.adapter);
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            match adapter.spawn(&version).await {
                Ok(address) => {
                    let mut guard = state.lock().await;
                    if let Some(worker) = guard.find_by_slot(slot) {
                        worker.mark_running(address);
                    }
                }
                Err(err) => {
                    warn!(version, error = %err, "worker spawn failed, discarding creating slot");
                    let mut guard = state.lock().await;
                    if let Some(idx) = guard.workers.iter().position(|w| w.slot == slot) {
                        guard.swap_remove(idx);
                    }
                }
            }
        });
    }
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
