// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Liveness probing: every `Running` worker gets a `/healthz` check once
//! per sweep; any failure marks it for removal (spec.md §4.3). Unlike the
//! reconciler, the sweep holds the fleet lock across its HTTP awaits — a
//! deliberate, spec-mandated ordering limitation ("a slow probe blocks the
//! reconciler"), not an oversight.

use url::Url;

use crate::controller::FleetController;

impl FleetController {
    pub async fn probe_sweep(&self) {
        let mut guard = self.state.lock().await;

        let candidates: Vec<(u64, Url)> = guard
            .workers
            .iter()
            .filter(|w| w.is_running())
            .filter_map(|w| w.address.clone().map(|addr| (w.slot, addr)))
            .collect();

        let mut dead_slots = Vec::new();
        for (slot, address) in candidates {
            if !self.adapter.probe_health(&address).await {
                dead_slots.push(slot);
            }
        }

        let mut to_shutdown = Vec::new();
        for slot in dead_slots {
            if let Some(idx) = guard.workers.iter().position(|w| w.slot == slot) {
                let removed = guard.swap_remove(idx);
                if let Some(addr) = removed.address {
                    to_shutdown.push(addr);
                }
            }
        }

        drop(guard);

        for addr in to_shutdown {
            self.adapter.shutdown(addr);
        }
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
