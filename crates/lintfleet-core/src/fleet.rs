// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fleet state: the mutable record of desired size, declared versions,
//! target version, rollout ratio, and the current worker list.
//!
//! This type carries no locking of its own — [`FleetState`] is plain data.
//! The owning crate (`lintfleet-manager`) is responsible for guarding it
//! with a mutex; that split mirrors the teacher's separation between
//! `MaterializedState` (plain data) and the `Arc<Mutex<...>>` wrapper held
//! by daemon-level state.

use crate::worker::Worker;

/// The minimum ratio step applied on every reconcile tick (spec I4/I5).
pub const INITIAL_RATIO_STEP: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct FleetState {
    pub workers: Vec<Worker>,
    pub desired_size: usize,
    /// All version identifiers ever declared, oldest first, including the
    /// initial version. Ordering here *is* "newer than" — see
    /// [`FleetState::is_newer_than_target`].
    pub versions: Vec<String>,
    pub target_version: String,
    pub ratio: f32,
    /// Monotonic counter handed out to each newly appended worker as its
    /// [`Worker::slot`]. See that field's doc comment for why it exists.
    next_slot: u64,
}

impl FleetState {
    /// A freshly booted manager: one declared version, four desired workers,
    /// ratio 1.0. The bootstrap version is considered already fully rolled
    /// out, so the first real progressive rollout begins with the first
    /// `NewVersion` call.
    pub fn new(initial_version: impl Into<String>) -> Self {
        let initial_version = initial_version.into();
        Self {
            workers: Vec::new(),
            desired_size: 4,
            versions: vec![initial_version.clone()],
            target_version: initial_version,
            ratio: 1.0,
            next_slot: 0,
        }
    }

    /// Append a new `Creating` worker on `version` and return its slot id.
    pub fn push_creating(&mut self, version: impl Into<String>) -> u64 {
        let slot = self.next_slot;
        self.next_slot += 1;
        self.workers.push(Worker::creating(version, slot));
        slot
    }

    /// Find the worker with the given slot, if it's still in the fleet.
    pub fn find_by_slot(&mut self, slot: u64) -> Option<&mut Worker> {
        self.workers.iter_mut().find(|w| w.slot == slot)
    }

    /// Remove the worker at `index` via swap-remove, returning it so the
    /// caller can dispatch its shutdown.
    pub fn swap_remove(&mut self, index: usize) -> Worker {
        self.workers.swap_remove(index)
    }

    /// Position of `version` in the declared-versions list, oldest-first.
    /// `None` means the version was never declared.
    pub fn version_rank(&self, version: &str) -> Option<usize> {
        self.versions.iter().position(|v| v == version)
    }

    /// True if `version` is strictly newer than `target_version`, i.e. it
    /// appears later in `versions` — or doesn't appear at all, which is
    /// treated the same as "too new" for pruning purposes.
    pub fn is_newer_than_target(&self, version: &str) -> bool {
        match (self.version_rank(version), self.version_rank(&self.target_version)) {
            (Some(v_rank), Some(t_rank)) => v_rank > t_rank,
            // Unknown version: not older-or-equal, so treat as too new.
            _ => true,
        }
    }

    /// Count of workers currently on `target_version`.
    pub fn count_on_target(&self) -> usize {
        self.workers.iter().filter(|w| w.version == self.target_version).count()
    }

    /// The next ratio value per the doubling schedule (spec I4):
    /// 0 -> 0.1, otherwise min(1.0, ratio * 2).
    pub fn next_ratio(&self) -> f32 {
        if self.ratio == 0.0 {
            INITIAL_RATIO_STEP
        } else {
            (self.ratio * 2.0).min(1.0)
        }
    }
}

#[cfg(test)]
#[path = "fleet_tests.rs"]
mod tests;
