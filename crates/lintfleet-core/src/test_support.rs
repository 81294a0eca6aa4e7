// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `feature = "test-support"`.

use crate::worker::{Worker, WorkerState};
use crate::FleetState;

/// A worker running on the given version, as if spawn had already completed.
// Allow unwrap: the format string is a constant loopback URL shape.
#[allow(clippy::unwrap_used)]
pub fn running_worker(version: &str, slot: u64, port: u16) -> Worker {
    let mut w = Worker::creating(version, slot);
    w.mark_running(format!("http://127.0.0.1:{port}").parse().unwrap());
    w
}

/// Fleet with `n` running workers, all on `version`, target already met.
pub fn converged_fleet(version: &str, n: usize) -> FleetState {
    let mut fleet = FleetState::new(version);
    fleet.desired_size = n;
    fleet.ratio = 1.0;
    fleet.workers =
        (0..n).map(|i| running_worker(version, i as u64, 20000 + i as u16)).collect();
    fleet
}

/// Proptest strategies over fleet admin operations, for property tests
/// driving invariants I1-I3 and I6 across randomized histories.
pub mod strategies {
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    pub enum AdminOp {
        AddWorker,
        RemoveWorker,
        NewVersion(String),
        Rollback(String),
    }

    pub fn arb_admin_op(known_versions: Vec<String>) -> impl Strategy<Value = AdminOp> {
        let rollback_targets = if known_versions.is_empty() {
            vec!["v0".to_string()]
        } else {
            known_versions
        };
        prop_oneof![
            3 => Just(AdminOp::AddWorker),
            3 => Just(AdminOp::RemoveWorker),
            1 => "v[0-9]".prop_map(AdminOp::NewVersion),
            2 => proptest::sample::select(rollback_targets).prop_map(AdminOp::Rollback),
        ]
    }

    pub fn arb_admin_ops(
        known_versions: Vec<String>,
        max_len: usize,
    ) -> impl Strategy<Value = Vec<AdminOp>> {
        proptest::collection::vec(arb_admin_op(known_versions), 0..max_len)
    }
}

impl WorkerState {
    /// `true` for `Creating`, mirroring [`Worker::is_running`]'s negation —
    /// convenient in test assertions that read more naturally the other way.
    pub fn is_creating(self) -> bool {
        matches!(self, WorkerState::Creating)
    }
}
