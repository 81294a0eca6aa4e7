// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! The worker-fleet control loop: reconciliation, liveness probing, request
//! dispatch, and the admin surface that mutates a manager's desired state.
//! This is the "engine" crate of the workspace, the analogue of the
//! teacher's `oj-engine` — everything here is built on top of the plain
//! data in `lintfleet-core` and the I/O boundary in `lintfleet-adapters`.

mod admin;
mod controller;
mod dispatch;
mod error;
mod probe;
mod reconcile;


pub use controller::{FleetController, ManagerTasks, PROBE_INTERVAL, PROBE_WARMUP, RECONCILE_INTERVAL};
pub use error::ManagerError;
