// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Pure data types for the lint fleet manager: the worker record, fleet
//! state, and version ordering. No I/O, no locking, no tokio — mirrors the
//! teacher's `oj-core` crate, which is likewise free of runtime dependencies
//! so it can be shared by every other crate in the workspace.

mod error;
mod fleet;
mod worker;

pub use error::FleetError;
pub use fleet::{FleetState, INITIAL_RATIO_STEP};
pub use worker::{Worker, WorkerState};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
