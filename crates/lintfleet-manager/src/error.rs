// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use lintfleet_adapters::AdapterError;
use lintfleet_core::FleetError;
use thiserror::Error;

/// Errors a [`crate::FleetController`] can surface to its caller (the
/// daemon's HTTP handlers). Wraps the two lower error taxonomies rather
/// than inventing a third, mirroring how the teacher's `LifecycleError`
/// wraps `oj_storage::WalError` with `#[from]`.
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    Fleet(#[from] FleetError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),
}
