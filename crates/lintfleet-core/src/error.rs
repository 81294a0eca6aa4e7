// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors surfaced by fleet-state mutation and dispatch, independent of any
/// transport. `lintfleet-daemon` maps these onto HTTP status codes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FleetError {
    #[error("no running worker available")]
    NoRunningWorker,

    #[error("unknown version: {0:?} has not been declared")]
    UnknownVersion(String),
}
