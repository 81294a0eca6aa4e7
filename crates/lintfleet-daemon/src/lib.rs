// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! `lintfleetd`: the axum HTTP surface over two `lintfleet-manager`
//! `FleetController`s, one per supported language. Analogue of the
//! teacher's `oj-daemon` crate (listener + lifecycle + startup), minus
//! persistence — spec.md's explicit Non-goal of no fleet-state durability
//! across restarts means there's no WAL/snapshot layer to carry.

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod signal;

pub use app::{build_router, AppState};
pub use error::ApiError;
