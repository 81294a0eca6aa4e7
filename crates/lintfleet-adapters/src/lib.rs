// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! The adapter boundary spec.md §1 places out of scope: the worker binary
//! itself, and the HTTP plumbing used to talk to it. This crate supplies a
//! [`WorkerAdapter`] trait plus a real, process-spawning/`reqwest`-backed
//! implementation and (behind `test-support`) an in-memory fake — mirroring
//! the teacher's `oj-adapters` crate, which exposes a single `AgentAdapter`
//! trait with k8s/docker/coop/fake backends.

mod error;
mod process;
mod wire;

pub use error::AdapterError;
pub use process::{ProcessWorkerAdapter, LIVENESS_PROBE_TIMEOUT};
pub use wire::SourceFile;

use async_trait::async_trait;
use url::Url;

/// Everything the manager needs from a worker process it doesn't own the
/// implementation of: launching it, checking it's alive, asking it to lint,
/// and telling it to go away.
#[async_trait]
pub trait WorkerAdapter: Send + Sync {
    /// Pick a port, launch `version` as a child process bound to it, and
    /// return its base address. Does not wait for the process to become
    /// reachable — spec.md §4.2 step 3 ("set state = Running") happens as
    /// soon as the process is launched, not once it answers `/healthz`.
    async fn spawn(&self, version: &str) -> Result<Url, AdapterError>;

    /// `GET <address>/healthz`. Any non-2xx or transport error is a probe
    /// failure, reported as `false` rather than propagated — spec.md §4.3
    /// treats every failure mode identically (mark for removal).
    async fn probe_health(&self, address: &Url) -> bool;

    /// `POST <address>/lint/<language>` with `{"content": content}`,
    /// returning the worker's `content` field.
    async fn lint(&self, address: &Url, language: &str, content: &str)
        -> Result<String, AdapterError>;

    /// `GET <address>/shutdown`, fire-and-forget (spec.md §4.1: "its
    /// shutdown is dispatched asynchronously"). Implementations spawn their
    /// own detached task and must not block the caller.
    fn shutdown(&self, address: Url);
}

#[cfg(any(test, feature = "test-support"))]
pub mod fake;
