// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory [`WorkerAdapter`] for tests: no child processes, no sockets.
//! Mirrors the teacher's `FakeAdapter` (`oj-adapters`), which backs
//! `AgentAdapter` the same way for agent-spawning tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU16, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use url::Url;

use crate::error::AdapterError;
use crate::WorkerAdapter;

/// A fake worker fleet. By default every spawned address is healthy and
/// `lint` normalizes `"x=1"`-style input to `"x = 1"` so tests can exercise
/// both the clean (S5) and dirty (S6) dispatch paths deterministically.
pub struct FakeWorkerAdapter {
    next_port: AtomicU16,
    unhealthy: Mutex<HashSet<String>>,
    spawn_failures: Mutex<HashSet<String>>,
}

impl Default for FakeWorkerAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeWorkerAdapter {
    pub fn new() -> Self {
        Self {
            next_port: AtomicU16::new(20000),
            unhealthy: Mutex::new(HashSet::new()),
            spawn_failures: Mutex::new(HashSet::new()),
        }
    }

    /// Mark an address as failing every future health probe.
    pub fn fail_health(&self, address: &Url) {
        self.unhealthy.lock().insert(address.to_string());
    }

    /// Mark a version as failing every future spawn attempt.
    pub fn fail_spawn(&self, version: &str) {
        self.spawn_failures.lock().insert(version.to_string());
    }
}

#[async_trait]
impl WorkerAdapter for FakeWorkerAdapter {
    async fn spawn(&self, version: &str) -> Result<Url, AdapterError> {
        if self.spawn_failures.lock().contains(version) {
            return Err(AdapterError::SpawnFailed {
                path: version.to_string(),
                source: std::io::Error::other("fake spawn failure"),
            });
        }
        let port = self.next_port.fetch_add(1, Ordering::Relaxed);
        // Allow expect: the format string is a constant loopback URL shape.
        #[allow(clippy::expect_used)]
        Ok(format!("http://127.0.0.1:{port}").parse().expect("loopback URL is always valid"))
    }

    async fn probe_health(&self, address: &Url) -> bool {
        !self.unhealthy.lock().contains(&address.to_string())
    }

    async fn lint(
        &self,
        _address: &Url,
        _language: &str,
        content: &str,
    ) -> Result<String, AdapterError> {
        Ok(normalize(content))
    }

    fn shutdown(&self, _address: Url) {
        // Nothing to tear down; fake workers have no process or socket.
    }
}

/// Toy "lint" used by the fake adapter: spaces out `=` the way a real
/// linter's formatter would, so clean input round-trips unchanged (S5) and
/// dirty input comes back different (S6).
fn normalize(content: &str) -> String {
    content.replace("=", " = ").split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
