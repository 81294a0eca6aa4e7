// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Real worker-process adapter: spawns the binary named by `version` and
//! speaks HTTP to it over loopback.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tokio::process::Command;
use tracing::{info, warn};
use url::Url;

use crate::error::AdapterError;
use crate::wire::SourceFile;
use crate::WorkerAdapter;

/// Per-probe HTTP deadline.
pub const LIVENESS_PROBE_TIMEOUT: Duration = Duration::from_millis(200);

/// Port range workers are spawned into.
const PORT_RANGE: std::ops::RangeInclusive<u16> = 10001..=30000;

/// Spawns worker binaries as child processes and talks HTTP to them.
///
/// Every spawned child is awaited by a detached reaper task rather than
/// left to fend for itself — the fix spec.md §9 calls out for the source's
/// "`startupWorker` neither awaits `cmd.Run()` nor records the child"
/// defect (REDESIGN FLAG #2). The child's exit is logged but never feeds
/// back into fleet state: the health prober is solely responsible for
/// noticing a dead worker (spec.md §4.2).
pub struct ProcessWorkerAdapter {
    http: reqwest::Client,
}

impl Default for ProcessWorkerAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessWorkerAdapter {
    // Allow expect: this client builder has no configuration that can fail.
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("reqwest client configuration is valid"),
        }
    }

    fn random_port() -> u16 {
        rand::thread_rng().gen_range(PORT_RANGE)
    }
}

#[async_trait]
impl WorkerAdapter for ProcessWorkerAdapter {
    async fn spawn(&self, version: &str) -> Result<Url, AdapterError> {
        let port = Self::random_port();
        let mut child = Command::new(version)
            .arg("--port")
            .arg(port.to_string())
            .kill_on_drop(false)
            .spawn()
            .map_err(|source| AdapterError::SpawnFailed { path: version.to_string(), source })?;

        info!(version, port, pid = child.id(), "spawned worker process");

        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) => info!(%status, "worker process exited"),
                Err(err) => warn!(error = %err, "failed to wait on worker process"),
            }
        });

        // Allow expect: the format string is a constant loopback URL shape.
        #[allow(clippy::expect_used)]
        Ok(format!("http://127.0.0.1:{port}").parse().expect("loopback URL is always valid"))
    }

    async fn probe_health(&self, address: &Url) -> bool {
        let url = format!("{address}healthz");
        match self.http.get(&url).timeout(LIVENESS_PROBE_TIMEOUT).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn lint(
        &self,
        address: &Url,
        language: &str,
        content: &str,
    ) -> Result<String, AdapterError> {
        let url = format!("{address}lint/{language}");
        let resp =
            self.http.post(&url).json(&SourceFile { content: content.to_string() }).send().await?;
        let resp = resp.error_for_status()?;
        let bytes = resp.bytes().await?;
        let body: SourceFile = serde_json::from_slice(&bytes).map_err(AdapterError::Decode)?;
        Ok(body.content)
    }

    fn shutdown(&self, address: Url) {
        let client = self.http.clone();
        tokio::spawn(async move {
            let url = format!("{address}shutdown");
            let _ = client.get(&url).send().await;
        });
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
