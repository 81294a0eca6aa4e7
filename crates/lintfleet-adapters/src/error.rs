// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors from the worker-process boundary: spawning a binary and talking
/// HTTP to it once it's up.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("failed to spawn worker binary {path:?}: {source}")]
    SpawnFailed { path: String, #[source] source: std::io::Error },

    #[error("worker request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("worker returned malformed response: {0}")]
    Decode(#[source] serde_json::Error),
}
