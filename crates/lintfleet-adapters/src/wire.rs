// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire types shared with the worker process's own HTTP API.

use serde::{Deserialize, Serialize};

/// `{"content": "..."}` — both the request and response body shape for
/// `POST /lint/<lang>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    pub content: String,
}
