// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `POST /v1/lint/<lang>` (spec.md §6.1, §4.4).

use axum::extract::{Path, State};
use axum::Json;
use lintfleet_adapters::SourceFile;
use serde::Serialize;

use crate::app::AppState;
use crate::error::{ApiError, MAX_CONTENT_LEN};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LintResponse {
    pub result: bool,
}

pub async fn handle_lint(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    Json(body): Json<SourceFile>,
) -> Result<Json<LintResponse>, ApiError> {
    let len = body.content.chars().count();
    if len == 0 || len > MAX_CONTENT_LEN {
        return Err(ApiError::InvalidContent);
    }

    let controller =
        state.resolve(&lang).ok_or_else(|| ApiError::UnknownLanguage(lang.clone()))?;
    let result = controller.dispatch(&lang, &body.content).await?;
    Ok(Json(LintResponse { result }))
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;
