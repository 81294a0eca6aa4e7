// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Admin surface routes (spec.md §6.1, §4.5).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct VersionRequest {
    pub version: String,
}

pub async fn handle_add_worker(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Result<StatusCode, ApiError> {
    let controller =
        state.resolve(&lang).ok_or_else(|| ApiError::UnknownLanguage(lang.clone()))?;
    controller.add_worker().await;
    Ok(StatusCode::OK)
}

pub async fn handle_remove_worker(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Result<StatusCode, ApiError> {
    let controller =
        state.resolve(&lang).ok_or_else(|| ApiError::UnknownLanguage(lang.clone()))?;
    controller.remove_worker().await;
    Ok(StatusCode::OK)
}

pub async fn handle_new_version(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    Json(body): Json<VersionRequest>,
) -> Result<StatusCode, ApiError> {
    if body.version.trim().is_empty() {
        return Err(ApiError::InvalidVersion);
    }
    let controller =
        state.resolve(&lang).ok_or_else(|| ApiError::UnknownLanguage(lang.clone()))?;
    controller.new_version(body.version).await;
    Ok(StatusCode::OK)
}

/// Wired to the rollback handler for both languages (spec.md §9, defect
/// #3: one source variant wires `admin/rollback/java` to the version
/// handler instead — `lintfleet-daemon`'s router in `app.rs` doesn't have
/// that bug to begin with, since both routes share this one handler).
pub async fn handle_rollback(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    Json(body): Json<VersionRequest>,
) -> Result<StatusCode, ApiError> {
    if body.version.trim().is_empty() {
        return Err(ApiError::InvalidVersion);
    }
    let controller =
        state.resolve(&lang).ok_or_else(|| ApiError::UnknownLanguage(lang.clone()))?;
    controller.rollback(&body.version).await?;
    Ok(StatusCode::OK)
}

pub async fn handle_balance(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Result<StatusCode, ApiError> {
    let controller =
        state.resolve(&lang).ok_or_else(|| ApiError::UnknownLanguage(lang.clone()))?;
    controller.balance().await;
    Ok(StatusCode::OK)
}

#[cfg(test)]
#[path = "admin_tests.rs"]
mod tests;
