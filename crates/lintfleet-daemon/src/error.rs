// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Maps the core error taxonomy onto HTTP status codes (spec.md §7).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lintfleet_core::FleetError;
use lintfleet_manager::ManagerError;
use serde_json::json;
use thiserror::Error;

/// Maximum accepted `content` length, inclusive (spec.md §7, boundary
/// behaviors: "Content of length 60 000 accepted; 60 001 rejected").
pub const MAX_CONTENT_LEN: usize = 60_000;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("content must be 1..={MAX_CONTENT_LEN} characters")]
    InvalidContent,

    #[error("version must not be empty")]
    InvalidVersion,

    #[error("unknown language {0:?}")]
    UnknownLanguage(String),

    #[error(transparent)]
    Manager(#[from] ManagerError),

    #[error(transparent)]
    Fleet(#[from] FleetError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidContent | ApiError::InvalidVersion => StatusCode::BAD_REQUEST,
            ApiError::UnknownLanguage(_) => StatusCode::NOT_FOUND,
            ApiError::Fleet(FleetError::UnknownVersion(_)) => StatusCode::BAD_REQUEST,
            ApiError::Fleet(FleetError::NoRunningWorker) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Manager(ManagerError::Fleet(FleetError::UnknownVersion(_))) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Manager(ManagerError::Fleet(FleetError::NoRunningWorker)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Manager(ManagerError::Adapter(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
