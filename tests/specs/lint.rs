// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end HTTP coverage of `POST /v1/lint/<lang>` (spec.md §6.1, S5,
//! S6, and the content-length boundary behaviors of §8).

use reqwest::StatusCode;
use serde_json::Value;

use crate::support::{advance_one_tick, Harness};

/// S5 — lint-clean input comes back `{"result": true}`.
#[tokio::test(start_paused = true)]
async fn clean_content_reports_true() {
    let harness = Harness::boot().await;
    advance_one_tick().await;

    let resp = harness.lint("python", "x = 1").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["result"], true);
}

/// S6 — dirty input comes back `{"result": false}`.
#[tokio::test(start_paused = true)]
async fn dirty_content_reports_false() {
    let harness = Harness::boot().await;
    advance_one_tick().await;

    let resp = harness.lint("java", "x=1").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["result"], false);
}

#[tokio::test(start_paused = true)]
async fn empty_content_is_rejected_with_400() {
    let harness = Harness::boot().await;
    advance_one_tick().await;

    let resp = harness.lint("python", "").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test(start_paused = true)]
async fn content_at_60000_chars_is_accepted() {
    let harness = Harness::boot().await;
    advance_one_tick().await;

    let content = "x".repeat(60_000);
    let resp = harness.lint("python", &content).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test(start_paused = true)]
async fn content_at_60001_chars_is_rejected() {
    let harness = Harness::boot().await;
    advance_one_tick().await;

    let content = "x".repeat(60_001);
    let resp = harness.lint("python", &content).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test(start_paused = true)]
async fn lint_before_first_reconcile_tick_has_no_worker() {
    let harness = Harness::boot().await;
    // No tick has run yet; the fleet has zero workers.
    let resp = harness.lint("python", "x = 1").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test(start_paused = true)]
async fn unknown_language_is_not_found() {
    let harness = Harness::boot().await;
    advance_one_tick().await;

    let resp = harness.lint("rust", "x = 1").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
