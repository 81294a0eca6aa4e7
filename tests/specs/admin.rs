// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end HTTP coverage of the admin surface (spec.md §4.5, §6.1).

use reqwest::StatusCode;

use crate::support::{advance_one_tick, Harness};

/// R2 — add then remove restores dispatchability without net growth: a
/// round trip through the admin API converges back to the original pool.
#[tokio::test(start_paused = true)]
async fn add_then_remove_worker_converges_back_to_original_pool() {
    let harness = Harness::boot().await;
    advance_one_tick().await;

    assert_eq!(harness.add_worker("python").await.status(), StatusCode::OK);
    assert_eq!(harness.remove_worker("python").await.status(), StatusCode::OK);
    advance_one_tick().await;

    assert_eq!(harness.lint("python", "x = 1").await.status(), StatusCode::OK);
}

/// `RemoveWorker` at `desired_size == 1` is a documented no-op (spec.md
/// §8 boundary behaviors): repeated removes never starve the fleet to
/// zero desired workers.
#[tokio::test(start_paused = true)]
async fn remove_worker_floors_at_one_and_stays_dispatchable() {
    let harness = Harness::boot().await;
    advance_one_tick().await;

    for _ in 0..10 {
        assert_eq!(harness.remove_worker("java").await.status(), StatusCode::OK);
    }
    advance_one_tick().await;

    assert_eq!(harness.lint("java", "x = 1").await.status(), StatusCode::OK);
}

#[tokio::test(start_paused = true)]
async fn new_version_rejects_an_empty_version_string() {
    let harness = Harness::boot().await;
    let resp = harness.new_version("python", "   ").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test(start_paused = true)]
async fn balance_is_a_noop_that_returns_ok() {
    let harness = Harness::boot().await;
    let resp = harness.balance("python").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test(start_paused = true)]
async fn admin_routes_reject_unknown_language() {
    let harness = Harness::boot().await;
    assert_eq!(harness.add_worker("rust").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(harness.remove_worker("rust").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(harness.new_version("rust", "v2").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(harness.rollback("rust", "v1").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(harness.balance("rust").await.status(), StatusCode::NOT_FOUND);
}
