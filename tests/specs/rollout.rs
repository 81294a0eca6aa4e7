// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end HTTP coverage of the reconcile/rollout scenarios (spec.md
//! §8, S1-S4) driven entirely through the admin API rather than by
//! poking fleet state directly.

use reqwest::StatusCode;

use crate::support::{advance_one_tick, Harness};

/// S1 — after the first tick, four workers exist and dispatch succeeds.
#[tokio::test(start_paused = true)]
async fn s1_initial_pool_converges_and_is_dispatchable() {
    let harness = Harness::boot().await;
    advance_one_tick().await;

    let resp = harness.lint("python", "x = 1").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

/// S2 — declaring a new version over HTTP rolls it out ratio-by-ratio;
/// after enough ticks every dispatched lint observes the new version's
/// (still deterministic) behavior. We can't observe `version` over HTTP
/// directly, so this exercises the admin surface's wiring instead: the
/// version call succeeds and doesn't disturb dispatchability mid-rollout.
#[tokio::test(start_paused = true)]
async fn s2_new_version_keeps_the_fleet_dispatchable_through_the_canary() {
    let harness = Harness::boot().await;
    advance_one_tick().await;

    let resp = harness.new_version("python", "v2").await;
    assert_eq!(resp.status(), StatusCode::OK);

    for _ in 0..5 {
        advance_one_tick().await;
        let resp = harness.lint("python", "x = 1").await;
        assert_eq!(resp.status(), StatusCode::OK, "fleet must stay dispatchable through every tick of the rollout");
    }
}

/// S3 — rollback is accepted for a previously-declared version and the
/// fleet stays dispatchable afterward.
#[tokio::test(start_paused = true)]
async fn s3_rollback_to_a_declared_version_succeeds() {
    let harness = Harness::boot().await;
    advance_one_tick().await;

    assert_eq!(harness.new_version("java", "v2").await.status(), StatusCode::OK);
    for _ in 0..5 {
        advance_one_tick().await;
    }

    let resp = harness.rollback("java", "bin/java-linter-1.0").await;
    assert_eq!(resp.status(), StatusCode::OK);

    advance_one_tick().await;
    assert_eq!(harness.lint("java", "x = 1").await.status(), StatusCode::OK);
}

/// S4 — scaling up mid-rollout still converges to a dispatchable fleet.
#[tokio::test(start_paused = true)]
async fn s4_scale_up_while_rolling_out_stays_dispatchable() {
    let harness = Harness::boot().await;
    advance_one_tick().await;

    assert_eq!(harness.new_version("python", "v2").await.status(), StatusCode::OK);
    assert_eq!(harness.add_worker("python").await.status(), StatusCode::OK);
    assert_eq!(harness.add_worker("python").await.status(), StatusCode::OK);

    for _ in 0..6 {
        advance_one_tick().await;
    }

    assert_eq!(harness.lint("python", "x = 1").await.status(), StatusCode::OK);
}

/// Rollback to a version that was never declared is rejected with 400 and
/// leaves the fleet untouched (spec.md §9 defect #2, REDESIGN FLAG #4).
#[tokio::test(start_paused = true)]
async fn rollback_to_unknown_version_is_rejected() {
    let harness = Harness::boot().await;
    advance_one_tick().await;

    let resp = harness.rollback("python", "bin/python-linter-99.0").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // The fleet must still be serving the original version's workers.
    advance_one_tick().await;
    assert_eq!(harness.lint("python", "x = 1").await.status(), StatusCode::OK);
}
