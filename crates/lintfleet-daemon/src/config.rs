// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access, in the style of the teacher's
//! `oj-daemon::env` module. spec.md §6.4: "No flags for the manager" — the
//! only configuration surface is these three overrides, which exist so
//! integration tests can boot a daemon without a real linter binary on
//! disk.

/// Port the HTTP server listens on (spec.md §6.1: port 10000).
pub fn port() -> u16 {
    std::env::var("LINTFLEET_PORT").ok().and_then(|s| s.parse().ok()).unwrap_or(10000)
}

/// Initial declared version for the Python manager (spec.md §6.4).
pub fn python_initial_version() -> String {
    std::env::var("LINTFLEET_PYTHON_INITIAL_VERSION")
        .unwrap_or_else(|_| "bin/python-linter-1.0".to_string())
}

/// Initial declared version for the Java manager (spec.md §6.4).
pub fn java_initial_version() -> String {
    std::env::var("LINTFLEET_JAVA_INITIAL_VERSION")
        .unwrap_or_else(|_| "bin/java-linter-1.0".to_string())
}

/// Graceful shutdown deadline after the first termination signal (spec.md
/// §5: "one initiates graceful HTTP server shutdown with a 30 s deadline").
pub fn shutdown_deadline() -> std::time::Duration {
    std::time::Duration::from_secs(30)
}
