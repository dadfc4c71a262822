// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Logging setup
//!
//! Internal logs go to stderr; stdout carries only rendered output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter, e.g. `XCLOG_LOG=xclog_parser=debug`
pub const LOG_ENV: &str = "XCLOG_LOG";

/// Build the log filter: directives from [`LOG_ENV`], falling back to `level`
#[must_use]
pub fn env_filter(level: tracing::Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy()
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(level: tracing::Level) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}
