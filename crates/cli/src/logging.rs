// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log setup
//!
//! Logs go to stderr, written synchronously: a successful exec replaces the
//! process, and anything still buffered would be lost with it.

use std::io::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter directives for the entrypoint's own logs
pub const LOG_ENV: &str = "ENTRYPOINT_LOG";
const DEFAULT_FILTER: &str = "warn";

pub fn setup_logging() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init()?;

    Ok(())
}
