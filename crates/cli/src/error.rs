// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch failures and their exit codes
//!
//! Every failure is fatal. The exit code is the only thing the container
//! runtime sees, so each variant maps to one:
//! - usage problems exit 2
//! - a tool that exits non-zero is relayed unchanged
//! - programs that cannot be started follow the shell (127 / 126)

use le_adapters::{ExecError, MigrationError};
use le_core::error::USAGE;
use le_core::exit::EXIT_FAILURE;
use le_core::{ConfigError, ExitOutcome, UsageError};
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Usage(#[from] UsageError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Migration(#[from] MigrationError),
    #[error("{command} failed with {outcome}")]
    ToolFailed {
        command: &'static str,
        outcome: ExitOutcome,
    },
    #[error(transparent)]
    Exec(#[from] ExecError),
}

impl DispatchError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(e) => e.exit_code(),
            Self::Config(_) => EXIT_FAILURE,
            Self::Migration(e) => e.exit_code(),
            Self::ToolFailed { outcome, .. } => outcome.code(),
            Self::Exec(e) => e.exit_code(),
        }
    }

    /// Write the diagnostic for this error to `out`.
    ///
    /// A failed tool has already written its own diagnostics, so nothing is
    /// added for it.
    pub fn report(&self, mut out: impl Write) {
        if matches!(self, Self::ToolFailed { .. }) {
            return;
        }
        let _ = writeln!(out, "entrypoint: {}", self);
        if matches!(self, Self::Usage(_)) {
            let _ = writeln!(out, "usage: {}", USAGE);
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
