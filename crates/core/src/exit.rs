// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exit status relaying
//!
//! The entrypoint never translates a downstream status. A child that exits
//! with `n` makes the entrypoint exit with `n`; a child killed by signal `s`
//! makes it exit with `128 + s`, the same value a POSIX shell reports.

use std::fmt;
use std::io;
use std::process::ExitStatus;

/// Generic failure.
pub const EXIT_FAILURE: i32 = 1;
/// Bad invocation.
pub const EXIT_USAGE: i32 = 2;
/// Program exists but could not be executed.
pub const EXIT_NOT_EXECUTABLE: i32 = 126;
/// Program not found.
pub const EXIT_NOT_FOUND: i32 = 127;
/// Base added to a signal number for signal deaths.
pub const SIGNAL_EXIT_BASE: i32 = 128;

/// How a downstream process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    Exited(i32),
    Signaled(i32),
}

impl ExitOutcome {
    pub const SUCCESS: ExitOutcome = ExitOutcome::Exited(0);

    pub fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::Exited(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self::Signaled(signal);
            }
        }

        Self::Exited(EXIT_FAILURE)
    }

    pub fn success(&self) -> bool {
        matches!(self, Self::Exited(0))
    }

    /// Exit code this process should end with to relay the outcome.
    pub fn code(&self) -> i32 {
        match *self {
            Self::Exited(code) => code,
            Self::Signaled(signal) => SIGNAL_EXIT_BASE + signal,
        }
    }
}

impl fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exited(code) => write!(f, "exit code {}", code),
            Self::Signaled(signal) => write!(f, "signal {}", signal),
        }
    }
}

/// Shell-compatible exit code for a program that could not be started.
pub fn spawn_failure_code(err: &io::Error) -> i32 {
    match err.kind() {
        io::ErrorKind::NotFound => EXIT_NOT_FOUND,
        io::ErrorKind::PermissionDenied => EXIT_NOT_EXECUTABLE,
        _ => EXIT_FAILURE,
    }
}

#[cfg(test)]
#[path = "exit_tests.rs"]
mod tests;
