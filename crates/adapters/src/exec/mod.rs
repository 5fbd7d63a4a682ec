// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process execution adapters

mod replace;

pub use replace::ReplaceAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ExecCall, FakeExecAdapter};

use async_trait::async_trait;
use le_core::exit::{spawn_failure_code, EXIT_FAILURE};
use le_core::ExitOutcome;
use std::ffi::{OsStr, OsString};
use std::io;
use thiserror::Error;

/// Errors from handing control to another program
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to execute {program}: {source}")]
    Exec { program: String, source: io::Error },
    #[error("failed waiting for {program}: {source}")]
    Wait { program: String, source: io::Error },
}

impl ExecError {
    pub fn exec(program: &OsStr, source: io::Error) -> Self {
        Self::Exec {
            program: program.to_string_lossy().into_owned(),
            source,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Exec { source, .. } => spawn_failure_code(source),
            Self::Wait { .. } => EXIT_FAILURE,
        }
    }
}

/// Adapter that hands the process over to another program
#[async_trait]
pub trait ExecAdapter: Clone + Send + Sync + 'static {
    /// Run `program` with `args` in place of the current process.
    ///
    /// Where the platform can replace the process image this only returns
    /// on failure; elsewhere it returns the program's outcome.
    async fn exec(&self, program: &OsStr, args: &[OsString]) -> Result<ExitOutcome, ExecError>;
}
