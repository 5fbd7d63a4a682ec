// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process image replacement
//!
//! On Unix the program takes over this PID through `execvp`, keeping open
//! file descriptors, environment and signal dispositions. Other platforms
//! spawn the program with inherited stdio and wait for it.

use super::{ExecAdapter, ExecError};
use async_trait::async_trait;
use le_core::ExitOutcome;
use std::ffi::{OsStr, OsString};

/// Exec adapter backed by the operating system
#[derive(Clone, Copy, Debug, Default)]
pub struct ReplaceAdapter;

impl ReplaceAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(unix)]
#[async_trait]
impl ExecAdapter for ReplaceAdapter {
    async fn exec(&self, program: &OsStr, args: &[OsString]) -> Result<ExitOutcome, ExecError> {
        use std::os::unix::process::CommandExt;

        // exec() only returns if the replacement failed
        let source = std::process::Command::new(program).args(args).exec();
        Err(ExecError::exec(program, source))
    }
}

#[cfg(not(unix))]
#[async_trait]
impl ExecAdapter for ReplaceAdapter {
    async fn exec(&self, program: &OsStr, args: &[OsString]) -> Result<ExitOutcome, ExecError> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .spawn()
            .map_err(|source| ExecError::exec(program, source))?;

        let status = child.wait().await.map_err(|source| ExecError::Wait {
            program: program.to_string_lossy().into_owned(),
            source,
        })?;

        Ok(ExitOutcome::from_status(status))
    }
}

#[cfg(test)]
#[path = "replace_tests.rs"]
mod tests;
