// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake exec adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ExecAdapter, ExecError};
use async_trait::async_trait;
use le_core::ExitOutcome;
use std::ffi::{OsStr, OsString};
use std::io;
use std::sync::{Arc, Mutex};

/// Recorded exec call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecCall {
    pub program: OsString,
    pub args: Vec<OsString>,
}

/// Fake exec adapter for testing
///
/// Records the program instead of replacing the process. Returns
/// success unless a failure has been scripted.
#[derive(Clone, Default)]
pub struct FakeExecAdapter {
    failure: Arc<Mutex<Option<io::ErrorKind>>>,
    outcome: Arc<Mutex<Option<ExitOutcome>>>,
    calls: Arc<Mutex<Vec<ExecCall>>>,
}

impl FakeExecAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subsequent execs return `outcome`, as a spawn-and-wait platform would
    pub fn set_outcome(&self, outcome: ExitOutcome) {
        *self.outcome.lock().unwrap_or_else(|e| e.into_inner()) = Some(outcome);
    }

    /// Subsequent execs fail with `kind`
    pub fn set_failure(&self, kind: io::ErrorKind) {
        *self.failure.lock().unwrap_or_else(|e| e.into_inner()) = Some(kind);
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ExecCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl ExecAdapter for FakeExecAdapter {
    async fn exec(&self, program: &OsStr, args: &[OsString]) -> Result<ExitOutcome, ExecError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ExecCall {
                program: program.to_os_string(),
                args: args.to_vec(),
            });

        if let Some(kind) = *self.failure.lock().unwrap_or_else(|e| e.into_inner()) {
            return Err(ExecError::exec(program, io::Error::from(kind)));
        }

        let outcome = *self.outcome.lock().unwrap_or_else(|e| e.into_inner());
        Ok(outcome.unwrap_or(ExitOutcome::SUCCESS))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
