// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake migration adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{MigrationAdapter, MigrationError};
use async_trait::async_trait;
use le_core::ExitOutcome;
use std::io;
use std::sync::{Arc, Mutex};

/// Recorded migration call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationCall {
    Upgrade { target: String },
    Downgrade { target: String },
    Revision { message: String },
}

#[derive(Debug, Clone, Copy)]
enum Script {
    Exit(ExitOutcome),
    SpawnFailure(io::ErrorKind),
}

/// Fake migration adapter for testing
#[derive(Clone)]
pub struct FakeMigrationAdapter {
    script: Arc<Mutex<Script>>,
    calls: Arc<Mutex<Vec<MigrationCall>>>,
}

impl Default for FakeMigrationAdapter {
    fn default() -> Self {
        Self {
            script: Arc::new(Mutex::new(Script::Exit(ExitOutcome::SUCCESS))),
            calls: Arc::default(),
        }
    }
}

impl FakeMigrationAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent call returns `outcome`
    pub fn set_outcome(&self, outcome: ExitOutcome) {
        *self.script.lock().unwrap_or_else(|e| e.into_inner()) = Script::Exit(outcome);
    }

    /// Every subsequent call fails to start with `kind`
    pub fn set_spawn_failure(&self, kind: io::ErrorKind) {
        *self.script.lock().unwrap_or_else(|e| e.into_inner()) = Script::SpawnFailure(kind);
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<MigrationCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn record(&self, call: MigrationCall) -> Result<ExitOutcome, MigrationError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);

        match *self.script.lock().unwrap_or_else(|e| e.into_inner()) {
            Script::Exit(outcome) => Ok(outcome),
            Script::SpawnFailure(kind) => Err(MigrationError::Spawn {
                program: "fake-manage".to_string(),
                source: io::Error::from(kind),
            }),
        }
    }
}

#[async_trait]
impl MigrationAdapter for FakeMigrationAdapter {
    async fn upgrade(&self, target: &str) -> Result<ExitOutcome, MigrationError> {
        self.record(MigrationCall::Upgrade {
            target: target.to_string(),
        })
    }

    async fn downgrade(&self, target: &str) -> Result<ExitOutcome, MigrationError> {
        self.record(MigrationCall::Downgrade {
            target: target.to_string(),
        })
    }

    async fn revision(&self, message: &str) -> Result<ExitOutcome, MigrationError> {
        self.record(MigrationCall::Revision {
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
