// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Migration tool adapters

mod manage;

pub use manage::ManageAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeMigrationAdapter, MigrationCall};

use async_trait::async_trait;
use le_core::exit::{spawn_failure_code, EXIT_FAILURE};
use le_core::{ExitOutcome, MigrationOp};
use std::io;
use thiserror::Error;

/// Errors from migration operations
///
/// A tool that runs and exits non-zero is not an error here; its
/// [`ExitOutcome`] is returned for the caller to relay.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("migration command is empty")]
    EmptyCommand,
    #[error("failed to start {program}: {source}")]
    Spawn { program: String, source: io::Error },
    #[error("failed waiting for {program}: {source}")]
    Wait { program: String, source: io::Error },
}

impl MigrationError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Spawn { source, .. } => spawn_failure_code(source),
            Self::EmptyCommand | Self::Wait { .. } => EXIT_FAILURE,
        }
    }
}

/// Adapter for the application's schema migration tool
#[async_trait]
pub trait MigrationAdapter: Clone + Send + Sync + 'static {
    /// Upgrade the schema to `target`
    async fn upgrade(&self, target: &str) -> Result<ExitOutcome, MigrationError>;

    /// Downgrade the schema to `target`
    async fn downgrade(&self, target: &str) -> Result<ExitOutcome, MigrationError>;

    /// Generate a new revision described by `message`
    async fn revision(&self, message: &str) -> Result<ExitOutcome, MigrationError>;

    /// Run whichever operation `op` names
    async fn run(&self, op: &MigrationOp) -> Result<ExitOutcome, MigrationError> {
        match op {
            MigrationOp::Upgrade { target } => self.upgrade(target).await,
            MigrationOp::Downgrade { target } => self.downgrade(target).await,
            MigrationOp::Revision { message } => self.revision(message).await,
        }
    }
}
