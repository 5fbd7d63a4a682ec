// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Management script adapter
//!
//! Runs the application's `manage.py` (or whatever command is configured)
//! as a child with inherited stdio and environment, and waits for it.

use super::{MigrationAdapter, MigrationError};
use async_trait::async_trait;
use le_core::{Config, ExitOutcome};
use std::path::PathBuf;
use tokio::process::Command;

/// Adapter that shells out to the management script
#[derive(Clone, Debug)]
pub struct ManageAdapter {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl ManageAdapter {
    pub fn new(command: &[String], working_dir: Option<PathBuf>) -> Result<Self, MigrationError> {
        let (program, args) = command.split_first().ok_or(MigrationError::EmptyCommand)?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            working_dir,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, MigrationError> {
        Self::new(&config.manage_command, config.working_dir.clone())
    }

    async fn manage(&self, subcommand: &[&str]) -> Result<ExitOutcome, MigrationError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).args(subcommand);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let mut child = cmd.spawn().map_err(|source| MigrationError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        let status = child.wait().await.map_err(|source| MigrationError::Wait {
            program: self.program.clone(),
            source,
        })?;

        Ok(ExitOutcome::from_status(status))
    }
}

#[async_trait]
impl MigrationAdapter for ManageAdapter {
    async fn upgrade(&self, target: &str) -> Result<ExitOutcome, MigrationError> {
        self.manage(&["upgrade", "--target", target]).await
    }

    async fn downgrade(&self, target: &str) -> Result<ExitOutcome, MigrationError> {
        self.manage(&["downgrade", target]).await
    }

    async fn revision(&self, message: &str) -> Result<ExitOutcome, MigrationError> {
        self.manage(&["revision", message]).await
    }
}

#[cfg(test)]
#[path = "manage_tests.rs"]
mod tests;
