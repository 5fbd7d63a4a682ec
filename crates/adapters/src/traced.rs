// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::exec::{ExecAdapter, ExecError};
use crate::migrate::{MigrationAdapter, MigrationError};
use async_trait::async_trait;
use le_core::ExitOutcome;
use std::ffi::{OsStr, OsString};
use std::future::Future;
use std::time::Instant;
use tracing::Instrument;

/// Wrapper that adds tracing to any MigrationAdapter
#[derive(Clone)]
pub struct TracedMigrationAdapter<M> {
    inner: M,
}

impl<M> TracedMigrationAdapter<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

/// Run one migration operation, logging its start and how it ended.
///
/// Non-zero exits are relayed rather than raised, so they are reported here
/// at warn.
async fn traced_migration<F>(op: F) -> Result<ExitOutcome, MigrationError>
where
    F: Future<Output = Result<ExitOutcome, MigrationError>>,
{
    tracing::info!("starting");
    let start = Instant::now();
    let result = op.await;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(outcome) if outcome.success() => tracing::info!(elapsed_ms, "migration finished"),
        Ok(outcome) => tracing::warn!(
            elapsed_ms,
            exit_code = outcome.code(),
            %outcome,
            "migration tool failed"
        ),
        Err(e) => tracing::error!(elapsed_ms, error = %e, "migration tool did not run"),
    }

    result
}

#[async_trait]
impl<M: MigrationAdapter> MigrationAdapter for TracedMigrationAdapter<M> {
    async fn upgrade(&self, target: &str) -> Result<ExitOutcome, MigrationError> {
        let span = tracing::info_span!("migration.upgrade", revision = target);
        traced_migration(self.inner.upgrade(target))
            .instrument(span)
            .await
    }

    async fn downgrade(&self, target: &str) -> Result<ExitOutcome, MigrationError> {
        let span = tracing::info_span!("migration.downgrade", revision = target);
        traced_migration(self.inner.downgrade(target))
            .instrument(span)
            .await
    }

    async fn revision(&self, message: &str) -> Result<ExitOutcome, MigrationError> {
        let span = tracing::info_span!("migration.revision", message);
        traced_migration(self.inner.revision(message))
            .instrument(span)
            .await
    }
}

/// Wrapper that adds tracing to any ExecAdapter
#[derive(Clone)]
pub struct TracedExecAdapter<E> {
    inner: E,
}

impl<E> TracedExecAdapter<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<E: ExecAdapter> ExecAdapter for TracedExecAdapter<E> {
    async fn exec(&self, program: &OsStr, args: &[OsString]) -> Result<ExitOutcome, ExecError> {
        let span = tracing::info_span!("exec", program = %program.to_string_lossy());

        async {
            // Last line this process writes when the exec succeeds
            tracing::info!(argc = args.len(), "handing over process");

            let result = self.inner.exec(program, args).await;
            match &result {
                Ok(outcome) => tracing::info!(exit_code = outcome.code(), "program exited"),
                Err(e) => tracing::error!(error = %e, exit_code = e.exit_code(), "exec failed"),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
