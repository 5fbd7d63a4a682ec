// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command dispatch: one branch per invocation

use crate::error::DispatchError;
use le_adapters::{ExecAdapter, MigrationAdapter};
use le_core::{Command, ExitOutcome, Invocation, MigrationOp, PassThrough};

/// Route an invocation to the migration tool or to exec.
///
/// The migration adapter is only built when a migration command is chosen,
/// so pass-through starts never depend on migration configuration.
///
/// Returns the outcome to relay as this process's exit status. A successful
/// exec on Unix never returns.
pub async fn dispatch<E, M, F>(
    invocation: &Invocation,
    exec: &E,
    migrations: F,
) -> Result<ExitOutcome, DispatchError>
where
    E: ExecAdapter,
    M: MigrationAdapter,
    F: FnOnce() -> Result<M, DispatchError>,
{
    match Command::parse(invocation)? {
        Command::Migrate(op) => {
            tracing::info!(command = op.command_name(), argument = op.argument(), "dispatching");
            migrate(&migrations()?, &op).await
        }
        Command::PassThrough(cmd) => pass_through(exec, &cmd).await,
    }
}

/// Run a migration operation and relay its status.
pub async fn migrate<M: MigrationAdapter>(
    adapter: &M,
    op: &MigrationOp,
) -> Result<ExitOutcome, DispatchError> {
    let outcome = adapter.run(op).await?;
    if !outcome.success() {
        return Err(DispatchError::ToolFailed {
            command: op.command_name(),
            outcome,
        });
    }
    Ok(outcome)
}

/// Hand the process over to the pass-through program.
pub async fn pass_through<E: ExecAdapter>(
    exec: &E,
    cmd: &PassThrough,
) -> Result<ExitOutcome, DispatchError> {
    Ok(exec.exec(&cmd.program, &cmd.args).await?)
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
