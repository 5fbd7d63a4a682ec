// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command selection
//!
//! The first argument picks the branch. The migration names are reserved;
//! every other first argument, flags included, is a program to exec.

use crate::error::UsageError;
use crate::invocation::Invocation;
use std::ffi::{OsStr, OsString};

pub const UPGRADE_DB: &str = "upgrade_db";
pub const DOWNGRADE_DB: &str = "downgrade_db";
pub const REVISION_DB: &str = "revision_db";

/// Revision marker used when `upgrade_db` is given no target.
///
/// Opaque to the entrypoint; the migration tool gives it meaning.
pub const DEFAULT_UPGRADE_TARGET: &str = "heads";

/// An operation delegated to the migration tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOp {
    Upgrade { target: String },
    Downgrade { target: String },
    Revision { message: String },
}

impl MigrationOp {
    /// Entrypoint subcommand that selects this operation
    pub fn command_name(&self) -> &'static str {
        match self {
            Self::Upgrade { .. } => UPGRADE_DB,
            Self::Downgrade { .. } => DOWNGRADE_DB,
            Self::Revision { .. } => REVISION_DB,
        }
    }

    /// Argument handed to the migration tool (target or message)
    pub fn argument(&self) -> &str {
        match self {
            Self::Upgrade { target } | Self::Downgrade { target } => target,
            Self::Revision { message } => message,
        }
    }
}

/// A program to exec verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassThrough {
    pub program: OsString,
    pub args: Vec<OsString>,
}

/// What the entrypoint will do with its invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Migrate(MigrationOp),
    PassThrough(PassThrough),
}

impl Command {
    pub fn parse(invocation: &Invocation) -> Result<Self, UsageError> {
        let (program, rest) = invocation
            .as_slice()
            .split_first()
            .ok_or(UsageError::NoArguments)?;

        let op = match program.to_str() {
            Some(UPGRADE_DB) => MigrationOp::Upgrade {
                target: optional_utf8(invocation.get(1), UPGRADE_DB, "target")?
                    .unwrap_or_else(|| DEFAULT_UPGRADE_TARGET.to_string()),
            },
            Some(DOWNGRADE_DB) => MigrationOp::Downgrade {
                target: required_utf8(invocation.get(1), DOWNGRADE_DB, "target")?,
            },
            Some(REVISION_DB) => MigrationOp::Revision {
                message: required_utf8(invocation.get(1), REVISION_DB, "message")?,
            },
            _ => {
                return Ok(Self::PassThrough(PassThrough {
                    program: program.clone(),
                    args: rest.to_vec(),
                }))
            }
        };

        Ok(Self::Migrate(op))
    }
}

fn optional_utf8(
    arg: Option<&OsStr>,
    command: &'static str,
    argument: &'static str,
) -> Result<Option<String>, UsageError> {
    arg.map(|value| {
        value
            .to_str()
            .map(str::to_string)
            .ok_or(UsageError::InvalidUnicode { command, argument })
    })
    .transpose()
}

fn required_utf8(
    arg: Option<&OsStr>,
    command: &'static str,
    argument: &'static str,
) -> Result<String, UsageError> {
    optional_utf8(arg, command, argument)?
        .ok_or(UsageError::MissingArgument { command, argument })
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
