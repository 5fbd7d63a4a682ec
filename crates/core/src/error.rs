// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Usage errors raised while reading the invocation

use crate::exit::EXIT_USAGE;
use thiserror::Error;

/// One-line synopsis printed alongside usage errors.
pub const USAGE: &str =
    "entrypoint upgrade_db [target] | downgrade_db <target> | revision_db <message> | <command> [args...]";

/// The invocation could not be turned into a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("no command given")]
    NoArguments,
    #[error("{command}: missing required argument <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("{command}: <{argument}> is not valid UTF-8")]
    InvalidUnicode {
        command: &'static str,
        argument: &'static str,
    },
}

impl UsageError {
    pub fn exit_code(&self) -> i32 {
        EXIT_USAGE
    }
}
