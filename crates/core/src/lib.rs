// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! le-core: pure model for the lando container entrypoint
//!
//! This crate provides:
//! - The immutable invocation argv
//! - Command parsing (migration operations vs. pass-through)
//! - Exit outcome relaying
//! - Configuration for the migration tool

pub mod command;
pub mod config;
pub mod error;
pub mod exit;
pub mod invocation;

pub use command::{
    Command, MigrationOp, PassThrough, DEFAULT_UPGRADE_TARGET, DOWNGRADE_DB, REVISION_DB,
    UPGRADE_DB,
};
pub use config::{Config, ConfigError};
pub use error::UsageError;
pub use exit::ExitOutcome;
pub use invocation::Invocation;
