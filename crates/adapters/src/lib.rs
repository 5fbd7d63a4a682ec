// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O: the migration tool and process exec

pub mod exec;
pub mod migrate;
pub mod traced;

pub use exec::{ExecAdapter, ExecError, ReplaceAdapter};
pub use migrate::{ManageAdapter, MigrationAdapter, MigrationError};
pub use traced::{TracedExecAdapter, TracedMigrationAdapter};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use exec::{ExecCall, FakeExecAdapter};
#[cfg(any(test, feature = "test-support"))]
pub use migrate::{FakeMigrationAdapter, MigrationCall};
