// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;

/// The entrypoint binary with its own logging silenced.
pub fn entrypoint() -> Command {
    let mut cmd = Command::cargo_bin("entrypoint").expect("entrypoint binary should be built");
    cmd.env("ENTRYPOINT_LOG", "off")
        .env_remove("ENTRYPOINT_CONFIG")
        .env_remove("ENTRYPOINT_MANAGE");
    cmd
}
