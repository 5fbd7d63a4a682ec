// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The argument list the entrypoint was started with

use std::ffi::{OsStr, OsString};

/// Ordered argv supplied by the container runtime, without the program name.
///
/// Arguments are kept as `OsString` so a pass-through command reaches
/// `exec` byte-for-byte, even when it is not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    args: Vec<OsString>,
}

impl Invocation {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Capture the current process arguments, skipping argv[0].
    pub fn from_env() -> Self {
        Self::new(std::env::args_os().skip(1))
    }

    pub fn get(&self, index: usize) -> Option<&OsStr> {
        self.args.get(index).map(OsString::as_os_str)
    }

    pub fn as_slice(&self) -> &[OsString] {
        &self.args
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
