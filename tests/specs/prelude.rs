//! Shared helpers for entrypoint specs.
//!
//! `entrypoint()` builds a run of the binary; `passes()`, `fails()` and
//! `exits_with()` assert on the exit status and return the captured output
//! for stdout/stderr checks.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

/// A pending run of the entrypoint binary.
pub struct Run {
    cmd: assert_cmd::Command,
}

#[allow(deprecated)]
pub fn entrypoint() -> Run {
    let mut cmd = assert_cmd::Command::cargo_bin("entrypoint").unwrap();
    cmd.env("ENTRYPOINT_LOG", "off")
        .env_remove("ENTRYPOINT_CONFIG")
        .env_remove("ENTRYPOINT_MANAGE");
    Run { cmd }
}

impl Run {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run with the binary's default log filter instead of `off`.
    pub fn default_logging(mut self) -> Self {
        self.cmd.env_remove("ENTRYPOINT_LOG");
        self
    }

    /// Point the migration command at a stub.
    pub fn manage(self, stub: &ManageStub) -> Self {
        self.env("ENTRYPOINT_MANAGE", stub.command())
    }

    fn output(mut self) -> Output {
        self.cmd.output().unwrap()
    }

    pub fn passes(self) -> Ran {
        let ran = Ran(self.output());
        assert!(
            ran.0.status.success(),
            "expected success, got {:?}\nstderr:\n{}",
            ran.0.status,
            ran.stderr()
        );
        ran
    }

    pub fn fails(self) -> Ran {
        let ran = Ran(self.output());
        assert!(
            !ran.0.status.success(),
            "expected failure\nstdout:\n{}",
            ran.stdout()
        );
        ran
    }

    pub fn exits_with(self, code: i32) -> Ran {
        let ran = Ran(self.output());
        assert_eq!(
            ran.0.status.code(),
            Some(code),
            "unexpected exit status\nstderr:\n{}",
            ran.stderr()
        );
        ran
    }
}

/// Output of a finished run.
pub struct Ran(Output);

impl Ran {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.0.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.0.stderr).into_owned()
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stderr_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stderr(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(needle),
            "stdout missing {:?}:\n{}",
            needle,
            stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(needle),
            "stderr missing {:?}:\n{}",
            needle,
            stderr
        );
        self
    }
}

/// Stand-in management script that records one line per run.
pub struct ManageStub {
    dir: TempDir,
}

const STUB: &str = r#"#!/bin/sh
(IFS=' '; printf '%s\n' "$*") >> "$(dirname "$0")/calls.txt"
exit "${STUB_EXIT:-0}"
"#;

impl ManageStub {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("manage.sh");
        fs::write(&script, STUB).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn command(&self) -> String {
        format!("sh {}", self.script().display())
    }

    pub fn script(&self) -> PathBuf {
        self.dir.path().join("manage.sh")
    }

    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("calls.txt"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
