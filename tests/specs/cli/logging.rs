//! Default logging specs.

use crate::prelude::*;

#[test]
fn pass_through_start_is_silent_by_default() {
    entrypoint()
        .default_logging()
        .args(&["echo", "hi"])
        .passes()
        .stdout_eq("hi\n")
        .stderr_eq("");
}

#[test]
fn successful_migration_is_silent_by_default() {
    let stub = ManageStub::new();
    entrypoint()
        .default_logging()
        .manage(&stub)
        .args(&["upgrade_db"])
        .passes()
        .stderr_eq("");
}

#[test]
fn failed_migration_warns_by_default() {
    let stub = ManageStub::new();
    entrypoint()
        .default_logging()
        .manage(&stub)
        .env("STUB_EXIT", "3")
        .args(&["downgrade_db", "base"])
        .exits_with(3)
        .stderr_has("migration tool failed");
}

#[test]
fn info_filter_traces_the_migration() {
    let stub = ManageStub::new();
    entrypoint()
        .env("ENTRYPOINT_LOG", "info")
        .manage(&stub)
        .args(&["upgrade_db"])
        .passes()
        .stdout_eq("")
        .stderr_has("migration.upgrade")
        .stderr_has("migration finished");
}

#[test]
fn info_filter_traces_the_handover() {
    entrypoint()
        .env("ENTRYPOINT_LOG", "info")
        .args(&["echo", "hi"])
        .passes()
        .stdout_eq("hi\n")
        .stderr_has("handing over process");
}
