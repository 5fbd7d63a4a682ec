//! downgrade_db specs.

use crate::prelude::*;

#[test]
fn downgrade_to_base() {
    let stub = ManageStub::new();
    entrypoint()
        .manage(&stub)
        .args(&["downgrade_db", "base"])
        .passes();
    assert_eq!(stub.calls(), ["downgrade base"]);
}

#[test]
fn downgrade_requires_a_target() {
    let stub = ManageStub::new();
    entrypoint()
        .manage(&stub)
        .args(&["downgrade_db"])
        .fails()
        .stderr_has("missing required argument <target>");
    assert!(stub.calls().is_empty());
}

#[test]
fn downgrade_failure_is_relayed() {
    let stub = ManageStub::new();
    entrypoint()
        .manage(&stub)
        .env("STUB_EXIT", "3")
        .args(&["downgrade_db", "base"])
        .exits_with(3);
}

#[test]
fn downgrade_is_case_sensitive() {
    // Not a recognised command, so it is executed as a program name
    let stub = ManageStub::new();
    entrypoint()
        .manage(&stub)
        .args(&["DOWNGRADE_DB", "base"])
        .exits_with(127);
    assert!(stub.calls().is_empty());
}
