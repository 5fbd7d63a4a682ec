//! revision_db specs.

use crate::prelude::*;

#[test]
fn revision_with_message() {
    let stub = ManageStub::new();
    entrypoint()
        .manage(&stub)
        .args(&["revision_db", "add landing table"])
        .passes();
    assert_eq!(stub.calls(), ["revision add landing table"]);
}

#[test]
fn revision_requires_a_message() {
    let stub = ManageStub::new();
    entrypoint()
        .manage(&stub)
        .args(&["revision_db"])
        .exits_with(2)
        .stderr_has("revision_db: missing required argument <message>")
        .stderr_has("usage:");
    assert!(stub.calls().is_empty());
}
