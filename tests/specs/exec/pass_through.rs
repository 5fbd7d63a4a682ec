//! Pass-through specs.

use crate::prelude::*;

#[test]
fn echo_prints_and_succeeds() {
    entrypoint().args(&["echo", "hi"]).passes().stdout_eq("hi\n");
}

#[test]
fn exit_code_is_relayed() {
    entrypoint().args(&["sh", "-c", "exit 9"]).exits_with(9);
}

#[test]
fn arguments_reach_the_program_unchanged() {
    entrypoint()
        .args(&["printf", "[%s]", "two words", "--help", "upgrade_db"])
        .passes()
        .stdout_eq("[two words][--help][upgrade_db]");
}

#[test]
fn server_style_command_runs() {
    entrypoint()
        .args(&["sh", "-c", "echo serving on \"$0\"", ":9000"])
        .passes()
        .stdout_has("serving on :9000");
}

#[test]
fn migration_stub_is_untouched_by_pass_through() {
    let stub = ManageStub::new();
    entrypoint().manage(&stub).args(&["true"]).passes();
    assert!(stub.calls().is_empty());
}
