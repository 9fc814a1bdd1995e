use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn unknown_preset_fails_without_writing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["preset", "rails"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("initializing").not())
        .stderr(predicate::str::contains("Unknown preset rails"));

    ctx.assert_empty();
}
