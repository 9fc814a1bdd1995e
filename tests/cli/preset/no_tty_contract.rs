use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn preset_without_argument_requires_a_terminal() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("preset")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("the input device is not a TTY"));

    ctx.assert_empty();
}
