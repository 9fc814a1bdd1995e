use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn kool_log_enables_engine_events_on_stderr() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["preset", "php"])
        .env("KOOL_LOG", "debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote preset file"))
        .stdout(predicate::str::contains("Wrote preset file").not());
}

#[test]
fn default_run_keeps_stderr_quiet() {
    let ctx = TestContext::new();

    ctx.cli().args(["preset", "php"]).assert().success().stderr(predicate::str::is_empty());
}
