use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn existing_files_abort_with_conflict_code() {
    let ctx = TestContext::new();
    ctx.write_file("kool.yml", "scripts: {}\n");

    ctx.cli()
        .args(["preset", "php"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Preset file kool.yml already exists."))
        .stdout(predicate::str::contains("use --override"));

    assert_eq!(ctx.read_file("kool.yml"), "scripts: {}\n");
    assert_eq!(ctx.file_names(), vec!["kool.yml"]);
}

#[test]
fn every_conflicting_file_is_reported() {
    let ctx = TestContext::new();
    ctx.write_file("kool.yml", "mine");
    ctx.write_file("docker-compose.yml", "mine");

    ctx.cli()
        .args(["preset", "php"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Preset file kool.yml already exists."))
        .stdout(predicate::str::contains("Preset file docker-compose.yml already exists."));
}

#[test]
fn override_replaces_existing_files() {
    let ctx = TestContext::new();
    ctx.write_file("kool.yml", "mine");

    ctx.cli().args(["preset", "php", "--override"]).assert().success();

    assert_eq!(ctx.read_file("kool.yml"), TestContext::preset_asset("php", "kool.yml"));
}
