use crate::harness::TestContext;
use crate::harness::test_context::combined;
use predicates::prelude::*;

#[test]
fn missing_install_script_fails_cleanly() {
    let ctx = TestContext::new();
    ctx.seed_default_sets();
    ctx.write_manifest("db/install", &["001_create.sql", "002_missing.sql"]);

    ctx.cli()
        .args(["-i", "db/install", "-r", "db/rollback"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found 2 scripts in the manifest for install."))
        .stderr(predicate::str::contains("Error: Failed to read script"))
        .stderr(predicate::str::contains("002_missing.sql"));

    ctx.assert_missing("db/install/combined_install.sql");
    ctx.assert_missing("db/rollback/combined_rollback.sql");
}

#[test]
fn rollback_failure_keeps_install_output() {
    let ctx = TestContext::new();
    ctx.seed_default_sets();
    ctx.write_manifest("db/rollback", &["gone.sql"]);

    ctx.cli()
        .args(["-i", "db/install", "-r", "db/rollback"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("gone.sql"));

    assert_eq!(ctx.read_file("db/install/combined_install.sql"), combined(&["CREATE TABLE t;"]));
    ctx.assert_missing("db/rollback/combined_rollback.sql");
}
