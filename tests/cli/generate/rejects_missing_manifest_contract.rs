use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn missing_install_manifest_exits_without_output() {
    let ctx = TestContext::new();
    ctx.write_manifest("db/rollback", &["001.sql"]);
    ctx.write_file("db/rollback/001.sql", "DROP TABLE t;");
    ctx.create_dir("db/install");

    ctx.cli()
        .args(["-i", "db/install", "-r", "db/rollback"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Could not find manifest at 'db/install'!!"));

    ctx.assert_missing("db/install/combined_install.sql");
    ctx.assert_missing("db/rollback/combined_rollback.sql");
}

#[test]
fn missing_rollback_manifest_exits_before_install_pass() {
    let ctx = TestContext::new();
    ctx.write_manifest("db/install", &["001.sql"]);
    ctx.write_file("db/install/001.sql", "CREATE TABLE t;");

    ctx.cli()
        .args(["-i", "db/install", "-r", "db/rollback"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Could not find manifest at 'db/rollback'!!"));

    ctx.assert_missing("db/install/combined_install.sql");
}

#[test]
fn manifest_in_subdirectory_is_not_found() {
    let ctx = TestContext::new();
    ctx.seed_default_sets();
    ctx.write_manifest("nested/inner", &["001.sql"]);

    ctx.cli()
        .args(["-i", "nested", "-r", "db/rollback"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Could not find manifest at 'nested'!!"));
}
