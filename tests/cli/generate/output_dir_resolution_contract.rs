use crate::harness::TestContext;
use crate::harness::test_context::combined;
use assert_fs::prelude::*;

#[test]
fn defaults_to_each_base_directory() {
    let ctx = TestContext::new();
    ctx.seed_default_sets();

    ctx.cli().args(["-i", "db/install", "-r", "db/rollback"]).assert().success();

    ctx.child("db/install/combined_install.sql").assert(predicates::path::is_file());
    ctx.child("db/rollback/combined_rollback.sql").assert(predicates::path::is_file());
    ctx.assert_missing("combined_install.sql");
}

#[test]
fn dot_slash_writes_into_working_dir() {
    let ctx = TestContext::new();
    ctx.seed_default_sets();

    ctx.cli().args(["-i", "db/install", "-r", "db/rollback", "-o", "./"]).assert().success();

    ctx.child("combined_install.sql").assert(predicates::path::is_file());
    ctx.child("combined_rollback.sql").assert(predicates::path::is_file());
    ctx.assert_missing("db/install/combined_install.sql");
}

#[cfg(unix)]
#[test]
fn slash_writes_into_working_dir_not_filesystem_root() {
    let ctx = TestContext::new();
    ctx.seed_default_sets();

    ctx.cli().args(["-i", "db/install", "-r", "db/rollback", "-o", "/"]).assert().success();

    ctx.child("combined_install.sql").assert(predicates::path::is_file());
    ctx.child("combined_rollback.sql").assert(predicates::path::is_file());
}

#[test]
fn explicit_output_dir_receives_both_files() {
    let ctx = TestContext::new();
    ctx.seed_default_sets();
    ctx.create_dir("build");

    ctx.cli()
        .args(["-i", "db/install", "-r", "db/rollback", "--output", "build"])
        .assert()
        .success();

    assert_eq!(ctx.read_file("build/combined_install.sql"), combined(&["CREATE TABLE t;"]));
    assert_eq!(ctx.read_file("build/combined_rollback.sql"), combined(&["DROP TABLE t;"]));
}

#[test]
fn absolute_output_dir_outside_working_dir() {
    let ctx = TestContext::new();
    ctx.seed_default_sets();
    let artifacts = ctx.outside("artifacts");
    artifacts.create_dir_all().unwrap();

    ctx.cli()
        .arg("-i")
        .arg("db/install")
        .arg("-r")
        .arg("db/rollback")
        .arg("-o")
        .arg(artifacts.path())
        .assert()
        .success();

    artifacts.child("combined_install.sql").assert(predicates::path::is_file());
    artifacts.child("combined_rollback.sql").assert(predicates::path::is_file());
}

#[test]
fn absolute_base_directories_are_accepted() {
    let ctx = TestContext::new();
    ctx.seed_default_sets();
    let install = ctx.child("db/install");
    let rollback = ctx.child("db/rollback");

    ctx.cli()
        .arg("--install")
        .arg(install.path())
        .arg("--rollback")
        .arg(rollback.path())
        .assert()
        .success();

    install.child("combined_install.sql").assert(predicates::path::is_file());
    rollback.child("combined_rollback.sql").assert(predicates::path::is_file());
}
