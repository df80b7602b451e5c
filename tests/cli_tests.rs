//! CLI integration tests using the REAL iconreg binary

mod common;

use predicates::prelude::*;

#[test]
fn test_help_output() {
    common::iconreg_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("icon"))
        .stdout(predicate::str::contains("icons"))
        .stdout(predicate::str::contains("flags"))
        .stdout(predicate::str::contains("iconmap"))
        .stdout(predicate::str::contains("profiles"));
}

#[test]
fn test_version_output() {
    common::iconreg_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("iconreg"))
        .stdout(predicate::str::contains("iconreg.yaml"));
}

#[test]
fn test_profiles_output() {
    common::iconreg_cmd()
        .arg("profiles")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "plone.staticresources:default\nplone.staticresources:async\nplone.staticresources:uninstall\n",
        ))
        .stdout(predicate::str::contains("plone.staticresources.upgrades:11\n"))
        .stdout(predicate::str::ends_with("plone.staticresources.upgrades:206\n"));
}

#[test]
fn test_profiles_needs_no_package() {
    let package = common::TestPackage::new();
    common::iconreg_cmd()
        .args(["--root"])
        .arg(package.path.join("does-not-exist"))
        .arg("profiles")
        .assert()
        .success();
}

#[test]
fn test_completions_output() {
    common::iconreg_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("iconreg"));
}

#[test]
fn test_completions_unknown_shell() {
    common::iconreg_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported shell: tcsh"));
}

#[test]
fn test_generators_take_no_arguments() {
    common::iconreg_cmd()
        .args(["icons", "static/icons-bootstrap"])
        .assert()
        .failure();
}

#[test]
fn test_root_from_env() {
    let package = common::TestPackage::standard();
    let elsewhere = common::TestPackage::new();

    common::iconreg_cmd_for_package(&elsewhere.path)
        .env("ICONREG_ROOT", &package.path)
        .arg("icons")
        .assert()
        .success();

    assert!(package.file_exists("profiles/default/registry/icons_bootstrap.xml"));
}
