//! CLI surface tests

mod common;

use predicates::prelude::*;

#[test]
fn test_help_shows_commands() {
    let env = common::TestEnv::new();

    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("install")
                .and(predicate::str::contains("update"))
                .and(predicate::str::contains("uninstall")),
        );
}

#[test]
fn test_install_help_shows_options() {
    let env = common::TestEnv::new();

    env.cmd()
        .args(["install", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--no-tui")
                .and(predicate::str::contains("--model"))
                .and(predicate::str::contains("--color")),
        );
}

#[test]
fn test_version_flag() {
    let env = common::TestEnv::new();

    env.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("nudge"));
}

#[test]
fn test_hidden_version_command() {
    let env = common::TestEnv::new();

    env.cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("nudge").and(predicate::str::contains("Build info")));
}

#[test]
fn test_completions_bash() {
    let env = common::TestEnv::new();

    env.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nudge"));
}

#[test]
fn test_completions_unknown_shell() {
    let env = common::TestEnv::new();

    env.cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
fn test_unknown_command_fails() {
    let env = common::TestEnv::new();

    env.cmd().arg("frobnicate").assert().failure();
}
