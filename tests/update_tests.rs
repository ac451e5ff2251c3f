//! Update command tests

mod common;

use predicates::prelude::*;

#[test]
fn test_update_without_install_fails() {
    let env = common::TestEnv::new();

    env.cmd()
        .args(["update", "--no-tui"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not installed"));
}

#[test]
fn test_update_preserves_model_and_color() {
    let env = common::TestEnv::new();

    env.cmd()
        .args([
            "install",
            "--no-tui",
            "--model",
            "anthropic/claude-sonnet-4",
            "--color",
            "#10B981",
        ])
        .assert()
        .success();

    env.cmd()
        .args(["update", "--preserve-config", "--no-tui"])
        .assert()
        .success();

    let content = env.read(&env.opencode_agent());
    assert!(content.contains("color: \"#10B981\""));
    assert!(content.contains("model: anthropic/claude-sonnet-4"));
}

#[test]
fn test_update_non_interactive_implies_preserve() {
    let env = common::TestEnv::new();

    env.cmd()
        .args(["install", "--no-tui", "--color", "#0EA5E9"])
        .assert()
        .success();

    env.cmd()
        .args(["update", "--no-tui"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Preserving existing configuration"));

    let content = env.read(&env.opencode_agent());
    assert!(content.contains("color: \"#0EA5E9\""));
}

#[test]
fn test_update_only_touches_installed_platforms() {
    let env = common::TestEnv::new();

    env.cmd()
        .args(["install", "--no-tui", "--to", "opencode"])
        .assert()
        .success();

    env.cmd().args(["update", "--no-tui"]).assert().success();

    assert!(env.opencode_agent().exists());
    assert!(!env.copilot_agent().exists());
    assert!(!env.claudecode_agent().exists());
}

#[test]
fn test_update_rerenders_from_template() {
    let env = common::TestEnv::new();

    env.cmd()
        .args(["install", "--no-tui", "--to", "opencode"])
        .assert()
        .success();

    // Simulate an outdated installed agent with a stale body
    std::fs::write(
        env.opencode_agent(),
        "---\nname: learn\ncolor: \"#10B981\"\n---\nOld body.\n",
    )
    .expect("Failed to write stale agent");

    env.cmd().args(["update", "--no-tui"]).assert().success();

    let content = env.read(&env.opencode_agent());
    assert!(content.contains("# Learn"));
    assert!(!content.contains("Old body."));
    // Settings from the stale install survive the update
    assert!(content.contains("color: \"#10B981\""));
}

#[test]
fn test_update_with_custom_template() {
    let env = common::TestEnv::new();
    let template = env.write_template("---\nname: learn\n---\nRefreshed mentor body.\n");

    env.cmd()
        .args(["install", "--no-tui", "--to", "opencode"])
        .assert()
        .success();

    env.cmd()
        .args(["update", "--no-tui"])
        .arg("--template")
        .arg(&template)
        .assert()
        .success();

    let content = env.read(&env.opencode_agent());
    assert!(content.contains("Refreshed mentor body."));
}
