use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_output() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sam"));
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SAM - Smart Agent Manager"))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--platform"))
        .stdout(predicate::str::contains("--templates"))
        .stdout(predicate::str::contains("PLATFORMS:"));
}

#[test]
fn test_version_output() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sam"));
    cmd.arg("--version");

    let output = cmd.assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);

    // "sam X.Y.Z" or "sam X.Y.Z-dev[+hash[.dirty]]"
    let version_part = stdout.strip_prefix("sam ").unwrap().trim();
    assert!(
        version_part.starts_with(env!("CARGO_PKG_VERSION")),
        "Unexpected version: {}",
        version_part
    );

    #[cfg(not(debug_assertions))]
    assert!(
        !version_part.contains("-dev"),
        "Release build version should not contain -dev: {}",
        version_part
    );
}

#[test]
fn test_unknown_platform_is_a_usage_error() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sam"));
    cmd.env_remove("SAM_PLATFORM")
        .args(["--platform", "vscode"]);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("vscode"));
}

#[test]
fn test_platform_values_listed_in_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sam"));
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("claude"))
        .stdout(predicate::str::contains("cursor"))
        .stdout(predicate::str::contains("codex"))
        .stdout(predicate::str::contains("all"));
}

#[test]
fn test_list_agents() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sam"));
    cmd.args(["--list-agents", "--no-color"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("atlas"))
        .stdout(predicate::str::contains("Atlas - System Architect"))
        .stdout(predicate::str::contains("Iris - UX Designer"));
}
