//! End-to-end tests for the `cas-overlay completions` command.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_completions_bash() {
    let mut cmd = cargo_bin_cmd!("cas-overlay");
    cmd.arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("cas-overlay"))
        .stdout(predicate::str::contains("populate"));
}

#[test]
fn test_completions_zsh() {
    let mut cmd = cargo_bin_cmd!("cas-overlay");
    cmd.arg("completions")
        .arg("zsh")
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef cas-overlay"));
}

#[test]
fn test_completions_unknown_shell() {
    let mut cmd = cargo_bin_cmd!("cas-overlay");
    cmd.arg("completions")
        .arg("tcsh")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_version_flag() {
    let mut cmd = cargo_bin_cmd!("cas-overlay");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
