//! Integration tests for `castellan config`.

#![allow(clippy::expect_used, deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn castellan(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("castellan").expect("castellan binary should exist");
    cmd.env("CASTELLAN_SESSION", dir.path().join("session.json"));
    cmd.env("CASTELLAN_CONFIG", dir.path().join("config.yaml"));
    cmd
}

#[test]
fn test_config_show_without_file_shows_default_address() {
    let dir = TempDir::new().expect("tempdir");
    castellan(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("controller.address"))
        .stdout(predicate::str::contains(
            "http://localhost:9990/management",
        ));
}

#[test]
fn test_config_set_persists_the_address() {
    let dir = TempDir::new().expect("tempdir");
    castellan(&dir)
        .args([
            "config",
            "set",
            "controller.address",
            "https://ctl.example/management",
        ])
        .assert()
        .success();

    let content =
        std::fs::read_to_string(dir.path().join("config.yaml")).expect("config written");
    assert!(content.contains("https://ctl.example/management"));

    castellan(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://ctl.example/management"));
}

#[test]
fn test_config_set_unknown_key_fails() {
    let dir = TempDir::new().expect("tempdir");
    castellan(&dir)
        .args(["config", "set", "controller.port", "9990"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown setting"));
}

#[test]
fn test_config_set_invalid_value_fails() {
    let dir = TempDir::new().expect("tempdir");
    castellan(&dir)
        .args(["config", "set", "controller.address", "not-a-url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value"));
}
