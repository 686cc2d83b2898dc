#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! Every test points `XDG_CONFIG_HOME` at a fresh temp directory so the
//! user's real config is never read or written.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn minall(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("minall").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("DEEPSEEK_API_KEY")
        .env_remove("DASHSCOPE_API_KEY");
    cmd
}

fn config_file(config_home: &TempDir) -> std::path::PathBuf {
    config_home.path().join("minall").join("config.toml")
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    minall(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Use LLMs directly from the terminal"))
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("pipe"))
        .stdout(predicate::str::contains("trans"))
        .stdout(predicate::str::contains("--model"));
}

#[test]
fn test_no_arguments_prints_help() {
    let home = TempDir::new().unwrap();
    minall(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
    assert!(!config_file(&home).exists());
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    minall(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_trans_help_shows_defaults() {
    let home = TempDir::new().unwrap();
    minall(&home)
        .args(["trans", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("Chinese"))
        .stdout(predicate::str::contains("--domain"));
}

#[test]
fn test_first_run_writes_template() {
    let home = TempDir::new().unwrap();
    minall(&home)
        .args(["why", "is", "the", "sky", "blue"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Config file not found"));

    let written = std::fs::read_to_string(config_file(&home)).unwrap();
    assert!(written.contains("default_model = \"ds\""));
}

#[test]
fn test_models_without_config() {
    let home = TempDir::new().unwrap();
    minall(&home)
        .arg("models")
        .assert()
        .success()
        .stdout(predicate::str::contains("minall init"));
    assert!(!config_file(&home).exists());
}

#[test]
fn test_init_then_models_lists_template() {
    let home = TempDir::new().unwrap();
    minall(&home).arg("init").assert().success();

    minall(&home)
        .args(["models", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deepseek-reasoner"))
        .stdout(predicate::str::contains("[translator]"))
        .stdout(predicate::str::contains("dashscope"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let home = TempDir::new().unwrap();
    minall(&home).arg("init").assert().success();

    minall(&home)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    minall(&home).args(["init", "--force"]).assert().success();
}

#[test]
fn test_missing_api_key_is_config_error() {
    let home = TempDir::new().unwrap();
    minall(&home).arg("init").assert().success();

    minall(&home)
        .args(["-m", "r1", "hello"])
        .assert()
        .code(78)
        .stderr(predicate::str::contains("DEEPSEEK_API_KEY"));
}

#[test]
fn test_unknown_model_is_config_error() {
    let home = TempDir::new().unwrap();
    minall(&home).arg("init").assert().success();

    minall(&home)
        .args(["trans", "-m", "ds"])
        .write_stdin("hello")
        .assert()
        .code(78)
        .stderr(predicate::str::contains("Invalid model: ds"))
        .stderr(predicate::str::contains("mt"));
}
