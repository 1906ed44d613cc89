use predicates::str::contains;
use std::fs;

mod common;
use common::attendash;

#[test]
fn init_writes_defaults_and_check_reports_complete() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("attendash.conf");

    attendash()
        .args(["config", "--init", "--config"])
        .arg(&path)
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("api_base_url: https://db-attendance-and-task-tracking.vercel.app"));
    assert!(content.contains("refresh_interval_secs: 30"));

    attendash()
        .args(["config", "--check", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("Configuration file is complete."));
}

#[test]
fn check_lists_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("attendash.conf");
    fs::write(&path, "api_base_url: http://localhost:8000\n").unwrap();

    attendash()
        .args(["config", "--check", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("refresh_interval_secs"))
        .stdout(contains("export_dir"));
}

#[test]
fn print_shows_api_url_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("attendash.conf");

    attendash()
        .args(["--api-url", "http://localhost:9999", "config", "--print", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("api_base_url: http://localhost:9999"));
}

#[test]
fn invalid_config_value_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("attendash.conf");
    fs::write(&path, "clock_interval_secs: 0\n").unwrap();

    attendash()
        .args(["config", "--print", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
