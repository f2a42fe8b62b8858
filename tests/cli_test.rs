/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior.
/// The interactive picker needs a TTY and is covered by unit tests instead.
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::OptionsFileBuilder;
use predicates::prelude::*;

fn omnibox() -> Command {
    Command::new(env!("CARGO_BIN_EXE_omnibox"))
}

#[test]
fn test_cli_filter_builtin_countries() {
    omnibox()
        .args(["filter", "united"])
        .assert()
        .success()
        .stdout(predicate::str::contains("United States"))
        .stdout(predicate::str::contains("United Kingdom"))
        .stdout(predicate::str::contains("Canada").not());
}

#[test]
fn test_cli_filter_no_match() {
    omnibox()
        .args(["filter", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No options available"));
}

#[test]
fn test_cli_filter_json_output() {
    let output = omnibox().args(["filter", "mexi", "--json"]).output().unwrap();
    assert!(output.status.success());

    let matches: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let matches = matches.as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["value"], "MX");
    assert_eq!(matches[0]["label"], "🇲🇽 Mexico (+52)");
}

#[test]
fn test_cli_filter_options_file() {
    let (_dir, path) = OptionsFileBuilder::new()
        .option("Red", "r")
        .option("Green", "g")
        .option("Blue", "b")
        .build();

    omnibox()
        .arg("--options")
        .arg(&path)
        .args(["filter", "E"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Red"))
        .stdout(predicate::str::contains("Green"))
        .stdout(predicate::str::contains("Blue"));
}

#[test]
fn test_cli_filter_preserves_order() {
    let (_dir, path) =
        OptionsFileBuilder::new().option("Zebra", "z").option("Apple", "a").build();

    omnibox()
        .arg("--options")
        .arg(&path)
        .args(["filter", ""])
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?s)Zebra.*Apple").unwrap());
}

#[test]
fn test_cli_list_with_malformed_record() {
    let (_dir, path) = OptionsFileBuilder::new()
        .option("Good", "ok")
        .raw_record(r#"{"value":"no-label"}"#)
        .build();

    omnibox()
        .arg("--options")
        .arg(&path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok\tGood"))
        .stdout(predicate::str::contains("no-label").not())
        .stderr(predicate::str::contains("1 unrenderable"));
}

#[test]
fn test_cli_invalid_options_file() {
    let (_dir, path) = OptionsFileBuilder::new().build_with_content("{not json");

    omnibox()
        .arg("--options")
        .arg(&path)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load options"));
}

#[test]
fn test_cli_missing_options_file() {
    omnibox()
        .args(["--options", "/nonexistent/options.json", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/options.json"));
}

#[test]
fn test_cli_list_builtin() {
    omnibox()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("JP\t"))
        .stdout(predicate::str::contains("Japan"));
}

#[test]
fn test_cli_help_flag() {
    omnibox()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address-bar style autocomplete picker"))
        .stdout(predicate::str::contains("filter"))
        .stdout(predicate::str::contains("--debounce-ms"));
}

#[test]
fn test_cli_version_flag() {
    omnibox().arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    omnibox().arg("invalid-command").assert().failure();
}

#[test]
fn test_cli_log_file_is_written() {
    let builder = OptionsFileBuilder::new();
    let log_path = builder.dir().join("omnibox.log");
    let (_dir, path) = builder.raw_record(r#"{"label":"orphan"}"#).build();

    omnibox()
        .env("OMNIBOX_LOG", "warn")
        .arg("--options")
        .arg(&path)
        .arg("--log-file")
        .arg(&log_path)
        .arg("list")
        .assert()
        .success();

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("missing `value`"));
}
