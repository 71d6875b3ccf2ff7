//! Basic CLI tests for wv
//!
//! Tests for command-line argument parsing, help output, version display,
//! and error handling for invalid inputs. The TUI itself is never started.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wv() -> Command {
    Command::cargo_bin("wv").unwrap()
}

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    wv().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("--no-preview"))
        .stdout(predicate::str::contains("hyprpaper.conf"));
}

#[test]
fn help_short_flag_shows_usage() {
    wv().arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"));
}

#[test]
fn version_flag_shows_version() {
    wv().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_wins_over_bad_path() {
    wv().args(["/nonexistent/path", "--help"]).assert().success();
}

// =============================================================================
// Invalid Arguments (Exit Code 1)
// =============================================================================

#[test]
fn nonexistent_path_returns_exit_code_1() {
    wv().arg("/nonexistent/path/that/does/not/exist")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot access"))
        .stderr(predicate::str::contains("Usage: wv"));
}

#[test]
fn file_path_returns_exit_code_1() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("x.png");
    std::fs::write(&file, b"").unwrap();

    wv().arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn unknown_option_returns_exit_code_1() {
    wv().arg("--unknown-option")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown option"))
        .stderr(predicate::str::contains("Usage: wv"));
}
