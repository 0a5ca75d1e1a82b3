//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Compare Command
// =============================================================================

#[test]
fn compare_classifies_ordered_pair_as_before() {
    cmd()
        .arg("compare")
        .write_stdin("2.3.4 3.3.4\n")
        .assert()
        .success()
        .stdout("before\n");
}

#[test]
fn compare_classifies_reversed_pair_as_after() {
    cmd()
        .arg("compare")
        .write_stdin("3.3.4 2.3.4\n")
        .assert()
        .success()
        .stdout("after\n");
}

#[test]
fn compare_classifies_identical_pair_as_equal() {
    cmd()
        .arg("compare")
        .write_stdin("1.2.3 1.2.3\n")
        .assert()
        .success()
        .stdout("equal\n");
}

#[test]
fn compare_classifies_malformed_version_as_invalid() {
    cmd()
        .arg("compare")
        .write_stdin("1.1.2 1.1\n")
        .assert()
        .success()
        .stdout("invalid\n");
}

#[test]
fn compare_skips_whitespace_only_lines() {
    cmd()
        .arg("compare")
        .write_stdin("   \t \n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn compare_flags_wrong_token_counts() {
    cmd()
        .arg("compare")
        .write_stdin("1.2.3\n1.2.3 2.3.4 3.4.5\n")
        .assert()
        .success()
        .stdout("invalid\ninvalid\n");
}

#[test]
fn compare_handles_prerelease_precedence() {
    cmd()
        .arg("compare")
        .write_stdin("1.0.0-alpha 1.0.0\n1.0.0-alpha 1.0.0-alpha.1\n")
        .assert()
        .success()
        .stdout("before\nbefore\n");
}

#[test]
fn compare_ignores_build_metadata() {
    cmd()
        .arg("compare")
        .write_stdin("1.2.3+build1 1.2.3+build2\n")
        .assert()
        .success()
        .stdout("equal\n");
}

#[test]
fn compare_processes_many_lines() {
    cmd()
        .arg("compare")
        .write_stdin("2.3.4 3.3.4\n\n1.2.3 1.2.3\nbogus 1.0.0\n")
        .assert()
        .success()
        .stdout("before\nequal\ninvalid\n");
}

#[test]
fn compare_reads_from_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = tmp.path().join("pairs.txt");
    std::fs::write(&input, "1.0.0 2.0.0\n2.0.0 1.0.0\n").unwrap();

    cmd()
        .arg("compare")
        .arg(&input)
        .assert()
        .success()
        .stdout("before\nafter\n");
}

#[test]
fn compare_fails_on_missing_file() {
    cmd()
        .args(["compare", "/nonexistent/pairs.txt"])
        .assert()
        .failure();
}

#[test]
fn compare_json_emits_records() {
    let output = cmd()
        .args(["compare", "--json"])
        .write_stdin("1.0.0 2.0.0\n")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let record: serde_json::Value = serde_json::from_str(stdout.trim())
        .expect("compare --json should output valid JSON per line");
    assert_eq!(record["verdict"], "before");
}

// =============================================================================
// Parse Command
// =============================================================================

#[test]
fn parse_shows_fields() {
    cmd()
        .args(["parse", "1.2.3-rc.1+sha.5114f85"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rc.1"))
        .stdout(predicate::str::contains("sha.5114f85"));
}

#[test]
fn parse_json_outputs_valid_json() {
    let output = cmd()
        .args(["parse", "--json", "1.2.3-alpha"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("parse --json should output valid JSON");

    assert_eq!(json["major"], 1);
    assert_eq!(json["prerelease"], "alpha");
    assert_eq!(json["canonical"], "1.2.3-alpha");
}

#[test]
fn parse_rejects_malformed_version() {
    cmd()
        .args(["parse", "1.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("component"));
}

#[test]
fn parse_rejects_leading_zero() {
    cmd().args(["parse", "01.2.3"]).assert().failure();
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn verbose_flag_accepted() {
    cmd().args(["--verbose", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_flag_shows_error() {
    cmd()
        .arg("--not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_flag_changes_directory() {
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
