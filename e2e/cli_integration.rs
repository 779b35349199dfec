// e2e/cli_integration.rs - CLI integration tests
//
// Tests the `tdee` binary as a black-box CLI tool using std::process::Command.
// Covers report output, adjustment lines, exit codes, usage errors and the
// stdout/stderr split under --debug.

use std::path::PathBuf;
use std::process::{Command, Output};

/// Locate the `tdee` binary produced by Cargo.
fn tdee_bin() -> PathBuf {
    // CARGO_BIN_EXE_tdee is set by Cargo when running integration tests.
    // Fall back to walking up from the test binary location.
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_tdee") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // remove test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("tdee");
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(tdee_bin())
        .args(args)
        .output()
        .expect("failed to run tdee")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

const FEMALE_METRIC: &[&str] = &[
    "--unit", "metric", "--weight", "70", "--height", "1.75", "--gender", "female", "--age", "25",
    "--activity-level", "1.55",
];

const MALE_METRIC: &[&str] = &[
    "-u", "metric", "-w", "70", "-h", "1.75", "-g", "male", "-a", "30", "--activity-level", "1.55",
];

fn with(base: &[&str], extra: &[&str]) -> Vec<String> {
    base.iter().chain(extra.iter()).map(|s| s.to_string()).collect()
}

fn run_owned(args: &[String]) -> Output {
    Command::new(tdee_bin())
        .args(args)
        .output()
        .expect("failed to run tdee")
}

// ── 1. Full report ────────────────────────────────────────────────────────────

#[test]
fn test_cli_metric_female_report() {
    let output = run(FEMALE_METRIC);
    assert!(output.status.success(), "status: {}", output.status);
    assert_eq!(
        stdout_of(&output),
        "Your BMI: 22.9\n\
         Original Harris-Benedict BMR: 1531.3 cals\n\
         Revised Harris-Benedict BMR: 1528.8 cals\n\
         Mifflin-St Jeor BMR: 1507.8 cals\n\
         Your Total Daily Energy Expenditure (TDEE): 2337.1 cals\n"
    );
    assert!(stderr_of(&output).is_empty(), "no diagnostics without --debug");
}

#[test]
fn test_cli_imperial_male_report() {
    let output = run(&[
        "-u", "imperial", "-w", "154.35", "-h", "69", "-g", "male", "-a", "30", "--activity-level",
        "1.2",
    ]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Your BMI: 22.8\n"), "got: {stdout}");
    assert!(stdout.contains("Mifflin-St Jeor BMR: 1650.4 cals\n"), "got: {stdout}");
    assert!(
        stdout.contains("Your Total Daily Energy Expenditure (TDEE): 1980.5 cals\n"),
        "got: {stdout}"
    );
}

// ── 2. Adjustments ────────────────────────────────────────────────────────────

#[test]
fn test_cli_subtract_line() {
    let output = run_owned(&with(MALE_METRIC, &["--subtract", "20"]));
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().count(), 6);
    assert_eq!(
        stdout.lines().last(),
        Some("With 20 % Caloric Reduction: 2044.5 cals")
    );
}

#[test]
fn test_cli_add_line() {
    let output = run_owned(&with(MALE_METRIC, &["--add", "10"]));
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output).lines().last(),
        Some("With 10 % Caloric Surplus: 2811.2 cals")
    );
}

#[test]
fn test_cli_both_adjustments_are_skipped() {
    let output = run_owned(&with(MALE_METRIC, &["--subtract", "20", "--add", "10"]));
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().count(), 5);
    assert!(!stdout.contains("With "));
}

// ── 3. Unrecognized gender ────────────────────────────────────────────────────

#[test]
fn test_cli_unrecognized_gender_prints_zeroes() {
    let output = run(&[
        "-u", "metric", "-w", "70", "-h", "1.75", "-g", "other", "-a", "30", "--activity-level",
        "1.55",
    ]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Your BMI: 22.9\n"));
    assert!(stdout.contains("Original Harris-Benedict BMR: 0 cals\n"));
    assert!(stdout.contains("Revised Harris-Benedict BMR: 0 cals\n"));
    assert!(stdout.contains("Mifflin-St Jeor BMR: 0 cals\n"));
    assert!(stdout.contains("Your Total Daily Energy Expenditure (TDEE): 0 cals\n"));
}

// ── 4. Usage errors ───────────────────────────────────────────────────────────

#[test]
fn test_cli_missing_required_flag() {
    // --activity-level omitted
    let output = run(&["-u", "metric", "-w", "70", "-h", "1.75", "-g", "male", "-a", "30"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty(), "no report on usage error");
    let stderr = stderr_of(&output);
    assert!(stderr.contains("--activity-level"), "got: {stderr}");
    assert!(stderr.to_lowercase().contains("usage"), "got: {stderr}");
}

#[test]
fn test_cli_no_arguments() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn test_cli_non_numeric_weight() {
    let output = run(&[
        "-u", "metric", "-w", "seventy", "-h", "1.75", "-g", "male", "-a", "30", "--activity-level",
        "1.55",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("seventy"));
}

#[test]
fn test_cli_age_out_of_range() {
    let output = run(&[
        "-u", "metric", "-w", "70", "-h", "1.75", "-g", "male", "-a", "300", "--activity-level",
        "1.55",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());
}

// ── 5. --help / --version ─────────────────────────────────────────────────────

#[test]
fn test_cli_help() {
    let output = run(&["--help"]);
    assert!(output.status.success(), "--help should exit 0");
    let stdout = stdout_of(&output);
    assert!(stdout.to_lowercase().contains("usage"), "got: {stdout}");
    assert!(stdout.contains("Sedentary"), "got: {stdout}");
}

#[test]
fn test_cli_version() {
    let output = run(&["--version"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "got: {stdout}");
}

// ── 6. --debug ────────────────────────────────────────────────────────────────

#[test]
fn test_cli_debug_writes_diagnostics_to_stderr_only() {
    let plain = run(FEMALE_METRIC);
    let debug = run_owned(&with(FEMALE_METRIC, &["--debug"]));
    assert!(debug.status.success());
    assert_eq!(stdout_of(&plain), stdout_of(&debug), "--debug must not change the report");
    let stderr = stderr_of(&debug);
    assert!(stderr.contains("*** tdee v"), "got: {stderr}");
    assert!(stderr.contains("Normalized"), "got: {stderr}");
}

#[test]
fn test_cli_debug_notes_cancelled_adjustments() {
    let output = run_owned(&with(MALE_METRIC, &["--subtract", "20", "--add", "10", "--debug"]));
    assert!(output.status.success());
    assert!(stderr_of(&output).contains("both --subtract and --add"));
}
