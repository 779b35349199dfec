// Integration tests for cli/args.rs - flag parsing and Subject construction.
//
// Covers:
//   - Short and long flag spellings
//   - Required flags and their usage errors
//   - Value validation (numbers, positivity, age range)
//   - Optional --subtract / --add resolution
//   - --debug, --help and --version

use clap::error::ErrorKind;
use tdee::cli::args::{parse_args_from, ParsedArgs};
use tdee::config::{DISPLAY_LEVEL_DEBUG, DISPLAY_LEVEL_DEFAULT};
use tdee::{Adjustment, Gender, UnitSystem};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

const BASE: &[&str] = &[
    "-u", "metric", "-w", "70", "-h", "1.75", "-g", "male", "-a", "30", "--activity-level", "1.55",
];

fn args(a: &[&str]) -> Vec<String> {
    a.iter().map(|s| s.to_string()).collect()
}

/// Parse the base flag set plus `extra`.
fn parse_with(extra: &[&str]) -> ParsedArgs {
    let mut argv = args(BASE);
    argv.extend(args(extra));
    parse_args_from("tdee", &argv).expect("parse should succeed")
}

/// Parse expecting an error, returning its kind.
fn parse_err(argv: &[&str]) -> ErrorKind {
    parse_args_from("tdee", &args(argv))
        .expect_err("expected parse error")
        .kind()
}

/// BASE with the flag `name` and its value removed.
fn without(name: &str) -> Vec<&'static str> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < BASE.len() {
        if BASE[i] == name {
            i += 2;
            continue;
        }
        out.push(BASE[i]);
        i += 1;
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Happy path
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn short_flags_populate_every_field() {
    let p = parse_with(&[]);
    assert_eq!(p.unit, UnitSystem::Metric);
    assert_eq!(p.weight, 70.0);
    assert_eq!(p.height, 1.75);
    assert_eq!(p.gender, Gender::Male);
    assert_eq!(p.age, 30);
    assert_eq!(p.activity_level, 1.55);
    assert_eq!(p.subtract, 0.0);
    assert_eq!(p.add, 0.0);
    assert!(!p.debug);
}

#[test]
fn long_flags_are_equivalent() {
    let p = parse_args_from(
        "tdee",
        &args(&[
            "--unit=imperial",
            "--weight",
            "154.35",
            "--height=69",
            "--gender",
            "female",
            "--age",
            "41",
            "--activity-level=1.2",
        ]),
    )
    .unwrap();
    assert_eq!(p.unit, UnitSystem::Imperial);
    assert_eq!(p.weight, 154.35);
    assert_eq!(p.height, 69.0);
    assert_eq!(p.gender, Gender::Female);
    assert_eq!(p.age, 41);
    assert_eq!(p.activity_level, 1.2);
}

#[test]
fn subject_carries_raw_values() {
    let s = parse_with(&[]).subject();
    assert_eq!(s.weight, 70.0);
    assert_eq!(s.height, 1.75);
    assert_eq!(s.unit_system, UnitSystem::Metric);
    assert_eq!(s.adjustment, None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Required flags
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn every_required_flag_is_enforced() {
    for flag in ["-u", "-w", "-h", "-g", "-a", "--activity-level"] {
        let argv = without(flag);
        assert_eq!(
            parse_err(&argv),
            ErrorKind::MissingRequiredArgument,
            "dropping {flag} should be a usage error"
        );
    }
}

#[test]
fn no_args_is_an_error() {
    assert_eq!(parse_err(&[]), ErrorKind::MissingRequiredArgument);
}

// ─────────────────────────────────────────────────────────────────────────────
// Value validation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn non_numeric_weight_is_rejected() {
    let mut argv = without("-w");
    argv.extend(["-w", "heavy"]);
    assert_eq!(parse_err(&argv), ErrorKind::ValueValidation);
}

#[test]
fn zero_height_is_rejected() {
    let mut argv = without("-h");
    argv.extend(["-h", "0"]);
    assert_eq!(parse_err(&argv), ErrorKind::ValueValidation);
}

#[test]
fn infinite_activity_level_is_rejected() {
    let mut argv = without("--activity-level");
    argv.extend(["--activity-level", "inf"]);
    assert_eq!(parse_err(&argv), ErrorKind::ValueValidation);
}

#[test]
fn age_out_of_u8_range_is_rejected() {
    let mut argv = without("-a");
    argv.extend(["-a", "256"]);
    assert_eq!(parse_err(&argv), ErrorKind::ValueValidation);
}

#[test]
fn age_bounds_are_accepted() {
    for age in ["0", "255"] {
        let mut argv = without("-a");
        argv.extend(["-a", age]);
        let p = parse_args_from("tdee", &args(&argv)).unwrap();
        assert_eq!(p.age.to_string(), age);
    }
}

#[test]
fn unknown_unit_is_imperial() {
    let mut argv = without("-u");
    argv.extend(["-u", "stones"]);
    let p = parse_args_from("tdee", &args(&argv)).unwrap();
    assert_eq!(p.unit, UnitSystem::Imperial);
}

#[test]
fn unknown_gender_is_accepted() {
    let mut argv = without("-g");
    argv.extend(["-g", "Male"]);
    let p = parse_args_from("tdee", &args(&argv)).unwrap();
    assert_eq!(p.gender, Gender::Unrecognized);
}

// ─────────────────────────────────────────────────────────────────────────────
// Adjustments
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn subtract_alone_is_a_reduction() {
    let p = parse_with(&["--subtract", "20"]);
    assert_eq!(p.subject().adjustment, Some(Adjustment::Reduction(20.0)));
    assert!(!p.conflicting_adjustments());
}

#[test]
fn add_alone_is_a_surplus() {
    let p = parse_with(&["--add=12.5"]);
    assert_eq!(p.subject().adjustment, Some(Adjustment::Surplus(12.5)));
}

#[test]
fn both_percentages_cancel_out() {
    let p = parse_with(&["--subtract", "20", "--add", "10"]);
    assert_eq!(p.subject().adjustment, None);
    assert!(p.conflicting_adjustments());
}

#[test]
fn explicit_zero_is_no_adjustment() {
    let p = parse_with(&["--subtract", "0", "--add", "0"]);
    assert_eq!(p.subject().adjustment, None);
    assert!(!p.conflicting_adjustments());
}

#[test]
fn negative_percent_is_accepted() {
    let p = parse_with(&["--subtract", "-5"]);
    assert_eq!(p.subtract, -5.0);
    assert_eq!(p.subject().adjustment, Some(Adjustment::Reduction(-5.0)));
}

// ─────────────────────────────────────────────────────────────────────────────
// --debug / --help / --version
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn debug_selects_debug_display_level() {
    assert_eq!(parse_with(&[]).display_level(), DISPLAY_LEVEL_DEFAULT);
    assert_eq!(parse_with(&["--debug"]).display_level(), DISPLAY_LEVEL_DEBUG);
}

#[test]
fn help_is_long_form_only() {
    assert_eq!(parse_err(&["--help"]), ErrorKind::DisplayHelp);
    // -h expects a height value.
    assert_ne!(parse_err(&["-h"]), ErrorKind::DisplayHelp);
}

#[test]
fn version_flag() {
    assert_eq!(parse_err(&["--version"]), ErrorKind::DisplayVersion);
}
