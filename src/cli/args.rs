//! Command-line flag definitions for the `tdee` binary.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit-testing).
//! Both return a [`ParsedArgs`] value holding every flag, already converted to
//! its domain type; nothing is mutated after parsing.
//!
//! `-h` is the short form of `--height`, so help is only reachable as
//! `--help`. Missing required flags and malformed values return a
//! `clap::Error` whose rendering includes the usage line.

use clap::{ArgAction, Parser};

use crate::cli::arg_utils::{
    parse_finite_f64, parse_gender, parse_positive_f64, parse_unit_system,
};
use crate::cli::constants::PROGRAM_NAME;
use crate::cli::help::{activity_level_help, ABOUT, LONG_ABOUT};
use crate::config::{DISPLAY_LEVEL_DEBUG, DISPLAY_LEVEL_DEFAULT};
use crate::subject::{Adjustment, Gender, Subject};
use crate::units::UnitSystem;

// ── Public output type ─────────────────────────────────────────────────────────

/// Complete set of flags produced by argument parsing.
#[derive(Parser, Debug, Clone)]
#[command(
    name = PROGRAM_NAME,
    version,
    about = ABOUT,
    long_about = LONG_ABOUT,
    disable_help_flag = true
)]
pub struct ParsedArgs {
    /// Unit system: 'metric' (kg, m) or 'imperial' (lb, in).
    #[arg(short = 'u', long = "unit", value_name = "UNIT", value_parser = parse_unit_system)]
    pub unit: UnitSystem,

    /// Your weight, in kilograms or pounds.
    #[arg(short = 'w', long = "weight", value_name = "WEIGHT", value_parser = parse_positive_f64)]
    pub weight: f64,

    /// Your height, in meters or inches.
    #[arg(short = 'h', long = "height", value_name = "HEIGHT", value_parser = parse_positive_f64)]
    pub height: f64,

    /// Your gender: 'male' or 'female'.
    #[arg(short = 'g', long = "gender", value_name = "GENDER", value_parser = parse_gender)]
    pub gender: Gender,

    /// Your age in years.
    #[arg(short = 'a', long = "age", value_name = "AGE")]
    pub age: u8,

    /// Your activity multiplier (1.2, 1.375, 1.55, 1.725 or 1.9).
    #[arg(
        long = "activity-level",
        value_name = "MULTIPLIER",
        value_parser = parse_positive_f64,
        long_help = activity_level_help()
    )]
    pub activity_level: f64,

    /// Subtract this percentage of TDEE and give a new caloric intake. Useful for cutting.
    #[arg(
        long = "subtract",
        value_name = "PERCENT",
        default_value_t = 0.0,
        allow_negative_numbers = true,
        value_parser = parse_finite_f64
    )]
    pub subtract: f64,

    /// Add this percentage of TDEE and give a new caloric intake. Useful when bulking.
    #[arg(
        long = "add",
        value_name = "PERCENT",
        default_value_t = 0.0,
        allow_negative_numbers = true,
        value_parser = parse_finite_f64
    )]
    pub add: f64,

    /// Enable debug mode (diagnostics on stderr).
    #[arg(long = "debug")]
    pub debug: bool,

    /// Print help.
    #[arg(long = "help", action = ArgAction::HelpLong)]
    #[allow(dead_code)]
    help: Option<bool>,
}

impl ParsedArgs {
    /// Builds the immutable input record the calculation runs on.
    pub fn subject(&self) -> Subject {
        Subject {
            age: self.age,
            gender: self.gender,
            weight: self.weight,
            height: self.height,
            unit_system: self.unit,
            activity_level: self.activity_level,
            adjustment: Adjustment::from_percents(self.subtract, self.add),
        }
    }

    /// Display level selected by these flags.
    pub fn display_level(&self) -> u32 {
        if self.debug {
            DISPLAY_LEVEL_DEBUG
        } else {
            DISPLAY_LEVEL_DEFAULT
        }
    }

    /// `true` when both percentages are non-zero and therefore cancel out.
    pub fn conflicting_adjustments(&self) -> bool {
        self.subtract != 0.0 && self.add != 0.0
    }
}

// ── Public API ─────────────────────────────────────────────────────────────────

/// Parse `std::env::args()`.
pub fn parse_args() -> Result<ParsedArgs, clap::Error> {
    ParsedArgs::try_parse()
}

/// Parse an explicit argument list.
///
/// `exe_name` is argv[0]. `argv` is argv[1..].
/// This variant is callable from tests without touching `std::env`.
pub fn parse_args_from(exe_name: &str, argv: &[String]) -> Result<ParsedArgs, clap::Error> {
    ParsedArgs::try_parse_from(std::iter::once(exe_name.to_owned()).chain(argv.iter().cloned()))
}
