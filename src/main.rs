//! Binary entry point for the `tdee` command-line calculator.
//!
//! # Control flow
//!
//! 1. [`parse_args`] processes all flags and builds a [`ParsedArgs`] value.
//!    A missing or malformed flag prints usage to stderr and exits 1 before
//!    anything is computed.
//! 2. [`run`] builds the [`tdee::Subject`], computes the estimates and writes
//!    the report to stdout.

use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;

use tdee::cli::args::{parse_args, ParsedArgs};
use tdee::cli::constants::set_display_level;
use tdee::cli::help::welcome_message;
use tdee::config::activity_preset;
use tdee::{calculate, debugoutput, displaylevel, Gender};

// ── Post-parse dispatch ──────────────────────────────────────────────────────

/// Compute and print the report for already-parsed flags.
fn run(args: &ParsedArgs) -> anyhow::Result<()> {
    debugoutput!("{}\n", welcome_message());

    let subject = args.subject();
    let measures = subject.measures();

    debugoutput!(
        "Input : unit={} weight={} height={} gender={} age={} activity-level={} subtract={} add={}\n",
        subject.unit_system,
        subject.weight,
        subject.height,
        subject.gender,
        subject.age,
        subject.activity_level,
        args.subtract,
        args.add
    );
    debugoutput!(
        "Normalized : weight={} kg height={} m ({} cm)\n",
        measures.weight_kg,
        measures.height_m,
        measures.height_cm()
    );

    if subject.gender == Gender::Unrecognized {
        debugoutput!("gender is neither 'male' nor 'female': BMR and TDEE will be 0\n");
    }
    if activity_preset(subject.activity_level).is_none() {
        debugoutput!(
            "activity level {} is not one of the conventional multipliers\n",
            subject.activity_level
        );
    }
    if args.conflicting_adjustments() {
        debugoutput!("both --subtract and --add given: no adjusted target computed\n");
    }

    let estimates = calculate(&subject);
    debugoutput!("Estimates : {:?}\n", estimates);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    tdee::report::write_report(&mut out, &estimates).context("failed to write report to stdout")
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            // --help and --version arrive as errors too; they print to stdout and succeed.
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    set_display_level(args.display_level());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            displaylevel!(1, "tdee: {:#}\n", e);
            ExitCode::from(1)
        }
    }
}
