// tdee - BMI, BMR and Total Daily Energy Expenditure calculator

pub mod config;
pub mod units;
pub mod subject;
pub mod formula;
pub mod report;
pub mod cli;

// ── Version constants ─────────────────────────────────────────────────────────
pub const TDEE_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the runtime version string.
pub fn version_string() -> &'static str {
    TDEE_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use formula::Estimates;
pub use subject::{Adjustment, Gender, Subject};
pub use units::UnitSystem;

/// Runs the whole calculation for `subject`.
pub fn calculate(subject: &Subject) -> Estimates {
    Estimates::compute(subject)
}
