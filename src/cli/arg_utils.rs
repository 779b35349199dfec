// cli/arg_utils.rs - Value parsers plugged into the clap flag definitions.
//
// Each parser returns `Result<_, String>`; clap turns an `Err` into a usage
// error naming the offending flag and exits before any computation.

use crate::subject::Gender;
use crate::units::UnitSystem;

/// Parses a finite `f64`, rejecting `inf`, `NaN` and friends that
/// `f64::from_str` would otherwise accept.
pub fn parse_finite_f64(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !value.is_finite() {
        return Err(format!("'{}' is not a finite number", s));
    }
    Ok(value)
}

/// Parses a finite, strictly positive `f64` (weight, height, multiplier).
pub fn parse_positive_f64(s: &str) -> Result<f64, String> {
    let value = parse_finite_f64(s)?;
    if value <= 0.0 {
        return Err(format!("'{}' must be greater than zero", s));
    }
    Ok(value)
}

/// `--unit`: never fails; see [`UnitSystem::from_flag`].
pub fn parse_unit_system(s: &str) -> Result<UnitSystem, String> {
    Ok(UnitSystem::from_flag(s))
}

/// `--gender`: never fails; see [`Gender::from_flag`].
pub fn parse_gender(s: &str) -> Result<Gender, String> {
    Ok(Gender::from_flag(s))
}
