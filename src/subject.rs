//! The per-invocation input record and its enumerated fields.

use std::fmt;

use crate::units::{normalize, MetricMeasures, UnitSystem};

/// Gender selecting a coefficient set in the BMR equations.
///
/// The `--gender` flag is not validated: anything other than the exact,
/// lower-case `"male"` or `"female"` becomes [`Gender::Unrecognized`], which
/// makes every BMR-derived value zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Unrecognized,
}

impl Gender {
    pub fn from_flag(value: &str) -> Self {
        match value {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caloric adjustment applied to TDEE, as a percentage of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    /// Subtract the percentage (`--subtract`), e.g. when cutting.
    Reduction(f64),
    /// Add the percentage (`--add`), e.g. when bulking.
    Surplus(f64),
}

impl Adjustment {
    /// Resolves the `--subtract`/`--add` pair.
    ///
    /// Yields an adjustment only when exactly one of the two percentages is
    /// non-zero. When both are zero, or both are non-zero, no adjustment is
    /// made.
    pub fn from_percents(subtract: f64, add: f64) -> Option<Self> {
        match (subtract != 0.0, add != 0.0) {
            (true, false) => Some(Adjustment::Reduction(subtract)),
            (false, true) => Some(Adjustment::Surplus(add)),
            _ => None,
        }
    }

    pub fn percent(&self) -> f64 {
        match *self {
            Adjustment::Reduction(p) | Adjustment::Surplus(p) => p,
        }
    }

    /// Report label for this kind of adjustment.
    pub fn label(&self) -> &'static str {
        match self {
            Adjustment::Reduction(_) => "Caloric Reduction",
            Adjustment::Surplus(_) => "Caloric Surplus",
        }
    }
}

/// Everything one invocation computes from.
///
/// Built once from the parsed flags and never mutated; weight and height keep
/// the units they were entered in until [`Subject::measures`] normalizes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub age: u8,
    pub gender: Gender,
    pub weight: f64,
    pub height: f64,
    pub unit_system: UnitSystem,
    pub activity_level: f64,
    pub adjustment: Option<Adjustment>,
}

impl Subject {
    /// Weight and height converted to kilograms and meters.
    pub fn measures(&self) -> MetricMeasures {
        normalize(self.unit_system, self.weight, self.height)
    }
}
