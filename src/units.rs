//! Unit normalization.
//!
//! Every formula in [`crate::formula`] works on metric measures, so imperial
//! inputs (pounds, inches) are converted once, up front, into a
//! [`MetricMeasures`] value.

use std::fmt;

use crate::config::{CM_PER_M, IN_PER_M, LB_PER_KG};

/// Measurement system the weight and height flags are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    /// Kilograms and meters.
    Metric,
    /// Pounds and inches.
    Imperial,
}

impl UnitSystem {
    /// Interprets a `--unit` value.
    ///
    /// Only the exact string `"metric"` selects [`UnitSystem::Metric`]; every
    /// other value, including misspellings, is treated as imperial.
    pub fn from_flag(value: &str) -> Self {
        if value == "metric" {
            UnitSystem::Metric
        } else {
            UnitSystem::Imperial
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight and height after normalization to the metric system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricMeasures {
    pub weight_kg: f64,
    pub height_m: f64,
}

impl MetricMeasures {
    /// Height in centimeters, as taken by the BMR equations.
    #[inline]
    pub fn height_cm(&self) -> f64 {
        self.height_m * CM_PER_M
    }
}

#[inline]
pub fn pounds_to_kilograms(pounds: f64) -> f64 {
    pounds / LB_PER_KG
}

#[inline]
pub fn inches_to_meters(inches: f64) -> f64 {
    inches / IN_PER_M
}

/// Converts raw `weight`/`height` in `unit` into metric measures.
///
/// Metric values pass through unchanged.
pub fn normalize(unit: UnitSystem, weight: f64, height: f64) -> MetricMeasures {
    match unit {
        UnitSystem::Metric => MetricMeasures {
            weight_kg: weight,
            height_m: height,
        },
        UnitSystem::Imperial => MetricMeasures {
            weight_kg: pounds_to_kilograms(weight),
            height_m: inches_to_meters(height),
        },
    }
}
