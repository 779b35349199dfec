//! Body-metric and energy-expenditure formulas.
//!
//! Every function here is pure: identical inputs always produce bit-identical
//! outputs. All results are rounded to one decimal place with
//! [`round_tenth`].
//!
//! # References
//!
//! - Harris, J.A., & Benedict, F.G. (1919). A biometric study of human basal
//!   metabolism. *PNAS*, 4(12), 370-373.
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation
//!   reevaluated. *American Journal of Clinical Nutrition*, 40(1), 168-182.
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247.

use crate::config::ROUNDING_SCALE;
use crate::subject::{Adjustment, Gender, Subject};
use crate::units::MetricMeasures;

/// Rounds `x` to one decimal place, halves away from zero.
#[inline]
pub fn round_tenth(x: f64) -> f64 {
    (x * ROUNDING_SCALE).round() / ROUNDING_SCALE
}

/// Body Mass Index: `weight_kg / height_m²`.
pub fn bmi(weight_kg: f64, height_m: f64) -> f64 {
    round_tenth(weight_kg / height_m.powi(2))
}

// ── BMR equations ─────────────────────────────────────────────────────────────
//
// All three equations share the linear form
//   constant + weight·kg + height·cm − age·years

#[derive(Debug, Clone, Copy)]
struct BmrCoefficients {
    constant: f64,
    weight: f64,
    height: f64,
    age: f64,
}

impl BmrCoefficients {
    #[inline]
    fn apply(&self, weight_kg: f64, height_cm: f64, age: u8) -> f64 {
        self.constant + self.weight * weight_kg + self.height * height_cm
            - self.age * f64::from(age)
    }
}

/// Coefficients for male and female subjects, in that order.
type BmrEquation = (BmrCoefficients, BmrCoefficients);

const ORIGINAL_HARRIS_BENEDICT: BmrEquation = (
    BmrCoefficients { constant: 66.4730, weight: 13.7515, height: 5.0033, age: 6.7550 },
    BmrCoefficients { constant: 655.0955, weight: 9.5634, height: 1.8496, age: 4.6756 },
);

const REVISED_HARRIS_BENEDICT: BmrEquation = (
    BmrCoefficients { constant: 88.362, weight: 13.397, height: 4.799, age: 5.677 },
    BmrCoefficients { constant: 447.593, weight: 9.247, height: 3.098, age: 4.330 },
);

const MIFFLIN_ST_JEOR: BmrEquation = (
    BmrCoefficients { constant: 5.0, weight: 10.0, height: 6.25, age: 5.0 },
    BmrCoefficients { constant: -161.0, weight: 10.0, height: 6.25, age: 5.0 },
);

fn evaluate(equation: &BmrEquation, measures: &MetricMeasures, gender: Gender, age: u8) -> f64 {
    let coefficients = match gender {
        Gender::Male => &equation.0,
        Gender::Female => &equation.1,
        Gender::Unrecognized => return 0.0,
    };
    round_tenth(coefficients.apply(measures.weight_kg, measures.height_cm(), age))
}

/// Original (1919) Harris-Benedict BMR in kcal/day. Zero for an unrecognized gender.
pub fn original_harris_benedict(measures: &MetricMeasures, gender: Gender, age: u8) -> f64 {
    evaluate(&ORIGINAL_HARRIS_BENEDICT, measures, gender, age)
}

/// Revised (1984) Harris-Benedict BMR in kcal/day. Zero for an unrecognized gender.
pub fn revised_harris_benedict(measures: &MetricMeasures, gender: Gender, age: u8) -> f64 {
    evaluate(&REVISED_HARRIS_BENEDICT, measures, gender, age)
}

/// Mifflin-St Jeor BMR in kcal/day. Zero for an unrecognized gender.
pub fn mifflin_st_jeor(measures: &MetricMeasures, gender: Gender, age: u8) -> f64 {
    evaluate(&MIFFLIN_ST_JEOR, measures, gender, age)
}

/// Total Daily Energy Expenditure from a Mifflin-St Jeor BMR.
///
/// Only the Mifflin-St Jeor estimate feeds TDEE; the Harris-Benedict values
/// are informational.
pub fn tdee(mifflin_st_jeor_bmr: f64, activity_level: f64) -> f64 {
    round_tenth(mifflin_st_jeor_bmr * activity_level)
}

impl Adjustment {
    /// Caloric target after applying this adjustment to `tdee`.
    pub fn apply(&self, tdee: f64) -> f64 {
        let delta = self.percent() * tdee / 100.0;
        match self {
            Adjustment::Reduction(_) => round_tenth(tdee - delta),
            Adjustment::Surplus(_) => round_tenth(tdee + delta),
        }
    }
}

/// An adjustment together with the caloric target it produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustedTarget {
    pub adjustment: Adjustment,
    pub calories: f64,
}

/// Every value derived for one [`Subject`], in report order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimates {
    pub bmi: f64,
    pub original_harris_benedict: f64,
    pub revised_harris_benedict: f64,
    pub mifflin_st_jeor: f64,
    pub tdee: f64,
    pub adjusted: Option<AdjustedTarget>,
}

impl Estimates {
    /// Runs the full pipeline: normalize, BMI, the three BMRs, TDEE, then
    /// the optional adjusted target.
    pub fn compute(subject: &Subject) -> Self {
        let measures = subject.measures();
        let mifflin = mifflin_st_jeor(&measures, subject.gender, subject.age);
        let energy = tdee(mifflin, subject.activity_level);

        Estimates {
            bmi: bmi(measures.weight_kg, measures.height_m),
            original_harris_benedict: original_harris_benedict(&measures, subject.gender, subject.age),
            revised_harris_benedict: revised_harris_benedict(&measures, subject.gender, subject.age),
            mifflin_st_jeor: mifflin,
            tdee: energy,
            adjusted: subject.adjustment.map(|adjustment| AdjustedTarget {
                adjustment,
                calories: adjustment.apply(energy),
            }),
        }
    }
}
