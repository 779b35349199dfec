// Integration tests for formula.rs - BMI and the three BMR equations.
//
// Reference subject: 70 kg, 1.75 m. Expected values are the literal
// coefficients worked through by hand, then rounded to one decimal.

use tdee::formula::{
    bmi, mifflin_st_jeor, original_harris_benedict, revised_harris_benedict, round_tenth,
};
use tdee::units::MetricMeasures;
use tdee::Gender;

const REFERENCE: MetricMeasures = MetricMeasures {
    weight_kg: 70.0,
    height_m: 1.75,
};

// ── BMI ──────────────────────────────────────────────────────────────────────

#[test]
fn bmi_reference() {
    // 70 / 1.75² = 22.857…
    assert_eq!(bmi(70.0, 1.75), 22.9);
}

#[test]
fn bmi_matches_definition() {
    for &(w, h) in &[(50.0_f64, 1.6_f64), (82.5, 1.82), (120.0, 1.9), (45.3, 1.52)] {
        assert_eq!(bmi(w, h), round_tenth(w / h.powi(2)));
    }
}

// ── Original Harris-Benedict ─────────────────────────────────────────────────

#[test]
fn original_harris_benedict_male() {
    // 66.4730 + 13.7515·70 + 5.0033·175 − 6.7550·30 = 1702.0055
    assert_eq!(original_harris_benedict(&REFERENCE, Gender::Male, 30), 1702.0);
}

#[test]
fn original_harris_benedict_female() {
    // 655.0955 + 9.5634·70 + 1.8496·175 − 4.6756·25 = 1531.3235
    assert_eq!(original_harris_benedict(&REFERENCE, Gender::Female, 25), 1531.3);
}

// ── Revised Harris-Benedict ──────────────────────────────────────────────────

#[test]
fn revised_harris_benedict_male() {
    // 88.362 + 13.397·70 + 4.799·175 − 5.677·30 = 1695.667
    assert_eq!(revised_harris_benedict(&REFERENCE, Gender::Male, 30), 1695.7);
}

#[test]
fn revised_harris_benedict_female() {
    // 447.593 + 9.247·70 + 3.098·175 − 4.330·25 = 1528.783
    assert_eq!(revised_harris_benedict(&REFERENCE, Gender::Female, 25), 1528.8);
}

// ── Mifflin-St Jeor ──────────────────────────────────────────────────────────

#[test]
fn mifflin_st_jeor_male() {
    // 700 + 1093.75 − 150 + 5 = 1648.75
    assert_eq!(mifflin_st_jeor(&REFERENCE, Gender::Male, 30), 1648.8);
}

#[test]
fn mifflin_st_jeor_female() {
    // 700 + 1093.75 − 125 − 161 = 1507.75
    assert_eq!(mifflin_st_jeor(&REFERENCE, Gender::Female, 25), 1507.8);
}

#[test]
fn male_female_offset_is_166() {
    let m = mifflin_st_jeor(&REFERENCE, Gender::Male, 40);
    let f = mifflin_st_jeor(&REFERENCE, Gender::Female, 40);
    assert!((m - f - 166.0).abs() < 1e-9);
}

// ── Unrecognized gender ──────────────────────────────────────────────────────

#[test]
fn unrecognized_gender_zeroes_every_bmr() {
    for age in [0u8, 30, 255] {
        assert_eq!(original_harris_benedict(&REFERENCE, Gender::Unrecognized, age), 0.0);
        assert_eq!(revised_harris_benedict(&REFERENCE, Gender::Unrecognized, age), 0.0);
        assert_eq!(mifflin_st_jeor(&REFERENCE, Gender::Unrecognized, age), 0.0);
    }
}
