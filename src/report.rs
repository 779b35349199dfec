//! Human-readable rendering of [`Estimates`].

use std::io;

use crate::cli::constants::CALORIE_UNIT;
use crate::formula::Estimates;

/// Renders one line per metric, in fixed order: BMI, Original
/// Harris-Benedict, Revised Harris-Benedict, Mifflin-St Jeor, TDEE, then the
/// adjusted target when one applies.
///
/// Values use the shortest `f64` representation, so `2000.0` renders as
/// `2000` and `22.9` as `22.9`.
pub fn render_report(estimates: &Estimates) -> String {
    let mut lines = vec![
        format!("Your BMI: {}", estimates.bmi),
        format!(
            "Original Harris-Benedict BMR: {} {}",
            estimates.original_harris_benedict, CALORIE_UNIT
        ),
        format!(
            "Revised Harris-Benedict BMR: {} {}",
            estimates.revised_harris_benedict, CALORIE_UNIT
        ),
        format!("Mifflin-St Jeor BMR: {} {}", estimates.mifflin_st_jeor, CALORIE_UNIT),
        format!(
            "Your Total Daily Energy Expenditure (TDEE): {} {}",
            estimates.tdee, CALORIE_UNIT
        ),
    ];
    if let Some(target) = &estimates.adjusted {
        lines.push(format!(
            "With {} % {}: {} {}",
            target.adjustment.percent(),
            target.adjustment.label(),
            target.calories,
            CALORIE_UNIT
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Writes the whole report to `out` with a single `write_all`.
pub fn write_report<W: io::Write>(out: &mut W, estimates: &Estimates) -> io::Result<()> {
    out.write_all(render_report(estimates).as_bytes())?;
    out.flush()
}
