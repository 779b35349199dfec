// cli/help.rs - Help and banner text.
//
// Per-flag help lives on the clap definitions in `cli::args`; this module
// holds the longer texts that are assembled from shared constants.

use crate::cli::constants::PROGRAM_NAME;
use crate::config::ACTIVITY_LEVELS;

/// One-line description shown by `--help`.
pub const ABOUT: &str = "A Total Daily Energy Expenditure (TDEE) command-line calculator.";

/// Description shown at the top of the long help.
pub const LONG_ABOUT: &str = "A Total Daily Energy Expenditure (TDEE) command-line calculator. \
Prints BMI, three BMR estimates (Original Harris-Benedict, Revised Harris-Benedict, \
Mifflin-St Jeor) and TDEE. TDEE uses the Mifflin-St Jeor equation as it is considered \
to be more accurate, see https://www.ncbi.nlm.nih.gov/pubmed/15883556.";

/// Long help for `--activity-level`, listing the conventional multipliers.
pub fn activity_level_help() -> String {
    let mut help = String::from("Your activity multiplier. Choose one of:");
    for preset in ACTIVITY_LEVELS.iter() {
        help.push_str(&format!(
            "\n\n{} for {} ({})",
            preset.multiplier, preset.label, preset.description
        ));
    }
    help
}

/// Banner printed when `--debug` is given.
pub fn welcome_message() -> String {
    format!(
        "*** {} v{} {}-bit ***",
        PROGRAM_NAME,
        crate::version_string(),
        std::mem::size_of::<*const ()>() * 8
    )
}
