// config.rs - Compile-time configuration constants.
//
// Every tunable of the calculator is fixed at build time: there are no
// configuration files and no environment variables.

// Pounds per kilogram used when normalizing imperial weight.
pub const LB_PER_KG: f64 = 2.205;

// Inches per meter used when normalizing imperial height.
pub const IN_PER_M: f64 = 39.37;

// Centimeters per meter. The BMR equations take height in centimeters.
pub const CM_PER_M: f64 = 100.0;

// Every reported value is rounded to 1 / ROUNDING_SCALE (one decimal place).
pub const ROUNDING_SCALE: f64 = 10.0;

// Display level in effect when `--debug` is not given.
// 0 = silent; 1 = errors; 2 = normal; 3 = informational; 4 = debug
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

// Display level selected by `--debug`.
pub const DISPLAY_LEVEL_DEBUG: u32 = 4;

/// A conventional activity multiplier and the lifestyle it describes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityPreset {
    pub multiplier: f64,
    pub label: &'static str,
    pub description: &'static str,
}

/// The five conventional activity multipliers, least active first.
///
/// These are advisory: `--activity-level` accepts any positive multiplier.
pub const ACTIVITY_LEVELS: [ActivityPreset; 5] = [
    ActivityPreset {
        multiplier: 1.2,
        label: "Sedentary",
        description: "little or no exercise, desk job",
    },
    ActivityPreset {
        multiplier: 1.375,
        label: "Lightly Active",
        description: "light exercise/activity 1-3 days/week",
    },
    ActivityPreset {
        multiplier: 1.55,
        label: "Moderately Active",
        description: "moderate exercise/activity 6-7 days/week",
    },
    ActivityPreset {
        multiplier: 1.725,
        label: "Very Active",
        description: "2-3 hours of hard exercise every day",
    },
    ActivityPreset {
        multiplier: 1.9,
        label: "Extremely Active",
        description: "hard exercise 2 or more times per day, or training for marathon, or triathlon, etc.",
    },
];

/// Returns the preset whose multiplier is exactly `multiplier`, if any.
pub fn activity_preset(multiplier: f64) -> Option<&'static ActivityPreset> {
    ACTIVITY_LEVELS.iter().find(|p| p.multiplier == multiplier)
}
