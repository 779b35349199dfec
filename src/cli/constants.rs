// cli/constants.rs - Program identity strings, the display-level global and
// the diagnostic output macros used across the crate.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::{DISPLAY_LEVEL_DEBUG, DISPLAY_LEVEL_DEFAULT};

// ── Identity constants ────────────────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "tdee";
pub const CALORIE_UNIT: &str = "cals";

// ── Display level global ──────────────────────────────────────────────────────
//
// Diagnostics only: the calculation itself never reads this value, and report
// lines on stdout are printed regardless of it.
//
// 0 = no output; 1 = errors only; 2 = normal; 3 = informational; 4 = debug
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Returns `true` when debug diagnostics are enabled.
#[inline]
pub fn debug_enabled() -> bool {
    display_level() >= DISPLAY_LEVEL_DEBUG
}

// ── Display helpers ───────────────────────────────────────────────────────────
//
//   displaylevel!(l, ...) → if display_level() >= l { eprint!(...) }
//   debugoutput!(...)     → displaylevel!(4, ...)

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

/// Print to stderr only when `--debug` raised the display level.
#[macro_export]
macro_rules! debugoutput {
    ($($arg:tt)*) => {
        if $crate::cli::constants::debug_enabled() {
            eprint!($($arg)*);
        }
    };
}
