//! Command-line interface for the `tdee` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings, the `DISPLAY_LEVEL` atomic and the diagnostic macros. |
//! | [`help`]      | About texts, the activity-level guide and the debug banner. |
//! | [`arg_utils`] | clap value parsers: finite/positive floats, unit system, gender. |
//! | [`args`]      | `ParsedArgs` - flag definitions and conversion into a `Subject`. |
//!
//! Typical call sequence: `parse_args` → `ParsedArgs::subject` → `Estimates::compute`.

pub mod constants;
pub mod help;
pub mod arg_utils;
pub mod args;
