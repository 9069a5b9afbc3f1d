//! Terminal output formatting
//!
//! Display utilities for the line mode and command results.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, write_attempt, write_keyboard, write_round_end, write_stats};
