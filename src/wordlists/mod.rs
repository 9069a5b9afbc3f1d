//! Word lists and target selection
//!
//! Provides the embedded target list, file loading, and the [`WordSource`]
//! that draws a target for each round.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{TARGETS, TARGETS_COUNT};
pub use source::{WordSource, WordSourceError};
