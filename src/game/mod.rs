//! Round engine and session bookkeeping

mod round;
mod stats;

pub use round::{Attempt, GuessError, Outcome, RoundEngine, RoundState};
pub use stats::SessionStats;
