//! Core domain types for the game
//!
//! Pure values with no I/O: words, guess evaluation, keyboard hints and the
//! typed-row editing model.

mod buffer;
mod evaluation;
mod hint;
mod word;

pub use buffer::GuessBuffer;
pub use evaluation::{Evaluation, LetterStatus, evaluate};
pub use hint::KeyboardHint;
pub use word::{Word, WordError};

/// Letters in every target and guess
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per round
pub const MAX_ATTEMPTS: usize = 6;
