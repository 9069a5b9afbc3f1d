//! Jordle
//!
//! A terminal word-guessing game: find the hidden 5-letter word in six tries,
//! with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use jordle::core::{evaluate, LetterStatus, Word};
//! use jordle::game::{Outcome, RoundEngine};
//! use jordle::wordlists::{loader::words_from_slice, WordSource};
//!
//! // Score a single guess
//! let guess = Word::new("llama").unwrap();
//! let target = Word::new("allot").unwrap();
//! assert_eq!(evaluate(&guess, &target).to_code(), "YGY--");
//!
//! // Play a round against a one-word dictionary
//! let source = WordSource::new(words_from_slice(&["crane"]), Some(7)).unwrap();
//! let mut engine = RoundEngine::new(source);
//! let evaluation = engine.submit_guess("trace").unwrap();
//! assert_eq!(evaluation.status_at(0), LetterStatus::Absent);
//! engine.submit_guess("crane").unwrap();
//! assert_eq!(engine.outcome(), Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Round state machine and statistics
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
