//! Round state machine
//!
//! A round starts `InProgress` with a fresh target and ends `Won` or `Lost`.
//! Rejected guesses never change the state.

use crate::core::{Evaluation, KeyboardHint, MAX_ATTEMPTS, Word, WordError, evaluate};
use crate::wordlists::WordSource;
use log::{debug, info};
use std::fmt;

/// Round status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// `true` once the round is won or lost
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// One submitted guess with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub evaluation: Evaluation,
}

/// Error type for rejected guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Not five ASCII letters
    InvalidGuess(WordError),
    /// The round has already been won or lost
    RoundOver(Outcome),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(e) => write!(f, "Invalid guess: {e}"),
            Self::RoundOver(outcome) => write!(f, "Round is over ({outcome}), start a new one"),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(e) => Some(e),
            Self::RoundOver(_) => None,
        }
    }
}

/// Read-only snapshot of a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub attempts_used: usize,
    pub history: Vec<Attempt>,
    pub outcome: Outcome,
}

impl RoundState {
    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts_used
    }
}

/// Owns one round: its target, guess history and outcome
///
/// Every method runs to completion without blocking. One engine serves one
/// session; `submit_guess` and `reset` take `&mut self`.
///
/// # Examples
/// ```
/// use jordle::core::Word;
/// use jordle::game::{Outcome, RoundEngine};
/// use jordle::wordlists::WordSource;
///
/// let words = vec![Word::new("crane").unwrap()];
/// let mut engine = RoundEngine::new(WordSource::new(words, Some(1)).unwrap());
///
/// let evaluation = engine.submit_guess("CRATE").unwrap();
/// assert_eq!(evaluation.to_code(), "GGG-G");
///
/// engine.submit_guess("crane").unwrap();
/// assert_eq!(engine.outcome(), Outcome::Won);
/// ```
#[derive(Debug, Clone)]
pub struct RoundEngine {
    source: WordSource,
    target: Word,
    history: Vec<Attempt>,
    outcome: Outcome,
}

impl RoundEngine {
    /// Start a round with a target drawn from `source`
    #[must_use]
    pub fn new(mut source: WordSource) -> Self {
        let target = source.select_target();
        debug!("New round started ({} possible targets)", source.len());

        Self {
            source,
            target,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            outcome: Outcome::InProgress,
        }
    }

    /// Discard the current round and start a new one with a fresh target
    pub fn reset(&mut self) {
        if !self.outcome.is_over() && !self.history.is_empty() {
            debug!(
                "Abandoning round after {} attempts",
                self.history.len()
            );
        }

        self.target = self.source.select_target();
        self.history.clear();
        self.outcome = Outcome::InProgress;
        debug!("New round started ({} possible targets)", self.source.len());
    }

    /// Submit a guess and get its evaluation
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the round untouched, if:
    /// - `GuessError::InvalidGuess`: the text is not five ASCII letters
    /// - `GuessError::RoundOver`: the round is already won or lost
    pub fn submit_guess(&mut self, text: &str) -> Result<Evaluation, GuessError> {
        let guess = Word::new(text).map_err(|e| {
            debug!("Rejected guess {text:?}: {e}");
            GuessError::InvalidGuess(e)
        })?;

        if self.outcome.is_over() {
            debug!("Rejected guess {text:?}: round already {}", self.outcome);
            return Err(GuessError::RoundOver(self.outcome));
        }

        let evaluation = evaluate(&guess, &self.target);
        self.history.push(Attempt { guess, evaluation });

        let attempts = self.history.len();
        if evaluation.is_perfect() {
            self.outcome = Outcome::Won;
            info!("Round won in {attempts} attempt(s)");
        } else if attempts == MAX_ATTEMPTS {
            self.outcome = Outcome::Lost;
            info!("Round lost, target was {}", self.target);
        }

        Ok(evaluation)
    }

    /// The current target
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Snapshot of attempts, history and outcome
    #[must_use]
    pub fn state(&self) -> RoundState {
        RoundState {
            attempts_used: self.history.len(),
            history: self.history.clone(),
            outcome: self.outcome,
        }
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }

    /// Best status per letter across this round's guesses
    #[must_use]
    pub fn keyboard_hint(&self) -> KeyboardHint {
        KeyboardHint::from_history(self.history.iter().map(|a| (&a.guess, &a.evaluation)))
    }

    #[must_use]
    pub const fn source(&self) -> &WordSource {
        &self.source
    }
}
