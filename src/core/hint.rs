//! Keyboard hints: best-known status per letter across a round

use super::{Evaluation, LetterStatus, Word};
use rustc_hash::FxHashMap;

/// Best status observed for each guessed letter
///
/// Merging only ever upgrades a letter (`Absent` → `Present` → `Correct`), so a
/// letter confirmed Correct stays Correct even if a later guess places it wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHint {
    best: FxHashMap<u8, LetterStatus>,
}

impl KeyboardHint {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a whole guess history into a hint
    ///
    /// # Examples
    /// ```
    /// use jordle::core::{evaluate, KeyboardHint, LetterStatus, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let first = Word::new("cacao").unwrap();
    /// let second = Word::new("ocean").unwrap();
    /// let history = [
    ///     (first.clone(), evaluate(&first, &target)),
    ///     (second.clone(), evaluate(&second, &target)),
    /// ];
    ///
    /// let hint = KeyboardHint::from_history(history.iter().map(|(g, e)| (g, e)));
    /// assert_eq!(hint.status('c'), Some(LetterStatus::Correct));
    /// assert_eq!(hint.status('o'), Some(LetterStatus::Absent));
    /// assert_eq!(hint.status('z'), None);
    /// ```
    pub fn from_history<'a, I>(history: I) -> Self
    where
        I: IntoIterator<Item = (&'a Word, &'a Evaluation)>,
    {
        let mut hint = Self::new();
        for (guess, evaluation) in history {
            hint.merge(guess, evaluation);
        }
        hint
    }

    /// Merge one more evaluated guess
    pub fn merge(&mut self, guess: &Word, evaluation: &Evaluation) {
        for (&letter, &status) in guess.chars().iter().zip(evaluation.statuses()) {
            self.best
                .entry(letter)
                .and_modify(|best| *best = (*best).max(status))
                .or_insert(status);
        }
    }

    /// Best status seen for `letter` (case-insensitive), if it was ever guessed
    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.best.get(&(letter.to_ascii_lowercase() as u8)).copied()
    }

    /// Number of distinct letters guessed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Guessed letters with their status, in alphabetical order
    #[must_use]
    pub fn letters(&self) -> Vec<(char, LetterStatus)> {
        let mut letters: Vec<_> = self
            .best
            .iter()
            .map(|(&letter, &status)| (letter as char, status))
            .collect();
        letters.sort_unstable_by_key(|&(letter, _)| letter);
        letters
    }
}
