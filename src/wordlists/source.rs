//! Target word selection
//!
//! A `WordSource` owns the dictionary of possible targets and draws one per round.

use super::TARGETS;
use super::loader::words_from_slice;
use crate::core::Word;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Error type for word sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSourceError {
    EmptyWordList,
}

impl fmt::Display for WordSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list contains no valid 5-letter words"),
        }
    }
}

impl std::error::Error for WordSourceError {}

/// Dictionary of targets plus the random generator used to pick from it
#[derive(Debug, Clone)]
pub struct WordSource {
    words: Vec<Word>,
    rng: StdRng,
}

impl WordSource {
    /// Create a source over `words`
    ///
    /// With `seed` the sequence of targets is reproducible; without it the
    /// generator is seeded from the operating system.
    ///
    /// # Errors
    /// Returns `WordSourceError::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<Word>, seed: Option<u64>) -> Result<Self, WordSourceError> {
        if words.is_empty() {
            return Err(WordSourceError::EmptyWordList);
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        debug!("Word source ready with {} targets (seed: {seed:?})", words.len());
        Ok(Self { words, rng })
    }

    /// Create a source over the embedded target list
    ///
    /// # Errors
    /// Returns `WordSourceError::EmptyWordList` if the embedded list is empty.
    pub fn embedded(seed: Option<u64>) -> Result<Self, WordSourceError> {
        Self::new(words_from_slice(TARGETS), seed)
    }

    /// Draw a target uniformly at random
    ///
    /// Every call is an independent draw, so the same word may come up twice
    /// in a row.
    pub fn select_target(&mut self) -> Word {
        let index = self.rng.random_range(0..self.words.len());
        self.words[index].clone()
    }

    /// Check whether `candidate` is acceptable as a guess
    ///
    /// Any five ASCII letters are accepted, in any case, whether or not they
    /// form a word in the dictionary.
    ///
    /// # Examples
    /// ```
    /// use jordle::wordlists::WordSource;
    ///
    /// assert!(WordSource::is_valid_guess("CrAnE"));
    /// assert!(WordSource::is_valid_guess("qzxvj"));
    /// assert!(!WordSource::is_valid_guess("cran"));
    /// assert!(!WordSource::is_valid_guess("cr4ne"));
    /// ```
    #[must_use]
    pub fn is_valid_guess(candidate: &str) -> bool {
        Word::is_well_formed(candidate)
    }

    /// Check whether `word` is one of the possible targets
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.text().eq_ignore_ascii_case(word))
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`: construction rejects empty lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
