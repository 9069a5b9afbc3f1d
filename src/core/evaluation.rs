//! Guess evaluation: per-letter feedback for a guess against a target
//!
//! Each guessed letter is classified as:
//! - Correct: right letter in the right position (green)
//! - Present: letter occurs elsewhere in the target (yellow)
//! - Absent: letter is not in the target, or every occurrence is already
//!   accounted for by other guessed letters (gray)

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single guessed letter
///
/// Variants are ordered by how much they reveal, so `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Compact single-character code: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a status from its code or emoji form
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/⬜.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for one guess: one status per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation {
    statuses: [LetterStatus; WORD_LENGTH],
}

impl Evaluation {
    /// All letters correct
    pub const PERFECT: Self = Self::new([LetterStatus::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self { statuses }
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.statuses
    }

    /// Status of the letter at `position` (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.statuses[position]
    }

    /// Number of letters in the correct position
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.count(LetterStatus::Correct)
    }

    /// Number of letters present elsewhere in the target
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.count(LetterStatus::Present)
    }

    fn count(&self, status: LetterStatus) -> usize {
        self.statuses.iter().filter(|&&s| s == status).count()
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.correct_count() == WORD_LENGTH
    }

    /// Parse an evaluation from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use jordle::core::Evaluation;
    ///
    /// let e1 = Evaluation::from_str("GY-GY").unwrap();
    /// let e2 = Evaluation::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(e1, e2);
    /// assert_eq!(e1.correct_count(), 2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut symbols = s.chars();

        for slot in &mut statuses {
            *slot = LetterStatus::from_symbol(symbols.next()?)?;
        }

        if symbols.next().is_some() {
            return None;
        }

        Some(Self { statuses })
    }

    /// Render as a compact code like "GY-GY"
    #[must_use]
    pub fn to_code(&self) -> String {
        self.statuses.iter().map(|s| s.symbol()).collect()
    }

    /// Render as an emoji row like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.statuses.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Evaluation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid evaluation string: {s}"))
    }
}

/// Evaluate `guess` against `target`
///
/// Repeated letters are handled as a multiset: every target letter can back at
/// most one Correct or Present status, and exact matches claim their letter
/// before any misplaced match does.
///
/// # Algorithm
/// 1. First pass: mark exact position matches Correct and consume that target letter
/// 2. Second pass: for each remaining guess letter, consume the leftmost unconsumed
///    matching target letter and mark it Present; otherwise it stays Absent
///
/// # Examples
/// ```
/// use jordle::core::{evaluate, Evaluation, Word};
///
/// let guess = Word::new("lotto").unwrap();
/// let target = Word::new("allot").unwrap();
///
/// // Only one 'o' and one 't' in the target, so the second of each is gray
/// assert_eq!(evaluate(&guess, &target), Evaluation::from_str("YYY--").unwrap());
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Evaluation {
    let guess = guess.chars();
    let target = target.chars();

    let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
    let mut consumed = [false; WORD_LENGTH];

    // Allow: Index needed to access guess[i], target[i] and set both result arrays
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess[i] == target[i] {
            statuses[i] = LetterStatus::Correct;
            consumed[i] = true;
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if statuses[i] == LetterStatus::Correct {
            continue;
        }

        if let Some(j) = (0..WORD_LENGTH).find(|&j| !consumed[j] && target[j] == guess[i]) {
            consumed[j] = true;
            statuses[i] = LetterStatus::Present;
        }
    }

    Evaluation { statuses }
}
