//! Editing model for the row being typed

use super::WORD_LENGTH;

/// Letters typed so far for the next guess
///
/// Every front end edits the row through this type, so on-screen keys and
/// physical keys share the same append/erase rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessBuffer {
    letters: String,
}

impl GuessBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a letter, lowercased
    ///
    /// Returns `false` and leaves the buffer unchanged if `letter` is not an
    /// ASCII letter or the row is already full.
    pub fn push(&mut self, letter: char) -> bool {
        if !letter.is_ascii_alphabetic() || self.is_full() {
            return false;
        }
        self.letters.push(letter.to_ascii_lowercase());
        true
    }

    /// Remove the last letter, if any
    pub fn backspace(&mut self) -> Option<char> {
        self.letters.pop()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    /// Take the typed letters out, leaving the buffer empty
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.letters)
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() == WORD_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_lowercases_letters() {
        let mut buffer = GuessBuffer::new();
        assert!(buffer.push('C'));
        assert!(buffer.push('r'));
        assert_eq!(buffer.as_str(), "cr");
    }

    #[test]
    fn push_ignores_non_letters() {
        let mut buffer = GuessBuffer::new();
        for c in ['1', ' ', '!', 'é', '\n'] {
            assert!(!buffer.push(c));
        }
        assert!(buffer.is_empty());
    }

    #[test]
    fn push_stops_at_five_letters() {
        let mut buffer = GuessBuffer::new();
        for c in "crane".chars() {
            assert!(buffer.push(c));
        }
        assert!(buffer.is_full());
        assert!(!buffer.push('s'));
        assert_eq!(buffer.as_str(), "crane");
    }

    #[test]
    fn backspace_on_empty_buffer_is_noop() {
        let mut buffer = GuessBuffer::new();
        assert_eq!(buffer.backspace(), None);

        buffer.push('a');
        assert_eq!(buffer.backspace(), Some('a'));
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn take_empties_buffer() {
        let mut buffer = GuessBuffer::new();
        "slate".chars().for_each(|c| {
            buffer.push(c);
        });
        assert_eq!(buffer.take(), "slate");
        assert!(buffer.is_empty());
    }
}
