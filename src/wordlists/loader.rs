//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one word per line
///
/// Blank lines and lines starting with `#` are ignored. Entries that are not
/// five ASCII letters are skipped and reported in a single warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use jordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/targets.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_text(&content);
    debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-separated word list text
#[must_use]
pub fn words_from_text(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;

    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                debug!("Skipping word list entry {line:?}: {e}");
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        warn!("Skipped {skipped} invalid word list entries");
    }

    words
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use jordle::wordlists::loader::words_from_slice;
/// use jordle::wordlists::TARGETS;
///
/// let words = words_from_slice(TARGETS);
/// assert_eq!(words.len(), TARGETS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_text_handles_blank_lines_comments_and_case() {
        let text = "# targets\nCRANE\n\n  slate  \nab1de\nwords\n";
        let words = words_from_text(text);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();

        assert_eq!(texts, ["crane", "slate", "words"]);
    }

    #[test]
    fn words_from_text_empty() {
        assert!(words_from_text("").is_empty());
        assert!(words_from_text("\n\n# nothing\n").is_empty());
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("jordle-loader-{}.txt", std::process::id()));
        fs::write(&path, "allot\nlotto\nnope\n").unwrap();

        let words = load_from_file(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "lotto");
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }

    #[test]
    fn load_from_embedded_targets() {
        use crate::wordlists::TARGETS;

        let words = words_from_slice(TARGETS);
        assert_eq!(words.len(), TARGETS.len());
    }
}
