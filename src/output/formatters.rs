//! Formatting utilities for terminal output

use crate::core::{Evaluation, KeyboardHint, LetterStatus, Word};
use colored::{ColoredString, Colorize};

/// Keyboard rows in on-screen order
pub const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

fn tile(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        Some(LetterStatus::Correct) => text.black().on_green().bold(),
        Some(LetterStatus::Present) => text.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Render a guess as coloured letter tiles
#[must_use]
pub fn colored_guess(guess: &Word, evaluation: &Evaluation) -> String {
    guess
        .text()
        .chars()
        .zip(evaluation.statuses())
        .map(|(letter, &status)| tile(letter, Some(status)).to_string())
        .collect()
}

/// Render the keyboard, one string per row, coloured by best known status
#[must_use]
pub fn colored_keyboard(hint: &KeyboardHint) -> Vec<String> {
    QWERTY_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|letter| tile(letter, hint.status(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    #[test]
    fn qwerty_rows_cover_alphabet_once() {
        let mut letters: Vec<char> = QWERTY_ROWS.concat().chars().collect();
        letters.sort_unstable();
        let alphabet: Vec<char> = ('a'..='z').collect();
        assert_eq!(letters, alphabet);
    }

    #[test]
    fn colored_guess_keeps_letters_in_order() {
        colored::control::set_override(false);
        let guess = Word::new("crate").unwrap();
        let target = Word::new("crane").unwrap();

        let rendered = colored_guess(&guess, &evaluate(&guess, &target));
        assert_eq!(rendered, " C  R  A  T  E ");
    }

    #[test]
    fn colored_keyboard_has_three_rows() {
        colored::control::set_override(false);
        let rows = colored_keyboard(&KeyboardHint::new());

        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with(" Q "));
        assert!(rows[2].starts_with("     Z "));
    }
}
