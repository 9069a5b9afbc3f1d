//! Single guess check command
//!
//! Evaluates one guess against a chosen target without starting a round.

use crate::core::{Evaluation, Word, evaluate};

/// Result of checking a guess
pub struct CheckResult {
    pub target: Word,
    pub guess: Word,
    pub evaluation: Evaluation,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn check_guess(target: &str, guess: &str) -> Result<CheckResult, String> {
    let target = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let evaluation = evaluate(&guess, &target);

    Ok(CheckResult {
        target,
        guess,
        evaluation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_valid_words() {
        let result = check_guess("allot", "LLAMA").unwrap();
        assert_eq!(result.guess.text(), "llama");
        assert_eq!(result.evaluation.to_code(), "YGY--");
    }

    #[test]
    fn check_invalid_target() {
        let err = check_guess("allots", "llama").err().unwrap();
        assert!(err.starts_with("Invalid target word"));
    }

    #[test]
    fn check_invalid_guess() {
        let err = check_guess("allot", "ll4ma").err().unwrap();
        assert!(err.starts_with("Invalid guess"));
    }
}
