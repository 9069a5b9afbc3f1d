//! Win/loss statistics across rounds in one session

use super::round::{Outcome, RoundState};
use crate::core::MAX_ATTEMPTS;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub games_played: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` counts wins that took `n + 1` guesses
    pub guess_distribution: [usize; MAX_ATTEMPTS],
}

impl SessionStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished round
    ///
    /// Returns `false` and records nothing if the round is still in progress.
    pub fn record(&mut self, state: &RoundState) -> bool {
        match state.outcome {
            Outcome::InProgress => return false,
            Outcome::Won => {
                self.games_won += 1;
                if let Some(slot) = state
                    .attempts_used
                    .checked_sub(1)
                    .and_then(|i| self.guess_distribution.get_mut(i))
                {
                    *slot += 1;
                }
            }
            Outcome::Lost => {}
        }

        self.games_played += 1;
        true
    }

    #[must_use]
    pub const fn games_lost(&self) -> usize {
        self.games_played - self.games_won
    }

    /// Percentage of rounds won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RoundEngine;
    use crate::wordlists::WordSource;
    use crate::wordlists::loader::words_from_slice;

    fn engine() -> RoundEngine {
        RoundEngine::new(WordSource::new(words_from_slice(&["crane"]), Some(1)).unwrap())
    }

    #[test]
    fn in_progress_round_is_not_recorded() {
        let mut stats = SessionStats::new();
        let mut engine = engine();
        engine.submit_guess("slate").unwrap();

        assert!(!stats.record(&engine.state()));
        assert_eq!(stats, SessionStats::default());
    }

    #[test]
    fn wins_fill_distribution() {
        let mut stats = SessionStats::new();
        let mut engine = engine();

        engine.submit_guess("crane").unwrap();
        assert!(stats.record(&engine.state()));

        engine.reset();
        engine.submit_guess("slate").unwrap();
        engine.submit_guess("trace").unwrap();
        engine.submit_guess("crane").unwrap();
        stats.record(&engine.state());

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.guess_distribution, [1, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn losses_count_as_played() {
        let mut stats = SessionStats::new();
        let mut engine = engine();
        for guess in ["ghost", "pilot", "dumpy", "fjord", "blitz", "shock"] {
            engine.submit_guess(guess).unwrap();
        }
        stats.record(&engine.state());

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_lost(), 1);
        assert_eq!(stats.guess_distribution, [0; MAX_ATTEMPTS]);
    }

    #[test]
    fn win_rate() {
        let mut stats = SessionStats::new();
        assert!(stats.win_rate().abs() < f64::EPSILON);

        stats.games_played = 4;
        stats.games_won = 3;
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }
}
