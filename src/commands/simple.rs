//! Simple interactive CLI mode
//!
//! Text-based game without TUI, reading guesses line by line.

use crate::core::MAX_ATTEMPTS;
use crate::game::{GuessError, RoundEngine, SessionStats};
use crate::output::{write_attempt, write_keyboard, write_round_end, write_stats};
use colored::Colorize;
use log::debug;
use std::io::{self, BufRead, Write};

const INSTRUCTIONS: &str = "\
Try to guess the 5-letter word!
  Green means the letter is in the right spot.
  Yellow means the letter is in the wrong spot.
  Gray means the letter is not in the word.
Commands: 'new' for a new round, 'help' for this text, 'quit' to exit.";

/// Run the simple interactive mode until `quit` or end of input
///
/// Returns the statistics of the rounds finished during the session.
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `out` fails.
pub fn run_simple<R: BufRead, W: Write>(
    engine: &mut RoundEngine,
    mut input: R,
    mut out: W,
) -> io::Result<SessionStats> {
    let mut stats = SessionStats::new();

    writeln!(out, "\n╔════════════════════════════════════════╗")?;
    writeln!(out, "║                 JORDLE                 ║")?;
    writeln!(out, "╚════════════════════════════════════════╝\n")?;
    writeln!(out, "{INSTRUCTIONS}\n")?;

    loop {
        if engine.outcome().is_over() {
            write!(out, "Command ('new' or 'quit'): ")?;
        } else {
            write!(out, "Guess {}/{MAX_ATTEMPTS}: ", engine.attempts_used() + 1)?;
        }
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input, leaving simple mode");
            break;
        }

        match line.trim().to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => break,
            "help" | "h" | "?" => writeln!(out, "\n{INSTRUCTIONS}\n")?,
            "new" | "n" => {
                engine.reset();
                writeln!(out, "\n🔄 New round started!\n")?;
            }
            guess => match engine.submit_guess(guess) {
                Ok(_) => {
                    writeln!(out)?;
                    for (i, attempt) in engine.history().iter().enumerate() {
                        write_attempt(&mut out, i + 1, attempt)?;
                    }
                    write_keyboard(&mut out, &engine.keyboard_hint())?;

                    let state = engine.state();
                    if stats.record(&state) {
                        write_round_end(&mut out, state.outcome, state.attempts_used, engine.target())?;
                        writeln!(out, "Type 'new' to play again or 'quit' to exit.\n")?;
                    }
                }
                Err(GuessError::InvalidGuess(e)) => {
                    writeln!(out, "{} ({e})\n", "Input a word with 5 letters!".red())?;
                }
                Err(e @ GuessError::RoundOver(_)) => {
                    writeln!(out, "{}\n", e.to_string().yellow())?;
                }
            },
        }
    }

    write_stats(&mut out, &stats)?;
    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Outcome;
    use crate::wordlists::WordSource;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn engine(words: &[&str]) -> RoundEngine {
        RoundEngine::new(WordSource::new(words_from_slice(words), Some(11)).unwrap())
    }

    fn play(engine: &mut RoundEngine, script: &str) -> (SessionStats, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let stats = run_simple(engine, Cursor::new(script), &mut out).unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn immediate_quit() {
        let mut engine = engine(&["crane"]);
        let (stats, text) = play(&mut engine, "quit\n");

        assert_eq!(stats.games_played, 0);
        assert!(text.contains("Thanks for playing"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let mut engine = engine(&["crane"]);
        let (stats, _) = play(&mut engine, "slate\n");

        assert_eq!(stats.games_played, 0);
        assert_eq!(engine.attempts_used(), 1);
    }

    #[test]
    fn winning_game() {
        let mut engine = engine(&["crane"]);
        let (stats, text) = play(&mut engine, "slate\nCRATE\ncrane\nquit\n");

        assert_eq!(engine.outcome(), Outcome::Won);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[2], 1);
        assert!(text.contains("🟩🟩🟩⬜🟩"));
        assert!(text.contains("You win! Solved in 3 guesses."));
    }

    #[test]
    fn losing_game_reveals_target() {
        let mut engine = engine(&["crane"]);
        let script = "ghost\npilot\ndumpy\nfjord\nblitz\nshock\n";
        let (stats, text) = play(&mut engine, script);

        assert_eq!(engine.outcome(), Outcome::Lost);
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 0);
        assert!(text.contains("You lose! The word was: CRANE"));
    }

    #[test]
    fn invalid_guess_is_reported_and_not_counted() {
        let mut engine = engine(&["crane"]);
        let (_, text) = play(&mut engine, "cran\ncr4ne\nquit\n");

        assert_eq!(text.matches("Input a word with 5 letters!").count(), 2);
        assert_eq!(engine.attempts_used(), 0);
    }

    #[test]
    fn guess_after_round_over_is_rejected() {
        let mut engine = engine(&["crane"]);
        let (stats, text) = play(&mut engine, "crane\nslate\nquit\n");

        assert_eq!(stats.games_played, 1);
        assert!(text.contains("Round is over (won)"));
        assert_eq!(engine.attempts_used(), 1);
    }

    #[test]
    fn new_round_after_win() {
        let mut engine = engine(&["crane"]);
        let (stats, text) = play(&mut engine, "crane\nnew\nslate\ncrane\nquit\n");

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.guess_distribution[..2], [1, 1]);
        assert!(text.contains("New round started"));
    }

    #[test]
    fn abandoned_round_is_not_recorded() {
        let mut engine = engine(&["crane"]);
        let (stats, _) = play(&mut engine, "slate\nnew\nquit\n");

        assert_eq!(stats.games_played, 0);
        assert_eq!(engine.attempts_used(), 0);
    }

    #[test]
    fn blank_lines_and_help_are_ignored_by_engine() {
        let mut engine = engine(&["crane"]);
        let (_, text) = play(&mut engine, "\n   \nhelp\nquit\n");

        assert_eq!(engine.attempts_used(), 0);
        assert_eq!(text.matches("Try to guess the 5-letter word!").count(), 2);
    }
}
