//! Display functions for game results

use super::formatters::{colored_guess, colored_keyboard};
use crate::commands::CheckResult;
use crate::core::{KeyboardHint, MAX_ATTEMPTS, Word};
use crate::game::{Attempt, Outcome, SessionStats};
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of checking a single guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Target: {}   Guess: {}",
        result.target.text().to_uppercase().bright_yellow().bold(),
        result.guess.text().to_uppercase().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!(
        "\n  {}  {}",
        colored_guess(&result.guess, &result.evaluation),
        result.evaluation.to_emoji()
    );
    println!(
        "\n  Correct: {}   Present: {}",
        result.evaluation.correct_count().to_string().green().bold(),
        result.evaluation.present_count().to_string().yellow().bold()
    );
}

/// Write one evaluated guess as "n. tiles emoji"
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_attempt<W: Write>(out: &mut W, number: usize, attempt: &Attempt) -> io::Result<()> {
    writeln!(
        out,
        "  {number}/{MAX_ATTEMPTS}  {}  {}",
        colored_guess(&attempt.guess, &attempt.evaluation),
        attempt.evaluation.to_emoji()
    )
}

/// Write the keyboard coloured by best known status
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_keyboard<W: Write>(out: &mut W, hint: &KeyboardHint) -> io::Result<()> {
    writeln!(out)?;
    for row in colored_keyboard(hint) {
        writeln!(out, "  {row}")?;
    }
    writeln!(out)
}

/// Write the end-of-round banner
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_round_end<W: Write>(
    out: &mut W,
    outcome: Outcome,
    attempts: usize,
    target: &Word,
) -> io::Result<()> {
    match outcome {
        Outcome::Won => {
            let guesses = if attempts == 1 { "guess" } else { "guesses" };
            writeln!(
                out,
                "{}",
                format!("You win! Solved in {attempts} {guesses}.").green().bold()
            )
        }
        Outcome::Lost => writeln!(
            out,
            "{} {}",
            "You lose! The word was:".red().bold(),
            target.text().to_uppercase().bright_yellow().bold()
        ),
        Outcome::InProgress => Ok(()),
    }
}

/// Write session statistics with a guess distribution bar chart
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_stats<W: Write>(out: &mut W, stats: &SessionStats) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    writeln!(out, " {}", "SESSION STATISTICS".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(40).cyan())?;

    writeln!(out, "   Played:    {}", stats.games_played)?;
    writeln!(out, "   Won:       {}", stats.games_won)?;
    writeln!(out, "   Win rate:  {:.0}%", stats.win_rate())?;

    if stats.games_won == 0 {
        return Ok(());
    }

    writeln!(out, "\n   {}", "Distribution:".bright_cyan().bold())?;
    let widest = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar_width = count * 20 / widest;
        writeln!(
            out,
            "   {}: {}{} {count}",
            i + 1,
            "█".repeat(bar_width).green(),
            "░".repeat(20 - bar_width).bright_black()
        )?;
    }

    Ok(())
}
