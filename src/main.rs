//! Jordle - CLI
//!
//! Terminal word-guessing game with TUI and line-based modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use jordle::{
    commands::{check_guess, run_simple},
    game::RoundEngine,
    output::print_check_result,
    wordlists::{WordSource, loader::load_from_file},
};
use log::info;
use std::io;

#[derive(Parser)]
#[command(
    name = "jordle",
    about = "Guess the hidden 5-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for target selection, for reproducible rounds
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Show the evaluation of one guess against a chosen target
    Check {
        /// The hidden word
        target: String,

        /// The guess to evaluate
        guess: String,
    },
}

/// Build the target source from the -w flag
fn load_source(wordlist: &str, seed: Option<u64>) -> Result<WordSource> {
    let source = match wordlist {
        "embedded" => WordSource::embedded(seed)?,
        path => WordSource::new(load_from_file(path)?, seed)?,
    };
    info!("Loaded {} target words from '{wordlist}'", source.len());
    Ok(source)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli.wordlist, cli.seed),
        Commands::Simple => run_simple_command(&cli.wordlist, cli.seed),
        Commands::Check { target, guess } => run_check_command(&target, &guess),
    }
}

fn run_play_command(wordlist: &str, seed: Option<u64>) -> Result<()> {
    use jordle::interactive::{App, run_tui};

    let engine = RoundEngine::new(load_source(wordlist, seed)?);
    let stats = run_tui(App::new(engine))?;
    info!(
        "Session finished: {} played, {} won",
        stats.games_played, stats.games_won
    );
    Ok(())
}

fn run_simple_command(wordlist: &str, seed: Option<u64>) -> Result<()> {
    let mut engine = RoundEngine::new(load_source(wordlist, seed)?);
    run_simple(&mut engine, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

fn run_check_command(target: &str, guess: &str) -> Result<()> {
    let result = check_guess(target, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}
