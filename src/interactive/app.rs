//! TUI application state and logic

use crate::core::{GuessBuffer, KeyboardHint};
use crate::game::{Outcome, RoundEngine, SessionStats};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub engine: RoundEngine,
    pub buffer: GuessBuffer,
    pub hint: KeyboardHint,
    pub messages: Vec<Message>,
    pub stats: SessionStats,
    pub show_instructions: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(engine: RoundEngine) -> Self {
        let hint = engine.keyboard_hint();

        Self {
            engine,
            buffer: GuessBuffer::new(),
            hint,
            messages: vec![Message {
                text: "Type a word and press Enter. Press 2 for instructions.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: SessionStats::new(),
            show_instructions: false,
            should_quit: false,
        }
    }

    /// Headline shown above the board
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.engine.outcome() {
            Outcome::InProgress => "Guess a word!".to_string(),
            Outcome::Won => "You win!".to_string(),
            Outcome::Lost => format!(
                "You lose! The word was: {}",
                self.engine.target().text().to_uppercase()
            ),
        }
    }

    /// Route one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.show_instructions {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('2')) {
                self.show_instructions = false;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('1') => self.restart(),
            KeyCode::Char('2') => self.show_instructions = true,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.buffer.backspace();
            }
            KeyCode::Char(c) => self.type_letter(c),
            _ => {}
        }
    }

    /// Append a letter to the current row; ignored once the round is over
    pub fn type_letter(&mut self, letter: char) {
        if self.engine.outcome().is_over() {
            return;
        }
        self.buffer.push(letter);
    }

    /// Submit the typed row as a guess
    pub fn submit(&mut self) {
        if self.engine.outcome().is_over() {
            self.add_message("Round is over. Press 1 to play again.", MessageStyle::Info);
            return;
        }

        if !self.buffer.is_full() {
            self.add_message("Input a word with 5 letters!", MessageStyle::Error);
            return;
        }

        let guess = self.buffer.take();
        match self.engine.submit_guess(&guess) {
            Ok(evaluation) => {
                if let Some(attempt) = self.engine.history().last() {
                    self.hint.merge(&attempt.guess, &evaluation);
                }

                let state = self.engine.state();
                if self.stats.record(&state) {
                    match state.outcome {
                        Outcome::Won => {
                            let celebration = match state.attempts_used {
                                1 => "Hole in one!",
                                2 => "Magnificent!",
                                3 => "Splendid!",
                                4 => "Great job!",
                                5 => "Nice work!",
                                _ => "Phew!",
                            };
                            self.add_message(celebration, MessageStyle::Success);
                        }
                        Outcome::Lost | Outcome::InProgress => {
                            self.add_message("Out of guesses.", MessageStyle::Error);
                        }
                    }
                    self.add_message("Press 1 to play again or Esc to quit.", MessageStyle::Info);
                }
            }
            Err(e) => {
                debug!("Guess rejected in TUI: {e}");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Start a new round, discarding the current one
    pub fn restart(&mut self) {
        self.engine.reset();
        self.buffer.clear();
        self.hint = KeyboardHint::new();
        self.messages.clear();
        self.add_message("New round started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// Returns the statistics of the rounds finished during the session.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<SessionStats> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<SessionStats> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use crate::wordlists::WordSource;
    use crate::wordlists::loader::words_from_slice;

    fn app() -> App {
        let source = WordSource::new(words_from_slice(&["crane"]), Some(2)).unwrap();
        App::new(RoundEngine::new(source))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_fills_buffer() {
        let mut app = app();
        for c in "Sl4te".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.buffer.as_str(), "slte");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.buffer.as_str(), "slt");
    }

    #[test]
    fn short_guess_is_blocked() {
        let mut app = app();
        type_word(&mut app, "cran");

        assert_eq!(app.engine.attempts_used(), 0);
        assert_eq!(app.buffer.as_str(), "cran");
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "Input a word with 5 letters!");
    }

    #[test]
    fn winning_updates_stats_and_status() {
        let mut app = app();
        type_word(&mut app, "slate");
        type_word(&mut app, "crane");

        assert_eq!(app.engine.outcome(), Outcome::Won);
        assert_eq!(app.status_line(), "You win!");
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert!(app.buffer.is_empty());
    }

    #[test]
    fn losing_reveals_target() {
        let mut app = app();
        for word in ["ghost", "pilot", "dumpy", "fjord", "blitz", "shock"] {
            type_word(&mut app, word);
        }

        assert_eq!(app.status_line(), "You lose! The word was: CRANE");
        assert_eq!(app.stats.games_played, 1);
    }

    #[test]
    fn typing_is_ignored_after_round_ends() {
        let mut app = app();
        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Char('a'));

        assert!(app.buffer.is_empty());
    }

    #[test]
    fn hint_follows_guesses_and_resets() {
        let mut app = app();
        type_word(&mut app, "trade");
        assert_eq!(app.hint.status('r'), Some(LetterStatus::Correct));
        assert_eq!(app.hint, app.engine.keyboard_hint());

        press(&mut app, KeyCode::Char('1'));
        assert!(app.hint.is_empty());
        assert_eq!(app.engine.attempts_used(), 0);
        assert_eq!(app.status_line(), "Guess a word!");
    }

    #[test]
    fn instructions_toggle_and_swallow_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert!(app.show_instructions);

        press(&mut app, KeyCode::Char('a'));
        assert!(app.buffer.is_empty());

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_instructions);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert!(app.buffer.is_empty());
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
