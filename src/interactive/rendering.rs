//! TUI rendering with ratatui
//!
//! Board, keyboard and messages for the game interface.

use super::app::{App, MessageStyle};
use crate::core::{LetterStatus, MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::Outcome;
use crate::output::formatters::QWERTY_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

const INSTRUCTIONS: [&str; 8] = [
    "Guess the hidden 5-letter word in 6 tries.",
    "",
    "Type letters, Backspace to erase, Enter to submit.",
    "Green: right letter in the right spot.",
    "Yellow: letter is in the word, wrong spot.",
    "Gray: letter is not in the word.",
    "",
    "1: new round | 2: close this help | Esc: quit",
];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Status line
            Constraint::Length(8), // Board: six rows plus borders
            Constraint::Length(5), // Keyboard
            Constraint::Min(3),    // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_status_line(f, app, chunks[1]);
    render_board(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_messages(f, app, chunks[4]);
    render_status_bar(f, app, chunks[5]);

    if app.show_instructions {
        render_instructions(f, f.area());
    }
}

/// Tile background for a letter status
const fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 JORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_status_line(f: &mut Frame, app: &App, area: Rect) {
    let color = match app.engine.outcome() {
        Outcome::InProgress => Color::White,
        Outcome::Won => Color::Green,
        Outcome::Lost => Color::Red,
    };

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

fn board_lines(app: &App) -> Vec<Line<'static>> {
    let history = app.engine.history();
    let typing = !app.engine.outcome().is_over();

    (0..MAX_ATTEMPTS)
        .map(|row| {
            let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
            if let Some(attempt) = history.get(row) {
                for (&letter, &status) in attempt
                    .guess
                    .chars()
                    .iter()
                    .zip(attempt.evaluation.statuses())
                {
                    spans.push(tile(letter as char, status_color(status)));
                    spans.push(Span::raw(" "));
                }
            } else if typing && row == history.len() {
                let mut typed = app.buffer.as_str().chars();
                for _ in 0..WORD_LENGTH {
                    let cell = typed.next().map_or_else(
                        || Span::styled(" _ ", Style::default().fg(Color::Gray)),
                        |c| {
                            Span::styled(
                                format!(" {} ", c.to_ascii_uppercase()),
                                Style::default()
                                    .fg(Color::White)
                                    .add_modifier(Modifier::BOLD),
                            )
                        },
                    );
                    spans.push(cell);
                    spans.push(Span::raw(" "));
                }
            } else {
                for _ in 0..WORD_LENGTH {
                    spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                    spans.push(Span::raw(" "));
                }
            }
            Line::from(spans)
        })
        .collect()
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(
                    " Guesses {}/{MAX_ATTEMPTS} ",
                    app.engine.attempts_used()
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = QWERTY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| match app.hint.status(c) {
                    Some(status) => tile(c, status_color(status)),
                    None => Span::styled(
                        format!(" {} ", c.to_ascii_uppercase()),
                        Style::default().fg(Color::White),
                    ),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.games_won,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Enter: Submit | 1: New Round | 2: Help | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn render_instructions(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 14, area);
    let lines: Vec<Line> = INSTRUCTIONS.iter().map(|&line| Line::from(line)).collect();

    let instructions = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" How to play ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(instructions, popup);
}

/// Rectangle of `width` percent and `height` rows centered in `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width) / 2),
            Constraint::Percentage(width),
            Constraint::Percentage((100 - width) / 2),
        ])
        .split(vertical[1])[1]
}
