//! TUI rendering with ratatui
//!
//! Gallows, revealed word, strategy results and the session scoreboard.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GameStatus, RevealedPattern};
use crate::output::formatters::{gallows, outcome_label, sorted_letters, spaced_pattern};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};
use rustc_hash::FxHashSet;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN - Can you beat the solvers?")
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

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Gallows
            Constraint::Length(5), // Word and letters
            Constraint::Min(3),    // Lives gauge
        ])
        .split(area);

    render_gallows(f, app, chunks[0]);
    render_word(f, app, chunks[1]);
    render_lives(f, app, chunks[2]);
}

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let color = if app.game.is_lost() {
        Color::Red
    } else {
        Color::White
    };
    let lines: Vec<Line> = gallows(app.game.misses(), app.game.lives())
        .into_iter()
        .map(Line::from)
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let word = if app.input_mode == InputMode::GameOver {
        // Show the full answer once the game is decided
        let all: FxHashSet<u8> = app.game.secret().chars().iter().copied().collect();
        spaced_pattern(&RevealedPattern::reveal(app.game.secret(), &all))
    } else {
        spaced_pattern(&app.game.revealed())
    };
    let word_color = match app.game.status() {
        GameStatus::Won => Color::Green,
        GameStatus::Lost => Color::Red,
        GameStatus::InProgress => Color::Yellow,
    };

    let missed: FxHashSet<u8> = app.game.missed_letters().collect();
    let content = vec![
        Line::from(Span::styled(
            word,
            Style::default().fg(word_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("Guessed: "),
            Span::raw(sorted_letters(app.game.guessed())),
        ]),
        Line::from(vec![
            Span::raw("Missed:  "),
            Span::styled(sorted_letters(&missed), Style::default().fg(Color::Red)),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_lives(f: &mut Frame, app: &App, area: Rect) {
    let lives = app.game.lives();
    let remaining = app.game.lives_remaining();
    let percent = (remaining * 100).checked_div(lives).map_or(0, |p| p as u16);
    let color = match percent {
        0..=33 => Color::Red,
        34..=66 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Lives ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}/{lives} wrong guesses left"));
    f.render_widget(gauge, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Strategy results
            Constraint::Percentage(35), // Scoreboard
            Constraint::Percentage(25), // Messages
        ])
        .split(area);

    render_results(f, app, chunks[0]);
    render_scoreboard(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = if app.records.is_empty() {
        vec![ListItem::new("The solvers play once you finish.")
            .style(Style::default().fg(Color::DarkGray))]
    } else {
        app.records
            .iter()
            .flat_map(|record| {
                let color = if record.outcome.is_win() {
                    Color::Green
                } else {
                    Color::Red
                };
                [
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{:<28}", record.strategy.title()),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(outcome_label(record.outcome), Style::default().fg(color)),
                    ])),
                    ListItem::new(format!(
                        "  {} ({} misses)",
                        record.letters(),
                        record.misses
                    ))
                    .style(Style::default().fg(Color::DarkGray)),
                ]
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" This Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_scoreboard(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{:<28}", "You"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "{:5.1}% of {}",
            app.stats.win_rate() * 100.0,
            app.stats.total_games
        )),
    ])];

    for (kind, stats) in app.scoreboard.entries() {
        lines.push(Line::from(vec![
            Span::raw(format!("{:<28}", kind.title())),
            Span::styled(
                format!("{:5.1}%", stats.success_rate() * 100.0),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!(" of {}", stats.games())),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Success Rate ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Guessing => (" Type a letter to guess ", Color::Yellow),
        InputMode::GameOver => (" Game over | 'n' new game, 'q' quit ", Color::Green),
    };
    let content = app
        .game
        .history()
        .last()
        .map(|&(letter, _)| format!("Last guess: {}", letter.to_ascii_uppercase() as char))
        .unwrap_or_default();

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let length_text = format!("Letters: {}", app.game.secret().len());
    f.render_widget(
        Paragraph::new(length_text).alignment(Alignment::Center),
        chunks[0],
    );

    let games_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    f.render_widget(
        Paragraph::new(games_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::Guessing => "a-z: Guess | Esc: Quit",
        InputMode::GameOver => "n: New Game | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
