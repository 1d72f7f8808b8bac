//! TUI application state and logic

use crate::core::{Game, GameError, GuessOutcome, Word};
use crate::solver::{GameRecord, Scoreboard, Solver, StrategyKind};
use crate::wordlists::loader::random_word;
use anyhow::{Result, anyhow};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Generator index reserved for picking secret words
const SECRET_STREAM: u64 = u64::MAX;

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a>,
    pub strategies: Vec<StrategyKind>,
    pub word_length: Option<usize>,
    pub game: Game,
    /// How each strategy fared on the last finished word
    pub records: Vec<GameRecord>,
    pub scoreboard: Scoreboard,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
    games_started: u64,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// The human player's record for the session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64
        }
    }
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the word list has no word of the requested length.
    pub fn new(
        solver: Solver<'a>,
        strategies: Vec<StrategyKind>,
        word_length: Option<usize>,
    ) -> Result<Self> {
        let mut rng = solver.rng_for(SECRET_STREAM);
        let secret = pick_secret(solver.words(), word_length, &mut rng)?;
        let game = Game::new(secret, solver.config().lives);

        let mut app = Self {
            solver,
            strategies,
            word_length,
            game,
            records: Vec::new(),
            scoreboard: Scoreboard::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            input_mode: InputMode::Guessing,
            should_quit: false,
            games_started: 1,
            rng,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word, one letter at a time.",
                app.game.secret().len()
            ),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Start a fresh game with a new secret word
    ///
    /// # Errors
    ///
    /// Returns an error if no secret word can be picked.
    pub fn new_game(&mut self) -> Result<()> {
        let secret = pick_secret(self.solver.words(), self.word_length, &mut self.rng)?;
        self.game = Game::new(secret, self.solver.config().lives);
        self.games_started += 1;
        self.records.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            &format!(
                "New game! The word has {} letters.",
                self.game.secret().len()
            ),
            MessageStyle::Info,
        );
        Ok(())
    }

    /// Apply a typed character as a guess
    pub fn handle_letter(&mut self, c: char) {
        if !c.is_ascii() {
            self.add_message(&format!("'{c}' is not a letter"), MessageStyle::Error);
            return;
        }

        match self.game.guess(c as u8) {
            Ok(GuessOutcome::Hit(count)) => {
                let times = if count == 1 {
                    "once".to_string()
                } else {
                    format!("{count} times")
                };
                self.add_message(
                    &format!("{} appears {times}!", c.to_ascii_uppercase()),
                    MessageStyle::Success,
                );
            }
            Ok(GuessOutcome::Miss) => {
                self.add_message(
                    &format!(
                        "No {}. {} lives left.",
                        c.to_ascii_uppercase(),
                        self.game.lives_remaining()
                    ),
                    MessageStyle::Error,
                );
            }
            Err(e @ (GameError::NotALetter(_) | GameError::AlreadyGuessed(_))) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
            Err(GameError::GameOver) => {}
        }

        if self.game.is_over() {
            self.finish_game();
        }
    }

    /// Let every strategy play the same secret and fold the results into the
    /// session scoreboard
    fn finish_game(&mut self) {
        self.stats.total_games += 1;
        if self.game.is_won() {
            self.stats.games_won += 1;
            self.add_message(
                &format!("🎉 You got it with {} misses!", self.game.misses()),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!(
                    "💀 Out of lives! The word was {}.",
                    self.game.secret().text().to_uppercase()
                ),
                MessageStyle::Error,
            );
        }

        self.records = self
            .solver
            .play_each(&self.strategies, self.game.secret(), self.games_started);
        self.scoreboard.record_all(&self.records);
        debug!(
            "strategies finished '{}': {:?}",
            self.game.secret(),
            self.records
                .iter()
                .map(|r| (r.strategy.name(), r.outcome))
                .collect::<Vec<_>>()
        );

        self.input_mode = InputMode::GameOver;
        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Route one key press
    ///
    /// # Errors
    ///
    /// Returns an error if a new game cannot be started.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.handle_letter(c),
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game()?,
                _ => {}
            },
        }
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }
}

fn pick_secret(words: &[Word], length: Option<usize>, rng: &mut StdRng) -> Result<Word> {
    random_word(words, length, rng).cloned().ok_or_else(|| match length {
        Some(len) => anyhow!("No words of length {len} in the word list"),
        None => anyhow!("The word list is empty"),
    })
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::wordlists::loader::words_from_slice;

    fn solver(words: &[Word], lives: usize) -> Solver<'_> {
        Solver::new(
            words,
            SolverConfig {
                lives,
                seed: Some(11),
            },
        )
    }

    fn press(app: &mut App, c: char) {
        app.handle_key(KeyEvent::from(KeyCode::Char(c))).unwrap();
    }

    #[test]
    fn winning_runs_every_strategy() {
        let words = words_from_slice(&["crane", "grape", "brave"]);
        let mut app = App::new(solver(&words, 6), StrategyKind::ALL.to_vec(), Some(5)).unwrap();

        let letters: Vec<char> = app.game.secret().text().chars().collect();
        for c in letters {
            if app.input_mode == InputMode::Guessing && !app.game.guessed().contains(&(c as u8)) {
                press(&mut app, c);
            }
        }

        assert!(app.game.is_won());
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.records.len(), StrategyKind::ALL.len());
        for kind in StrategyKind::ALL {
            assert_eq!(app.scoreboard.get(kind).unwrap().games(), 1);
        }
    }

    #[test]
    fn losing_ends_the_game() {
        let words = words_from_slice(&["aaa"]);
        let mut app = App::new(solver(&words, 2), vec![StrategyKind::PatternMatching], None).unwrap();

        press(&mut app, 'x');
        assert_eq!(app.input_mode, InputMode::Guessing);
        press(&mut app, 'y');

        assert!(app.game.is_lost());
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!((app.scoreboard.success_rate(StrategyKind::PatternMatching) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn repeated_and_invalid_guesses_cost_nothing() {
        let words = words_from_slice(&["aaa"]);
        let mut app = App::new(solver(&words, 3), vec![], None).unwrap();

        press(&mut app, 'x');
        press(&mut app, 'x');
        press(&mut app, '1');

        assert_eq!(app.game.misses(), 1);
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn new_game_keeps_scoreboard() {
        let words = words_from_slice(&["aaa"]);
        let mut app = App::new(solver(&words, 1), StrategyKind::ALL.to_vec(), None).unwrap();

        press(&mut app, 'z');
        assert_eq!(app.input_mode, InputMode::GameOver);
        press(&mut app, 'n');

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.game.misses(), 0);
        assert!(app.records.is_empty());
        assert_eq!(app.scoreboard.get(StrategyKind::BruteForceFrequencies).unwrap().games(), 1);

        press(&mut app, 'q');
        assert!(!app.should_quit, "'q' is a guess while playing");
    }

    #[test]
    fn escape_quits() {
        let words = words_from_slice(&["aaa"]);
        let mut app = App::new(solver(&words, 6), vec![], None).unwrap();

        app.handle_key(KeyEvent::from(KeyCode::Esc)).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn missing_length_is_an_error() {
        let words = words_from_slice(&["aaa"]);
        assert!(App::new(solver(&words, 6), vec![], Some(9)).is_err());
    }
}
