//! Hangman game session
//!
//! Tracks the secret word, the letters guessed so far and the remaining
//! wrong-guess budget ("lives").

use super::{RevealedPattern, Word};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Default number of wrong guesses allowed per game
pub const DEFAULT_LIVES: usize = 6;

/// Result of a single accepted letter guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the secret word this many times
    Hit(usize),
    /// The letter is not in the secret word; one life lost
    Miss,
}

/// Overall game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Error type for rejected guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("'{0}' is not a letter")]
    NotALetter(char),
    #[error("'{0}' has already been guessed")]
    AlreadyGuessed(char),
    #[error("the game is already over")]
    GameOver,
}

/// A single game of Hangman
#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    guessed: FxHashSet<u8>,
    history: Vec<(u8, GuessOutcome)>,
    lives: usize,
    misses: usize,
}

impl Game {
    #[must_use]
    pub fn new(secret: Word, lives: usize) -> Self {
        Self {
            secret,
            guessed: FxHashSet::default(),
            history: Vec::new(),
            lives,
            misses: 0,
        }
    }

    /// Guess a letter
    ///
    /// Repeated guesses and non-letters are rejected without costing a life.
    ///
    /// # Errors
    /// Returns `GameError` if the game is over, the input is not an ASCII
    /// letter, or the letter was already guessed.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Game, GuessOutcome, Word};
    ///
    /// let mut game = Game::new(Word::new("banana").unwrap(), 6);
    /// assert_eq!(game.guess(b'a'), Ok(GuessOutcome::Hit(3)));
    /// assert_eq!(game.guess(b'z'), Ok(GuessOutcome::Miss));
    /// assert_eq!(game.revealed().to_string(), "_A_A_A");
    /// assert_eq!(game.lives_remaining(), 5);
    /// ```
    pub fn guess(&mut self, letter: u8) -> Result<GuessOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::NotALetter(letter as char));
        }

        let letter = letter.to_ascii_lowercase();
        if !self.guessed.insert(letter) {
            return Err(GameError::AlreadyGuessed(letter as char));
        }

        let outcome = match self.secret.positions_of(letter).len() {
            0 => {
                self.misses += 1;
                GuessOutcome::Miss
            }
            n => GuessOutcome::Hit(n),
        };
        self.history.push((letter, outcome));

        Ok(outcome)
    }

    /// Current revealed pattern
    #[must_use]
    pub fn revealed(&self) -> RevealedPattern {
        RevealedPattern::reveal(&self.secret, &self.guessed)
    }

    #[must_use]
    pub const fn guessed(&self) -> &FxHashSet<u8> {
        &self.guessed
    }

    /// Accepted guesses in the order they were made
    #[must_use]
    pub fn history(&self) -> &[(u8, GuessOutcome)] {
        &self.history
    }

    /// Wrongly guessed letters in guess order
    pub fn missed_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.history
            .iter()
            .filter(|(_, outcome)| *outcome == GuessOutcome::Miss)
            .map(|(letter, _)| *letter)
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }

    #[must_use]
    pub const fn lives(&self) -> usize {
        self.lives
    }

    #[must_use]
    pub const fn lives_remaining(&self) -> usize {
        self.lives.saturating_sub(self.misses)
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.secret
            .distinct_letters()
            .all(|c| self.guessed.contains(&c))
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        !self.is_won() && self.lives_remaining() == 0
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.lives_remaining() == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }
}
