//! Core domain types for Hangman
//!
//! Words, revealed patterns and the game session. Everything here is pure and
//! independent of any guessing strategy.

mod game;
mod pattern;
mod word;

pub use game::{DEFAULT_LIVES, Game, GameError, GameStatus, GuessOutcome};
pub use pattern::{BLANK, PatternError, RevealedPattern};
pub use word::{Word, WordError};
