//! Interactive terminal game
//!
//! The player guesses a random word; afterwards every strategy plays the
//! same word and the session scoreboard is updated.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
