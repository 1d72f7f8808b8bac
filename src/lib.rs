//! Hangman Solver
//!
//! Letter-guessing strategies for Hangman built from letter frequency
//! statistics and revealed-pattern filtering.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hangman_solver::core::{RevealedPattern, Word};
//! use hangman_solver::solver::{PatternMatching, Strategy};
//! use rustc_hash::FxHashSet;
//!
//! let words: Vec<Word> = ["crane", "grape", "brave"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let mut strategy = PatternMatching::new(&words, 5);
//! let pattern = RevealedPattern::parse("_R__E").unwrap();
//! let guessed: FxHashSet<u8> = [b'r', b'e'].into_iter().collect();
//!
//! let letter = strategy.make_guess(&guessed, &pattern).unwrap();
//! println!("Next guess: {}", letter as char);
//! ```

// Core domain types
pub mod core;

// Guessing strategies and game driver
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
