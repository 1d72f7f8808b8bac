//! Hangman guessing engine
//!
//! Corpus pruning, letter frequency statistics, pattern filtering and the
//! four guessing strategies built from them.

mod corpus;
mod engine;
pub mod filter;
pub mod frequency;
pub mod selection;
pub mod stats;
pub mod strategy;

pub use corpus::{Corpus, prune_by_length};
pub use engine::{GameOutcome, GameRecord, GuessStep, Solver, SolverConfig, play_game};
pub use filter::filter_by_pattern;
pub use frequency::FrequencyTable;
pub use stats::{Scoreboard, StrategyStats};
pub use strategy::{
    BruteForceFrequencies, GuessError, PatternMatching, ProbabilityBruteForceFrequencies,
    ProbabilityPatternMatching, Strategy, StrategyKind, StrategyType,
};
