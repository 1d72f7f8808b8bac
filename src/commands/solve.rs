//! Word solving command
//!
//! Plays one or more strategies against a specific secret word.

use crate::core::Word;
use crate::solver::{GameRecord, Solver, StrategyKind};
use anyhow::{Context, Result};
use log::info;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub strategies: Vec<StrategyKind>,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: String) -> Self {
        Self {
            target,
            strategies: StrategyKind::ALL.to_vec(),
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    /// Number of master-list words with the target's length
    pub corpus_size: usize,
    pub records: Vec<GameRecord>,
}

/// Solve a specific word with every configured strategy
///
/// The target does not have to be in the word list; strategies that narrow
/// by pattern will then run out of candidates.
///
/// # Errors
///
/// Returns an error if the target word is not a valid word.
pub fn solve_word(config: &SolveConfig, solver: &Solver) -> Result<SolveResult> {
    let target = Word::new(&config.target)
        .with_context(|| format!("Invalid target word '{}'", config.target))?;

    let corpus_size = solver
        .words()
        .iter()
        .filter(|w| w.len() == target.len())
        .count();
    info!(
        "solving '{target}' against {corpus_size} words of length {}",
        target.len()
    );

    let records = solver.play_each(&config.strategies, &target, 0);

    Ok(SolveResult {
        target: target.text().to_string(),
        corpus_size,
        records,
    })
}
