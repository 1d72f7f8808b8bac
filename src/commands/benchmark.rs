//! Benchmark command
//!
//! Plays many random secret words with every selected strategy and collects
//! per-strategy win/loss statistics.

use crate::core::Word;
use crate::solver::{GameRecord, Scoreboard, Solver, StrategyKind};
use crate::wordlists::loader::random_word;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub strategies: Vec<StrategyKind>,
    pub scoreboard: Scoreboard,
    pub lives: usize,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Choose `count` secret words, optionally restricted to one length
///
/// Selection draws from the solver's generator reserved for word picking, so
/// it is reproducible with a seed.
#[must_use]
pub fn pick_secrets(solver: &Solver, count: usize, length: Option<usize>) -> Vec<Word> {
    let mut rng = solver.rng_for(u64::MAX);
    (0..count)
        .map_while(|_| random_word(solver.words(), length, &mut rng).cloned())
        .collect()
}

/// Run benchmark on a set of secret words
///
/// Games run in parallel. Each game builds its own strategy instances, seeded
/// from the word's index, so results do not depend on thread scheduling.
#[must_use]
pub fn run_benchmark(
    solver: &Solver,
    secrets: &[Word],
    strategies: &[StrategyKind],
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let records: Vec<GameRecord> = secrets
        .par_iter()
        .enumerate()
        .flat_map_iter(|(index, secret)| {
            let records = solver.play_each(strategies, secret, index as u64);
            pb.inc(1);
            records
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut scoreboard = Scoreboard::new();
    scoreboard.record_all(&records);

    let duration = start.elapsed();
    let games = records.len();
    info!("played {games} games in {:.2}s", duration.as_secs_f64());

    BenchmarkResult {
        total_words: secrets.len(),
        strategies: strategies.to_vec(),
        scoreboard,
        lives: solver.config().lives,
        duration,
        games_per_second: games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
