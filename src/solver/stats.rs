//! Per-strategy win/loss bookkeeping
//!
//! Accumulates results across games in one session and reports the
//! cumulative success rate for each strategy.

use super::engine::{GameOutcome, GameRecord};
use super::strategy::StrategyKind;
use rustc_hash::FxHashMap;

/// Results for a single strategy
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StrategyStats {
    pub wins: usize,
    pub losses: usize,
    /// Losses where the strategy ran out of candidates rather than lives
    pub exhausted: usize,
    /// Wrong guesses summed over all games
    pub total_misses: usize,
    /// Games won indexed by wrong guesses used
    pub miss_distribution: FxHashMap<usize, usize>,
}

impl StrategyStats {
    #[must_use]
    pub const fn games(&self) -> usize {
        self.wins + self.losses
    }

    /// Fraction of games won, 0.0 before any game
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.games() == 0 {
            0.0
        } else {
            self.wins as f64 / self.games() as f64
        }
    }

    #[must_use]
    pub fn average_misses(&self) -> f64 {
        if self.games() == 0 {
            0.0
        } else {
            self.total_misses as f64 / self.games() as f64
        }
    }
}

/// Win/loss records for every strategy that has played
#[derive(Debug, Default, Clone)]
pub struct Scoreboard {
    entries: FxHashMap<StrategyKind, StrategyStats>,
}

impl Scoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished game into the totals
    pub fn record(&mut self, game: &GameRecord) {
        let stats = self.entries.entry(game.strategy).or_default();

        stats.total_misses += game.misses;
        match game.outcome {
            GameOutcome::Solved => {
                stats.wins += 1;
                *stats.miss_distribution.entry(game.misses).or_insert(0) += 1;
            }
            GameOutcome::OutOfLives | GameOutcome::Failed(_) => stats.losses += 1,
            GameOutcome::NoCandidates => {
                stats.losses += 1;
                stats.exhausted += 1;
            }
        }
    }

    /// Fold a batch of games
    pub fn record_all<'a>(&mut self, games: impl IntoIterator<Item = &'a GameRecord>) {
        for game in games {
            self.record(game);
        }
    }

    #[must_use]
    pub fn get(&self, kind: StrategyKind) -> Option<&StrategyStats> {
        self.entries.get(&kind)
    }

    /// Cumulative success rate, 0.0 for a strategy that has not played
    #[must_use]
    pub fn success_rate(&self, kind: StrategyKind) -> f64 {
        self.get(kind).map_or(0.0, StrategyStats::success_rate)
    }

    /// Entries in `StrategyKind::ALL` order
    #[must_use]
    pub fn entries(&self) -> Vec<(StrategyKind, &StrategyStats)> {
        StrategyKind::ALL
            .into_iter()
            .filter_map(|kind| self.entries.get(&kind).map(|stats| (kind, stats)))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::GuessError;

    fn record(strategy: StrategyKind, outcome: GameOutcome, misses: usize) -> GameRecord {
        GameRecord {
            strategy,
            secret: "crane".to_string(),
            steps: Vec::new(),
            outcome,
            misses,
            lives: 6,
        }
    }

    #[test]
    fn empty_stats_have_zero_rate() {
        let board = Scoreboard::new();
        assert!(board.is_empty());
        assert!(board.success_rate(StrategyKind::PatternMatching).abs() < f64::EPSILON);
    }

    #[test]
    fn success_rate_accumulates() {
        let mut board = Scoreboard::new();
        let kind = StrategyKind::PatternMatching;

        board.record(&record(kind, GameOutcome::Solved, 2));
        board.record(&record(kind, GameOutcome::Solved, 0));
        board.record(&record(kind, GameOutcome::OutOfLives, 6));
        board.record(&record(kind, GameOutcome::NoCandidates, 3));

        let stats = board.get(kind).unwrap();
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 2);
        assert_eq!(stats.exhausted, 1);
        assert!((stats.success_rate() - 0.5).abs() < 1e-9);
        assert!((stats.average_misses() - 11.0 / 4.0).abs() < 1e-9);
        assert_eq!(stats.miss_distribution.get(&2), Some(&1));
        assert_eq!(stats.miss_distribution.get(&0), Some(&1));
    }

    #[test]
    fn failed_game_is_a_loss_but_not_exhausted() {
        let mut board = Scoreboard::new();
        let kind = StrategyKind::BruteForceFrequencies;
        let failed = GameOutcome::Failed(GuessError::InvalidPattern {
            expected: 3,
            actual: 5,
        });

        board.record(&record(kind, failed, 0));

        let stats = board.get(kind).unwrap();
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.exhausted, 0);
    }

    #[test]
    fn entries_follow_strategy_order() {
        let mut board = Scoreboard::new();
        board.record_all(&[
            record(StrategyKind::PatternMatching, GameOutcome::Solved, 1),
            record(StrategyKind::BruteForceFrequencies, GameOutcome::OutOfLives, 6),
        ]);

        let kinds: Vec<StrategyKind> = board.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![
                StrategyKind::BruteForceFrequencies,
                StrategyKind::PatternMatching
            ]
        );
    }
}
