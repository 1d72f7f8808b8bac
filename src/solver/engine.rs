//! Game driver
//!
//! Plays strategies against Hangman games. Every game gets its own freshly
//! built strategy instance; nothing is shared between games.

use super::strategy::{GuessError, Strategy, StrategyKind, StrategyType};
use crate::core::{DEFAULT_LIVES, Game, GuessOutcome, Word};
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Settings shared by every game a solver plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Wrong guesses allowed per game
    pub lives: usize,
    /// Base seed for the random strategies; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            lives: DEFAULT_LIVES,
            seed: None,
        }
    }
}

/// How a game ended for the guesser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Solved,
    OutOfLives,
    /// The strategy had nothing left to offer before the game ended
    NoCandidates,
    /// The strategy broke the game's rules or was built for another length
    Failed(GuessError),
}

impl GameOutcome {
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Solved)
    }

    /// Classify a finished (or abandoned) game
    #[must_use]
    pub fn from_result(result: Result<(), GuessError>, game: &Game) -> Self {
        match result {
            Ok(()) if game.is_won() => Self::Solved,
            Ok(()) => Self::OutOfLives,
            Err(GuessError::ExhaustedCandidates) => Self::NoCandidates,
            Err(e) => Self::Failed(e),
        }
    }
}

/// A single guess made during a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub letter: u8,
    pub outcome: GuessOutcome,
    /// Pattern the strategy saw when choosing the letter
    pub pattern: String,
    /// Words the strategy still considered possible after choosing
    pub candidates: usize,
}

/// Full record of one strategy playing one word
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub strategy: StrategyKind,
    pub secret: String,
    pub steps: Vec<GuessStep>,
    pub outcome: GameOutcome,
    pub misses: usize,
    pub lives: usize,
}

impl GameRecord {
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.steps.len()
    }

    /// Letters in the order they were guessed
    #[must_use]
    pub fn letters(&self) -> String {
        self.steps
            .iter()
            .map(|step| step.letter.to_ascii_uppercase() as char)
            .collect()
    }
}

/// Play `strategy` against `game` until the game ends
///
/// Each accepted guess is appended to `steps`, so the partial history is
/// still available when the strategy gives up.
///
/// # Errors
/// Returns the strategy's `GuessError`: `ExhaustedCandidates` when it has no
/// letter left to offer, `InvalidPattern` if it was built for a different
/// word length than the game's secret, `Rejected` if the game refuses the
/// letter it proposed.
pub fn play_game<S: Strategy>(
    strategy: &mut S,
    game: &mut Game,
    steps: &mut Vec<GuessStep>,
) -> Result<(), GuessError> {
    while !game.is_over() {
        let pattern = game.revealed();
        let letter = strategy.make_guess(game.guessed(), &pattern)?;

        let outcome = game.guess(letter).inspect_err(|e| {
            warn!("game rejected letter {:?}: {e}", letter as char);
        })?;

        debug!(
            "{pattern} -> {} ({outcome:?}), {} candidates",
            letter as char,
            strategy.corpus().len()
        );

        steps.push(GuessStep {
            letter,
            outcome,
            pattern: pattern.to_string(),
            candidates: strategy.corpus().len(),
        });
    }

    Ok(())
}

/// Main Hangman solver
///
/// Builds one strategy instance per game from the master word list.
pub struct Solver<'a> {
    words: &'a [Word],
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    /// Create a new solver over a master word list
    #[must_use]
    pub const fn new(words: &'a [Word], config: SolverConfig) -> Self {
        Self { words, config }
    }

    #[must_use]
    pub const fn words(&self) -> &'a [Word] {
        self.words
    }

    #[must_use]
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    /// Random generator for game number `game_index`
    ///
    /// With a base seed the generator depends only on the seed and the index,
    /// so batch runs are reproducible in any execution order.
    #[must_use]
    pub fn rng_for(&self, game_index: u64) -> StdRng {
        match self.config.seed {
            Some(seed) => {
                StdRng::seed_from_u64(seed ^ game_index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
            }
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Fresh strategy instance for a game with `word_length` letters
    #[must_use]
    pub fn strategy(&self, kind: StrategyKind, word_length: usize, game_index: u64) -> StrategyType {
        StrategyType::new(kind, self.words, word_length, self.rng_for(game_index))
    }

    /// Play one strategy against `secret`
    #[must_use]
    pub fn play(&self, kind: StrategyKind, secret: &Word, game_index: u64) -> GameRecord {
        let mut strategy = self.strategy(kind, secret.len(), game_index);
        let mut game = Game::new(secret.clone(), self.config.lives);

        let mut steps = Vec::new();

        let result = play_game(&mut strategy, &mut game, &mut steps);
        if let Err(e) = result {
            debug!("{kind} stopped on {secret}: {e}");
        }
        let outcome = GameOutcome::from_result(result, &game);

        GameRecord {
            strategy: kind,
            secret: secret.text().to_string(),
            steps,
            outcome,
            misses: game.misses(),
            lives: game.lives(),
        }
    }

    /// Let every strategy in `kinds` play the same secret word
    #[must_use]
    pub fn play_each(&self, kinds: &[StrategyKind], secret: &Word, game_index: u64) -> Vec<GameRecord> {
        kinds
            .iter()
            .map(|&kind| self.play(kind, secret, game_index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameError, RevealedPattern};
    use crate::solver::Corpus;
    use crate::wordlists::loader::words_from_slice;
    use rustc_hash::FxHashSet;

    fn seeded(lives: usize) -> SolverConfig {
        SolverConfig {
            lives,
            seed: Some(11),
        }
    }

    #[test]
    fn pattern_matching_solves_word_in_corpus() {
        let words = words_from_slice(&["crane", "grape", "brave", "slate", "stone", "shore"]);
        let solver = Solver::new(&words, seeded(26));

        for secret in &words {
            let record = solver.play(StrategyKind::PatternMatching, secret, 0);
            assert_eq!(record.outcome, GameOutcome::Solved, "{secret}");
        }
    }

    #[test]
    fn record_tracks_misses_and_steps() {
        let words = words_from_slice(&["crane", "grape", "brave"]);
        let solver = Solver::new(&words, seeded(6));
        let secret = Word::new("brave").unwrap();

        let record = solver.play(StrategyKind::BruteForceFrequencies, &secret, 0);

        // Ranking is r, a, e, c, n, g, p, b, v
        assert_eq!(record.outcome, GameOutcome::Solved);
        assert_eq!(record.letters(), "RAECNGPBV");
        assert_eq!(record.misses, 4);
        assert_eq!(record.steps[0].pattern, "_____");
        assert_eq!(record.steps[3].outcome, GuessOutcome::Miss);
    }

    #[test]
    fn running_out_of_lives_is_a_loss() {
        let words = words_from_slice(&["crane", "grape", "brave"]);
        let solver = Solver::new(&words, seeded(1));
        let secret = Word::new("brave").unwrap();

        let record = solver.play(StrategyKind::BruteForceFrequencies, &secret, 0);
        assert_eq!(record.outcome, GameOutcome::OutOfLives);
        assert_eq!(record.misses, 1);
    }

    #[test]
    fn secret_outside_corpus_ends_with_no_candidates() {
        let words = words_from_slice(&["crane", "grape"]);
        let solver = Solver::new(&words, seeded(26));
        let secret = Word::new("zzzzz").unwrap();

        let record = solver.play(StrategyKind::PatternMatching, &secret, 0);
        assert_eq!(record.outcome, GameOutcome::NoCandidates);
        assert!(!record.outcome.is_win());
    }

    /// Always proposes the same letter
    struct Stubborn(Corpus);

    impl Strategy for Stubborn {
        fn make_guess(
            &mut self,
            _guessed: &FxHashSet<u8>,
            _pattern: &RevealedPattern,
        ) -> Result<u8, GuessError> {
            Ok(b'z')
        }

        fn corpus(&self) -> &Corpus {
            &self.0
        }
    }

    #[test]
    fn repeated_letter_is_reported_as_rejected() {
        let words = words_from_slice(&["crane"]);
        let mut strategy = Stubborn(Corpus::new(&words, 5));
        let mut game = Game::new(words[0].clone(), 6);
        let mut steps = Vec::new();

        let result = play_game(&mut strategy, &mut game, &mut steps);

        assert_eq!(
            result,
            Err(GuessError::Rejected(GameError::AlreadyGuessed('z')))
        );
        assert_eq!(steps.len(), 1);
        assert_eq!(
            GameOutcome::from_result(result, &game),
            GameOutcome::Failed(GuessError::Rejected(GameError::AlreadyGuessed('z')))
        );
    }

    #[test]
    fn wrong_length_strategy_is_not_reported_as_exhausted() {
        let words = words_from_slice(&["crane", "cat"]);
        let mut strategy = StrategyType::new(
            StrategyKind::PatternMatching,
            &words,
            3,
            StdRng::seed_from_u64(1),
        );
        let mut game = Game::new(words[0].clone(), 6);

        let result = play_game(&mut strategy, &mut game, &mut Vec::new());
        let expected = GuessError::InvalidPattern {
            expected: 3,
            actual: 5,
        };

        assert_eq!(result, Err(expected));
        assert_eq!(
            GameOutcome::from_result(result, &game),
            GameOutcome::Failed(expected)
        );
        assert!(!GameOutcome::Failed(expected).is_win());
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let words = words_from_slice(&["crane", "grape", "brave", "slate", "stone", "shore"]);
        let solver = Solver::new(&words, seeded(6));
        let secret = Word::new("stone").unwrap();

        let first = solver.play(StrategyKind::ProbabilityBruteForceFrequencies, &secret, 3);
        let second = solver.play(StrategyKind::ProbabilityBruteForceFrequencies, &secret, 3);
        assert_eq!(first.steps, second.steps);
    }

    #[test]
    fn play_each_runs_every_strategy() {
        let words = words_from_slice(&["crane", "grape", "brave"]);
        let solver = Solver::new(&words, seeded(6));
        let secret = Word::new("grape").unwrap();

        let records = solver.play_each(&StrategyKind::ALL, &secret, 0);
        let kinds: Vec<StrategyKind> = records.iter().map(|r| r.strategy).collect();
        assert_eq!(kinds, StrategyKind::ALL.to_vec());
    }
}
