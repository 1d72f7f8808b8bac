//! Letter guessing strategies
//!
//! Defines the Strategy trait and the four concrete implementations. They
//! differ along two axes:
//!
//! | Strategy | Corpus | Selection |
//! |---|---|---|
//! | `ProbabilityBruteForceFrequencies` | static | weighted random |
//! | `BruteForceFrequencies` | static | rank order |
//! | `ProbabilityPatternMatching` | re-filtered every turn | weighted random |
//! | `PatternMatching` | re-filtered every turn | rank order |

use super::selection::{RankCursor, weighted_unguessed};
use super::{Corpus, FrequencyTable};
use crate::core::{GameError, RevealedPattern, Word};
use log::debug;
use rand::Rng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// Error type for guess requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// No word matches, or every weight-bearing letter is already guessed
    #[error("no candidate letters remain")]
    ExhaustedCandidates,
    /// The pattern length differs from the corpus word length
    #[error("pattern has {actual} slots but words have {expected} letters")]
    InvalidPattern { expected: usize, actual: usize },
    /// The game refused the proposed letter
    #[error("game rejected the guess: {0}")]
    Rejected(#[from] GameError),
}

/// A strategy for choosing the next letter in one game
///
/// One instance serves exactly one game.
pub trait Strategy {
    /// Propose a letter not in `guessed`
    ///
    /// # Errors
    /// Returns `GuessError::InvalidPattern` if the pattern length does not
    /// match the word length, and `GuessError::ExhaustedCandidates` if no
    /// letter can be offered.
    fn make_guess(
        &mut self,
        guessed: &FxHashSet<u8>,
        pattern: &RevealedPattern,
    ) -> Result<u8, GuessError>;

    /// The words this strategy currently considers possible
    fn corpus(&self) -> &Corpus;
}

fn check_pattern(corpus: &Corpus, pattern: &RevealedPattern) -> Result<(), GuessError> {
    if pattern.len() == corpus.word_length() {
        Ok(())
    } else {
        Err(GuessError::InvalidPattern {
            expected: corpus.word_length(),
            actual: pattern.len(),
        })
    }
}

/// Identifies one of the four strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrategyKind {
    ProbabilityBruteForceFrequencies,
    BruteForceFrequencies,
    ProbabilityPatternMatching,
    PatternMatching,
}

impl StrategyKind {
    /// Every strategy, in display order
    pub const ALL: [Self; 4] = [
        Self::ProbabilityBruteForceFrequencies,
        Self::BruteForceFrequencies,
        Self::ProbabilityPatternMatching,
        Self::PatternMatching,
    ];

    /// Short command-line name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ProbabilityBruteForceFrequencies => "probability-brute-force",
            Self::BruteForceFrequencies => "brute-force",
            Self::ProbabilityPatternMatching => "probability-pattern",
            Self::PatternMatching => "pattern",
        }
    }

    /// Human readable title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ProbabilityBruteForceFrequencies => "Probability Brute-Force Frequencies",
            Self::BruteForceFrequencies => "Brute-Force Frequencies",
            Self::ProbabilityPatternMatching => "Probability Pattern Matching",
            Self::PatternMatching => "Pattern Matching",
        }
    }

    /// Parse a command-line name
    ///
    /// Supported names: "probability-brute-force", "brute-force",
    /// "probability-pattern", "pattern".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Whether the corpus is re-filtered against the pattern every turn
    #[must_use]
    pub const fn is_dynamic(self) -> bool {
        matches!(
            self,
            Self::ProbabilityPatternMatching | Self::PatternMatching
        )
    }

    /// Whether selection is a weighted random draw
    #[must_use]
    pub const fn is_random(self) -> bool {
        matches!(
            self,
            Self::ProbabilityBruteForceFrequencies | Self::ProbabilityPatternMatching
        )
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    ProbabilityBruteForceFrequencies(ProbabilityBruteForceFrequencies),
    BruteForceFrequencies(BruteForceFrequencies),
    ProbabilityPatternMatching(ProbabilityPatternMatching),
    PatternMatching(PatternMatching),
}

impl StrategyType {
    /// Construct a fresh strategy of the given kind for one game
    ///
    /// `rng` is only used by the weighted-random strategies.
    #[must_use]
    pub fn new(kind: StrategyKind, words: &[Word], word_length: usize, rng: StdRng) -> Self {
        match kind {
            StrategyKind::ProbabilityBruteForceFrequencies => Self::ProbabilityBruteForceFrequencies(
                ProbabilityBruteForceFrequencies::new(words, word_length, rng),
            ),
            StrategyKind::BruteForceFrequencies => {
                Self::BruteForceFrequencies(BruteForceFrequencies::new(words, word_length))
            }
            StrategyKind::ProbabilityPatternMatching => Self::ProbabilityPatternMatching(
                ProbabilityPatternMatching::new(words, word_length, rng),
            ),
            StrategyKind::PatternMatching => {
                Self::PatternMatching(PatternMatching::new(words, word_length))
            }
        }
    }

    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::ProbabilityBruteForceFrequencies(_) => {
                StrategyKind::ProbabilityBruteForceFrequencies
            }
            Self::BruteForceFrequencies(_) => StrategyKind::BruteForceFrequencies,
            Self::ProbabilityPatternMatching(_) => StrategyKind::ProbabilityPatternMatching,
            Self::PatternMatching(_) => StrategyKind::PatternMatching,
        }
    }
}

impl Strategy for StrategyType {
    fn make_guess(
        &mut self,
        guessed: &FxHashSet<u8>,
        pattern: &RevealedPattern,
    ) -> Result<u8, GuessError> {
        match self {
            Self::ProbabilityBruteForceFrequencies(s) => s.make_guess(guessed, pattern),
            Self::BruteForceFrequencies(s) => s.make_guess(guessed, pattern),
            Self::ProbabilityPatternMatching(s) => s.make_guess(guessed, pattern),
            Self::PatternMatching(s) => s.make_guess(guessed, pattern),
        }
    }

    fn corpus(&self) -> &Corpus {
        match self {
            Self::ProbabilityBruteForceFrequencies(s) => s.corpus(),
            Self::BruteForceFrequencies(s) => s.corpus(),
            Self::ProbabilityPatternMatching(s) => s.corpus(),
            Self::PatternMatching(s) => s.corpus(),
        }
    }
}

/// Weighted random draw from a frequency table built once
///
/// Letters that appear in more words of the target length are drawn more
/// often. The table never changes during the game.
pub struct ProbabilityBruteForceFrequencies<R: Rng = StdRng> {
    corpus: Corpus,
    table: FrequencyTable,
    rng: R,
}

impl<R: Rng> ProbabilityBruteForceFrequencies<R> {
    #[must_use]
    pub fn new(words: &[Word], word_length: usize, rng: R) -> Self {
        let corpus = Corpus::new(words, word_length);
        let table = FrequencyTable::from_words(corpus.words());
        Self { corpus, table, rng }
    }
}

impl<R: Rng> Strategy for ProbabilityBruteForceFrequencies<R> {
    fn make_guess(
        &mut self,
        guessed: &FxHashSet<u8>,
        pattern: &RevealedPattern,
    ) -> Result<u8, GuessError> {
        check_pattern(&self.corpus, pattern)?;
        weighted_unguessed(&self.table, guessed, &mut self.rng)
            .ok_or(GuessError::ExhaustedCandidates)
    }

    fn corpus(&self) -> &Corpus {
        &self.corpus
    }
}

/// Most frequent letters first, from a ranking built once
///
/// The cursor only moves forward: a letter offered once is never offered
/// again, whether or not the caller used it.
pub struct BruteForceFrequencies {
    corpus: Corpus,
    cursor: RankCursor,
}

impl BruteForceFrequencies {
    #[must_use]
    pub fn new(words: &[Word], word_length: usize) -> Self {
        let corpus = Corpus::new(words, word_length);
        let cursor = RankCursor::new(FrequencyTable::from_words(corpus.words()).ranked());
        Self { corpus, cursor }
    }
}

impl Strategy for BruteForceFrequencies {
    fn make_guess(
        &mut self,
        guessed: &FxHashSet<u8>,
        pattern: &RevealedPattern,
    ) -> Result<u8, GuessError> {
        check_pattern(&self.corpus, pattern)?;
        self.cursor
            .next_unguessed(guessed)
            .ok_or(GuessError::ExhaustedCandidates)
    }

    fn corpus(&self) -> &Corpus {
        &self.corpus
    }
}

/// Weighted random draw over words still matching the pattern
///
/// Before every guess the corpus is narrowed to the words consistent with the
/// revealed pattern and the frequency table rebuilt from what is left.
pub struct ProbabilityPatternMatching<R: Rng = StdRng> {
    corpus: Corpus,
    table: FrequencyTable,
    rng: R,
}

impl<R: Rng> ProbabilityPatternMatching<R> {
    #[must_use]
    pub fn new(words: &[Word], word_length: usize, rng: R) -> Self {
        let corpus = Corpus::new(words, word_length);
        let table = FrequencyTable::from_words(corpus.words());
        Self { corpus, table, rng }
    }

    /// Current frequency table
    #[must_use]
    pub const fn table(&self) -> &FrequencyTable {
        &self.table
    }
}

impl<R: Rng> Strategy for ProbabilityPatternMatching<R> {
    fn make_guess(
        &mut self,
        guessed: &FxHashSet<u8>,
        pattern: &RevealedPattern,
    ) -> Result<u8, GuessError> {
        check_pattern(&self.corpus, pattern)?;

        self.corpus = self.corpus.filter(pattern);
        self.table = FrequencyTable::from_words(self.corpus.words());
        debug!(
            "probability-pattern: {} words match {pattern}",
            self.corpus.len()
        );

        if self.corpus.is_empty() {
            return Err(GuessError::ExhaustedCandidates);
        }

        weighted_unguessed(&self.table, guessed, &mut self.rng)
            .ok_or(GuessError::ExhaustedCandidates)
    }

    fn corpus(&self) -> &Corpus {
        &self.corpus
    }
}

/// Most frequent letter among words still matching the pattern
///
/// The ranking and its cursor are rebuilt after every narrowing, so nothing
/// carries over from the previous turn except the corpus itself.
pub struct PatternMatching {
    corpus: Corpus,
    cursor: RankCursor,
}

impl PatternMatching {
    #[must_use]
    pub fn new(words: &[Word], word_length: usize) -> Self {
        let corpus = Corpus::new(words, word_length);
        let cursor = RankCursor::new(FrequencyTable::from_words(corpus.words()).ranked());
        Self { corpus, cursor }
    }
}

impl Strategy for PatternMatching {
    fn make_guess(
        &mut self,
        guessed: &FxHashSet<u8>,
        pattern: &RevealedPattern,
    ) -> Result<u8, GuessError> {
        check_pattern(&self.corpus, pattern)?;

        self.corpus = self.corpus.filter(pattern);
        self.cursor = RankCursor::new(FrequencyTable::from_words(self.corpus.words()).ranked());
        debug!("pattern: {} words match {pattern}", self.corpus.len());

        if self.corpus.is_empty() {
            return Err(GuessError::ExhaustedCandidates);
        }

        self.cursor
            .next_unguessed(guessed)
            .ok_or(GuessError::ExhaustedCandidates)
    }

    fn corpus(&self) -> &Corpus {
        &self.corpus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn letters(s: &str) -> FxHashSet<u8> {
        s.bytes().collect()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in StrategyKind::ALL {
            assert_eq!(StrategyKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(StrategyKind::from_name("random"), None);
    }

    #[test]
    fn kind_axes() {
        assert!(!StrategyKind::BruteForceFrequencies.is_dynamic());
        assert!(!StrategyKind::BruteForceFrequencies.is_random());
        assert!(StrategyKind::ProbabilityPatternMatching.is_dynamic());
        assert!(StrategyKind::ProbabilityPatternMatching.is_random());
    }

    #[test]
    fn brute_force_walks_ranking_then_exhausts() {
        let words = words_from_slice(&["crane", "grape", "brave"]);
        let mut strategy = BruteForceFrequencies::new(&words, 5);
        let pattern = RevealedPattern::unknown(5);
        let mut guessed = FxHashSet::default();

        let mut order = Vec::new();
        loop {
            match strategy.make_guess(&guessed, &pattern) {
                Ok(letter) => {
                    assert!(!guessed.contains(&letter));
                    guessed.insert(letter);
                    order.push(letter);
                }
                Err(e) => {
                    assert_eq!(e, GuessError::ExhaustedCandidates);
                    break;
                }
            }
        }

        assert_eq!(order, b"raecngpbv".to_vec());
    }

    #[test]
    fn brute_force_skips_letters_guessed_elsewhere() {
        let words = words_from_slice(&["crane", "grape", "brave"]);
        let mut strategy = BruteForceFrequencies::new(&words, 5);
        let pattern = RevealedPattern::unknown(5);

        assert_eq!(strategy.make_guess(&letters("ra"), &pattern), Ok(b'e'));
        assert_eq!(strategy.make_guess(&letters("rae"), &pattern), Ok(b'c'));
    }

    #[test]
    fn uppercase_guessed_letters_are_not_offered() {
        let words = words_from_slice(&["aa", "ab"]);
        let unknown = RevealedPattern::unknown(2);

        for kind in StrategyKind::ALL {
            let mut strategy = StrategyType::new(kind, &words, 2, rng());
            assert_eq!(strategy.make_guess(&letters("A"), &unknown), Ok(b'b'), "{kind}");
        }
    }

    #[test]
    fn brute_force_cursor_is_not_rebuilt() {
        let words = words_from_slice(&["aa", "ab"]);
        let mut strategy = BruteForceFrequencies::new(&words, 2);
        let pattern = RevealedPattern::unknown(2);

        // The caller never records 'a', yet it is not offered twice
        assert_eq!(strategy.make_guess(&letters(""), &pattern), Ok(b'a'));
        assert_eq!(strategy.make_guess(&letters(""), &pattern), Ok(b'b'));
        assert_eq!(
            strategy.make_guess(&letters(""), &pattern),
            Err(GuessError::ExhaustedCandidates)
        );
    }

    #[test]
    fn pattern_matching_rebuilds_ranking_each_turn() {
        let words = words_from_slice(&["aa", "ab"]);
        let mut strategy = PatternMatching::new(&words, 2);
        let pattern = RevealedPattern::unknown(2);

        // Without a new reveal the same top letter comes back if not guessed
        assert_eq!(strategy.make_guess(&letters(""), &pattern), Ok(b'a'));
        assert_eq!(strategy.make_guess(&letters(""), &pattern), Ok(b'a'));
        assert_eq!(strategy.make_guess(&letters("a"), &pattern), Ok(b'b'));
    }

    #[test]
    fn pattern_matching_narrows_corpus() {
        let words = words_from_slice(&["crane", "grape", "brave", "slate"]);
        let mut strategy = PatternMatching::new(&words, 5);

        let pattern = RevealedPattern::parse("B____").unwrap();
        let letter = strategy.make_guess(&letters("b"), &pattern).unwrap();

        assert_eq!(strategy.corpus().len(), 1);
        assert!(b"rave".contains(&letter));
    }

    #[test]
    fn pattern_matching_exhausts_on_empty_corpus() {
        let words = words_from_slice(&["crane", "grape"]);
        let mut strategy = PatternMatching::new(&words, 5);
        let pattern = RevealedPattern::parse("Z____").unwrap();

        assert_eq!(
            strategy.make_guess(&letters("z"), &pattern),
            Err(GuessError::ExhaustedCandidates)
        );
    }

    #[test]
    fn probability_brute_force_never_repeats() {
        let words = words_from_slice(&["crane", "grape", "brave"]);
        let mut strategy = ProbabilityBruteForceFrequencies::new(&words, 5, rng());
        let pattern = RevealedPattern::unknown(5);
        let mut guessed = FxHashSet::default();

        for _ in 0..9 {
            let letter = strategy.make_guess(&guessed, &pattern).unwrap();
            assert!(guessed.insert(letter), "repeated {}", letter as char);
        }
        assert_eq!(
            strategy.make_guess(&guessed, &pattern),
            Err(GuessError::ExhaustedCandidates)
        );
    }

    #[test]
    fn probability_pattern_matching_draws_from_narrowed_corpus() {
        let words = words_from_slice(&["crane", "grape", "brave", "slots"]);
        let mut strategy = ProbabilityPatternMatching::new(&words, 5, rng());
        let pattern = RevealedPattern::parse("_R__E").unwrap();
        let guessed = letters("re");

        for _ in 0..50 {
            let letter = strategy.make_guess(&guessed, &pattern).unwrap();
            assert!(b"cangpbv".contains(&letter));
        }
        assert_eq!(strategy.corpus().len(), 3);
        assert_eq!(strategy.table().weight(b's'), 0);
    }

    #[test]
    fn every_strategy_rejects_wrong_pattern_length() {
        let words = words_from_slice(&["crane", "grape"]);
        for kind in StrategyKind::ALL {
            let mut strategy = StrategyType::new(kind, &words, 5, rng());
            assert_eq!(
                strategy.make_guess(&letters(""), &RevealedPattern::unknown(4)),
                Err(GuessError::InvalidPattern {
                    expected: 5,
                    actual: 4
                }),
                "{kind}"
            );
        }
    }

    #[test]
    fn every_strategy_accepts_empty_corpus_then_exhausts() {
        let words = words_from_slice(&["crane", "grape"]);
        for kind in StrategyKind::ALL {
            let mut strategy = StrategyType::new(kind, &words, 7, rng());
            assert_eq!(strategy.kind(), kind);
            assert!(strategy.corpus().is_empty());
            assert_eq!(
                strategy.make_guess(&letters(""), &RevealedPattern::unknown(7)),
                Err(GuessError::ExhaustedCandidates),
                "{kind}"
            );
        }
    }
}
