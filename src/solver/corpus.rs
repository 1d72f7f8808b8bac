//! Candidate word corpus
//!
//! A corpus is the working set of words for one game, all of the same length.
//! It is never mutated in place: narrowing by a pattern produces a new corpus.

use super::filter::filter_by_pattern;
use crate::core::{RevealedPattern, Word};

/// Keep only the words of length `word_length`, preserving order
///
/// # Examples
/// ```
/// use hangman_solver::core::Word;
/// use hangman_solver::solver::prune_by_length;
///
/// let words: Vec<Word> = ["cat", "horse", "dog"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let pruned = prune_by_length(&words, 3);
/// assert_eq!(pruned.len(), 2);
/// assert_eq!(pruned[1].text(), "dog");
/// ```
#[must_use]
pub fn prune_by_length(words: &[Word], word_length: usize) -> Vec<Word> {
    words
        .iter()
        .filter(|w| w.len() == word_length)
        .cloned()
        .collect()
}

/// Words of a single fixed length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    word_length: usize,
    words: Vec<Word>,
}

impl Corpus {
    /// Build a corpus from a master word list, pruned to `word_length`
    ///
    /// An empty result is valid.
    #[must_use]
    pub fn new(words: &[Word], word_length: usize) -> Self {
        Self {
            word_length,
            words: prune_by_length(words, word_length),
        }
    }

    /// Narrow to the words consistent with `pattern`
    ///
    /// The caller is responsible for checking that the pattern length equals
    /// the corpus word length; a mismatched pattern matches nothing.
    #[must_use]
    pub fn filter(&self, pattern: &RevealedPattern) -> Self {
        Self {
            word_length: self.word_length,
            words: filter_by_pattern(&self.words, pattern),
        }
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
