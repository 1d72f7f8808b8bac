//! Frequency comparison command
//!
//! Shows the letter ranking a static strategy uses for a word length next to
//! the ranking a pattern-matching strategy derives once a pattern is known.

use crate::core::{RevealedPattern, Word};
use crate::solver::{Corpus, FrequencyTable, prune_by_length};
use anyhow::{Context, Result, bail};
use rustc_hash::FxHashSet;

/// Result of comparing static and pattern-filtered frequencies
pub struct FrequencyReport {
    pub word_length: usize,
    pub pattern: RevealedPattern,
    /// Words of the target length
    pub corpus_size: usize,
    /// Words also consistent with the pattern
    pub matching: Vec<String>,
    /// Ranking over the full length-pruned corpus
    pub static_ranking: Vec<(u8, usize)>,
    /// Ranking over the pattern-filtered corpus
    pub pattern_ranking: Vec<(u8, usize)>,
    /// Letters already guessed
    pub guessed: FxHashSet<u8>,
}

impl FrequencyReport {
    /// Next letter a rank-order strategy would pick from `ranking`
    #[must_use]
    pub fn next_letter(&self, ranking: &[(u8, usize)]) -> Option<u8> {
        ranking
            .iter()
            .map(|&(letter, _)| letter)
            .find(|letter| !self.guessed.contains(letter))
    }
}

/// Compare letter frequencies for a pattern against the whole word list
///
/// `pattern` is a pattern string such as `_R__E`; its length sets the word
/// length. `guessed` lists letters already tried.
///
/// # Errors
///
/// Returns an error if the pattern cannot be parsed or `guessed` contains
/// anything other than letters.
pub fn compare_frequencies(
    words: &[Word],
    pattern: &str,
    guessed: &str,
) -> Result<FrequencyReport> {
    let pattern = RevealedPattern::parse(pattern)
        .with_context(|| format!("Invalid pattern '{pattern}'"))?;

    if let Some(bad) = guessed.chars().find(|c| !c.is_ascii_alphabetic()) {
        bail!("Guessed letters must be letters, got {bad:?}");
    }
    let mut guessed: FxHashSet<u8> = guessed.bytes().map(|c| c.to_ascii_lowercase()).collect();
    // Revealed letters have necessarily been guessed
    guessed.extend(pattern.slots().iter().flatten());

    let word_length = pattern.len();
    let pruned = prune_by_length(words, word_length);
    let static_ranking = FrequencyTable::from_words(&pruned).ranked_entries();

    let narrowed = Corpus::new(&pruned, word_length).filter(&pattern);
    let pattern_ranking = FrequencyTable::from_words(narrowed.words()).ranked_entries();

    Ok(FrequencyReport {
        word_length,
        pattern,
        corpus_size: pruned.len(),
        matching: narrowed
            .words()
            .iter()
            .map(|w| w.text().to_string())
            .collect(),
        static_ranking,
        pattern_ranking,
        guessed,
    })
}
