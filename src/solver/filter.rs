//! Pattern-constrained corpus narrowing

use crate::core::{RevealedPattern, Word};

/// Words consistent with a revealed pattern
///
/// Every known slot must hold the same letter in the word; unknown slots are
/// unconstrained. Words of a different length never match.
#[must_use]
pub fn filter_by_pattern(words: &[Word], pattern: &RevealedPattern) -> Vec<Word> {
    words
        .iter()
        .filter(|w| pattern.matches(w))
        .cloned()
        .collect()
}
