//! Letter document-frequency model
//!
//! Counts, for each letter, the number of words that contain it at least once.
//! Repeats inside a word do not count twice.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Letter → number of words containing that letter
///
/// Entries are kept in first-seen order: the order letters are first
/// encountered while scanning the words in sequence, each word left to right.
/// That order is the tie-breaker for the ranked form, so rankings are fully
/// deterministic for a given corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(u8, usize)>,
    index: FxHashMap<u8, usize>,
}

impl FrequencyTable {
    /// Build the table from a set of words
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    /// use hangman_solver::solver::FrequencyTable;
    ///
    /// let words = vec![Word::new("aa").unwrap(), Word::new("ab").unwrap()];
    /// let table = FrequencyTable::from_words(&words);
    /// assert_eq!(table.weight(b'a'), 2);
    /// assert_eq!(table.weight(b'b'), 1);
    /// assert_eq!(table.ranked(), vec![b'a', b'b']);
    /// ```
    #[must_use]
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        let mut table = Self::default();

        for word in words {
            for letter in word.distinct_letters() {
                let next = table.entries.len();
                let slot = *table.index.entry(letter).or_insert(next);
                if slot == next {
                    table.entries.push((letter, 0));
                }
                table.entries[slot].1 += 1;
            }
        }

        table
    }

    /// Weight of a letter (0 if it never appears)
    #[must_use]
    pub fn weight(&self, letter: u8) -> usize {
        self.index
            .get(&letter)
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Unordered weighted form, as `(letter, count)` pairs in first-seen order
    #[must_use]
    pub fn weighted(&self) -> &[(u8, usize)] {
        &self.entries
    }

    /// Pairs sorted by descending count, ties in first-seen order
    #[must_use]
    pub fn ranked_entries(&self) -> Vec<(u8, usize)> {
        let mut ranked = self.entries.clone();
        // Stable sort keeps first-seen order among equal counts
        ranked.sort_by_key(|&(_, count)| std::cmp::Reverse(count));
        ranked
    }

    /// Letters by descending count, ties in first-seen order
    #[must_use]
    pub fn ranked(&self) -> Vec<u8> {
        self.ranked_entries()
            .into_iter()
            .map(|(letter, _)| letter)
            .collect()
    }

    /// Sum of all weights
    #[must_use]
    pub fn total_weight(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// Number of distinct letters
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
