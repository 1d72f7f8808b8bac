//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants,
//! and to pick secret words from them.

use crate::core::Word;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// entry that is not purely alphabetic.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    let words = words_from_lines(content.lines());
    debug!("loaded {} words from file", words.len());
    Ok(words)
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    lines
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::words_from_slice;
/// use hangman_solver::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

/// Distinct word lengths present in a list, ascending
#[must_use]
pub fn available_lengths(words: &[Word]) -> Vec<usize> {
    words
        .iter()
        .map(Word::len)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Pick a random secret word, optionally of a given length
///
/// Returns `None` if no word qualifies.
pub fn random_word<'a, R: Rng>(
    words: &'a [Word],
    length: Option<usize>,
    rng: &mut R,
) -> Option<&'a Word> {
    match length {
        Some(len) => {
            let pool: Vec<&Word> = words.iter().filter(|w| w.len() == len).collect();
            pool.choose(rng).copied()
        }
        None => words.choose(rng),
    }
}
