//! Letter selection rules
//!
//! Two ways of turning a frequency table into a letter:
//! - weighted random draw over the unguessed letters
//! - deterministic walk down the ranked letters with an explicit cursor

use super::FrequencyTable;
use rand::Rng;
use std::collections::HashSet;
use std::hash::BuildHasher;

/// Draw one letter with probability proportional to its weight
///
/// Builds cumulative sums over the pairs in the given order, draws a uniform
/// integer in `[0, total)` and binary-searches for the first cumulative sum
/// strictly greater than the draw.
///
/// Returns `None` when there is nothing to draw from (no pairs, or all
/// weights zero).
pub fn weighted_choice<R: Rng>(choices: &[(u8, usize)], rng: &mut R) -> Option<u8> {
    let cumulative: Vec<usize> = choices
        .iter()
        .scan(0, |total, &(_, weight)| {
            *total += weight;
            Some(*total)
        })
        .collect();

    let total = *cumulative.last()?;
    if total == 0 {
        return None;
    }

    let draw = rng.random_range(0..total);
    let index = cumulative.partition_point(|&sum| sum <= draw);
    choices.get(index).map(|&(letter, _)| letter)
}

/// Whether `letter` is in `guessed`, in either case
///
/// Table letters are lowercase; callers may record guesses as typed.
fn is_guessed<S: BuildHasher>(guessed: &HashSet<u8, S>, letter: u8) -> bool {
    guessed.contains(&letter.to_ascii_lowercase())
        || guessed.contains(&letter.to_ascii_uppercase())
}

/// Weighted draw restricted to letters not yet guessed
///
/// Same distribution as redrawing until an unguessed letter comes up, but
/// bounded: guessed letters are removed before sampling.
pub fn weighted_unguessed<R, S>(
    table: &FrequencyTable,
    guessed: &HashSet<u8, S>,
    rng: &mut R,
) -> Option<u8>
where
    R: Rng,
    S: BuildHasher,
{
    let open: Vec<(u8, usize)> = table
        .weighted()
        .iter()
        .filter(|&&(letter, weight)| weight > 0 && !is_guessed(guessed, letter))
        .copied()
        .collect();

    weighted_choice(&open, rng)
}

/// Ranked letters plus the index of the next one to offer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankCursor {
    ranked: Vec<u8>,
    position: usize,
}

impl RankCursor {
    #[must_use]
    pub fn new(ranked: Vec<u8>) -> Self {
        Self {
            ranked,
            position: 0,
        }
    }

    /// Advance past guessed letters and consume the first unguessed one
    ///
    /// Returns `None` once the ranking is used up. A consumed letter is never
    /// offered again by this cursor.
    pub fn next_unguessed<S: BuildHasher>(&mut self, guessed: &HashSet<u8, S>) -> Option<u8> {
        while let Some(&letter) = self.ranked.get(self.position) {
            self.position += 1;
            if !is_guessed(guessed, letter) {
                return Some(letter);
            }
        }
        None
    }
}
