//! Revealed word pattern
//!
//! A pattern is the current disclosure state of the secret word: one slot per
//! position, each either a known letter or unknown. The text form uses `_` for
//! unknown slots, e.g. `_R__E`.

use super::Word;
use std::collections::HashSet;
use std::fmt;
use std::hash::BuildHasher;
use thiserror::Error;

/// Character used when printing an unknown slot
pub const BLANK: char = '_';

/// Error type for unparseable patterns
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Pattern must not be empty")]
    Empty,
    #[error("Invalid character {0:?} in pattern (use letters and '_')")]
    InvalidCharacter(char),
}

/// Known letters fixed in position, everything else unknown
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RevealedPattern {
    slots: Vec<Option<u8>>,
}

impl RevealedPattern {
    /// Create a pattern from explicit slots
    ///
    /// Known letters are normalized to lowercase.
    #[must_use]
    pub fn new(slots: Vec<Option<u8>>) -> Self {
        let slots = slots
            .into_iter()
            .map(|slot| slot.map(|c| c.to_ascii_lowercase()))
            .collect();
        Self { slots }
    }

    /// A pattern of `len` unknown slots
    #[must_use]
    pub fn unknown(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// The pattern a game shows for `word` after `guessed` letters
    ///
    /// Every occurrence of a guessed letter is revealed; guesses match in
    /// either case.
    #[must_use]
    pub fn reveal<S: BuildHasher>(word: &Word, guessed: &HashSet<u8, S>) -> Self {
        Self {
            slots: word
                .chars()
                .iter()
                .map(|&c| {
                    (guessed.contains(&c) || guessed.contains(&c.to_ascii_uppercase()))
                        .then_some(c)
                })
                .collect(),
        }
    }

    /// Parse a pattern like `_R__E` or `.r..e`
    ///
    /// Accepts letters (any case) for known slots and `_`, `.`, `-` or `?`
    /// for unknown slots.
    ///
    /// # Errors
    /// Returns `PatternError` for an empty string or any other character.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::RevealedPattern;
    ///
    /// let p = RevealedPattern::parse("_R__E").unwrap();
    /// assert_eq!(p.len(), 5);
    /// assert_eq!(p.get(1), Some(b'r'));
    /// assert_eq!(p.get(0), None);
    /// assert_eq!(p.to_string(), "_R__E");
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        if s.is_empty() {
            return Err(PatternError::Empty);
        }

        let slots = s
            .chars()
            .map(|ch| match ch {
                '_' | '.' | '-' | '?' => Ok(None),
                c if c.is_ascii_alphabetic() => Ok(Some(c.to_ascii_lowercase() as u8)),
                c => Err(PatternError::InvalidCharacter(c)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { slots })
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Letter at `position`, or `None` if unknown or out of range
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<u8> {
        self.slots.get(position).copied().flatten()
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<u8>] {
        &self.slots
    }

    /// Number of known slots
    #[must_use]
    pub fn known_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True once every slot is known
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Full-length structural match
    ///
    /// A word matches only if it has the same length and carries the known
    /// letter at every known position. Unknown slots accept any letter.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.slots.len()
            && self
                .slots
                .iter()
                .zip(word.chars())
                .all(|(slot, ch)| slot.is_none_or(|known| known == *ch))
    }
}

impl fmt::Display for RevealedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Some(c) => write!(f, "{}", c.to_ascii_uppercase() as char)?,
                None => write!(f, "{BLANK}")?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for RevealedPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
