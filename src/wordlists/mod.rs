//! Word lists for Hangman
//!
//! Provides the embedded master word list compiled into the binary, plus
//! helpers for loading other lists and picking secret words.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn covers_several_lengths() {
        let lengths: std::collections::HashSet<usize> = WORDS.iter().map(|w| w.len()).collect();
        for len in 3..=8 {
            assert!(lengths.contains(&len), "no words of length {len}");
        }
    }
}
