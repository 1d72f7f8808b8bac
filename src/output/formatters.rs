//! Formatting utilities for terminal output

use crate::core::RevealedPattern;
use crate::solver::{GameOutcome, StrategyKind};
use std::collections::HashSet;
use std::hash::BuildHasher;

/// Format a pattern with spaces between slots, e.g. `_ R _ _ E`
#[must_use]
pub fn spaced_pattern(pattern: &RevealedPattern) -> String {
    pattern
        .to_string()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Guessed letters in alphabetical order, uppercase, space separated
#[must_use]
pub fn sorted_letters<S: BuildHasher>(letters: &HashSet<u8, S>) -> String {
    let mut sorted: Vec<u8> = letters.iter().map(u8::to_ascii_uppercase).collect();
    sorted.sort_unstable();
    sorted.dedup();
    sorted
        .into_iter()
        .map(|c| (c as char).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Short label for how a game ended
#[must_use]
pub const fn outcome_label(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::Solved => "✅ solved",
        GameOutcome::OutOfLives => "💀 out of lives",
        GameOutcome::NoCandidates => "❓ no candidates",
        GameOutcome::Failed(_) => "⚠️ strategy error",
    }
}

/// How a strategy picks letters, e.g. `re-filtered, weighted draw`
#[must_use]
pub fn strategy_traits(kind: StrategyKind) -> String {
    let corpus = if kind.is_dynamic() {
        "re-filtered"
    } else {
        "static"
    };
    let selection = if kind.is_random() {
        "weighted draw"
    } else {
        "rank order"
    };
    format!("{corpus}, {selection}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Gallows drawing for `misses` wrong guesses out of `lives`
///
/// Body parts are spread over the available lives so the figure is complete
/// exactly when the last life is lost.
#[must_use]
pub fn gallows(misses: usize, lives: usize) -> Vec<String> {
    const PARTS: usize = 6;
    let shown = if lives == 0 {
        PARTS
    } else {
        (misses * PARTS).div_ceil(lives).min(PARTS)
    };

    let part = |index: usize, drawn: &'static str, blank: &'static str| {
        if shown > index { drawn } else { blank }
    };

    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", part(0, "O", " ")),
        format!(
            " {}{}{}  |",
            part(2, "/", " "),
            part(1, "|", " "),
            part(3, "\\", " ")
        ),
        format!(" {} {}  |", part(4, "/", " "), part(5, "\\", " ")),
        "      |".to_string(),
        "=========".to_string(),
    ]
}
