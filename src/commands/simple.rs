//! Simple interactive CLI mode
//!
//! The user thinks of a word and the solver guesses it letter by letter.
//! After each suggestion the user enters the positions where the letter
//! appears, or nothing if it is not in the word.

use crate::core::RevealedPattern;
use crate::output::formatters::spaced_pattern;
use crate::solver::{GuessError, Solver, Strategy, StrategyKind};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use rustc_hash::FxHashSet;
use std::io::{self, Write};

/// Reply to a suggested letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// 1-based positions where the letter appears (empty for a miss)
    Positions(Vec<usize>),
    Quit,
}

/// Parse a reply such as `2 5`, `2,5`, `-` or an empty line
///
/// # Errors
///
/// Returns an error if a position is not a number or outside `1..=length`.
pub fn parse_reply(input: &str, length: usize) -> Result<Reply> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "quit" | "q" | "exit" => return Ok(Reply::Quit),
        "" | "-" | "n" | "no" | "none" => return Ok(Reply::Positions(Vec::new())),
        _ => {}
    }

    let mut positions = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| -> Result<usize> {
            let pos: usize = part
                .parse()
                .with_context(|| format!("'{part}' is not a position"))?;
            if pos == 0 || pos > length {
                bail!("position {pos} is outside 1..={length}");
            }
            Ok(pos)
        })
        .collect::<Result<Vec<_>>>()?;
    positions.sort_unstable();
    positions.dedup();

    Ok(Reply::Positions(positions))
}

/// Apply a reply to the pattern, refusing to overwrite a different letter
///
/// # Errors
///
/// Returns an error if a position already holds another letter.
pub fn apply_reply(
    pattern: &RevealedPattern,
    letter: u8,
    positions: &[usize],
) -> Result<RevealedPattern> {
    let mut slots = pattern.slots().to_vec();
    for &pos in positions {
        match slots[pos - 1] {
            Some(existing) if existing != letter => {
                bail!(
                    "position {pos} is already {}",
                    existing.to_ascii_uppercase() as char
                );
            }
            _ => slots[pos - 1] = Some(letter),
        }
    }
    Ok(RevealedPattern::new(slots))
}

/// Current word, revealed count and lives left on one line
#[must_use]
pub fn status_line(pattern: &RevealedPattern, lives_left: usize) -> String {
    format!(
        "Word: {}   Revealed: {}/{}   Lives: {lives_left}",
        spaced_pattern(pattern),
        pattern.known_count(),
        pattern.len()
    )
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(solver: &Solver, kind: StrategyKind) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Hangman Solver - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a word and I'll guess it one letter at a time.");
    println!("Strategy: {}\n", kind.title().bright_cyan());
    println!("After each guess, enter where the letter appears:");
    println!("  - positions separated by spaces, e.g. '2 5' (1-based)");
    println!("  - an empty line or '-' if the letter is not in the word");
    println!("  - 'quit' to exit\n");

    loop {
        let length = loop {
            let input = get_user_input("Word length (or 'quit')")?;
            if matches!(input.as_str(), "quit" | "q" | "exit") {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            match input.parse::<usize>() {
                Ok(n) if n > 0 => break n,
                _ => println!("❌ Enter a positive number\n"),
            }
        };

        if !play_one(solver, kind, length)? {
            return Ok(());
        }

        match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
            "yes" | "y" => println!("\n🔄 New game started!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Play one game; returns false if the user quit
fn play_one(solver: &Solver, kind: StrategyKind, length: usize) -> Result<bool> {
    let mut strategy = solver.strategy(kind, length, 0);
    let mut pattern = RevealedPattern::unknown(length);
    let mut guessed: FxHashSet<u8> = FxHashSet::default();
    let lives = solver.config().lives;
    let mut misses = 0;

    println!(
        "\n{} words of length {length} to choose from.\n",
        strategy.corpus().len()
    );

    while !pattern.is_complete() && misses < lives {
        let letter = match strategy.make_guess(&guessed, &pattern) {
            Ok(letter) => letter,
            Err(GuessError::ExhaustedCandidates) => {
                println!("\n❌ No candidates remain! Your word may not be in my list.\n");
                return Ok(true);
            }
            Err(e) => return Err(e.into()),
        };
        guessed.insert(letter);

        println!("────────────────────────────────────────────────────────────");
        println!("{}", status_line(&pattern, lives - misses));
        println!(
            "\n🔤 I guess: {}",
            (letter.to_ascii_uppercase() as char)
                .to_string()
                .bright_yellow()
                .bold()
        );

        pattern = loop {
            let input = get_user_input("Positions (e.g. '2 5', empty if absent)")?;
            let positions = match parse_reply(&input, length) {
                Ok(Reply::Quit) => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(false);
                }
                Ok(Reply::Positions(positions)) => positions,
                Err(e) => {
                    println!("❌ {e}\n");
                    continue;
                }
            };

            if positions.is_empty() {
                misses += 1;
                break pattern.clone();
            }
            match apply_reply(&pattern, letter, &positions) {
                Ok(next) => break next,
                Err(e) => println!("❌ {e}\n"),
            }
        };
    }

    if pattern.is_complete() {
        println!(
            "\n{}",
            format!("🎉 Solved: {pattern} with {misses} wrong guesses!")
                .green()
                .bold()
        );
    } else {
        println!("\n{}", "💀 Out of lives, you win this one!".red().bold());
    }
    println!();

    Ok(true)
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
