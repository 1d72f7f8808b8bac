//! Display functions for command results

use super::formatters::{create_progress_bar, outcome_label, strategy_traits};
use crate::commands::{BenchmarkResult, FrequencyReport, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({} candidate words)",
        result.target.to_uppercase().bright_yellow().bold(),
        result.corpus_size
    );
    println!("{}", "─".repeat(60).cyan());

    for record in &result.records {
        println!(
            "\n{} ({})  {}",
            record.strategy.title().bright_cyan().bold(),
            strategy_traits(record.strategy).dimmed(),
            outcome_label(record.outcome)
        );
        println!(
            "  Guesses: {} ({} wrong of {} lives)",
            record.letters(),
            record.misses,
            record.lives
        );

        if verbose {
            for (i, step) in record.steps.iter().enumerate() {
                println!(
                    "  {:>2}. {}  {} ({:?}, {} candidates)",
                    i + 1,
                    step.pattern,
                    (step.letter.to_ascii_uppercase() as char)
                        .to_string()
                        .bright_white(),
                    step.outcome,
                    step.candidates
                );
            }
        }
    }
    println!();
}

/// Print static and pattern-filtered letter rankings side by side
pub fn print_frequency_report(report: &FrequencyReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LETTER FREQUENCIES:".bright_cyan().bold(),
        report.pattern.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📚 {} words of length {}, {} match the pattern",
        report.corpus_size,
        report.word_length,
        report.matching.len()
    );
    if !report.matching.is_empty() && report.matching.len() <= 10 {
        println!("   {}", report.matching.join(", ").to_uppercase());
    }

    let max = report
        .static_ranking
        .first()
        .map_or(1, |&(_, count)| count.max(1));
    println!(
        "\n   {:<28} {}",
        "Static (brute force)".bold(),
        "Pattern matching".bold()
    );
    let rows = report.static_ranking.len().max(report.pattern_ranking.len());
    for i in 0..rows {
        let left = report
            .static_ranking
            .get(i)
            .map_or_else(String::new, |&(letter, count)| {
                format!(
                    "{} {} {count:4}",
                    (letter.to_ascii_uppercase() as char),
                    create_progress_bar(count as f64, max as f64, 15)
                )
            });
        let right = report
            .pattern_ranking
            .get(i)
            .map_or_else(String::new, |&(letter, count)| {
                let mark = if report.guessed.contains(&letter) {
                    " (guessed)"
                } else {
                    ""
                };
                format!("{} {count:4}{mark}", letter.to_ascii_uppercase() as char)
            });
        println!("   {left:<28} {right}");
    }

    let next = |ranking: &[(u8, usize)]| {
        report
            .next_letter(ranking)
            .map_or_else(|| "none".to_string(), |c| (c.to_ascii_uppercase() as char).to_string())
    };
    println!(
        "\n🔤 Next letter: brute force {}, pattern matching {}",
        next(&report.static_ranking).bright_yellow(),
        next(&report.pattern_ranking).bright_green()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Lives per game:   {}", result.lives);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    for &kind in &result.strategies {
        let Some(stats) = result.scoreboard.get(kind) else {
            continue;
        };

        println!("\n🎯 {}", kind.title().bright_cyan().bold());
        let rate = stats.success_rate() * 100.0;
        let rate_str = format!("{rate:5.1}%");
        let colored_rate = if rate >= 75.0 {
            rate_str.bright_green().bold()
        } else if rate >= 40.0 {
            rate_str.yellow()
        } else {
            rate_str.red()
        };
        println!(
            "   Success rate:     {} {colored_rate} ({} won, {} lost)",
            create_progress_bar(rate, 100.0, 20).green(),
            stats.wins,
            stats.losses
        );
        println!("   Average misses:   {:.2}", stats.average_misses());
        if stats.exhausted > 0 {
            println!(
                "   Ran out of words: {}",
                stats.exhausted.to_string().red()
            );
        }

        if stats.wins > 0 {
            println!("   Misses in won games:");
            for misses in 0..result.lives {
                if let Some(&count) = stats.miss_distribution.get(&misses) {
                    let pct = count as f64 / stats.wins as f64 * 100.0;
                    let bar_width = (pct / 2.5) as usize;
                    let bar = format!(
                        "{}{}",
                        "█".repeat(bar_width).green(),
                        "░"
                            .repeat(40_usize.saturating_sub(bar_width))
                            .bright_black()
                    );
                    println!("   {misses:2}: {bar} {count:4} ({pct:5.1}%)");
                }
            }
        }
    }
    println!();
}
