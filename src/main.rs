//! Hangman Solver - CLI
//!
//! Letter-guessing strategies for Hangman with TUI and CLI modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{
        SolveConfig, compare_frequencies, pick_secrets, run_benchmark, run_simple, solve_word,
    },
    core::{DEFAULT_LIVES, Word},
    output::{print_benchmark_result, print_frequency_report, print_solve_result},
    solver::{Solver, SolverConfig, StrategyKind},
    wordlists::{
        WORDS,
        loader::{available_lengths, words_from_slice},
    },
};
use log::info;

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman solver comparing frequency and pattern-matching letter strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: all (default), probability-brute-force, brute-force,
    /// probability-pattern, pattern
    #[arg(short, long, global = true, default_value = "all")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a newline-separated file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Wrong guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_LIVES)]
    lives: usize,

    /// Seed for the random strategies and word picking
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default), then watch the strategies play
    Play {
        /// Only pick secret words of this length
        #[arg(short = 'n', long)]
        length: Option<usize>,
    },

    /// Simple CLI mode: think of a word and the solver guesses it
    Simple,

    /// Play every selected strategy against a specific word
    Solve {
        /// The secret word
        word: String,

        /// Show every guess with the pattern and candidate count
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compare static and pattern-filtered letter frequencies
    Compare {
        /// Revealed pattern, '_' for unknown slots (e.g. `_R__E`)
        pattern: String,

        /// Letters already guessed
        #[arg(short, long, default_value = "")]
        guessed: String,
    },

    /// Benchmark strategies on random secret words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Only pick secret words of this length
        #[arg(short = 'L', long)]
        length: Option<usize>,
    },
}

/// Load the word list selected by the -w flag
fn load_wordlist(wordlist: &str) -> Result<Vec<Word>> {
    use hangman_solver::wordlists::loader::load_from_file;

    let words = match wordlist {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path)
            .with_context(|| format!("Failed to load word list from '{path}'"))?,
    };
    info!("loaded {} words from {wordlist}", words.len());
    Ok(words)
}

/// Resolve the -s flag to one or more strategies
fn parse_strategies(name: &str) -> Result<Vec<StrategyKind>> {
    if name == "all" {
        return Ok(StrategyKind::ALL.to_vec());
    }
    let Some(kind) = StrategyKind::from_name(name) else {
        let known: Vec<&str> = StrategyKind::ALL.iter().map(|k| k.name()).collect();
        bail!(
            "Unknown strategy '{name}' (expected 'all' or one of: {})",
            known.join(", ")
        )
    };
    Ok(vec![kind])
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;
    let strategies = parse_strategies(&cli.strategy)?;
    let solver = Solver::new(
        &words,
        SolverConfig {
            lives: cli.lives,
            seed: cli.seed,
        },
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { length: None });

    match command {
        Commands::Play { length } => run_play_command(solver, strategies, length),
        Commands::Simple => {
            // One strategy drives the conversation; fall back to pattern matching
            let kind = if let [kind] = strategies.as_slice() {
                *kind
            } else {
                StrategyKind::PatternMatching
            };
            run_simple(&solver, kind)
        }
        Commands::Solve { word, verbose } => {
            let config = SolveConfig {
                target: word,
                strategies,
            };
            let result = solve_word(&config, &solver)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Compare { pattern, guessed } => {
            let report = compare_frequencies(&words, &pattern, &guessed)?;
            print_frequency_report(&report);
            Ok(())
        }
        Commands::Benchmark { count, length } => {
            run_benchmark_command(&solver, &strategies, count, length)
        }
    }
}

fn run_benchmark_command(
    solver: &Solver,
    strategies: &[StrategyKind],
    count: usize,
    length: Option<usize>,
) -> Result<()> {
    let secrets = pick_secrets(solver, count, length);
    if secrets.is_empty() {
        let lengths: Vec<String> = available_lengths(solver.words())
            .iter()
            .map(ToString::to_string)
            .collect();
        match length {
            Some(len) => bail!(
                "No words of length {len} in the word list (available: {})",
                lengths.join(", ")
            ),
            None => bail!("The word list is empty"),
        }
    }

    println!(
        "Running benchmark on {} random words with {} lives...",
        secrets.len(),
        solver.config().lives
    );
    let result = run_benchmark(solver, &secrets, strategies, true);
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(
    solver: Solver,
    strategies: Vec<StrategyKind>,
    length: Option<usize>,
) -> Result<()> {
    use hangman_solver::interactive::{App, run_tui};

    let app = App::new(solver, strategies, length)?;
    run_tui(app)
}
