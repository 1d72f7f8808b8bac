//! Command implementations

pub mod benchmark;
pub mod compare;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, pick_secrets, run_benchmark};
pub use compare::{FrequencyReport, compare_frequencies};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_word};
