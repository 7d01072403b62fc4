//! Exhaustive benchmark command
//!
//! Solves every answer in the candidate space and reports the guess-count
//! distribution, so a strategy change can be judged against the whole game
//! rather than a sample.

use crate::commands::benchmark::{BenchmarkResult, run_benchmark};
use crate::core::space;

/// Statistics from an exhaustive run
pub struct TestAllStatistics {
    pub length: usize,
    pub result: BenchmarkResult,
}

/// Solve all 2^L answers for the given length
#[must_use]
pub fn run_test_all(length: usize, show_progress: bool) -> TestAllStatistics {
    let answers = space::enumerate(length);
    let result = run_benchmark(&answers, show_progress);

    TestAllStatistics { length, result }
}
