//! Benchmark command
//!
//! Measures solver performance over randomly drawn answers.

use crate::commands::solve::{SolveConfig, solve_answer};
use crate::core::{BitVec, space};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_answers: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub answers_per_second: f64,
}

/// Solve each answer in turn and aggregate the guess counts
#[must_use]
pub fn run_benchmark(answers: &[BitVec], show_progress: bool) -> BenchmarkResult {
    let bar = if show_progress {
        let bar = ProgressBar::new(answers.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Some(bar)
    } else {
        None
    };

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for answer in answers {
        let result = solve_answer(&SolveConfig::new(answer.clone()));
        let guesses = result.guesses.len();

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;

        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }

    let duration = start.elapsed();
    let total_answers = answers.len();

    BenchmarkResult {
        total_answers,
        total_guesses,
        average_guesses: total_guesses as f64 / total_answers as f64,
        min_guesses,
        max_guesses,
        distribution,
        duration,
        answers_per_second: total_answers as f64 / duration.as_secs_f64(),
    }
}

/// Draw `count` random answers of the given length (with replacement)
#[must_use]
pub fn random_answers(length: usize, count: usize) -> Vec<BitVec> {
    let mut rng = rand::rng();
    let size = space::size(length);

    (0..count)
        .map(|_| BitVec::from_index(rng.random_range(0..size), length))
        .collect()
}
