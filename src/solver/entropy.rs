//! Shannon entropy scoring for candidate guesses
//!
//! A guess partitions the possible-answers set by the match count it would
//! produce against each possible answer. The entropy of that partition is
//! the expected information gain of playing the guess.

use crate::core::BitVec;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Histogram of match counts a guess induces over the candidates
///
/// Bucket `k` holds the number of candidates that would yield feedback `k`.
/// Match counts are dense in `0..=L`, so a plain indexed vector replaces
/// any keyed map.
#[must_use]
pub fn match_distribution(guess: &BitVec, candidates: &[BitVec]) -> Vec<usize> {
    let mut buckets = vec![0usize; guess.len() + 1];

    for candidate in candidates {
        buckets[guess.match_count(candidate)] += 1;
    }

    buckets
}

/// Shannon entropy of a match-count histogram
///
/// H = -Σ p * log₂(p) over non-empty buckets, with p = count / total.
///
/// # Properties
/// - 0.0 for an empty histogram or a single occupied bucket
/// - Maximized when the occupied buckets are equal
/// - Always in `[0, log₂(k)]` for k occupied buckets
///
/// # Examples
/// ```
/// use bitbreaker::solver::entropy::shannon_entropy;
///
/// let even_split = [2, 0, 2];
/// let entropy = shannon_entropy(&even_split);
/// assert!((entropy - 1.0).abs() < 1e-9); // two equal buckets = 1 bit
/// ```
#[must_use]
pub fn shannon_entropy(buckets: &[usize]) -> f64 {
    let total = buckets.iter().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    buckets
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Expected information gain of playing `guess` against `candidates`
#[must_use]
pub fn guess_entropy(guess: &BitVec, candidates: &[BitVec]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&match_distribution(guess, candidates))
}

/// Select the highest-entropy guess from the pool
///
/// Skips every pool element whose candidate-space index appears in `skip`
/// (the already-guessed set). Ties break toward the earliest pool position,
/// so the result is deterministic regardless of the parallel schedule.
///
/// Returns `None` when every pool element is skipped.
#[must_use]
pub fn select_best_guess<'a>(
    pool: &'a [BitVec],
    skip: &FxHashSet<usize>,
    candidates: &[BitVec],
) -> Option<(&'a BitVec, f64)> {
    pool.par_iter()
        .enumerate()
        .filter(|(_, guess)| !skip.contains(&guess.index()))
        .map(|(position, guess)| (position, guess, guess_entropy(guess, candidates)))
        .max_by(|(p1, _, e1), (p2, _, e2)| e1.total_cmp(e2).then_with(|| p2.cmp(p1)))
        .map(|(_, guess, entropy)| (guess, entropy))
}
