//! Guess analysis command
//!
//! Reports the information-theoretic quality of a single guess against the
//! full candidate space.

use crate::core::{BitVec, space};
use crate::solver::entropy::{match_distribution, shannon_entropy};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: BitVec,
    /// Expected information gain in bits
    pub entropy: f64,
    /// Expected possible-set size after playing the guess
    pub expected_remaining: f64,
    /// Worst-case possible-set size (largest feedback bucket)
    pub max_partition: usize,
    /// Candidates per feedback value, bucket k = feedback k
    pub distribution: Vec<usize>,
}

/// Analyze a guess against the full candidate space of its length
#[must_use]
pub fn analyze_guess(guess: &BitVec) -> AnalysisResult {
    let all = space::enumerate(guess.len());
    let distribution = match_distribution(guess, &all);
    let entropy = shannon_entropy(&distribution);

    let total = all.len() as f64;
    let expected_remaining = distribution
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            p * count as f64
        })
        .sum();
    let max_partition = distribution.iter().copied().max().unwrap_or(0);

    AnalysisResult {
        guess: guess.clone(),
        entropy,
        expected_remaining,
        max_partition,
        distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bv(s: &str) -> BitVec {
        s.parse().unwrap()
    }

    #[test]
    fn analysis_distribution_is_binomial() {
        // Every guess partitions the full space binomially by match count.
        let result = analyze_guess(&bv("1010"));

        assert_eq!(result.distribution, vec![1, 4, 6, 4, 1]);
        assert_eq!(result.max_partition, 6);
    }

    #[test]
    fn analysis_entropy_uniform_across_guesses() {
        // The space is symmetric: all guesses of one length score alike.
        let a = analyze_guess(&bv("000000"));
        let b = analyze_guess(&bv("101101"));
        assert!((a.entropy - b.entropy).abs() < 1e-9);
        assert!(a.entropy > 0.0);
    }

    #[test]
    fn expected_remaining_bounded_by_space() {
        let result = analyze_guess(&bv("110"));
        assert!(result.expected_remaining > 0.0);
        assert!(result.expected_remaining <= 8.0);
    }
}
