//! Answer solving command
//!
//! Simulates a full session against a known answer and records the
//! solution path turn by turn.

use crate::core::{BitVec, space};
use crate::solver::Engine;
use crate::solver::entropy::guess_entropy;

/// Configuration for solving a known answer
pub struct SolveConfig {
    pub answer: BitVec,
    pub max_guesses: usize,
}

impl SolveConfig {
    /// Cap the session at the candidate-space size: a correct engine never
    /// needs more guesses than there are vectors.
    #[must_use]
    pub fn new(answer: BitVec) -> Self {
        let max_guesses = space::size(answer.len());
        Self {
            answer,
            max_guesses,
        }
    }
}

/// Result of solving an answer
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub answer: BitVec,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: BitVec,
    pub matches: usize,
    pub possible_before: usize,
    pub possible_after: usize,
    pub entropy: Option<f64>,
}

/// Simulate solving the configured answer
///
/// Plays the caller's side of the loop: takes each guess from the engine,
/// computes the match count against the known answer, feeds it back, and
/// stops on a full match (the win condition lives here, not in the engine).
#[must_use]
pub fn solve_answer(config: &SolveConfig) -> SolveResult {
    let length = config.answer.len();
    let mut engine = Engine::new(length);
    let mut guesses: Vec<GuessStep> = Vec::new();
    let mut last: Option<(BitVec, usize)> = None;

    for turn in 0..config.max_guesses {
        let guess = engine.next_guess(last.take(), turn);
        let possible_before = engine.possible_count();

        // Entropy of the played guess against the set it was chosen from
        let entropy = if possible_before > 1 {
            Some(guess_entropy(&guess, engine.possible()))
        } else {
            None
        };

        let matches = guess.match_count(&config.answer);
        let solved = matches == length;

        // Peek at the post-feedback possible count without advancing the
        // real session: the step report wants both sides of the filter.
        let possible_after = if solved {
            1
        } else {
            let mut preview = engine.clone();
            preview.next_guess(Some((guess.clone(), matches)), turn + 1);
            preview.possible_count()
        };

        guesses.push(GuessStep {
            guess: guess.clone(),
            matches,
            possible_before,
            possible_after,
            entropy,
        });

        if solved {
            return SolveResult {
                success: true,
                guesses,
                answer: config.answer.clone(),
            };
        }

        last = Some((guess, matches));
    }

    SolveResult {
        success: false,
        guesses,
        answer: config.answer.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bv(s: &str) -> BitVec {
        s.parse().unwrap()
    }

    #[test]
    fn solves_known_answer() {
        let result = solve_answer(&SolveConfig::new(bv("101")));

        assert!(result.success);
        assert_eq!(result.guesses.last().unwrap().guess, bv("101"));
        assert_eq!(result.guesses.last().unwrap().matches, 3);
        assert!(result.guesses.len() <= 8);
    }

    #[test]
    fn solves_every_l3_answer() {
        for i in 0..8 {
            let answer = BitVec::from_index(i, 3);
            let result = solve_answer(&SolveConfig::new(answer.clone()));
            assert!(result.success, "failed on answer {answer}");
        }
    }

    #[test]
    fn steps_shrink_possible_set() {
        let result = solve_answer(&SolveConfig::new(bv("110100")));

        assert!(result.success);
        for step in &result.guesses {
            assert!(step.possible_after <= step.possible_before);
            assert!(step.possible_after >= 1);
        }
    }

    #[test]
    fn default_guess_cap_is_space_size() {
        let config = SolveConfig::new(bv("1010"));
        assert_eq!(config.max_guesses, 16);
    }
}
