//! Constraint accumulation and possible-answer filtering
//!
//! The store owns the append-only list of observed (guess, match-count)
//! pairs, the history of emitted guesses, and the derived possible-answers
//! set. The possible set is recomputed from scratch after every new
//! constraint rather than maintained incrementally; for the space sizes
//! this puzzle deals in, a full pass is cheaper than it is clever.

use crate::core::{BitVec, space};
use rustc_hash::FxHashSet;

/// A recorded observation: comparing `guess` against the hidden answer
/// matched exactly `matches` positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub guess: BitVec,
    pub matches: usize,
}

/// Owns one session's constraints, guess history, and possible-answers set
///
/// Constraints are append-only for the lifetime of a session; the only way
/// to discard them is [`ConstraintStore::reset`].
#[derive(Debug, Clone)]
pub struct ConstraintStore {
    length: usize,
    constraints: Vec<Constraint>,
    history: Vec<BitVec>,
    guessed: FxHashSet<usize>,
    possible: Vec<BitVec>,
}

impl ConstraintStore {
    /// Create a fresh store with the full candidate space possible
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            length,
            constraints: Vec::new(),
            history: Vec::new(),
            guessed: FxHashSet::default(),
            possible: space::enumerate(length),
        }
    }

    /// Reinitialize for a new session of the given length
    ///
    /// Equivalent to replacing the store with `ConstraintStore::new(length)`.
    pub fn reset(&mut self, length: usize) {
        self.length = length;
        self.constraints.clear();
        self.history.clear();
        self.guessed.clear();
        self.possible = space::enumerate(length);
    }

    /// Record an observed (guess, match-count) pair
    ///
    /// Appends to both the constraint list and the guess history, keeping
    /// them in lockstep. The match count is not range-checked here: a value
    /// outside `0..=length` simply produces an unsatisfiable constraint,
    /// which the relaxation pass in [`ConstraintStore::recompute_possible`]
    /// absorbs.
    pub fn add_constraint(&mut self, guess: BitVec, matches: usize) {
        self.guessed.insert(guess.index());
        self.history.push(guess.clone());
        self.constraints.push(Constraint { guess, matches });
    }

    /// Re-derive the possible-answers set from the full candidate space
    ///
    /// Strict pass first: keep every candidate that reproduces the recorded
    /// match count for all constraints. If that leaves nothing — the
    /// constraints are mutually inconsistent, which can happen once an
    /// earlier relaxation guessed wrong — fall back to the relaxation
    /// policy: score each candidate by how many constraints it satisfies
    /// exactly, and keep everything within one point of the best score.
    /// The one-point band keeps a slightly wider pool than best-only
    /// filtering, so the search cannot lock onto a single wrong state.
    pub fn recompute_possible(&mut self) {
        let all = space::enumerate(self.length);

        let strict: Vec<BitVec> = all
            .iter()
            .filter(|candidate| self.satisfies_all(candidate))
            .cloned()
            .collect();

        if !strict.is_empty() {
            self.possible = strict;
            return;
        }

        // Scores sit in a plain vector aligned with enumeration order; no
        // vector-keyed map needed.
        let scores: Vec<usize> = all
            .iter()
            .map(|candidate| self.consistency_score(candidate))
            .collect();

        let best = scores.iter().copied().max().unwrap_or(0);
        let floor = best.saturating_sub(1);

        let relaxed: Vec<BitVec> = all
            .iter()
            .zip(&scores)
            .filter(|&(_, &score)| score >= floor)
            .map(|(candidate, _)| candidate.clone())
            .collect();

        // Unreachable once any constraint exists, but the guard keeps the
        // operation total.
        self.possible = if relaxed.is_empty() { all } else { relaxed };
    }

    /// True if the candidate reproduces the match count of every constraint
    fn satisfies_all(&self, candidate: &BitVec) -> bool {
        self.constraints
            .iter()
            .all(|c| c.guess.match_count(candidate) == c.matches)
    }

    /// Number of constraints the candidate satisfies exactly
    fn consistency_score(&self, candidate: &BitVec) -> usize {
        self.constraints
            .iter()
            .filter(|c| c.guess.match_count(candidate) == c.matches)
            .count()
    }

    /// The current possible-answers set, in enumeration order
    #[inline]
    #[must_use]
    pub fn possible(&self) -> &[BitVec] {
        &self.possible
    }

    /// All constraints recorded so far, oldest first
    #[inline]
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// All guesses emitted so far, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[BitVec] {
        &self.history
    }

    /// Whether this exact vector has already been guessed this session
    #[inline]
    #[must_use]
    pub fn was_guessed(&self, guess: &BitVec) -> bool {
        self.guessed.contains(&guess.index())
    }

    /// Candidate-space indices of every guess emitted so far
    #[inline]
    #[must_use]
    pub fn guessed_indices(&self) -> &FxHashSet<usize> {
        &self.guessed
    }

    /// The configured vector length for this session
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bv(s: &str) -> BitVec {
        s.parse().unwrap()
    }

    #[test]
    fn fresh_store_has_full_space_possible() {
        let store = ConstraintStore::new(4);
        assert_eq!(store.possible().len(), 16);
        assert!(store.constraints().is_empty());
        assert!(store.history().is_empty());
    }

    #[test]
    fn strict_filter_keeps_only_consistent_candidates() {
        let mut store = ConstraintStore::new(4);
        let answer = bv("1010");

        let guess = bv("1100");
        store.add_constraint(guess.clone(), guess.match_count(&answer));
        store.recompute_possible();

        assert!(!store.possible().is_empty());
        for candidate in store.possible() {
            assert_eq!(guess.match_count(candidate), guess.match_count(&answer));
        }
        // The true answer always survives consistent feedback
        assert!(store.possible().contains(&answer));
    }

    #[test]
    fn strict_filter_is_conjunctive_over_history() {
        let mut store = ConstraintStore::new(5);
        let answer = bv("10110");

        for guess_str in ["00000", "11111", "10101"] {
            let guess = bv(guess_str);
            store.add_constraint(guess.clone(), guess.match_count(&answer));
            store.recompute_possible();
        }

        for candidate in store.possible() {
            for constraint in store.constraints() {
                assert_eq!(
                    constraint.guess.match_count(candidate),
                    constraint.matches
                );
            }
        }
        assert!(store.possible().contains(&answer));
    }

    #[test]
    fn full_match_pins_single_candidate() {
        let mut store = ConstraintStore::new(3);
        store.add_constraint(bv("101"), 3);
        store.recompute_possible();

        assert_eq!(store.possible(), &[bv("101")]);
    }

    #[test]
    fn relaxation_fires_on_contradictory_constraints() {
        let mut store = ConstraintStore::new(2);
        // The same guess cannot match both everywhere and nowhere.
        store.add_constraint(bv("00"), 2);
        store.add_constraint(bv("00"), 0);
        store.recompute_possible();

        assert!(!store.possible().is_empty());

        // Every survivor scores within one of the best score.
        let best = space::enumerate(2)
            .iter()
            .map(|c| store.consistency_score(c))
            .max()
            .unwrap();
        for candidate in store.possible() {
            assert!(store.consistency_score(candidate) >= best - 1);
        }
    }

    #[test]
    fn relaxation_band_is_one_point_wide() {
        let mut store = ConstraintStore::new(3);
        // 111 satisfies the first two constraints (score 2); 010, 100 and
        // 000 satisfy exactly one each; nothing satisfies all three.
        store.add_constraint(bv("111"), 3);
        store.add_constraint(bv("110"), 2);
        store.add_constraint(bv("111"), 0);
        store.recompute_possible();

        assert!(!store.possible().is_empty());
        let best = space::enumerate(3)
            .iter()
            .map(|c| store.consistency_score(c))
            .max()
            .unwrap();
        assert!(best >= 1);
        for candidate in store.possible() {
            assert!(store.consistency_score(candidate) >= best - 1);
        }
        // Band is inclusive: at least the best-scoring candidate survives,
        // and so does anything exactly one point behind it.
        let one_behind = space::enumerate(3)
            .into_iter()
            .filter(|c| store.consistency_score(c) + 1 == best)
            .collect::<Vec<_>>();
        for candidate in &one_behind {
            assert!(store.possible().contains(candidate));
        }
    }

    #[test]
    fn out_of_range_feedback_absorbed_by_relaxation() {
        let mut store = ConstraintStore::new(3);
        // 99 matches is impossible for length 3; the strict set empties and
        // relaxation must still hand back something.
        store.add_constraint(bv("101"), 99);
        store.recompute_possible();

        assert!(!store.possible().is_empty());
    }

    #[test]
    fn history_tracks_guesses_in_lockstep() {
        let mut store = ConstraintStore::new(3);
        store.add_constraint(bv("101"), 1);
        store.add_constraint(bv("010"), 2);

        assert_eq!(store.history(), &[bv("101"), bv("010")]);
        assert_eq!(store.constraints().len(), 2);
        assert!(store.was_guessed(&bv("101")));
        assert!(store.was_guessed(&bv("010")));
        assert!(!store.was_guessed(&bv("111")));
    }

    #[test]
    fn reset_clears_all_session_state() {
        let mut store = ConstraintStore::new(3);
        store.add_constraint(bv("101"), 1);
        store.recompute_possible();
        assert!(store.possible().len() < 8);

        store.reset(3);
        assert_eq!(store.possible().len(), 8);
        assert!(store.constraints().is_empty());
        assert!(store.history().is_empty());
        assert!(!store.was_guessed(&bv("101")));
    }

    #[test]
    fn reset_can_change_length() {
        let mut store = ConstraintStore::new(3);
        store.reset(5);
        assert_eq!(store.length(), 5);
        assert_eq!(store.possible().len(), 32);
    }
}
