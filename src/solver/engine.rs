//! Session engine: the strategy's public surface
//!
//! One `Engine` owns one solving session. The caller loop is: take a guess
//! from [`Engine::next_guess`], observe the match count against the hidden
//! answer, and feed both back on the next call. The engine never decides
//! that the puzzle is solved — detecting `matches == length` and stopping
//! is the caller's job, and asking for more guesses after a full match is
//! allowed (the engine will keep producing vectors).

use super::constraints::ConstraintStore;
use super::entropy;
use crate::core::{BitVec, space};

/// Possible-set size at or below which the selector stops searching and
/// plays a still-possible answer directly
///
/// With this few candidates left, direct enumeration terminates at least
/// as fast as another information-gathering probe. Tunable; the value is
/// not load-bearing.
pub const DIRECT_GUESS_LIMIT: usize = 3;

/// Strategy engine for one solving session
///
/// Owns all session state exclusively; the only mutation paths are
/// [`Engine::reset`] and [`Engine::next_guess`]. `next_guess` takes
/// `&mut self`, so the single-caller contract is enforced by the borrow
/// checker rather than by locks.
#[derive(Debug, Clone)]
pub struct Engine {
    store: ConstraintStore,
}

impl Engine {
    /// Create an engine for vectors of the given length
    ///
    /// Lengths of zero are not meaningful and are the caller's
    /// responsibility to avoid.
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            store: ConstraintStore::new(length),
        }
    }

    /// Start a new session, discarding all constraints and history
    ///
    /// A reset engine is indistinguishable from a freshly constructed one.
    pub fn reset(&mut self, length: usize) {
        self.store.reset(length);
    }

    /// Produce the next guess
    ///
    /// `last` carries the previous guess and its observed match count; it
    /// is `None` only on the first call of a session. `guess_index` is an
    /// informational turn counter kept for interface compatibility; it has
    /// no effect on selection.
    ///
    /// The returned vector is never one the engine already emitted this
    /// session, unless every vector in the space has been.
    pub fn next_guess(&mut self, last: Option<(BitVec, usize)>, guess_index: usize) -> BitVec {
        let _ = guess_index;

        if let Some((guess, matches)) = last {
            self.store.add_constraint(guess, matches);
            self.store.recompute_possible();
        }

        self.select()
    }

    /// The configured vector length
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.store.length()
    }

    /// How many candidates are still possible
    #[inline]
    #[must_use]
    pub fn possible_count(&self) -> usize {
        self.store.possible().len()
    }

    /// The current possible-answers set, in enumeration order
    #[inline]
    #[must_use]
    pub fn possible(&self) -> &[BitVec] {
        self.store.possible()
    }

    /// Guesses emitted so far this session
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[BitVec] {
        self.store.history()
    }

    /// Pick the next guess from the current possible set
    ///
    /// Small possible set: play a still-possible answer directly, walking
    /// the fallback chain if history gets in the way. Larger set: entropy
    /// search across the whole space — the best probe need not itself be a
    /// possible answer.
    fn select(&self) -> BitVec {
        let length = self.store.length();
        let possible = self.store.possible();

        if possible.len() <= DIRECT_GUESS_LIMIT {
            if possible.is_empty() {
                // Degenerate terminal state; hand back something renderable.
                return BitVec::zeros(length);
            }

            if let Some(candidate) = possible.iter().find(|c| !self.store.was_guessed(c)) {
                return candidate.clone();
            }

            // Relaxation can reintroduce old guesses; fall through to the
            // first unplayed vector anywhere in the space.
            let all = space::enumerate(length);
            if let Some(candidate) = all.iter().find(|c| !self.store.was_guessed(c)) {
                return candidate.clone();
            }

            return possible[0].clone();
        }

        let all = space::enumerate(length);
        match entropy::select_best_guess(&all, self.store.guessed_indices(), possible) {
            Some((best, _)) => best.clone(),
            None => {
                // Every vector in the space was already played.
                if let Some(first) = possible.first() {
                    return first.clone();
                }
                all.into_iter()
                    .find(|c| !self.store.was_guessed(c))
                    .unwrap_or_else(|| BitVec::zeros(length))
            }
        }
    }
}
