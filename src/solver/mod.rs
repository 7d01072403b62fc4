//! Guessing strategy engine
//!
//! Accumulates (guess, match-count) constraints, derives the set of still
//! possible answers, and selects the next guess by maximizing expected
//! information gain.

mod constraints;
mod engine;
pub mod entropy;

pub use constraints::{Constraint, ConstraintStore};
pub use engine::{DIRECT_GUESS_LIMIT, Engine};
