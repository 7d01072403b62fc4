//! Core domain types for the binary code-breaker
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod bitvec;
pub mod space;

pub use bitvec::{BitVec, BitVecError};
