//! Bitbreaker
//!
//! A solver for the binary code-breaking puzzle: a hidden fixed-length bit
//! vector must be deduced purely from aggregate feedback — each guess reveals
//! only how many positions match the answer, never which ones.
//!
//! # Quick Start
//!
//! ```rust
//! use bitbreaker::core::BitVec;
//! use bitbreaker::solver::Engine;
//!
//! let answer: BitVec = "101".parse().unwrap();
//! let mut engine = Engine::new(3);
//!
//! // First guess of a session has no feedback to report.
//! let mut guess = engine.next_guess(None, 0);
//!
//! for turn in 1..8 {
//!     let matches = guess.match_count(&answer);
//!     if matches == 3 {
//!         break; // the caller, not the engine, detects the win
//!     }
//!     guess = engine.next_guess(Some((guess, matches)), turn);
//! }
//! ```

// Core domain types
pub mod core;

// Guessing strategy engine
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
