//! Hive puzzle solving
//!
//! The solver is a pure function over a puzzle and a word list; hints are derived
//! from its output.

mod engine;
pub mod hints;

pub use engine::{Solution, solve};
pub use hints::{HINT_WORD_LIMIT, Hints};
