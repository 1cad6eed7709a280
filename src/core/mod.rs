//! Core domain types for hive puzzles
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and perform no I/O.

mod letters;
mod puzzle;

pub use letters::LetterSet;
pub use puzzle::{MIN_WORD_LENGTH, Puzzle, PuzzleError};
