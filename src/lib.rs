//! Hive Puzzle Solver
//!
//! Finds every valid word for a hive puzzle: words of at least four letters built only
//! from the allowed letters and containing the center letter. Pangrams, which use
//! every allowed letter, are reported separately.
//!
//! # Quick Start
//!
//! ```rust
//! use hive_solver::core::Puzzle;
//! use hive_solver::solver::solve;
//!
//! let puzzle = Puzzle::new('B', "BRAINES".chars()).unwrap();
//! let solution = solve(&puzzle, ["rain", "train", "brain", "beans", "banter"]);
//!
//! assert!(solution.pangrams().is_empty());
//! assert_eq!(solution.other(), ["BEANS", "BRAIN"]);
//! ```

// Core domain types
pub mod core;

// Solving algorithm
pub mod solver;

// Word lists
pub mod wordlists;

// Published answer records and feed
pub mod site;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
