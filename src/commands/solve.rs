//! Puzzle solving command
//!
//! Validates the puzzle, loads the dictionary and classifies its words.

use crate::core::{MIN_WORD_LENGTH, Puzzle};
use crate::output::{report_loaded, spinner};
use crate::solver::{Solution, solve};
use crate::wordlists::{Dictionary, DictionaryError, WordSource};
use anyhow::{Context, Result};

/// Fewest positional letters that describe a puzzle: the center plus one more
pub const MIN_POSITIONAL_LETTERS: usize = 2;

/// Configuration for solving a puzzle
pub struct SolveConfig {
    /// Center letter followed by the other allowed letters
    pub letters: Vec<String>,
    pub min_length: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(letters: Vec<String>) -> Self {
        Self {
            letters,
            min_length: MIN_WORD_LENGTH,
        }
    }

    /// Build a configuration from positional command-line letters
    ///
    /// Returns `None` when fewer than [`MIN_POSITIONAL_LETTERS`] are given; the CLI
    /// answers that with usage text instead of an error.
    #[must_use]
    pub fn from_positionals(letters: Vec<String>) -> Option<Self> {
        (letters.len() >= MIN_POSITIONAL_LETTERS).then(|| Self::new(letters))
    }

    /// Override the minimum word length
    #[must_use]
    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Build the puzzle described by this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the letters do not form a valid puzzle.
    pub fn puzzle(&self) -> Result<Puzzle> {
        let puzzle = Puzzle::from_args(&self.letters).context("Invalid puzzle definition")?;
        Ok(puzzle.with_min_length(self.min_length))
    }
}

/// Result of solving a puzzle
#[derive(Debug)]
pub struct SolveResult {
    pub puzzle: Puzzle,
    pub solution: Solution,
    pub dictionary_origin: String,
}

/// Load a dictionary with a spinner and a confirmation on stderr
///
/// # Errors
///
/// Returns `DictionaryError` if the source cannot produce a word list.
pub fn load_dictionary(source: &dyn WordSource) -> Result<Dictionary, DictionaryError> {
    let pb = spinner("Loading dictionary...");
    let loaded = source.load();
    pb.finish_and_clear();

    let dictionary = loaded?;
    report_loaded(&dictionary);
    Ok(dictionary)
}

/// Solve the configured puzzle against words from `source`
///
/// The puzzle is validated before any dictionary I/O happens.
///
/// # Errors
///
/// Returns an error if:
/// - The letters do not form a valid puzzle
/// - No dictionary can be loaded from `source`
pub fn solve_puzzle(config: &SolveConfig, source: &dyn WordSource) -> Result<SolveResult> {
    let puzzle = config.puzzle()?;
    let dictionary = load_dictionary(source).context("Failed to load dictionary")?;
    let solution = solve(&puzzle, &dictionary.words);

    Ok(SolveResult {
        puzzle,
        solution,
        dictionary_origin: dictionary.origin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PuzzleError;
    use crate::wordlists::{Bundled, SearchPath, WordFile};
    use std::path::PathBuf;

    fn letters(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn solve_with_bundled_words() {
        let config = SolveConfig::new(letters(&["B", "R", "A", "I", "N", "E", "S"]));
        let result = solve_puzzle(&config, &Bundled).unwrap();

        assert_eq!(result.puzzle.center(), 'B');
        assert!(result.solution.other().iter().any(|w| w == "BRAIN"));
        assert!(result.solution.other().iter().any(|w| w == "BEANS"));
        assert!(!result.solution.other().iter().any(|w| w == "BANTER"));
        assert_eq!(result.dictionary_origin, "bundled word list");
    }

    #[test]
    fn positionals_need_center_and_one_more() {
        assert!(SolveConfig::from_positionals(Vec::new()).is_none());
        assert!(SolveConfig::from_positionals(letters(&["B"])).is_none());

        let config = SolveConfig::from_positionals(letters(&["B", "R"])).unwrap();
        assert_eq!(config.letters, letters(&["B", "R"]));
        assert_eq!(config.min_length, MIN_WORD_LENGTH);
    }

    #[test]
    fn solve_respects_min_length() {
        let config = SolveConfig::new(letters(&["B", "R", "A", "I", "N", "E", "S"]))
            .with_min_length(6);
        let result = solve_puzzle(&config, &Bundled).unwrap();

        assert!(result.solution.all_words().all(|w| w.len() >= 6));
        assert!(result.solution.other().iter().any(|w| w == "RABBIS"));
    }

    #[test]
    fn invalid_puzzle_is_rejected() {
        let config = SolveConfig::new(letters(&["B", "1"]));
        let err = solve_puzzle(&config, &Bundled).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PuzzleError>(),
            Some(PuzzleError::NotALetter(_))
        ));
    }

    #[test]
    fn invalid_puzzle_checked_before_loading() {
        let config = SolveConfig::new(letters(&["B", "RA"]));
        let source = WordFile(PathBuf::from("/nonexistent/hive_solver/words.txt"));
        let err = solve_puzzle(&config, &source).unwrap_err();

        assert!(err.downcast_ref::<PuzzleError>().is_some());
    }

    #[test]
    fn missing_dictionary_is_reported() {
        let config = SolveConfig::new(letters(&["B", "R", "A"]));
        let source = SearchPath(vec![PathBuf::from("/nonexistent/hive_solver/words.txt")]);
        let err = solve_puzzle(&config, &source).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<DictionaryError>(),
            Some(DictionaryError::NotFound { .. })
        ));
    }
}
