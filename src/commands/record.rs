//! Answer record command
//!
//! Solves a puzzle and packages the result as a publishable record.

use super::solve::{SolveConfig, solve_puzzle};
use crate::site::{AnswerRecord, PuzzleDate};
use crate::wordlists::WordSource;
use anyhow::Result;
use log::info;

/// Solve the configured puzzle and build the record for `date`
///
/// # Errors
///
/// Returns an error if the puzzle is invalid or no dictionary can be loaded.
pub fn build_record(
    config: &SolveConfig,
    date: PuzzleDate,
    source: &dyn WordSource,
) -> Result<AnswerRecord> {
    let result = solve_puzzle(config, source)?;
    let record = AnswerRecord::from_solution(date, &result.puzzle, &result.solution);

    info!(
        "Built record {} with {} pangrams from {}",
        record.slug(),
        record.pangrams.len(),
        result.dictionary_origin
    );
    Ok(record)
}
