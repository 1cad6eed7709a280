//! Command implementations

pub mod feed;
pub mod record;
pub mod solve;

pub use feed::build_feed;
pub use record::build_record;
pub use solve::{MIN_POSITIONAL_LETTERS, SolveConfig, SolveResult, load_dictionary, solve_puzzle};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write generated content to a file, or to stdout when no path is given
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}
