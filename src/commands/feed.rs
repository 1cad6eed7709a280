//! Feed generation command
//!
//! Reads a directory of answer records and renders the RSS feed.

use crate::site::{FeedChannel, load_records, render_feed};
use anyhow::{Context, Result};
use log::info;
use std::path::Path;

/// Render the feed for every record in `dir`
///
/// # Errors
///
/// Returns an error if the directory cannot be read or any record is malformed.
pub fn build_feed(dir: &Path, channel: &FeedChannel) -> Result<String> {
    let records = load_records(dir)
        .with_context(|| format!("Failed to load answer records from {}", dir.display()))?;

    info!("Rendering feed with {} records", records.len());
    Ok(render_feed(channel, &records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Puzzle;
    use crate::site::AnswerRecord;
    use crate::solver::solve;
    use std::fs;

    #[test]
    fn feed_from_record_directory() {
        let dir = std::env::temp_dir().join(format!("hive_solver_feed_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let puzzle = Puzzle::new('B', "BRAINES".chars()).unwrap();
        let solution = solve(&puzzle, ["braines", "brain"]);
        for date in ["2026-01-17", "2026-01-18"] {
            let record = AnswerRecord::from_solution(date.parse().unwrap(), &puzzle, &solution);
            fs::write(dir.join(format!("{date}.json")), record.to_json().unwrap()).unwrap();
        }

        let rss = build_feed(&dir, &FeedChannel::default()).unwrap();
        fs::remove_dir_all(&dir).ok();

        assert_eq!(rss.matches("<item>").count(), 2);
        assert!(rss.find("2026-01-18").unwrap() < rss.find("2026-01-17").unwrap());
    }

    #[test]
    fn feed_missing_directory_errors() {
        let result = build_feed(Path::new("/nonexistent/hive_solver/answers"), &FeedChannel::default());
        assert!(result.is_err());
    }
}
