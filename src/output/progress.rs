//! Diagnostic output on stderr
//!
//! Progress and confirmation messages stay off stdout so solver output can be piped.

use super::formatters::count_label;
use crate::wordlists::Dictionary;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Start a spinner on stderr
///
/// The spinner is hidden automatically when stderr is not a terminal.
#[must_use]
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Confirm which dictionary was loaded
pub fn report_loaded(dictionary: &Dictionary) {
    eprintln!(
        "{} Loaded {} from {}",
        "✓".green(),
        count_label(dictionary.words.len(), "word"),
        dictionary.origin
    );
}
