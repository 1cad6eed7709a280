//! Word list loading utilities
//!
//! Provides functions to load word lists from files or the embedded constant, keeping
//! only plain alphabetic tokens long enough to ever be an answer.

use crate::core::MIN_WORD_LENGTH;
use std::fs;
use std::io;
use std::path::Path;

/// Normalize a raw dictionary token
///
/// Trims whitespace and lowercases. Returns `None` for empty tokens and for tokens
/// containing anything other than ASCII letters (hyphens, apostrophes, digits, accents).
///
/// # Examples
/// ```
/// use hive_solver::wordlists::loader::normalize_token;
///
/// assert_eq!(normalize_token("  Brain\r"), Some("brain".to_string()));
/// assert_eq!(normalize_token("well-known"), None);
/// assert_eq!(normalize_token("Bob's"), None);
/// ```
#[must_use]
pub fn normalize_token(token: &str) -> Option<String> {
    let trimmed = token.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}

fn keep(token: &str) -> Option<String> {
    normalize_token(token).filter(|word| word.len() >= MIN_WORD_LENGTH)
}

/// Load words from a file
///
/// Returns normalized words in file order, skipping malformed and short entries.
/// Invalid UTF-8 is decoded lossily, so only the affected lines are dropped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hive_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(content.lines().filter_map(keep).collect())
}

/// Convert embedded string slice to normalized words
///
/// # Examples
/// ```
/// use hive_solver::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["Brain", "bee", "x-ray", "beans"]);
/// assert_eq!(words, vec!["brain", "beans"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| keep(s)).collect()
}
