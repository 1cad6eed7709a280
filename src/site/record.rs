//! Published answer records
//!
//! One JSON record per daily puzzle, holding everything the site and the feed render.

use super::PuzzleDate;
use crate::core::Puzzle;
use crate::solver::{Hints, Solution};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Optional hint block of a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordHints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_words: Option<Vec<String>>,
}

impl From<Hints> for RecordHints {
    fn from(hints: Hints) -> Self {
        Self {
            letter: hints.letter.map(String::from),
            starting_words: (!hints.starting_words.is_empty()).then_some(hints.starting_words),
        }
    }
}

/// A published puzzle answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub title: String,
    pub date: PuzzleDate,
    pub center_letter: String,
    pub surrounding_letters: Vec<String>,
    pub pangrams: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hints: Option<RecordHints>,
}

/// Error type for reading or validating records
#[derive(Debug)]
pub enum RecordError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    Invalid(String),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "Failed to read {}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "Malformed record {}: {source}", path.display())
            }
            Self::Invalid(reason) => write!(f, "Invalid record: {reason}"),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

fn is_single_letter(s: &str) -> bool {
    s.len() == 1 && s.bytes().all(|b| b.is_ascii_alphabetic())
}

impl AnswerRecord {
    /// Build the record for a solved puzzle
    #[must_use]
    pub fn from_solution(date: PuzzleDate, puzzle: &Puzzle, solution: &Solution) -> Self {
        let hints = Hints::from_solution(solution);

        Self {
            title: format!("Spelling Bee Answer - {}", date.format_long()),
            date,
            center_letter: puzzle.center().to_string(),
            surrounding_letters: puzzle
                .surrounding()
                .into_iter()
                .map(String::from)
                .collect(),
            pangrams: solution.pangrams().to_vec(),
            hints: (!hints.is_empty()).then(|| hints.into()),
        }
    }

    /// URL path segment for this record
    #[must_use]
    pub fn slug(&self) -> String {
        self.date.to_string()
    }

    /// Check the letter fields
    ///
    /// # Errors
    /// Returns `RecordError::Invalid` if the center is not one letter, or a surrounding
    /// entry is not one letter or repeats the center.
    pub fn validate(&self) -> Result<(), RecordError> {
        if !is_single_letter(&self.center_letter) {
            return Err(RecordError::Invalid(format!(
                "center letter must be a single letter, got '{}'",
                self.center_letter
            )));
        }

        for letter in &self.surrounding_letters {
            if !is_single_letter(letter) {
                return Err(RecordError::Invalid(format!(
                    "surrounding letter must be a single letter, got '{letter}'"
                )));
            }
            if letter.eq_ignore_ascii_case(&self.center_letter) {
                return Err(RecordError::Invalid(format!(
                    "surrounding letters repeat the center letter '{letter}'"
                )));
            }
        }

        Ok(())
    }

    /// Serialize as pretty-printed JSON
    ///
    /// # Errors
    /// Returns a `serde_json` error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Read and validate one record file
    ///
    /// # Errors
    /// Returns `RecordError` if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self, RecordError> {
        let content = fs::read_to_string(path).map_err(|source| RecordError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let record: Self = serde_json::from_str(&content).map_err(|source| RecordError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        record
            .validate()
            .map_err(|e| RecordError::Invalid(format!("{}: {e}", path.display())))?;
        Ok(record)
    }
}

/// Load every `*.json` record in a directory
///
/// Files are read in path order; other files are ignored.
///
/// # Errors
/// Returns `RecordError` if the directory cannot be listed or any record is bad.
pub fn load_records<P: AsRef<Path>>(dir: P) -> Result<Vec<AnswerRecord>, RecordError> {
    let dir = dir.as_ref();
    let io_error = |source| RecordError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    debug!("Found {} answer records in {}", paths.len(), dir.display());
    paths.iter().map(|path| AnswerRecord::load(path)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "hive_solver_records_{}_{name}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn sample() -> AnswerRecord {
        let puzzle = Puzzle::new('B', "BRAINES".chars()).unwrap();
        let solution = solve(&puzzle, ["braines", "brain", "beans", "rabbi"]);
        AnswerRecord::from_solution("2026-01-18".parse().unwrap(), &puzzle, &solution)
    }

    #[test]
    fn from_solution_fills_fields() {
        let record = sample();

        assert_eq!(record.title, "Spelling Bee Answer - Sunday, January 18, 2026");
        assert_eq!(record.center_letter, "B");
        assert_eq!(record.surrounding_letters, vec!["A", "E", "I", "N", "R", "S"]);
        assert_eq!(record.pangrams, vec!["BRAINES"]);
        assert_eq!(record.slug(), "2026-01-18");

        let hints = record.hints.unwrap();
        assert_eq!(hints.letter.as_deref(), Some("B"));
        assert_eq!(
            hints.starting_words,
            Some(vec!["BEANS".to_string(), "BRAIN".to_string(), "BRAINES".to_string()])
        );
    }

    #[test]
    fn empty_solution_has_no_hints() {
        let puzzle = Puzzle::new('B', "BRAINES".chars()).unwrap();
        let record = AnswerRecord::from_solution(
            "2026-01-18".parse().unwrap(),
            &puzzle,
            &Solution::default(),
        );

        assert!(record.hints.is_none());
        assert!(!record.to_json().unwrap().contains("hints"));
    }

    #[test]
    fn json_uses_camel_case() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"centerLetter\": \"B\""));
        assert!(json.contains("\"surroundingLetters\""));
        assert!(json.contains("\"startingWords\""));
        assert!(json.contains("\"date\": \"2026-01-18\""));
    }

    #[test]
    fn parse_record_without_hints() {
        let json = r#"{
            "title": "Spelling Bee Answer",
            "date": "2026-01-17",
            "centerLetter": "T",
            "surroundingLetters": ["A", "C", "I", "L", "O", "P"],
            "pangrams": ["OPTICAL", "TOPICAL"]
        }"#;
        let record: AnswerRecord = serde_json::from_str(json).unwrap();

        assert!(record.hints.is_none());
        assert!(record.validate().is_ok());
        assert_eq!(record.pangrams.len(), 2);
    }

    #[test]
    fn validate_rejects_bad_letters() {
        let mut record = sample();
        record.center_letter = "BR".to_string();
        assert!(matches!(record.validate(), Err(RecordError::Invalid(_))));

        let mut record = sample();
        record.surrounding_letters.push("b".to_string());
        assert!(matches!(record.validate(), Err(RecordError::Invalid(_))));

        let mut record = sample();
        record.surrounding_letters.push("4".to_string());
        assert!(record.validate().is_err());
    }

    #[test]
    fn load_records_reads_json_files_only() {
        let dir = temp_dir("load");
        fs::write(dir.join("2026-01-18.json"), sample().to_json().unwrap()).unwrap();
        fs::write(dir.join("notes.txt"), "not a record").unwrap();

        let records = load_records(&dir).unwrap();
        fs::remove_dir_all(&dir).ok();

        assert_eq!(records, vec![sample()]);
    }

    #[test]
    fn load_records_reports_malformed_json() {
        let dir = temp_dir("malformed");
        fs::write(dir.join("broken.json"), "{ not json").unwrap();

        let result = load_records(&dir);
        fs::remove_dir_all(&dir).ok();

        assert!(matches!(result, Err(RecordError::Json { .. })));
    }

    #[test]
    fn load_records_missing_dir() {
        let result = load_records("/nonexistent/hive_solver/answers");
        assert!(matches!(result, Err(RecordError::Io { .. })));
    }
}
