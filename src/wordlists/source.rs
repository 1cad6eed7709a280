//! Pluggable dictionary sources
//!
//! A `WordSource` produces the candidate word list handed to the solver: the bundled
//! fallback, one explicit file, or the first readable file on a search path.

use super::loader::{load_from_file, words_from_slice};
use super::BUNDLED;
use log::{debug, warn};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// System dictionary locations tried after the project-local list
pub const SYSTEM_DICTIONARIES: &[&str] = &[
    "/usr/share/dict/words",
    "/usr/dict/words",
    "/opt/local/share/dict/words",
];

/// Project-local word list, resolved against the working directory
pub const LOCAL_DICTIONARY: &str = "words.txt";

/// Error type for dictionary loading
#[derive(Debug)]
pub enum DictionaryError {
    NotFound { searched: Vec<PathBuf> },
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { searched } => {
                write!(f, "Dictionary not found (searched: ")?;
                for (i, path) in searched.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", path.display())?;
                }
                write!(f, ")")
            }
            Self::Io { path, source } => {
                write!(f, "Failed to read dictionary {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// A loaded word list and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    pub words: Vec<String>,
    pub origin: String,
}

/// Strategy for producing candidate words
pub trait WordSource {
    /// Load the word list along with a description of its origin
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError` if no underlying resource can be read.
    fn load(&self) -> Result<Dictionary, DictionaryError>;

    /// Load only the words
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError` if no underlying resource can be read.
    fn load_words(&self) -> Result<Vec<String>, DictionaryError> {
        self.load().map(|dictionary| dictionary.words)
    }
}

/// The word list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct Bundled;

impl WordSource for Bundled {
    fn load(&self) -> Result<Dictionary, DictionaryError> {
        Ok(Dictionary {
            words: words_from_slice(BUNDLED),
            origin: "bundled word list".to_string(),
        })
    }
}

/// One explicit word list file
#[derive(Debug, Clone)]
pub struct WordFile(pub PathBuf);

fn read_dictionary(path: &Path) -> Result<Dictionary, DictionaryError> {
    let words = load_from_file(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} words from {}", words.len(), path.display());
    Ok(Dictionary {
        words,
        origin: path.display().to_string(),
    })
}

impl WordSource for WordFile {
    fn load(&self) -> Result<Dictionary, DictionaryError> {
        match read_dictionary(&self.0) {
            Err(DictionaryError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Err(DictionaryError::NotFound {
                    searched: vec![self.0.clone()],
                })
            }
            result => result,
        }
    }
}

/// Ordered list of candidate locations; the first readable one wins
#[derive(Debug, Clone)]
pub struct SearchPath(pub Vec<PathBuf>);

impl SearchPath {
    /// The project-local `words.txt` followed by the well-known system dictionaries
    #[must_use]
    pub fn default_locations() -> Self {
        let mut paths = vec![PathBuf::from(LOCAL_DICTIONARY)];
        paths.extend(SYSTEM_DICTIONARIES.iter().map(PathBuf::from));
        Self(paths)
    }
}

impl Default for SearchPath {
    fn default() -> Self {
        Self::default_locations()
    }
}

impl WordSource for SearchPath {
    fn load(&self) -> Result<Dictionary, DictionaryError> {
        for path in &self.0 {
            if !path.is_file() {
                debug!("No dictionary at {}", path.display());
                continue;
            }

            match read_dictionary(path) {
                Ok(dictionary) => return Ok(dictionary),
                Err(e) => warn!("Skipping dictionary: {e}"),
            }
        }

        Err(DictionaryError::NotFound {
            searched: self.0.clone(),
        })
    }
}

/// Pick a word source from a `--wordlist` value
///
/// - `auto`: search [`SearchPath::default_locations`]
/// - `bundled`: the embedded fallback list
/// - anything else: a path to a word list file
#[must_use]
pub fn select_source(name: &str) -> Box<dyn WordSource> {
    match name {
        "auto" => Box::new(SearchPath::default_locations()),
        "bundled" => Box::new(Bundled),
        path => Box::new(WordFile(PathBuf::from(path))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "hive_solver_source_{}_{name}",
            std::process::id()
        ))
    }

    #[test]
    fn bundled_never_fails() {
        let dictionary = Bundled.load().unwrap();
        assert!(!dictionary.words.is_empty());
        assert!(dictionary.words.iter().any(|w| w == "brain"));
    }

    #[test]
    fn word_file_missing_is_not_found() {
        let path = temp_path("missing.txt");
        let err = WordFile(path.clone()).load().unwrap_err();

        match err {
            DictionaryError::NotFound { searched } => assert_eq!(searched, vec![path]),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn search_path_uses_first_existing() {
        let missing = temp_path("first_missing.txt");
        let present = temp_path("second_present.txt");
        let later = temp_path("third_present.txt");
        fs::write(&present, "brain\nbeans\n").unwrap();
        fs::write(&later, "rabbi\n").unwrap();

        let source = SearchPath(vec![missing, present.clone(), later.clone()]);
        let dictionary = source.load().unwrap();
        fs::remove_file(&present).ok();
        fs::remove_file(&later).ok();

        assert_eq!(dictionary.words, vec!["brain", "beans"]);
        assert_eq!(dictionary.origin, present.display().to_string());
    }

    #[test]
    fn search_path_reports_not_found() {
        let paths = vec![temp_path("nope_a.txt"), temp_path("nope_b.txt")];
        let err = SearchPath(paths.clone()).load_words().unwrap_err();

        assert!(matches!(&err, DictionaryError::NotFound { searched } if *searched == paths));
        assert!(err.to_string().starts_with("Dictionary not found"));
    }

    #[test]
    fn search_path_keeps_file_with_invalid_utf8() {
        let path = temp_path("latin1.txt");
        fs::write(&path, b"brain\nbeans\ncaf\xe9\nrabbi\n").unwrap();

        let words = SearchPath(vec![path.clone()]).load_words().unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(words, vec!["brain", "beans", "rabbi"]);
    }

    #[test]
    fn search_path_skips_directories() {
        let dir = std::env::temp_dir();
        let file = temp_path("after_dir.txt");
        fs::write(&file, "bean\n").unwrap();

        let words = SearchPath(vec![dir, file.clone()]).load_words().unwrap();
        fs::remove_file(&file).ok();

        assert_eq!(words, vec!["bean"]);
    }

    #[test]
    fn default_locations_start_with_local_list() {
        let SearchPath(paths) = SearchPath::default_locations();
        assert_eq!(paths[0], PathBuf::from("words.txt"));
        assert_eq!(paths.len(), 1 + SYSTEM_DICTIONARIES.len());
        assert_eq!(paths[1], PathBuf::from("/usr/share/dict/words"));
    }

    #[test]
    fn select_source_bundled() {
        let words = select_source("bundled").load_words().unwrap();
        assert!(!words.is_empty());
    }
}
