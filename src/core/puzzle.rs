//! Hive puzzle definition
//!
//! A `Puzzle` pairs a required center letter with the set of allowed letters and
//! owns the word validity and pangram predicates.

use super::LetterSet;
use std::fmt;

/// Shortest word a puzzle accepts by default
pub const MIN_WORD_LENGTH: usize = 4;

/// A hive puzzle: one mandatory center letter plus the allowed alphabet
///
/// Construction enforces that the alphabet is non-empty and contains the center.
/// Letters are a set, so any allowed letter may repeat freely within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    center: u8,
    letters: LetterSet,
    min_length: usize,
}

/// Error type for invalid puzzle definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    NoLetters,
    CenterNotAllowed(char),
    NotALetter(String),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLetters => write!(f, "Puzzle must have at least one allowed letter"),
            Self::CenterNotAllowed(center) => {
                write!(f, "Center letter '{center}' is not one of the allowed letters")
            }
            Self::NotALetter(input) => {
                write!(f, "Expected a single letter A-Z, got '{input}'")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

fn letter_byte(letter: char) -> Result<u8, PuzzleError> {
    if letter.is_ascii_alphabetic() {
        Ok(letter.to_ascii_uppercase() as u8)
    } else {
        Err(PuzzleError::NotALetter(letter.to_string()))
    }
}

impl Puzzle {
    /// Create a puzzle from a center letter and the allowed letters
    ///
    /// Duplicate letters are collapsed and case is ignored.
    ///
    /// # Errors
    /// Returns `PuzzleError` if:
    /// - Any input is not an ASCII letter
    /// - The allowed letters are empty
    /// - The center letter is not among the allowed letters
    ///
    /// # Examples
    /// ```
    /// use hive_solver::core::Puzzle;
    ///
    /// let puzzle = Puzzle::new('b', "BRAINES".chars()).unwrap();
    /// assert_eq!(puzzle.center(), 'B');
    /// assert_eq!(puzzle.letters().len(), 7);
    ///
    /// assert!(Puzzle::new('x', "BRAINES".chars()).is_err());
    /// ```
    pub fn new(center: char, letters: impl IntoIterator<Item = char>) -> Result<Self, PuzzleError> {
        let center = letter_byte(center)?;

        let mut set = LetterSet::EMPTY;
        for letter in letters {
            set.insert(letter_byte(letter)?);
        }

        if set.is_empty() {
            return Err(PuzzleError::NoLetters);
        }
        if !set.contains(center) {
            return Err(PuzzleError::CenterNotAllowed(center as char));
        }

        Ok(Self {
            center,
            letters: set,
            min_length: MIN_WORD_LENGTH,
        })
    }

    /// Build a puzzle from command-line style arguments
    ///
    /// The first argument is the center letter and is itself part of the allowed set.
    /// Every argument must be exactly one letter.
    ///
    /// # Errors
    /// Returns `PuzzleError::NoLetters` for an empty slice and `PuzzleError::NotALetter`
    /// for any argument that is not a single ASCII letter.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, PuzzleError> {
        let letters = args
            .iter()
            .map(|arg| {
                let arg = arg.as_ref().trim();
                let mut chars = arg.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) if letter.is_ascii_alphabetic() => Ok(letter),
                    _ => Err(PuzzleError::NotALetter(arg.to_string())),
                }
            })
            .collect::<Result<Vec<char>, _>>()?;

        let center = *letters.first().ok_or(PuzzleError::NoLetters)?;
        Self::new(center, letters)
    }

    /// Override the minimum word length
    #[must_use]
    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// The required center letter (uppercase)
    #[inline]
    #[must_use]
    pub const fn center(&self) -> char {
        self.center as char
    }

    /// The distinct allowed letters, center included
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    #[inline]
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// The allowed letters other than the center, alphabetically
    #[must_use]
    pub fn surrounding(&self) -> Vec<char> {
        self.letters
            .iter()
            .filter(|&letter| letter != self.center)
            .map(char::from)
            .collect()
    }

    /// Check whether a word is a valid answer to this puzzle
    ///
    /// Checks run cheapest first: length, then the center letter, then membership
    /// of every character in the allowed set. Case is ignored.
    ///
    /// # Examples
    /// ```
    /// use hive_solver::core::Puzzle;
    ///
    /// let puzzle = Puzzle::new('B', "BRAINES".chars()).unwrap();
    /// assert!(puzzle.accepts("brain"));
    /// assert!(!puzzle.accepts("rain"));   // no center letter
    /// assert!(!puzzle.accepts("banter")); // T is not allowed
    /// assert!(!puzzle.accepts("bra"));    // too short
    /// ```
    #[must_use]
    pub fn accepts(&self, word: &str) -> bool {
        if word.len() < self.min_length {
            return false;
        }

        if !word.bytes().any(|b| b.eq_ignore_ascii_case(&self.center)) {
            return false;
        }

        word.bytes().all(|b| self.letters.contains(b))
    }

    /// Check whether a valid word uses every allowed letter at least once
    ///
    /// Only meaningful for words that already pass [`Puzzle::accepts`].
    #[must_use]
    pub fn is_pangram(&self, word: &str) -> bool {
        LetterSet::from_word(word).is_some_and(|used| used.len() == self.letters.len())
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.center())?;
        for letter in self.surrounding() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
