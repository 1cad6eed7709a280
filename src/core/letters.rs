//! Letter set representation
//!
//! A `LetterSet` holds distinct uppercase ASCII letters as a 26-bit mask, one bit per letter.

use std::fmt;

/// A set of distinct letters `A`-`Z`
///
/// Lowercase input is folded to uppercase on insert. Anything outside the ASCII
/// alphabet is never a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> Option<u32> {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(1 << (upper - b'A'))
        } else {
            None
        }
    }

    /// Insert a letter, returning `false` if it is not an ASCII letter
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) => {
                self.0 |= bit;
                true
            }
            None => false,
        }
    }

    /// Check whether a letter is in the set (case-insensitive)
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate over the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'A'..=b'Z').filter(move |&letter| self.contains(letter))
    }

    /// Collect the distinct letters of a word
    ///
    /// Returns `None` as soon as a character outside the ASCII alphabet is found.
    ///
    /// # Examples
    /// ```
    /// use hive_solver::core::LetterSet;
    ///
    /// let set = LetterSet::from_word("Banana").unwrap();
    /// assert_eq!(set.len(), 3);
    /// assert!(LetterSet::from_word("can't").is_none());
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        let mut set = Self::EMPTY;
        for byte in word.bytes() {
            if !set.insert(byte) {
                return None;
            }
        }
        Some(set)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set() {
        let set = LetterSet::EMPTY;
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.contains(b'A'));
    }

    #[test]
    fn insert_folds_case() {
        let mut set = LetterSet::default();
        assert!(set.insert(b'b'));
        assert!(set.contains(b'B'));
        assert!(set.contains(b'b'));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn insert_rejects_non_letters() {
        let mut set = LetterSet::default();
        assert!(!set.insert(b'-'));
        assert!(!set.insert(b'\''));
        assert!(!set.insert(b'7'));
        assert!(set.is_empty());
    }

    #[test]
    fn duplicates_collapse() {
        let set: LetterSet = b"BBRRAA".iter().copied().collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn subset_check() {
        let hive: LetterSet = b"BRAINES".iter().copied().collect();
        let brain = LetterSet::from_word("brain").unwrap();
        let banter = LetterSet::from_word("banter").unwrap();

        assert!(brain.is_subset_of(hive));
        assert!(!banter.is_subset_of(hive));
        assert!(LetterSet::EMPTY.is_subset_of(hive));
    }

    #[test]
    fn iter_is_alphabetical() {
        let set: LetterSet = b"SENIARB".iter().copied().collect();
        let letters: Vec<u8> = set.iter().collect();
        assert_eq!(letters, b"ABEINRS");
    }

    #[test]
    fn display_lists_letters() {
        let set = LetterSet::from_word("hive").unwrap();
        assert_eq!(set.to_string(), "EHIV");
    }

    #[test]
    fn from_word_rejects_punctuation() {
        assert!(LetterSet::from_word("well-known").is_none());
        assert!(LetterSet::from_word("o'clock").is_none());
        assert!(LetterSet::from_word("caf\u{e9}").is_none());
    }
}
