//! Hint derivation for published answers
//!
//! Picks the most common starting letter among the answers and a few example words
//! that begin with it.

use super::Solution;
use rustc_hash::FxHashMap;

/// Number of example starting words included in a hint
pub const HINT_WORD_LIMIT: usize = 3;

/// Starting-letter hint for a solved puzzle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hints {
    pub letter: Option<char>,
    pub starting_words: Vec<String>,
}

impl Hints {
    /// Derive hints from a solution
    ///
    /// The hint letter is the first letter shared by the most answers, ties going to
    /// the alphabetically earliest. Example words prefer non-pangram answers so the
    /// hint does not give away a pangram when other words are available.
    #[must_use]
    pub fn from_solution(solution: &Solution) -> Self {
        let mut tally: FxHashMap<char, usize> = FxHashMap::default();
        for word in solution.all_words() {
            if let Some(first) = word.chars().next() {
                *tally.entry(first).or_insert(0) += 1;
            }
        }

        let Some(letter) = tally
            .into_iter()
            .max_by(|(a, a_count), (b, b_count)| a_count.cmp(b_count).then(b.cmp(a)))
            .map(|(letter, _)| letter)
        else {
            return Self::default();
        };

        let starting_words = solution
            .other()
            .iter()
            .chain(solution.pangrams())
            .filter(|word| word.starts_with(letter))
            .take(HINT_WORD_LIMIT)
            .cloned()
            .collect();

        Self {
            letter: Some(letter),
            starting_words,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letter.is_none() && self.starting_words.is_empty()
    }
}
