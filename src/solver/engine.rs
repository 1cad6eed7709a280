//! Main hive puzzle solving pass

use crate::core::Puzzle;
use log::debug;
use rustc_hash::FxHashSet;

/// Classified answers to a puzzle
///
/// Both lists are uppercase, sorted ascending, deduplicated and disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    pangrams: Vec<String>,
    other: Vec<String>,
}

impl Solution {
    /// Valid words that use every allowed letter
    #[must_use]
    pub fn pangrams(&self) -> &[String] {
        &self.pangrams
    }

    /// Valid words that are not pangrams
    #[must_use]
    pub fn other(&self) -> &[String] {
        &self.other
    }

    /// All valid words: pangrams first, then the rest
    pub fn all_words(&self) -> impl Iterator<Item = &str> {
        self.pangrams
            .iter()
            .chain(&self.other)
            .map(String::as_str)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.pangrams.len() + self.other.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

fn into_sorted(set: FxHashSet<String>) -> Vec<String> {
    let mut words: Vec<String> = set.into_iter().collect();
    words.sort_unstable();
    words
}

/// Find every valid word for `puzzle` in `words`
///
/// Performs a single linear scan. Candidates are compared case-insensitively and
/// reported uppercase; entries that fail the puzzle's validity check are skipped.
///
/// # Examples
/// ```
/// use hive_solver::core::Puzzle;
/// use hive_solver::solver::solve;
///
/// let puzzle = Puzzle::new('B', "BRAINES".chars()).unwrap();
/// let solution = solve(&puzzle, ["rain", "brain", "Beans", "banter", "BRAIN"]);
///
/// assert!(solution.pangrams().is_empty());
/// assert_eq!(solution.other(), ["BEANS", "BRAIN"]);
/// ```
pub fn solve<I>(puzzle: &Puzzle, words: I) -> Solution
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut pangrams = FxHashSet::default();
    let mut other = FxHashSet::default();
    let mut scanned = 0usize;

    for word in words {
        scanned += 1;
        let upper = word.as_ref().trim().to_ascii_uppercase();

        if !puzzle.accepts(&upper) {
            continue;
        }

        if puzzle.is_pangram(&upper) {
            pangrams.insert(upper);
        } else {
            other.insert(upper);
        }
    }

    let solution = Solution {
        pangrams: into_sorted(pangrams),
        other: into_sorted(other),
    };

    debug!(
        "Solved {puzzle}: scanned {scanned} candidates, {} pangrams, {} other",
        solution.pangrams.len(),
        solution.other.len()
    );

    solution
}
