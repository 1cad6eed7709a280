//! Formatting utilities for terminal output

use crate::core::Puzzle;

/// List the puzzle letters, center first, as `B, A, E, I, N, R, S`
#[must_use]
pub fn letter_list(puzzle: &Puzzle) -> String {
    std::iter::once(puzzle.center())
        .chain(puzzle.surrounding())
        .map(String::from)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lay words out in fixed-width columns
///
/// Each row holds at most `columns` words, padded to the longest word.
#[must_use]
pub fn word_columns(words: &[String], columns: usize) -> Vec<String> {
    let width = words.iter().map(String::len).max().unwrap_or(0);

    words
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|word| format!("{word:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// `1 word` / `3 words`
#[must_use]
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn letter_list_center_first() {
        let puzzle = Puzzle::new('N', "BRAINES".chars()).unwrap();
        assert_eq!(letter_list(&puzzle), "N, A, B, E, I, R, S");
    }

    #[test]
    fn columns_pad_to_longest() {
        let rows = word_columns(&words(&["BANE", "BRAINS", "BEAN"]), 2);
        assert_eq!(rows, vec!["BANE    BRAINS", "BEAN"]);
    }

    #[test]
    fn columns_empty() {
        assert!(word_columns(&[], 4).is_empty());
    }

    #[test]
    fn columns_zero_treated_as_one() {
        let rows = word_columns(&words(&["BANE", "BEAN"]), 0);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(count_label(0, "word"), "0 words");
        assert_eq!(count_label(1, "pangram"), "1 pangram");
        assert_eq!(count_label(12, "word"), "12 words");
    }
}
