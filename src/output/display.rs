//! Display functions for command results

use super::formatters::{count_label, letter_list, word_columns};
use crate::core::Puzzle;
use crate::solver::Solution;
use colored::Colorize;

const WORDS_PER_ROW: usize = 6;

/// Print usage text for the positional solve mode
pub fn print_usage() {
    println!("\n{}", "🐝 Hive Puzzle Solver".bright_yellow().bold());
    println!("\nUsage: hive_solver <CENTER> <LETTER>...\n");
    println!("Example:");
    println!("  hive_solver B R A I N E S\n");
    println!("This will solve a puzzle with:");
    println!("  - Center Letter: B (required in every word)");
    println!("  - Available Letters: B, R, A, I, N, E, S");
    println!("\nRun 'hive_solver --help' for the record and feed commands.");
}

fn print_words(words: &[String]) {
    for row in word_columns(words, WORDS_PER_ROW) {
        println!("   {row}");
    }
}

/// Print the classified answers for a puzzle
pub fn print_solution(puzzle: &Puzzle, solution: &Solution) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "🐝 HIVE PUZZLE SOLVER".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\nCenter Letter:     {} (required in every word)",
        puzzle.center().to_string().bright_yellow().bold()
    );
    println!(
        "Available Letters: {} ({} total)",
        letter_list(puzzle),
        puzzle.letters().len()
    );

    if !solution.pangrams().is_empty() {
        println!(
            "\n⭐ {} (uses all {} letters):",
            format!("Pangrams - {}", solution.pangrams().len())
                .bright_yellow()
                .bold(),
            puzzle.letters().len()
        );
        print_words(solution.pangrams());
    }

    println!(
        "\n📝 {}",
        format!("Other Valid Words - {}", solution.other().len())
            .bright_cyan()
            .bold()
    );
    print_words(solution.other());

    println!();
    if solution.is_empty() {
        println!("{}", "❌ No valid words found".red().bold());
    } else {
        println!(
            "{}",
            format!("✅ Total Valid Words: {}", count_label(solution.total(), "word"))
                .green()
                .bold()
        );
    }
}
