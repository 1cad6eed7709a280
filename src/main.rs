//! Hive Puzzle Solver - CLI
//!
//! Finds every valid word for a hive puzzle, and builds the daily answer records and
//! RSS feed for the answers site.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hive_solver::{
    commands::{SolveConfig, build_feed, build_record, solve_puzzle, write_output},
    core::MIN_WORD_LENGTH,
    output::{print_solution, print_usage},
    site::{FeedChannel, PuzzleDate},
    wordlists::select_source,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hive_solver",
    about = "Hive word puzzle solver: finds every valid word and pangram for a center letter and its hive",
    version,
    author,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Center letter followed by the other allowed letters, e.g. B R A I N E S
    letters: Vec<String>,

    /// Wordlist: 'auto' (default, local words.txt then system dictionaries), 'bundled', or path to file
    #[arg(short = 'w', long, global = true, default_value = "auto")]
    wordlist: String,

    /// Shortest word accepted as an answer
    #[arg(short = 'm', long, global = true, default_value_t = MIN_WORD_LENGTH)]
    min_length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle and emit its answer record as JSON
    Record {
        /// Publication date (YYYY-MM-DD)
        #[arg(short, long)]
        date: PuzzleDate,

        /// Write the record to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Center letter followed by the other allowed letters
        #[arg(required = true, num_args = 2..)]
        letters: Vec<String>,
    },

    /// Render the RSS feed for a directory of answer records
    Feed {
        /// Directory containing *.json answer records
        dir: PathBuf,

        /// Write the feed to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Site base URL used for item links
        #[arg(long)]
        site: Option<String>,
    },
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        None => run_solve_command(cli.letters, &cli.wordlist, cli.min_length),
        Some(Commands::Record {
            date,
            output,
            letters,
        }) => {
            let config = SolveConfig::new(letters).with_min_length(cli.min_length);
            run_record_command(&config, date, output.as_deref(), &cli.wordlist)
        }
        Some(Commands::Feed { dir, output, site }) => {
            run_feed_command(&dir, output.as_deref(), site)
        }
    }
}

fn run_solve_command(letters: Vec<String>, wordlist: &str, min_length: usize) -> Result<()> {
    let Some(config) = SolveConfig::from_positionals(letters) else {
        print_usage();
        return Ok(());
    };
    let config = config.with_min_length(min_length);
    let source = select_source(wordlist);
    let result = solve_puzzle(&config, source.as_ref())?;

    print_solution(&result.puzzle, &result.solution);
    Ok(())
}

fn run_record_command(
    config: &SolveConfig,
    date: PuzzleDate,
    output: Option<&Path>,
    wordlist: &str,
) -> Result<()> {
    let source = select_source(wordlist);
    let record = build_record(config, date, source.as_ref())?;

    write_output(output, &record.to_json()?)
}

fn run_feed_command(dir: &Path, output: Option<&Path>, site: Option<String>) -> Result<()> {
    let channel = match site {
        Some(url) => FeedChannel::default().with_site(url),
        None => FeedChannel::default(),
    };

    let rss = build_feed(dir, &channel)?;
    write_output(output, &rss)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_length_defaults_to_four() {
        let cli = Cli::try_parse_from(["hive_solver", "B", "R", "A"]).unwrap();
        assert_eq!(cli.min_length, MIN_WORD_LENGTH);
        assert!(cli.command.is_none());
    }

    #[test]
    fn min_length_flag_reaches_solve_and_record() {
        let cli = Cli::try_parse_from(["hive_solver", "-m", "6", "B", "R", "A"]).unwrap();
        assert_eq!(cli.min_length, 6);
        assert_eq!(cli.letters, ["B", "R", "A"]);

        let cli = Cli::try_parse_from([
            "hive_solver", "record", "--min-length", "5", "--date", "2026-01-18", "B", "R",
        ])
        .unwrap();
        assert_eq!(cli.min_length, 5);
        assert!(matches!(cli.command, Some(Commands::Record { .. })));
    }
}
