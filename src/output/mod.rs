//! Terminal output formatting
//!
//! Primary results go to stdout; progress and confirmations go to stderr.

pub mod display;
pub mod formatters;
pub mod progress;

pub use display::{print_solution, print_usage};
pub use progress::{report_loaded, spinner};
