//! Static site content
//!
//! Daily answer records, date formatting and the RSS feed built from them.

pub mod dates;
pub mod feed;
pub mod record;

pub use dates::{DateError, PuzzleDate};
pub use feed::{FeedChannel, render_feed, write_feed};
pub use record::{AnswerRecord, RecordError, RecordHints, load_records};
