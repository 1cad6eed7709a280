//! Word lists for hive puzzle solving
//!
//! Provides the embedded fallback list, file loading and the dictionary search path.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{BUNDLED, BUNDLED_COUNT};
pub use source::{Bundled, Dictionary, DictionaryError, SearchPath, WordFile, WordSource, select_source};
