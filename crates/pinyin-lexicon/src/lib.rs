//! Layered lexicon storage for the Pinyin input engine.
//!
//! A [`store::LexiconStore`] is an ordered overlay of [`partition::Partition`]s:
//! the read-only system lexicon at index 0, the mutable learned lexicon at
//! index 1, and any user lexica after that. Queries union across all
//! partitions, deduplicate by `(reading, text)` and sort by the requested
//! rank. [`cache::QueryCache`] memoizes read results per asking strategy and
//! is flushed wholesale on every mutation.
//!
//! - [`partition`] -- one overlay source
//! - [`query`] -- query specification and reading-match predicates
//! - [`store`] -- the layered store
//! - [`cache`] -- memoized read results
//! - [`tsv`] -- the line-oriented backing format

pub mod cache;
pub mod partition;
pub mod query;
pub mod store;
pub mod tsv;

pub use cache::{CacheId, QueryCache};
pub use partition::{Partition, PartitionKind};
pub use query::QuerySpec;
pub use store::LexiconStore;

/// Error type for lexicon loading and parsing.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// The backing file could not be read.
    #[error("failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),

    /// A line in the backing file did not parse.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}
