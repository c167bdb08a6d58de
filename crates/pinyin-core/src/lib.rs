//! Shared types for the Pinyin input engine.
//!
//! This crate holds everything the higher layers agree on: the quanpin
//! syllable grammar, the separated-reading string type, lexicon rows and
//! the candidate types produced by a search.
//!
//! - [`enums`] -- query modes, sort keys, candidate kinds, shared constants
//! - [`grammar`] -- the static syllabary and classification queries
//! - [`syllable`] -- `Syllable` and `DividedString`
//! - [`entry`] -- lexicon rows
//! - [`candidate`] -- per-search candidate types
//! - [`hanzi`] -- stand-alone character classification

pub mod candidate;
pub mod entry;
pub mod enums;
pub mod grammar;
pub mod hanzi;
pub mod syllable;

pub use candidate::{Candidate, CandidateInfo};
pub use entry::LexiconEntry;
pub use enums::{CandidateKind, QueryMode, SortBy, MAX_SYLLABLE_LEN, SEPARATOR};
pub use grammar::SyllableGrammar;
pub use syllable::{DividedString, Syllable};
