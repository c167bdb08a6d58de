// Shared enums and constants used across the lexicon and engine crates.

/// Reading-filter semantics for a lexicon query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryMode {
    /// The whole separated reading must be equal.
    Exact,
    /// Leading syllables equal; the last pattern syllable is a prefix of
    /// the entry syllable at the same index.
    Prefix,
    /// Every pattern syllable is a prefix of the entry syllable at the
    /// same index; the entry may have more syllables than the pattern.
    Fuzzy,
}

/// Ordering key applied after the partition union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortBy {
    /// Frequency rank, descending.
    Weight,
    /// Learned-combination rank, descending.
    Priority,
    /// Keep partition/insertion order.
    Unsorted,
}

/// The strategy that produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    /// Synthesized by chaining per-position matches over the whole input.
    Combine,
    /// Fuzzy whole-input expansion drawn from the lexicon.
    Associate,
    /// Direct phrase lookup at some prefix length.
    Query,
    /// Single-character reading of the first syllable.
    Hanzi,
}

/// The syllable-boundary marker used in separated readings.
pub const SEPARATOR: char = '\'';

/// Longest syllable the grammar recognizes ("zhuang", "chuang", "shuang").
pub const MAX_SYLLABLE_LEN: usize = 6;
