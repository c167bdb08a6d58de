// Lexicon row type shared between the store and the engine.

use crate::enums::SEPARATOR;

/// One row of the layered lexicon.
///
/// Identity within a partition is `(reading, text)`; `weight` and
/// `priority` are the only sort keys, both descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    /// Number of syllables in `reading`.
    pub syllable_count: usize,
    /// Separated Pinyin reading ("ni'hao").
    pub reading: String,
    /// The Hanzi run this reading maps to.
    pub text: String,
    /// Learned-combination rank (combine-style ordering).
    pub priority: i32,
    /// Frequency rank (direct/associate-style ordering).
    pub weight: i32,
}

impl LexiconEntry {
    /// Build an entry, deriving the syllable count from the reading.
    pub fn new(reading: impl Into<String>, text: impl Into<String>, weight: i32, priority: i32) -> Self {
        let reading = reading.into();
        let syllable_count = reading.split(SEPARATOR).filter(|s| !s.is_empty()).count();
        Self {
            syllable_count,
            reading,
            text: text.into(),
            priority,
            weight,
        }
    }

    /// The `(reading, text)` identity pair.
    pub fn key(&self) -> (&str, &str) {
        (&self.reading, &self.text)
    }

    /// Iterate over the reading's syllables.
    pub fn reading_syllables(&self) -> impl Iterator<Item = &str> {
        self.reading.split(SEPARATOR).filter(|s| !s.is_empty())
    }
}
