// Query specification and the per-mode reading predicates.

use pinyin_core::{LexiconEntry, QueryMode, SortBy, SEPARATOR};

/// One lexicon query, built by the caller and executed by the store.
#[derive(Debug, Clone)]
pub struct QuerySpec {
    /// Exact syllable count, or `None` for any.
    pub syllable_count: Option<usize>,
    /// Separated reading pattern.
    pub reading: String,
    /// How the reading pattern matches entry readings.
    pub mode: QueryMode,
    /// Optional exact text filter.
    pub text: Option<String>,
    /// Post-union ordering key.
    pub sort: SortBy,
}

impl QuerySpec {
    /// An exact-reading query with no count or text filter, unsorted.
    pub fn exact(reading: impl Into<String>) -> Self {
        Self {
            syllable_count: None,
            reading: reading.into(),
            mode: QueryMode::Exact,
            text: None,
            sort: SortBy::Unsorted,
        }
    }

    pub fn with_mode(mut self, mode: QueryMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.syllable_count = Some(count);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn sorted_by(mut self, sort: SortBy) -> Self {
        self.sort = sort;
        self
    }

    /// Whether `entry` satisfies every filter of this query.
    pub fn matches(&self, entry: &LexiconEntry) -> bool {
        if let Some(count) = self.syllable_count {
            if entry.syllable_count != count {
                return false;
            }
        }
        if let Some(text) = &self.text {
            if entry.text != *text {
                return false;
            }
        }
        match self.mode {
            QueryMode::Exact => entry.reading == self.reading,
            QueryMode::Prefix => prefix_match(&self.reading, &entry.reading),
            QueryMode::Fuzzy => fuzzy_match(&self.reading, &entry.reading),
        }
    }
}

fn split(reading: &str) -> impl Iterator<Item = &str> {
    reading.split(SEPARATOR).filter(|s| !s.is_empty())
}

/// Leading pattern syllables equal, the last one a prefix of the entry
/// syllable at its index; the entry has exactly as many syllables.
fn prefix_match(pattern: &str, reading: &str) -> bool {
    let pat: Vec<&str> = split(pattern).collect();
    let syl: Vec<&str> = split(reading).collect();
    if pat.is_empty() || pat.len() != syl.len() {
        return false;
    }
    let last = pat.len() - 1;
    pat[..last] == syl[..last] && syl[last].starts_with(pat[last])
}

/// Every pattern syllable a prefix of the entry syllable at its index;
/// the entry may run longer than the pattern.
fn fuzzy_match(pattern: &str, reading: &str) -> bool {
    let pat: Vec<&str> = split(pattern).collect();
    let syl: Vec<&str> = split(reading).collect();
    if pat.is_empty() || syl.len() < pat.len() {
        return false;
    }
    pat.iter().zip(&syl).all(|(p, s)| s.starts_with(p))
}
