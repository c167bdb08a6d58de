// One overlay source within the layered lexicon.

use pinyin_core::LexiconEntry;

/// Which layer a partition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionKind {
    /// The read-only base lexicon, always at overlay index 0.
    System,
    /// The mutable partition that learning writes into, at index 1.
    Learned,
    /// Additional caller-attached lexica, at indices >= 2.
    User,
}

/// A named, ordered list of lexicon rows.
///
/// Uniqueness within a partition is `(reading, text)`; insertion order is
/// preserved and serves as the final tiebreak after rank sorting.
#[derive(Debug, Clone)]
pub struct Partition {
    kind: PartitionKind,
    name: String,
    entries: Vec<LexiconEntry>,
}

impl Partition {
    /// Create an empty partition.
    pub fn new(kind: PartitionKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Create a partition from pre-built rows, dropping duplicates.
    pub fn from_entries(
        kind: PartitionKind,
        name: impl Into<String>,
        entries: Vec<LexiconEntry>,
    ) -> Self {
        let mut partition = Self::new(kind, name);
        for entry in entries {
            partition.insert(entry);
        }
        partition
    }

    pub fn kind(&self) -> PartitionKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The system partition never accepts deletions; learned and user
    /// partitions do. Inserts and updates are learned-only and enforced
    /// by the store.
    pub fn accepts_deletes(&self) -> bool {
        self.kind != PartitionKind::System
    }

    pub fn contains(&self, reading: &str, text: &str) -> bool {
        self.entries.iter().any(|e| e.key() == (reading, text))
    }

    /// Append a row unless its `(reading, text)` key is already present.
    /// Returns `false` on a duplicate.
    pub fn insert(&mut self, entry: LexiconEntry) -> bool {
        if self.contains(&entry.reading, &entry.text) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove every row with the given key. Returns the number removed.
    pub fn remove(&mut self, reading: &str, text: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.key() != (reading, text));
        before - self.entries.len()
    }

    /// Set the weight of the row with the given key. Returns `false` when
    /// no row matched.
    pub fn update_weight(&mut self, reading: &str, text: &str, weight: i32) -> bool {
        match self.entries.iter_mut().find(|e| e.key() == (reading, text)) {
            Some(entry) => {
                entry.weight = weight;
                true
            }
            None => false,
        }
    }
}
