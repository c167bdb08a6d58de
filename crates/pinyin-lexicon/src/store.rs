// The layered lexicon store: ordered partitions, unioned queries,
// learned-partition mutations.

use hashbrown::HashSet;
use pinyin_core::{LexiconEntry, SortBy};

use crate::partition::{Partition, PartitionKind};
use crate::query::QuerySpec;

/// An ordered set of overlaid partitions.
///
/// Index 0 is the system partition, index 1 the learned partition; user
/// partitions follow. The store exclusively owns all partitions and their
/// rows; query results are cloned out.
#[derive(Debug)]
pub struct LexiconStore {
    partitions: Vec<Partition>,
}

impl LexiconStore {
    /// Build a store over the two privileged partitions.
    pub fn new(system: Partition, learned: Partition) -> Self {
        Self {
            partitions: vec![system, learned],
        }
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    fn learned_mut(&mut self) -> &mut Partition {
        &mut self.partitions[1]
    }

    fn learned(&self) -> &Partition {
        &self.partitions[1]
    }

    /// Attach a user partition after the privileged two.
    pub fn attach_user(&mut self, partition: Partition) {
        self.partitions.push(partition);
    }

    /// Detach the user partition with the given name. Returns `false` when
    /// no user partition matched.
    pub fn detach_user(&mut self, name: &str) -> bool {
        let before = self.partitions.len();
        self.partitions
            .retain(|p| p.kind() != PartitionKind::User || p.name() != name);
        self.partitions.len() != before
    }

    /// Drop every user partition.
    pub fn clear_user(&mut self) {
        self.partitions.retain(|p| p.kind() != PartitionKind::User);
    }

    /// Execute a query: union across partitions in order, deduplicate by
    /// `(reading, text)` keeping the first occurrence, then stable-sort
    /// descending by the requested key so ties keep partition and
    /// insertion order.
    pub fn query(&self, spec: &QuerySpec) -> Vec<LexiconEntry> {
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        let mut out: Vec<LexiconEntry> = Vec::new();
        for partition in &self.partitions {
            for entry in partition.entries() {
                if spec.matches(entry) && seen.insert(entry.key()) {
                    out.push(entry.clone());
                }
            }
        }
        match spec.sort {
            SortBy::Weight => out.sort_by(|a, b| b.weight.cmp(&a.weight)),
            SortBy::Priority => out.sort_by(|a, b| b.priority.cmp(&a.priority)),
            SortBy::Unsorted => {}
        }
        out
    }

    /// Whether any partition holds the `(reading, text)` pair.
    pub fn contains(&self, reading: &str, text: &str) -> bool {
        self.partitions.iter().any(|p| p.contains(reading, text))
    }

    /// Insert a row into the learned partition. Returns `false` when the
    /// learned partition already holds the key.
    pub fn insert_learned(&mut self, entry: LexiconEntry) -> bool {
        self.learned_mut().insert(entry)
    }

    /// Delete the `(reading, text)` pair from every partition that accepts
    /// deletions. Returns the total number of rows removed.
    pub fn delete_entry(&mut self, reading: &str, text: &str) -> usize {
        self.partitions
            .iter_mut()
            .filter(|p| p.accepts_deletes())
            .map(|p| p.remove(reading, text))
            .sum()
    }

    /// Bump the learned partition's matching row to the given weight.
    /// Returns `false` when the learned partition holds no such row.
    pub fn update_learned_weight(&mut self, reading: &str, text: &str, weight: i32) -> bool {
        self.learned_mut().update_weight(reading, text, weight)
    }

    /// Whether the learned partition holds the `(reading, text)` pair.
    pub fn learned_contains(&self, reading: &str, text: &str) -> bool {
        self.learned().contains(reading, text)
    }
}
