// Memoized read results, one namespace per asking strategy.

use hashbrown::HashMap;
use pinyin_core::LexiconEntry;

/// Which strategy is asking. Each id is its own namespace so the same
/// reading key never collides across differently-sorted queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheId {
    /// Weight-sorted exact/prefix lookups (direct match, fallback characters).
    Direct,
    /// Priority-sorted exact lookups (greedy combine).
    Combine,
    /// Weight-sorted fuzzy whole-input lookups.
    Associate,
}

const CACHE_ID_COUNT: usize = 3;

fn slot(id: CacheId) -> usize {
    match id {
        CacheId::Direct => 0,
        CacheId::Combine => 1,
        CacheId::Associate => 2,
    }
}

/// Per-process memoization of resolved lexicon rows, keyed by the exact
/// separated reading string within each [`CacheId`] namespace.
///
/// The cache is unbounded for the process lifetime; the owning engine
/// flushes it wholesale with [`QueryCache::reset_all`] on every lexicon
/// mutation. It holds cloned rows only and never owns partition data.
#[derive(Debug)]
pub struct QueryCache {
    entries: [HashMap<String, Vec<LexiconEntry>>; CACHE_ID_COUNT],
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            entries: Default::default(),
        }
    }

    /// Return the memoized rows for `(id, key)`, computing and storing
    /// them on a miss.
    pub fn get_or_compute(
        &mut self,
        id: CacheId,
        key: &str,
        compute: impl FnOnce() -> Vec<LexiconEntry>,
    ) -> Vec<LexiconEntry> {
        let map = &mut self.entries[slot(id)];
        if let Some(rows) = map.get(key) {
            return rows.clone();
        }
        let rows = compute();
        map.insert(key.to_string(), rows.clone());
        rows
    }

    /// Drop every memoized result across all ids.
    pub fn reset_all(&mut self) {
        for map in &mut self.entries {
            map.clear();
        }
    }

    /// Total number of memoized keys across all ids.
    pub fn len(&self) -> usize {
        self.entries.iter().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(reading: &str, text: &str) -> LexiconEntry {
        LexiconEntry::new(reading, text, 0, 0)
    }

    #[test]
    fn miss_computes_and_stores() {
        let mut cache = QueryCache::new();
        let rows = cache.get_or_compute(CacheId::Direct, "ni'hao", || {
            vec![row("ni'hao", "你好")]
        });
        assert_eq!(rows.len(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn hit_skips_compute() {
        let mut cache = QueryCache::new();
        cache.get_or_compute(CacheId::Direct, "ni", || vec![row("ni", "你")]);
        let rows = cache.get_or_compute(CacheId::Direct, "ni", || {
            panic!("compute must not run on a hit")
        });
        assert_eq!(rows[0].text, "你");
    }

    #[test]
    fn same_key_different_ids_do_not_collide() {
        let mut cache = QueryCache::new();
        cache.get_or_compute(CacheId::Direct, "ni", || vec![row("ni", "你")]);
        let rows = cache.get_or_compute(CacheId::Combine, "ni", || vec![row("ni", "妮")]);
        assert_eq!(rows[0].text, "妮");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn empty_results_are_memoized_too() {
        let mut cache = QueryCache::new();
        cache.get_or_compute(CacheId::Associate, "xx", Vec::new);
        let rows = cache.get_or_compute(CacheId::Associate, "xx", || {
            panic!("compute must not run on a hit")
        });
        assert!(rows.is_empty());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn reset_all_clears_every_id() {
        let mut cache = QueryCache::new();
        cache.get_or_compute(CacheId::Direct, "a", Vec::new);
        cache.get_or_compute(CacheId::Combine, "b", Vec::new);
        cache.get_or_compute(CacheId::Associate, "c", Vec::new);
        cache.reset_all();
        assert!(cache.is_empty());
    }
}
