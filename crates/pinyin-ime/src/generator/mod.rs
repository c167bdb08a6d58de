// Candidate generation strategies.
//
// Three independent strategies consume the divided reading produced by the
// segmenter: direct phrase lookups at every prefix length, synthesized
// combine/associate candidates, and single-character fallbacks for the
// first syllable. All lexicon reads go through the shared QueryContext so
// results are memoized per strategy.

pub mod combine;
pub mod direct;
pub mod hanzi;

use std::cell::RefCell;

use pinyin_core::{LexiconEntry, SortBy, SyllableGrammar};
use pinyin_lexicon::{CacheId, LexiconStore, QueryCache, QuerySpec};

/// Shared read-path plumbing handed to every generator for one search.
pub struct QueryContext<'a> {
    store: &'a LexiconStore,
    cache: &'a RefCell<QueryCache>,
}

impl<'a> QueryContext<'a> {
    pub fn new(store: &'a LexiconStore, cache: &'a RefCell<QueryCache>) -> Self {
        Self { store, cache }
    }

    /// Run a query through the memoization layer. The cache key is the
    /// spec's reading string; the `id` keeps differently-sorted strategies
    /// apart.
    pub fn query(&self, id: CacheId, spec: &QuerySpec) -> Vec<LexiconEntry> {
        self.cache
            .borrow_mut()
            .get_or_compute(id, &spec.reading, || self.store.query(spec))
    }

    /// Every single-character reading of a (possibly partial) syllable,
    /// weight-descending. Empty when the grammar cannot complete it.
    pub fn char_readings(
        &self,
        grammar: &SyllableGrammar,
        syllable: &str,
    ) -> Vec<LexiconEntry> {
        let Some(completed) = grammar.canonical_completion(syllable) else {
            return Vec::new();
        };
        let spec = QuerySpec::exact(completed)
            .with_count(1)
            .sorted_by(SortBy::Weight);
        self.query(CacheId::Direct, &spec)
    }

    /// The top-weighted single-character reading of a syllable.
    pub fn top_char(&self, grammar: &SyllableGrammar, syllable: &str) -> Option<LexiconEntry> {
        self.char_readings(grammar, syllable).into_iter().next()
    }
}
