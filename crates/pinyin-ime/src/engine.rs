// PinyinEngine: top-level integration point for the input engine.
//
// Owns all components (syllable grammar, layered lexicon store, query
// cache) and provides the public surface: search with candidate paging,
// and the learn/forget/promote mutations.
//
// Design notes:
// - The engine is a plain value; several engines may coexist, each owning
//   an independent store and cache.
// - The query cache sits behind a RefCell: the read path takes `&self`
//   but memoization needs `&mut` cache access.
// - One search holds its divided reading and the three generator outputs
//   until the next search or any mutation resets the engine to idle.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use pinyin_core::enums::SEPARATOR;
use pinyin_core::{
    Candidate, CandidateInfo, DividedString, LexiconEntry, QueryMode, SortBy, SyllableGrammar,
};
use pinyin_lexicon::tsv;
use pinyin_lexicon::{LexiconError, LexiconStore, Partition, PartitionKind, QueryCache, QuerySpec};

use crate::generator::combine::CombineOptions;
use crate::generator::{combine, direct, hanzi, QueryContext};
use crate::segmenter::Segmenter;

/// Candidates shown per page unless the caller overrides it.
const DEFAULT_PAGE_SIZE: usize = 5;

/// Error type for engine construction and candidate access.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A backing lexicon could not be opened or parsed. Previously
    /// attached partitions are left untouched.
    #[error("failed to open lexicon {}: {source}", path.display())]
    StoreUnavailable {
        path: PathBuf,
        source: LexiconError,
    },

    /// Candidate index past the end of the current result set. Callers
    /// rely on this to stop paging.
    #[error("candidate index {index} out of range ({count} candidates)")]
    IndexOutOfRange { index: usize, count: usize },

    /// A reading passed to learn/promote is not made of complete,
    /// grammar-valid syllables.
    #[error("not a valid syllable reading: {0:?}")]
    InvalidReading(String),
}

/// Where the engine stands relative to the last `search` call.
#[derive(Debug)]
enum SearchState {
    /// No search yet, or a mutation reset the engine.
    Idle,
    /// The last input failed validation.
    Rejected,
    /// The last search succeeded; results are held until the next
    /// search or mutation.
    Ready(SearchResult),
}

/// Everything one successful search produced.
#[derive(Debug)]
struct SearchResult {
    divided: DividedString,
    /// Combine and associate candidates, in fixed emission order.
    combined: Vec<Candidate>,
    /// Direct matches, all levels flattened longest-prefix-first.
    direct: Vec<Candidate>,
    /// Single-character fallbacks for the first syllable.
    fallback: Vec<Candidate>,
}

/// The Pinyin-to-Hanzi input engine.
#[derive(Debug)]
pub struct PinyinEngine {
    grammar: SyllableGrammar,
    store: LexiconStore,
    /// Memoized read results, flushed wholesale on every mutation.
    cache: RefCell<QueryCache>,
    state: SearchState,
    page_size: usize,
    enable_combine: bool,
    enable_associate: bool,
}

impl PinyinEngine {
    /// Open an engine over TSV-backed system and learned lexica.
    ///
    /// A missing learned file starts an empty learned partition (it is
    /// created by use); a missing or unparsable system file is an error.
    pub fn open(
        system_path: impl AsRef<Path>,
        learned_path: impl AsRef<Path>,
    ) -> Result<Self, EngineError> {
        let system_path = system_path.as_ref();
        let system = tsv::load_partition(PartitionKind::System, "system", system_path).map_err(
            |source| EngineError::StoreUnavailable {
                path: system_path.to_path_buf(),
                source,
            },
        )?;
        let learned_path = learned_path.as_ref();
        let learned = if learned_path.exists() {
            tsv::load_partition(PartitionKind::Learned, "learned", learned_path).map_err(
                |source| EngineError::StoreUnavailable {
                    path: learned_path.to_path_buf(),
                    source,
                },
            )?
        } else {
            Partition::new(PartitionKind::Learned, "learned")
        };
        Ok(Self::from_partitions(system, learned))
    }

    /// Build an engine over in-memory partitions.
    pub fn from_partitions(system: Partition, learned: Partition) -> Self {
        Self {
            grammar: SyllableGrammar::new(),
            store: LexiconStore::new(system, learned),
            cache: RefCell::new(QueryCache::new()),
            state: SearchState::Idle,
            page_size: DEFAULT_PAGE_SIZE,
            enable_combine: true,
            enable_associate: true,
        }
    }

    // =========================================================================
    // User lexica
    // =========================================================================

    /// Attach a TSV-backed user lexicon. On failure nothing is attached
    /// and previously attached partitions stay intact.
    pub fn add_user_lexicon(&mut self, path: impl AsRef<Path>) -> Result<(), EngineError> {
        let path = path.as_ref();
        let name = path.to_string_lossy().into_owned();
        let partition = tsv::load_partition(PartitionKind::User, name, path).map_err(|source| {
            EngineError::StoreUnavailable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        self.store.attach_user(partition);
        self.reset();
        Ok(())
    }

    /// Attach an in-memory user partition.
    pub fn attach_user_partition(&mut self, partition: Partition) {
        self.store.attach_user(partition);
        self.reset();
    }

    /// Detach the user lexicon attached under `path`. Returns `false`
    /// when no such lexicon is attached.
    pub fn remove_user_lexicon(&mut self, path: impl AsRef<Path>) -> bool {
        let name = path.as_ref().to_string_lossy().into_owned();
        let removed = self.store.detach_user(&name);
        if removed {
            self.reset();
        }
        removed
    }

    /// Detach every user lexicon.
    pub fn clear_user_lexica(&mut self) {
        self.store.clear_user();
        self.reset();
    }

    // =========================================================================
    // Options
    // =========================================================================

    /// Set the paging window, clamped to at least one candidate.
    pub fn set_page_size(&mut self, n: usize) {
        self.page_size = n.max(1);
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Enable or disable synthesized combine candidates.
    pub fn set_enable_combine(&mut self, value: bool) {
        self.enable_combine = value;
    }

    /// Enable or disable fuzzy associate candidates.
    pub fn set_enable_associate(&mut self, value: bool) {
        self.enable_associate = value;
    }

    /// Drop every memoized query result. Results of the next search are
    /// identical either way; the cache is an optimization only.
    pub fn reset_cache(&mut self) {
        self.cache.borrow_mut().reset_all();
    }

    // =========================================================================
    // Search and candidate access
    // =========================================================================

    /// Run one search. Returns `false` (and rejects the engine state)
    /// for malformed input: empty, leading separator, doubled separator,
    /// or characters outside lowercase letters and the separator.
    pub fn search(&mut self, input: &str) -> bool {
        self.state = SearchState::Idle;
        if !valid_input(input) {
            self.state = SearchState::Rejected;
            return false;
        }
        let divided = Segmenter::new(&self.grammar).segment(input);
        if divided.is_empty() {
            self.state = SearchState::Rejected;
            return false;
        }
        let (combined, direct, fallback) = {
            let ctx = QueryContext::new(&self.store, &self.cache);
            let options = CombineOptions {
                enable_combine: self.enable_combine,
                enable_associate: self.enable_associate,
            };
            (
                combine::generate(&self.grammar, &ctx, &divided, options),
                direct::generate(&self.grammar, &ctx, &divided),
                hanzi::generate(&self.grammar, &ctx, &divided),
            )
        };
        self.state = SearchState::Ready(SearchResult {
            divided,
            combined,
            direct,
            fallback,
        });
        true
    }

    /// The divided reading of the last successful search, or empty.
    pub fn divided_pinyin(&self) -> &str {
        match &self.state {
            SearchState::Ready(result) => result.divided.as_str(),
            _ => "",
        }
    }

    /// Total candidates across all three strategies.
    pub fn candidate_count(&self) -> usize {
        let (combined, direct, fallback) = self.parts();
        combined.len() + direct.len() + fallback.len()
    }

    /// A slice of candidate texts from the virtual concatenated sequence
    /// (combine/associate, then direct levels, then fallback characters).
    /// `count` is clamped to the remaining length; an `index` past the end
    /// is an error.
    pub fn candidates(&self, index: usize, count: usize) -> Result<Vec<String>, EngineError> {
        let total = self.candidate_count();
        if index >= total {
            return Err(EngineError::IndexOutOfRange {
                index,
                count: total,
            });
        }
        Ok(self
            .iter_candidates()
            .skip(index)
            .take(count)
            .map(|c| c.text.clone())
            .collect())
    }

    /// Detail view of one candidate.
    pub fn candidate_info(&self, index: usize) -> Result<CandidateInfo, EngineError> {
        let total = self.candidate_count();
        let Some(candidate) = self.iter_candidates().nth(index) else {
            return Err(EngineError::IndexOutOfRange {
                index,
                count: total,
            });
        };
        let divided_prefix = match &self.state {
            SearchState::Ready(result) => result.divided.prefix(candidate.syllable_span),
            _ => String::new(),
        };
        Ok(CandidateInfo {
            can_forget: candidate.can_forget(),
            reading: candidate.reading.clone(),
            text: candidate.text.clone(),
            divided_prefix,
        })
    }

    fn parts(&self) -> (&[Candidate], &[Candidate], &[Candidate]) {
        match &self.state {
            SearchState::Ready(result) => (&result.combined, &result.direct, &result.fallback),
            _ => (&[], &[], &[]),
        }
    }

    fn iter_candidates(&self) -> impl Iterator<Item = &Candidate> {
        let (combined, direct, fallback) = self.parts();
        combined.iter().chain(direct).chain(fallback)
    }

    // =========================================================================
    // Learning
    // =========================================================================

    /// Add a `(reading, text)` pair to the learned partition. Returns
    /// `Ok(true)` when the pair already existed in any partition
    /// (idempotent); new rows rank one above the heaviest entry sharing
    /// the reading's first-letter pattern.
    pub fn learn(&mut self, reading: &str, text: &str) -> Result<bool, EngineError> {
        let syllables = self.validate_reading(reading)?;
        if self.store.contains(reading, text) {
            self.reset();
            return Ok(true);
        }
        let weight = self.max_weight_for_pattern(&syllables) + 1;
        self.store
            .insert_learned(LexiconEntry::new(reading, text, weight, weight));
        self.reset();
        Ok(false)
    }

    /// Delete a `(reading, text)` pair from every partition that accepts
    /// deletions. Always flushes the cache and resets the engine state;
    /// succeeds even when no row matched.
    pub fn forget(&mut self, reading: &str, text: &str) -> bool {
        self.store.delete_entry(reading, text);
        self.reset();
        true
    }

    /// Bump the learned partition's matching row above every entry
    /// sharing the reading's first-letter pattern. Returns `false` when
    /// the learned partition holds no such row.
    pub fn promote(&mut self, reading: &str, text: &str) -> bool {
        let Ok(syllables) = self.validate_reading(reading) else {
            return false;
        };
        let weight = self.max_weight_for_pattern(&syllables) + 1;
        let updated = self.store.update_learned_weight(reading, text, weight);
        self.reset();
        updated
    }

    /// Flush the cache and drop the held search result.
    fn reset(&mut self) {
        self.cache.borrow_mut().reset_all();
        self.state = SearchState::Idle;
    }

    /// Split a reading and require every syllable to be complete.
    fn validate_reading<'r>(&self, reading: &'r str) -> Result<Vec<&'r str>, EngineError> {
        if !valid_input(reading) {
            return Err(EngineError::InvalidReading(reading.to_string()));
        }
        let syllables: Vec<&str> = reading.split(SEPARATOR).filter(|s| !s.is_empty()).collect();
        if syllables.is_empty() || !syllables.iter().all(|s| self.grammar.is_complete(s)) {
            return Err(EngineError::InvalidReading(reading.to_string()));
        }
        Ok(syllables)
    }

    /// The heaviest weight among entries whose initials match the given
    /// syllables letter for letter (fuzzy first-letter pattern, exact
    /// syllable count), or 0 when nothing matches.
    fn max_weight_for_pattern(&self, syllables: &[&str]) -> i32 {
        let pattern: Vec<&str> = syllables.iter().map(|s| &s[..1]).collect();
        let spec = QuerySpec::exact(pattern.join(&SEPARATOR.to_string()))
            .with_mode(QueryMode::Fuzzy)
            .with_count(syllables.len())
            .sorted_by(SortBy::Weight);
        self.store
            .query(&spec)
            .first()
            .map_or(0, |entry| entry.weight)
    }
}

/// Input validation shared by `search` and the mutation surface.
fn valid_input(input: &str) -> bool {
    if input.is_empty() || input.starts_with(SEPARATOR) {
        return false;
    }
    let mut previous_was_separator = false;
    for c in input.chars() {
        if c.is_ascii_lowercase() {
            previous_was_separator = false;
        } else if c == SEPARATOR {
            if previous_was_separator {
                return false;
            }
            previous_was_separator = true;
        } else {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(reading: &str, text: &str, weight: i32, priority: i32) -> LexiconEntry {
        LexiconEntry::new(reading, text, weight, priority)
    }

    fn fixture_engine() -> PinyinEngine {
        let system = Partition::from_entries(
            PartitionKind::System,
            "system",
            vec![
                entry("ni", "你", 900, 9),
                entry("ni", "拟", 100, 1),
                entry("hao", "好", 800, 8),
                entry("ni'hao", "你好", 700, 7),
                entry("ni'hao'ma", "你好吗", 200, 2),
                entry("wo", "我", 950, 9),
                entry("de", "的", 990, 9),
                entry("zai", "在", 900, 9),
                entry("zhe", "这", 800, 8),
                entry("li", "里", 500, 5),
                entry("zhe'li", "这里", 650, 6),
                entry("ba", "把", 700, 7),
                entry("ba", "八", 600, 6),
            ],
        );
        let learned = Partition::new(PartitionKind::Learned, "learned");
        PinyinEngine::from_partitions(system, learned)
    }

    // =========================================================================
    // Input validation
    // =========================================================================

    #[test]
    fn rejects_malformed_input() {
        let mut engine = fixture_engine();
        assert!(!engine.search(""));
        assert!(!engine.search("'nihao"));
        assert!(!engine.search("ni''hao"));
        assert!(!engine.search("ni hao"));
        assert!(!engine.search("niHao"));
        assert!(!engine.search("ni1hao"));
    }

    #[test]
    fn rejected_search_leaves_empty_results() {
        let mut engine = fixture_engine();
        assert!(!engine.search("''"));
        assert_eq!(engine.candidate_count(), 0);
        assert_eq!(engine.divided_pinyin(), "");
        assert!(engine.candidates(0, 1).is_err());
    }

    #[test]
    fn trailing_separator_is_accepted() {
        let mut engine = fixture_engine();
        assert!(engine.search("nihao'"));
        assert_eq!(engine.divided_pinyin(), "ni'hao");
    }

    // =========================================================================
    // Search and candidate ordering
    // =========================================================================

    #[test]
    fn search_divides_and_generates() {
        let mut engine = fixture_engine();
        assert!(engine.search("nihao"));
        assert_eq!(engine.divided_pinyin(), "ni'hao");
        assert!(engine.candidate_count() > 0);
    }

    #[test]
    fn direct_match_ranks_phrase_above_fallback() {
        let mut engine = fixture_engine();
        assert!(engine.search("nihao"));
        let texts = engine.candidates(0, engine.candidate_count()).unwrap();
        let phrase = texts.iter().position(|t| t == "你好").unwrap();
        // The full-input phrase surfaces before the single-character
        // fallbacks at the tail.
        let fallback_start = texts.len() - 2; // 你, 拟 fallback characters
        assert!(phrase < fallback_start);
    }

    #[test]
    fn combine_covers_input_without_full_phrase() {
        let mut engine = fixture_engine();
        assert!(engine.search("wozaizheli"));
        assert_eq!(engine.divided_pinyin(), "wo'zai'zhe'li");
        assert!(engine.candidate_count() > 0);
        let texts = engine.candidates(0, 1).unwrap();
        assert_eq!(texts, ["我在这里"]);
    }

    #[test]
    fn bare_initial_falls_back_to_characters() {
        let mut engine = fixture_engine();
        assert!(engine.search("b"));
        // Direct prefix matches on the partial syllable, then the
        // fallback characters for its canonical completion "ba".
        let texts = engine.candidates(0, engine.candidate_count()).unwrap();
        assert_eq!(texts, ["把", "八", "把", "八"]);
        let last = engine.candidate_info(texts.len() - 1).unwrap();
        assert!(!last.can_forget);
        assert_eq!(last.reading, "ba");
    }

    #[test]
    fn virtual_order_is_combine_direct_fallback() {
        let mut engine = fixture_engine();
        assert!(engine.search("nihaoma"));
        // No 3-syllable combine build (full phrase "ni'hao'ma" aborts it),
        // associates first, then direct levels, then fallback characters.
        let infos: Vec<CandidateInfo> = (0..engine.candidate_count())
            .map(|i| engine.candidate_info(i).unwrap())
            .collect();
        let first_fallback = infos
            .iter()
            .position(|info| !info.can_forget)
            .unwrap_or(infos.len());
        // Every candidate before the fallback block is store-backed.
        assert!(infos[..first_fallback].iter().all(|i| i.can_forget));
    }

    // =========================================================================
    // Paging
    // =========================================================================

    #[test]
    fn count_is_clamped_to_remaining() {
        let mut engine = fixture_engine();
        assert!(engine.search("b"));
        let total = engine.candidate_count();
        let texts = engine.candidates(total - 1, 99).unwrap();
        assert_eq!(texts.len(), 1);
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let mut engine = fixture_engine();
        assert!(engine.search("nihao"));
        let total = engine.candidate_count();
        match engine.candidates(total, 1) {
            Err(EngineError::IndexOutOfRange { index, count }) => {
                assert_eq!(index, total);
                assert_eq!(count, total);
            }
            other => panic!("expected IndexOutOfRange, got: {other:?}"),
        }
        assert!(engine.candidate_info(total).is_err());
    }

    #[test]
    fn page_size_is_clamped() {
        let mut engine = fixture_engine();
        engine.set_page_size(0);
        assert_eq!(engine.page_size(), 1);
        engine.set_page_size(9);
        assert_eq!(engine.page_size(), 9);
    }

    #[test]
    fn candidate_info_reports_consumed_prefix() {
        let mut engine = fixture_engine();
        assert!(engine.search("nihao"));
        let texts = engine.candidates(0, engine.candidate_count()).unwrap();
        let idx = texts.iter().position(|t| t == "你好").unwrap();
        let info = engine.candidate_info(idx).unwrap();
        assert_eq!(info.reading, "ni'hao");
        assert_eq!(info.divided_prefix, "ni'hao");
        assert!(info.can_forget);
        // A single-character fallback consumes one syllable.
        let last = engine.candidate_info(texts.len() - 1).unwrap();
        assert_eq!(last.divided_prefix, "ni");
        assert!(!last.can_forget);
    }

    // =========================================================================
    // Learning
    // =========================================================================

    #[test]
    fn learn_is_idempotent() {
        let mut engine = fixture_engine();
        assert_eq!(engine.learn("wo'de", "我的").unwrap(), false);
        assert_eq!(engine.learn("wo'de", "我的").unwrap(), true);
    }

    #[test]
    fn learned_entry_is_searchable_immediately() {
        let mut engine = fixture_engine();
        engine.learn("wo'de", "我的").unwrap();
        assert!(engine.search("wode"));
        let texts = engine.candidates(0, engine.candidate_count()).unwrap();
        assert!(texts.contains(&"我的".to_string()));
    }

    #[test]
    fn learn_ranks_above_same_pattern_entries() {
        let mut engine = fixture_engine();
        engine.learn("ni'hen", "你狠").unwrap();
        // Pattern "n'h" tops out at ni'hao (700); the new row lands at 701.
        assert!(engine.search("nihen"));
        let texts = engine.candidates(0, 3).unwrap();
        assert!(texts.contains(&"你狠".to_string()));
        let learned = engine
            .store
            .query(&QuerySpec::exact("ni'hen"))
            .remove(0);
        assert_eq!(learned.weight, 701);
        assert_eq!(learned.priority, 701);
    }

    #[test]
    fn learn_rejects_invalid_readings() {
        let mut engine = fixture_engine();
        assert!(engine.learn("", "x").is_err());
        assert!(engine.learn("n'hao", "你好").is_err()); // partial syllable
        assert!(engine.learn("xyz", "x").is_err());
    }

    #[test]
    fn forget_removes_learned_rows_and_reports_success_on_miss() {
        let mut engine = fixture_engine();
        engine.learn("wo'de", "我的").unwrap();
        assert!(engine.forget("wo'de", "我的"));
        assert!(!engine.store.contains("wo'de", "我的"));
        // Forgetting a pair that was never learned still succeeds.
        assert!(engine.forget("wo'de", "我的"));
        // System rows are not deletable.
        assert!(engine.forget("ni'hao", "你好"));
        assert!(engine.store.contains("ni'hao", "你好"));
    }

    #[test]
    fn promote_bumps_learned_rows_only() {
        let mut engine = fixture_engine();
        engine.learn("ni'hen", "你狠").unwrap();
        // Push a heavier sibling, then promote the learned row past it.
        engine.learn("nin'hao", "您好").unwrap();
        assert!(engine.promote("ni'hen", "你狠"));
        let row = engine.store.query(&QuerySpec::exact("ni'hen")).remove(0);
        assert!(row.weight > 701);
        // Promoting a system-only or unknown pair fails.
        assert!(!engine.promote("ni'hao", "你好"));
        assert!(!engine.promote("hen'hao", "很好"));
    }

    #[test]
    fn mutation_resets_search_state() {
        let mut engine = fixture_engine();
        assert!(engine.search("nihao"));
        assert!(engine.candidate_count() > 0);
        engine.learn("wo'de", "我的").unwrap();
        assert_eq!(engine.candidate_count(), 0);
        assert_eq!(engine.divided_pinyin(), "");
    }

    #[test]
    fn mutation_invalidates_cached_queries() {
        let mut engine = fixture_engine();
        assert!(engine.search("nihao"));
        let before = engine.candidates(0, engine.candidate_count()).unwrap();
        assert!(!before.contains(&"妮好".to_string()));
        engine.learn("ni'hao", "妮好").unwrap();
        assert!(engine.search("nihao"));
        let after = engine.candidates(0, engine.candidate_count()).unwrap();
        assert!(after.contains(&"妮好".to_string()));
    }

    #[test]
    fn cache_is_transparent() {
        let mut engine = fixture_engine();
        assert!(engine.search("nihao"));
        let cold = engine.candidates(0, engine.candidate_count()).unwrap();
        // Second search over a warm cache.
        assert!(engine.search("nihao"));
        let warm = engine.candidates(0, engine.candidate_count()).unwrap();
        assert_eq!(cold, warm);
        // And again after an explicit flush.
        engine.reset_cache();
        assert!(engine.search("nihao"));
        let flushed = engine.candidates(0, engine.candidate_count()).unwrap();
        assert_eq!(cold, flushed);
    }

    // =========================================================================
    // User lexica
    // =========================================================================

    #[test]
    fn user_partition_contributes_candidates() {
        let mut engine = fixture_engine();
        let user = Partition::from_entries(
            PartitionKind::User,
            "names",
            vec![entry("ni'hao", "妮蒿", 10, 0)],
        );
        engine.attach_user_partition(user);
        assert!(engine.search("nihao"));
        let texts = engine.candidates(0, engine.candidate_count()).unwrap();
        assert!(texts.contains(&"妮蒿".to_string()));
        engine.clear_user_lexica();
        assert!(engine.search("nihao"));
        let texts = engine.candidates(0, engine.candidate_count()).unwrap();
        assert!(!texts.contains(&"妮蒿".to_string()));
    }

    #[test]
    fn missing_store_is_unavailable() {
        let err = PinyinEngine::open("/nonexistent/system.tsv", "/nonexistent/learned.tsv")
            .unwrap_err();
        assert!(matches!(err, EngineError::StoreUnavailable { .. }));
    }

    #[test]
    fn missing_learned_file_starts_empty() {
        let dir = std::env::temp_dir();
        let system_path = dir.join("pinyin_ime_engine_test_system.tsv");
        std::fs::write(&system_path, "ni'hao\t你好\t700\n").unwrap();
        let learned_path = dir.join("pinyin_ime_engine_test_learned_missing.tsv");
        let _ = std::fs::remove_file(&learned_path);
        let mut engine = PinyinEngine::open(&system_path, &learned_path).unwrap();
        assert!(engine.search("nihao"));
        assert!(engine.candidate_count() > 0);
        let _ = std::fs::remove_file(&system_path);
    }
}
