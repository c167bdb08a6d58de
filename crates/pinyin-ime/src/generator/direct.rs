// Direct phrase lookups at every prefix length, longest first.

use pinyin_core::{Candidate, CandidateKind, DividedString, QueryMode, SortBy, SyllableGrammar};
use pinyin_lexicon::{CacheId, QuerySpec};

use super::QueryContext;

/// Emit store matches level by level: the whole input first, then one
/// trailing syllable trimmed per level. Within a level the store order
/// (weight-descending) is preserved. A level whose last syllable is still
/// partial matches by prefix on that syllable.
pub fn generate(
    grammar: &SyllableGrammar,
    ctx: &QueryContext<'_>,
    divided: &DividedString,
) -> Vec<Candidate> {
    let syllables: Vec<&str> = divided.syllables().collect();
    let mut out = Vec::new();
    for level in (1..=syllables.len()).rev() {
        let reading = divided.prefix(level);
        let mode = if grammar.is_complete(syllables[level - 1]) {
            QueryMode::Exact
        } else {
            QueryMode::Prefix
        };
        let spec = QuerySpec::exact(reading)
            .with_mode(mode)
            .with_count(level)
            .sorted_by(SortBy::Weight);
        for entry in ctx.query(CacheId::Direct, &spec) {
            out.push(Candidate::new(
                CandidateKind::Query,
                level,
                entry.reading,
                entry.text,
            ));
        }
    }
    out
}
