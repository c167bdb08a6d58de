// Single-character readings for the first syllable, always available.

use pinyin_core::{Candidate, CandidateKind, DividedString, SyllableGrammar};

use super::QueryContext;

/// Resolve the first syllable's canonical completion and emit every
/// single-character reading registered for it, in lexicon (weight) order.
pub fn generate(
    grammar: &SyllableGrammar,
    ctx: &QueryContext<'_>,
    divided: &DividedString,
) -> Vec<Candidate> {
    let Some(first) = divided.syllables().next() else {
        return Vec::new();
    };
    ctx.char_readings(grammar, first)
        .into_iter()
        .map(|entry| Candidate::new(CandidateKind::Hanzi, 1, entry.reading, entry.text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use pinyin_core::LexiconEntry;
    use pinyin_lexicon::{LexiconStore, Partition, PartitionKind, QueryCache};

    fn fixture_store() -> LexiconStore {
        let system = Partition::from_entries(
            PartitionKind::System,
            "system",
            vec![
                LexiconEntry::new("ba", "把", 700, 7),
                LexiconEntry::new("ba", "八", 600, 6),
                LexiconEntry::new("ba", "爸", 500, 5),
                LexiconEntry::new("ba'ba", "爸爸", 400, 4),
                LexiconEntry::new("ni", "你", 900, 9),
            ],
        );
        LexiconStore::new(system, Partition::new(PartitionKind::Learned, "learned"))
    }

    fn run(divided: &str) -> Vec<Candidate> {
        let grammar = SyllableGrammar::new();
        let store = fixture_store();
        let cache = RefCell::new(QueryCache::new());
        let ctx = QueryContext::new(&store, &cache);
        generate(&grammar, &ctx, &DividedString::new(divided))
    }

    #[test]
    fn bare_initial_completes_canonically() {
        // canonical_completion("b") == "ba": all three characters, by weight.
        let out = run("b");
        let texts: Vec<&str> = out.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["把", "八", "爸"]);
        assert!(out.iter().all(|c| c.kind == CandidateKind::Hanzi));
        assert!(out.iter().all(|c| c.syllable_span == 1));
        assert!(out.iter().all(|c| c.reading == "ba"));
    }

    #[test]
    fn only_the_first_syllable_is_consulted() {
        let out = run("ni'hao");
        let texts: Vec<&str> = out.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["你"]);
    }

    #[test]
    fn multi_character_entries_are_not_characters() {
        // "ba'ba" has two syllables and never matches the count-1 query.
        let out = run("ba");
        assert!(out.iter().all(|c| c.text.chars().count() == 1));
    }

    #[test]
    fn unknown_syllable_yields_nothing() {
        let out = run("zu");
        assert!(out.is_empty());
    }

    #[test]
    fn empty_input_yields_nothing() {
        let out = run("");
        assert!(out.is_empty());
    }
}
