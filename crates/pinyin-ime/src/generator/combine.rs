// Synthesized multi-chunk candidates and fuzzy associate expansions.
//
// Used when no single phrase covers the whole input: a greedy walk chains
// the longest priority-ranked match at each position, falling back to
// single-character readings where the lexicon has no phrase. Associate
// candidates are fuzzy whole-input expansions. The emission order
// (combine-from-first, associates, one optional variant) is fixed; paging
// indexes into it positionally.

use pinyin_core::enums::SEPARATOR;
use pinyin_core::{hanzi, Candidate, CandidateKind, DividedString, QueryMode, SortBy, SyllableGrammar};
use pinyin_lexicon::{CacheId, QuerySpec};

use super::QueryContext;

/// Strategy switches, both on by default.
#[derive(Debug, Clone, Copy)]
pub struct CombineOptions {
    pub enable_combine: bool,
    pub enable_associate: bool,
}

impl Default for CombineOptions {
    fn default() -> Self {
        Self {
            enable_combine: true,
            enable_associate: true,
        }
    }
}

/// One greedy chain over the syllables from some start index.
#[derive(Debug, Clone)]
struct CombineBuild {
    /// Separated reading of the chained chunks.
    reading: String,
    /// Concatenated chunk texts.
    text: String,
    /// Syllables consumed by the first chunk.
    first_span: usize,
    /// Text of the first chunk.
    first_text: String,
}

pub fn generate(
    grammar: &SyllableGrammar,
    ctx: &QueryContext<'_>,
    divided: &DividedString,
    options: CombineOptions,
) -> Vec<Candidate> {
    if !divided.has_boundary() {
        // A single syllable has nothing to combine.
        return Vec::new();
    }
    let syllables: Vec<&str> = divided.syllables().collect();
    let total = syllables.len();
    let mut out: Vec<Candidate> = Vec::new();

    let first_build = if options.enable_combine {
        build_greedy_combine(&syllables, 0, grammar, ctx)
    } else {
        None
    };
    if let Some(build) = &first_build {
        out.push(Candidate::new(
            CandidateKind::Combine,
            total,
            build.reading.clone(),
            build.text.clone(),
        ));
    }

    if options.enable_associate {
        let spec = QuerySpec::exact(divided.as_str())
            .with_mode(QueryMode::Fuzzy)
            .sorted_by(SortBy::Weight);
        for entry in ctx.query(CacheId::Associate, &spec) {
            out.push(Candidate::new(
                CandidateKind::Associate,
                total,
                entry.reading,
                entry.text,
            ));
        }
    }

    if let Some(build) = &first_build {
        if let Some(variant) = build_variant(build, &syllables, grammar, ctx) {
            if !out.iter().any(|c| c.text == variant.text) {
                out.push(Candidate::new(
                    CandidateKind::Combine,
                    total,
                    variant.reading,
                    variant.text,
                ));
            }
        }
    }

    out
}

/// Chain the longest priority-ranked lexicon match at each position from
/// `start`, falling back to the top single-character reading where nothing
/// matches. Returns `None` when a full-input phrase exists at the very
/// first position (the direct strategy supersedes) or when a syllable has
/// no character reading at all.
fn build_greedy_combine(
    syllables: &[&str],
    start: usize,
    grammar: &SyllableGrammar,
    ctx: &QueryContext<'_>,
) -> Option<CombineBuild> {
    let total = syllables.len();
    debug_assert!(start < total);
    let mut reading_parts: Vec<String> = Vec::new();
    let mut text = String::new();
    let mut first: Option<(usize, String)> = None;

    let mut i = start;
    while i < total {
        let mut chunk: Option<(String, String, usize)> = None;
        for span in (1..=total - i).rev() {
            let key = syllables[i..i + span].join(&SEPARATOR.to_string());
            let spec = QuerySpec::exact(key)
                .with_count(span)
                .sorted_by(SortBy::Priority);
            let rows = ctx.query(CacheId::Combine, &spec);
            if let Some(row) = rows.first() {
                if i == 0 && span == total {
                    // A phrase already covers the whole input.
                    return None;
                }
                chunk = Some((row.reading.clone(), row.text.clone(), span));
                break;
            }
        }
        let (chunk_reading, chunk_text, span) = match chunk {
            Some(c) => c,
            None => {
                let row = ctx.top_char(grammar, syllables[i])?;
                (row.reading, row.text, 1)
            }
        };
        if first.is_none() {
            first = Some((span, chunk_text.clone()));
        }
        reading_parts.push(chunk_reading);
        text.push_str(&chunk_text);
        i += span;
    }

    let (first_span, first_text) = first?;
    Some(CombineBuild {
        reading: reading_parts.join(&SEPARATOR.to_string()),
        text,
        first_span,
        first_text,
    })
}

/// The variant rules: rebuild from the second syllable when the first
/// chunk is a single independent character, else force the first two
/// syllables to characters when the second one is independent.
fn build_variant(
    build: &CombineBuild,
    syllables: &[&str],
    grammar: &SyllableGrammar,
    ctx: &QueryContext<'_>,
) -> Option<CombineBuild> {
    let total = syllables.len();
    if build.first_span == 1 && is_independent_char(&build.first_text) {
        let head = ctx.top_char(grammar, syllables[0])?;
        let tail = build_greedy_combine(syllables, 1, grammar, ctx)?;
        return Some(CombineBuild {
            reading: format!("{}{}{}", head.reading, SEPARATOR, tail.reading),
            text: format!("{}{}", head.text, tail.text),
            first_span: 1,
            first_text: head.text,
        });
    }

    let second = ctx.top_char(grammar, syllables[1])?;
    if !is_independent_char(&second.text) {
        return None;
    }
    let head = ctx.top_char(grammar, syllables[0])?;
    let (tail_reading, tail_text) = if total > 2 {
        let tail = build_greedy_combine(syllables, 2, grammar, ctx)?;
        (
            format!("{}{}", SEPARATOR, tail.reading),
            tail.text,
        )
    } else {
        (String::new(), String::new())
    };
    Some(CombineBuild {
        reading: format!(
            "{}{}{}{}",
            head.reading, SEPARATOR, second.reading, tail_reading
        ),
        text: format!("{}{}{}", head.text, second.text, tail_text),
        first_span: 1,
        first_text: head.text,
    })
}

fn is_independent_char(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => hanzi::is_independent(c),
        _ => false,
    }
}
