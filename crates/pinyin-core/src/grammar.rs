// Quanpin syllable grammar: the static table of legal initial/final
// combinations and the classification queries built on it.

use crate::enums::MAX_SYLLABLE_LEN;
use crate::syllable::Syllable;

// ---------------------------------------------------------------------------
// Static tables
// ---------------------------------------------------------------------------

/// Legal finals per initial. Initials are listed with the two-letter
/// "extended" forms (zh/ch/sh) as their own rows; `classify` tries the
/// two-letter row before the one-letter row.
const SYLLABARY: &[(&str, &[&str])] = &[
    ("b", &["a", "o", "ai", "ei", "ao", "an", "en", "ang", "eng", "i", "ie", "iao", "ian", "in", "ing", "u"]),
    ("p", &["a", "o", "ai", "ei", "ao", "ou", "an", "en", "ang", "eng", "i", "ie", "iao", "ian", "in", "ing", "u"]),
    ("m", &["a", "o", "e", "ai", "ei", "ao", "ou", "an", "en", "ang", "eng", "i", "ie", "iao", "iu", "ian", "in", "ing", "u"]),
    ("f", &["a", "o", "ei", "ou", "an", "en", "ang", "eng", "u"]),
    ("d", &["a", "e", "ai", "ei", "ao", "ou", "an", "en", "ang", "eng", "ong", "i", "ia", "ie", "iao", "iu", "ian", "ing", "u", "uo", "ui", "uan", "un"]),
    ("t", &["a", "e", "ai", "ao", "ou", "an", "ang", "eng", "ong", "i", "ie", "iao", "ian", "ing", "u", "uo", "ui", "uan", "un"]),
    ("n", &["a", "e", "ai", "ei", "ao", "ou", "an", "en", "ang", "eng", "ong", "i", "ie", "iao", "iu", "ian", "in", "iang", "ing", "u", "uo", "uan", "v", "ve"]),
    ("l", &["a", "e", "ai", "ei", "ao", "ou", "an", "ang", "eng", "ong", "i", "ia", "ie", "iao", "iu", "ian", "in", "iang", "ing", "u", "uo", "uan", "un", "v", "ve"]),
    ("g", &["a", "e", "ai", "ei", "ao", "ou", "an", "en", "ang", "eng", "ong", "u", "ua", "uo", "uai", "ui", "uan", "un", "uang"]),
    ("k", &["a", "e", "ai", "ao", "ou", "an", "en", "ang", "eng", "ong", "u", "ua", "uo", "uai", "ui", "uan", "un", "uang"]),
    ("h", &["a", "e", "ai", "ei", "ao", "ou", "an", "en", "ang", "eng", "ong", "u", "ua", "uo", "uai", "ui", "uan", "un", "uang"]),
    ("j", &["i", "ia", "ie", "iao", "iu", "ian", "in", "iang", "ing", "iong", "u", "ue", "uan", "un"]),
    ("q", &["i", "ia", "ie", "iao", "iu", "ian", "in", "iang", "ing", "iong", "u", "ue", "uan", "un"]),
    ("x", &["i", "ia", "ie", "iao", "iu", "ian", "in", "iang", "ing", "iong", "u", "ue", "uan", "un"]),
    ("zh", &["a", "e", "i", "ai", "ei", "ao", "ou", "an", "en", "ang", "eng", "ong", "u", "ua", "uo", "uai", "ui", "uan", "un", "uang"]),
    ("ch", &["a", "e", "i", "ai", "ao", "ou", "an", "en", "ang", "eng", "ong", "u", "ua", "uo", "uai", "ui", "uan", "un", "uang"]),
    ("sh", &["a", "e", "i", "ai", "ei", "ao", "ou", "an", "en", "ang", "eng", "u", "ua", "uo", "uai", "ui", "uan", "un", "uang"]),
    ("r", &["e", "i", "ao", "ou", "an", "en", "ang", "eng", "ong", "u", "uo", "ui", "uan", "un"]),
    ("z", &["a", "e", "i", "ai", "ei", "ao", "ou", "an", "en", "ang", "eng", "ong", "u", "uo", "ui", "uan", "un"]),
    ("c", &["a", "e", "i", "ai", "ao", "ou", "an", "en", "ang", "eng", "ong", "u", "uo", "ui", "uan", "un"]),
    ("s", &["a", "e", "i", "ai", "ao", "ou", "an", "en", "ang", "eng", "ong", "u", "uo", "ui", "uan", "un"]),
    ("y", &["a", "o", "e", "i", "ao", "ou", "an", "in", "ang", "ing", "ong", "u", "ue", "uan", "un"]),
    ("w", &["a", "o", "ai", "ei", "an", "en", "ang", "eng", "u"]),
];

/// Finals that form a syllable without any initial.
const STANDALONE_FINALS: &[&str] = &[
    "a", "o", "e", "ai", "ei", "ao", "ou", "an", "en", "ang", "eng", "er",
];

/// Default completion for a bare initial.
const CANONICAL_DEFAULTS: &[(&str, &str)] = &[
    ("b", "ba"),
    ("p", "pa"),
    ("m", "ma"),
    ("f", "fa"),
    ("d", "da"),
    ("t", "ta"),
    ("n", "na"),
    ("l", "la"),
    ("g", "ga"),
    ("k", "ka"),
    ("h", "ha"),
    ("j", "ji"),
    ("q", "qi"),
    ("x", "xi"),
    ("zh", "zha"),
    ("ch", "cha"),
    ("sh", "sha"),
    ("r", "re"),
    ("z", "za"),
    ("c", "ca"),
    ("s", "sa"),
    ("y", "ya"),
    ("w", "wa"),
];

/// Vowel letters as typed in quanpin ('v' stands for the umlaut u).
pub fn is_vowel_letter(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'v')
}

fn finals_for(initial: &str) -> Option<&'static [&'static str]> {
    SYLLABARY
        .iter()
        .find(|(i, _)| *i == initial)
        .map(|(_, finals)| *finals)
}

// ---------------------------------------------------------------------------
// SyllableGrammar
// ---------------------------------------------------------------------------

/// The quanpin syllabary with classification, completion and ambiguity
/// queries. Construction builds the sorted whole-syllable list once;
/// everything else is read-only.
#[derive(Debug)]
pub struct SyllableGrammar {
    /// Every complete syllable string, sorted, deduplicated.
    syllables: Vec<String>,
}

impl SyllableGrammar {
    pub fn new() -> Self {
        let mut syllables: Vec<String> = Vec::new();
        for (initial, finals) in SYLLABARY {
            for final_part in *finals {
                let mut s = String::with_capacity(initial.len() + final_part.len());
                s.push_str(initial);
                s.push_str(final_part);
                syllables.push(s);
            }
        }
        for final_part in STANDALONE_FINALS {
            syllables.push((*final_part).to_string());
        }
        syllables.sort();
        syllables.dedup();
        Self { syllables }
    }

    /// Table membership test for initials.
    pub fn is_initial(&self, s: &str) -> bool {
        finals_for(s).is_some()
    }

    /// Table membership test for finals (under any initial or stand-alone).
    pub fn is_final(&self, s: &str) -> bool {
        STANDALONE_FINALS.contains(&s)
            || SYLLABARY.iter().any(|(_, finals)| finals.contains(&s))
    }

    /// Membership in the distinguished stand-alone subset.
    pub fn is_final_without_initial(&self, s: &str) -> bool {
        STANDALONE_FINALS.contains(&s)
    }

    /// Split `prefix` into its longest matching initial and the remainder.
    ///
    /// Returns `None` for the empty string, over-length input, or a prefix
    /// with no matching structure. A bare initial classifies as a partial
    /// syllable; callers that need a final must check [`Syllable::is_complete`].
    pub fn classify(&self, prefix: &str) -> Option<Syllable> {
        if prefix.is_empty() || prefix.len() > MAX_SYLLABLE_LEN {
            return None;
        }
        // Longest initial first: two letters, then one.
        for initial_len in [2usize, 1] {
            if prefix.len() < initial_len {
                continue;
            }
            let (head, rest) = prefix.split_at(initial_len);
            let Some(finals) = finals_for(head) else {
                continue;
            };
            if rest.is_empty() {
                return Some(Syllable::partial(head));
            }
            if finals.contains(&rest) {
                return Some(Syllable::new(head, rest));
            }
        }
        if STANDALONE_FINALS.contains(&prefix) {
            return Some(Syllable::new("", prefix));
        }
        None
    }

    /// Valid and carrying a final.
    pub fn is_complete(&self, prefix: &str) -> bool {
        self.classify(prefix).is_some_and(|s| s.is_complete())
    }

    /// `true` iff exactly one syllable in the grammar starts with `prefix`.
    pub fn is_unambiguous(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return false;
        }
        let (start, end) = self.completion_range(prefix);
        end - start == 1
    }

    /// All grammar-legal whole syllables sharing `prefix`, sorted.
    ///
    /// The c/ch, s/sh, z/zh sibling merge falls out of matching against
    /// the whole syllabary: "z" is a string prefix of the zh rows too.
    pub fn possible_completions(&self, prefix: &str) -> &[String] {
        if prefix.is_empty() || prefix.len() > MAX_SYLLABLE_LEN {
            return &[];
        }
        let (start, end) = self.completion_range(prefix);
        &self.syllables[start..end]
    }

    /// The canonical whole syllable for a possibly-partial prefix.
    ///
    /// Complete syllables and single vowel letters come back as-is; a bare
    /// initial resolves to its registered default; anything else takes the
    /// lexicographically first completion. `None` when nothing matches.
    pub fn canonical_completion(&self, prefix: &str) -> Option<String> {
        if prefix.is_empty() {
            return None;
        }
        if self.is_complete(prefix) {
            return Some(prefix.to_string());
        }
        let mut chars = prefix.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if is_vowel_letter(c) {
                return Some(prefix.to_string());
            }
        }
        if let Some((_, default)) = CANONICAL_DEFAULTS.iter().find(|(i, _)| *i == prefix) {
            return Some((*default).to_string());
        }
        self.possible_completions(prefix).first().cloned()
    }

    /// Sorted-range lookup: `[start, end)` of syllables starting with `prefix`.
    fn completion_range(&self, prefix: &str) -> (usize, usize) {
        let start = self.syllables.partition_point(|s| s.as_str() < prefix);
        let end = start
            + self.syllables[start..]
                .iter()
                .take_while(|s| s.starts_with(prefix))
                .count();
        (start, end)
    }
}

impl Default for SyllableGrammar {
    fn default() -> Self {
        Self::new()
    }
}
