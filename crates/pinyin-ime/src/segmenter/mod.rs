// Segmentation: turn a raw letter string into a boundary-marked reading.
//
// Two passes. A pre-pass classifies every nasal letter ('n', and 'g' in
// coda position) that sits between letters and could belong to either the
// preceding or the following syllable. The main pass is greedy
// longest-match over windows of up to six letters, consulting the pre-pass
// flags and a dedicated 'g'-onset rule to pull a boundary one letter left
// where the nasal coda would otherwise swallow the next syllable's onset.

use pinyin_core::enums::{MAX_SYLLABLE_LEN, SEPARATOR};
use pinyin_core::grammar::{is_vowel_letter, SyllableGrammar};
use pinyin_core::DividedString;

/// How an ambiguous nasal point (both readings grammar-legal) resolves.
/// `true` keeps the letter in the preceding syllable, so "fanan" divides
/// as "fan'an" rather than "fa'nan".
pub const AMBIGUOUS_CODA_RESOLVES_BACKWARD: bool = true;

/// How far the nasal pre-pass scans in each direction.
const CODA_SCAN_LEN: usize = 5;

const SEP_BYTE: u8 = SEPARATOR as u8;

/// Greedy syllable segmenter over a fixed grammar.
pub struct Segmenter<'a> {
    grammar: &'a SyllableGrammar,
}

impl<'a> Segmenter<'a> {
    pub fn new(grammar: &'a SyllableGrammar) -> Self {
        Self { grammar }
    }

    /// Divide `raw` (letters, possibly with explicit separators) into
    /// syllables. Best-effort: unparsable residue passes through letter by
    /// letter, empty input yields empty output, and nothing panics.
    pub fn segment(&self, raw: &str) -> DividedString {
        if raw.is_empty() {
            return DividedString::empty();
        }
        if !raw.is_ascii() {
            // Not a Pinyin letter string; hand it back untouched.
            return DividedString::new(raw);
        }

        let bytes = raw.as_bytes();
        let len = bytes.len();
        let forward_only = self.find_ambiguous_codas(raw);
        let mut boundaries: Vec<usize> = Vec::new();

        let mut pos = 0;
        while pos < len {
            if bytes[pos] == SEP_BYTE {
                pos += 1;
                continue;
            }
            let chunk_end = next_separator(bytes, pos);
            let window_max = MAX_SYLLABLE_LEN.min(chunk_end - pos);

            let mut accepted = 1;
            let mut window_complete = self.grammar.is_complete(&raw[pos..pos + 1]);
            for win in (1..=window_max).rev() {
                let s = &raw[pos..pos + win];
                let complete = self.grammar.is_complete(s);
                if complete || self.grammar.is_unambiguous(s) {
                    accepted = win;
                    window_complete = complete;
                    break;
                }
            }
            let end = pos + accepted;

            // An explicit separator right after the window: the boundary is
            // already there, just step over it.
            if end < len && bytes[end] == SEP_BYTE {
                pos = end + 1;
                continue;
            }

            let flag_split =
                accepted > 1 && window_complete && forward_only.contains(&(end - 1));
            let coda_split = accepted > 1
                && bytes[end - 1] == b'g'
                && self.grammar.is_complete(&raw[pos..end - 1])
                && self.g_onset_resumes(raw, end, chunk_end);

            if flag_split || coda_split {
                // The window's last letter opens the next syllable.
                boundaries.push(end - 1);
                pos = end - 1;
            } else {
                if end < len {
                    boundaries.push(end);
                }
                pos = end;
            }
        }

        let mut out = String::with_capacity(len + boundaries.len());
        let mut next_boundary = boundaries.iter().peekable();
        for (idx, ch) in raw.char_indices() {
            if next_boundary.peek() == Some(&&idx) {
                out.push(SEPARATOR);
                next_boundary.next();
            }
            out.push(ch);
        }
        DividedString::new(out)
    }

    /// Pre-pass: positions whose letter must start a new syllable.
    ///
    /// A candidate point is an 'n', or a 'g' past the first letter, not
    /// adjacent to an explicit separator and followed by a vowel letter.
    /// Reading A (the letter opens the next syllable) needs a complete
    /// syllable ending just before it and a valid-or-unambiguous syllable
    /// starting at it; reading B (the letter closes the previous syllable)
    /// needs a complete syllable ending at it and a valid-or-unambiguous
    /// syllable starting one past it. Only A legal: flag the position.
    /// Only B legal, or both legal under the backward policy: no action.
    pub fn find_ambiguous_codas(&self, raw: &str) -> Vec<usize> {
        let bytes = raw.as_bytes();
        let len = bytes.len();
        let mut flags = Vec::new();

        for i in 1..len {
            let c = bytes[i];
            if c != b'n' && c != b'g' {
                continue;
            }
            if bytes[i - 1] == SEP_BYTE || (i + 1 < len && bytes[i + 1] == SEP_BYTE) {
                continue;
            }
            if i + 1 >= len || !is_vowel_letter(bytes[i + 1] as char) {
                continue;
            }

            let chunk_start = raw[..i].rfind(SEPARATOR).map_or(0, |p| p + 1);
            let chunk_end = next_separator(bytes, i);

            let backward = (1..=CODA_SCAN_LEN)
                .any(|k| i >= chunk_start + k && self.grammar.is_complete(&raw[i - k..i]));
            let forward_at = (1..=CODA_SCAN_LEN)
                .any(|l| i + l <= chunk_end && self.accepts(&raw[i..i + l]));
            let ends_at = (2..=MAX_SYLLABLE_LEN)
                .any(|k| i + 1 >= chunk_start + k && self.grammar.is_complete(&raw[i + 1 - k..i + 1]));
            let forward_after = (1..=CODA_SCAN_LEN)
                .any(|l| i + 1 + l <= chunk_end && self.accepts(&raw[i + 1..i + 1 + l]));

            let starts_next = backward && forward_at;
            let closes_previous = ends_at && forward_after;
            if starts_next && (!closes_previous || !AMBIGUOUS_CODA_RESOLVES_BACKWARD) {
                flags.push(i);
            }
        }
        flags
    }

    /// Whether the letters from `end` resume with a stand-alone final that
    /// the dropped 'g' can take as its own (the "fan|gan" split).
    fn g_onset_resumes(&self, raw: &str, end: usize, chunk_end: usize) -> bool {
        (1..=4).any(|l| {
            end + l <= chunk_end && {
                let final_part = &raw[end..end + l];
                self.grammar.is_final_without_initial(final_part)
                    && self.grammar.is_complete(&format!("g{final_part}"))
            }
        })
    }

    fn accepts(&self, s: &str) -> bool {
        self.grammar.is_complete(s) || self.grammar.is_unambiguous(s)
    }
}

fn next_separator(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| b == SEP_BYTE)
        .map_or(bytes.len(), |p| from + p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(raw: &str) -> String {
        let grammar = SyllableGrammar::new();
        Segmenter::new(&grammar).segment(raw).as_str().to_string()
    }

    #[test]
    fn divides_plain_two_syllable_input() {
        assert_eq!(seg("nihao"), "ni'hao");
    }

    #[test]
    fn divides_four_syllable_input() {
        assert_eq!(seg("wozaizheli"), "wo'zai'zhe'li");
    }

    #[test]
    fn greedy_keeps_longest_syllable() {
        assert_eq!(seg("xian"), "xian");
        assert_eq!(seg("zhuang"), "zhuang");
    }

    #[test]
    fn nasal_g_splits_before_standalone_final() {
        assert_eq!(seg("fangan"), "fan'gan");
        assert_eq!(seg("mingan"), "min'gan");
        assert_eq!(seg("zhuangan"), "zhuan'gan");
    }

    #[test]
    fn nasal_g_stays_when_no_onset_reading() {
        // "gang" cannot shed its final 'g': nothing resumes after it.
        assert_eq!(seg("fang"), "fang");
        // "xianggang": the doubled g keeps the first syllable intact.
        assert_eq!(seg("xianggang"), "xiang'gang");
    }

    #[test]
    fn ambiguous_n_resolves_backward() {
        assert_eq!(seg("fanan"), "fan'an");
        assert_eq!(seg("xinan"), "xin'an");
        assert_eq!(seg("keneng"), "ken'eng");
    }

    #[test]
    fn forward_only_n_moves_the_boundary() {
        // "pin" + "u" leaves an unparseable tail, so the 'n' must open
        // the next syllable: "pi'nu".
        assert_eq!(seg("pinu"), "pi'nu");
    }

    #[test]
    fn explicit_separators_are_honored() {
        assert_eq!(seg("ni'hao"), "ni'hao");
        // An explicit boundary overrides the g-onset split.
        assert_eq!(seg("fang'an"), "fang'an");
        assert_eq!(seg("xi'an"), "xi'an");
    }

    #[test]
    fn trailing_separator_is_stripped() {
        assert_eq!(seg("nihao'"), "ni'hao");
    }

    #[test]
    fn partial_last_syllable_is_kept() {
        assert_eq!(seg("nih"), "ni'h");
        assert_eq!(seg("zhon"), "zhon");
        assert_eq!(seg("b"), "b");
    }

    #[test]
    fn unparsable_residue_passes_through() {
        assert_eq!(seg("nib"), "ni'b");
        assert_eq!(seg("v"), "v");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(seg(""), "");
    }

    #[test]
    fn segmentation_is_idempotent() {
        let grammar = SyllableGrammar::new();
        let segmenter = Segmenter::new(&grammar);
        for input in ["nihao", "wozaizheli", "fangan", "xianggang", "keneng", "pinu", "zhon"] {
            let once = segmenter.segment(input);
            let again = segmenter.segment(&once.strip_separators());
            assert_eq!(once, again, "segmenting {input} twice diverged");
        }
    }

    #[test]
    fn pre_pass_flags_forward_only_points() {
        let grammar = SyllableGrammar::new();
        let segmenter = Segmenter::new(&grammar);
        assert_eq!(segmenter.find_ambiguous_codas("pinu"), vec![2]);
        // Ambiguous points stay unflagged under the backward policy.
        assert!(segmenter.find_ambiguous_codas("fanan").is_empty());
        assert!(segmenter.find_ambiguous_codas("fangan").is_empty());
    }
}
