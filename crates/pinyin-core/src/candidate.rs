// Candidate types produced by one search pass.

use crate::enums::CandidateKind;

/// One conversion candidate, constructed fresh per search and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The strategy that produced this candidate.
    pub kind: CandidateKind,
    /// How many input syllables the candidate consumes.
    pub syllable_span: usize,
    /// Separated reading of the candidate text.
    pub reading: String,
    /// The Hanzi run offered to the caller.
    pub text: String,
}

impl Candidate {
    pub fn new(
        kind: CandidateKind,
        syllable_span: usize,
        reading: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            syllable_span,
            reading: reading.into(),
            text: text.into(),
        }
    }

    /// Only stored candidates can be forgotten; synthesized Combine and
    /// fallback Hanzi candidates have no lexicon row behind them.
    pub fn can_forget(&self) -> bool {
        matches!(self.kind, CandidateKind::Associate | CandidateKind::Query)
    }
}

/// Detail view of one candidate, for the paging surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateInfo {
    /// Whether `forget` can remove the backing row.
    pub can_forget: bool,
    /// Separated reading of the candidate.
    pub reading: String,
    /// The candidate text.
    pub text: String,
    /// The consumed part of the divided input.
    pub divided_prefix: String,
}
