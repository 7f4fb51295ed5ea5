//! Phrase scanner: literal substring matches, word boundaries ignored.
//!
//! A phrase either occurs in full or contributes nothing. Only the first
//! occurrence is reported; callers that need every occurrence walk
//! `NormalizedText::occurrences` themselves.

use crate::normalize::NormalizedText;

/// What kind of lexicon entry produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    PositivePhrase,
    NeutralPositivePhrase,
    NegativePhrase,
    PositiveWord,
    NegativeWord,
    VeryPositiveWord,
}

/// Transient record of one match; consumed by the aggregator that asked for it.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEvent<'a> {
    pub matched: &'a str,
    /// Byte offset of the first occurrence in the normalized text.
    pub start: usize,
    pub category: Category,
    pub base_weight: f64,
}

/// Entries of `list` present in `text`, in list order.
pub fn scan<'a>(
    text: &NormalizedText,
    list: &'a [String],
    category: Category,
    base_weight: f64,
) -> Vec<MatchEvent<'a>> {
    list.iter()
        .filter_map(|entry| {
            text.first_occurrence(entry).map(|start| MatchEvent {
                matched: entry.as_str(),
                start,
                category,
                base_weight,
            })
        })
        .collect()
}

/// Sum of base weights.
pub fn total_weight(events: &[MatchEvent<'_>]) -> f64 {
    events.iter().map(|e| e.base_weight).sum()
}
