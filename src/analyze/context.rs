//! Context window evaluator and amplifier adjacency checks.
//!
//! The window is the `WINDOW_CHARS` code points right before a match,
//! clamped to the start of text. Negation and amplification are reported
//! independently; combining them is the aggregator's business.

use crate::lexicon::Lexicon;
use crate::normalize::NormalizedText;

/// Width of the preceding window, in code points.
pub const WINDOW_CHARS: usize = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextFlags {
    pub negated: bool,
    pub amplified: bool,
}

/// Inspect the window before `offset` (a byte offset into `text`).
/// An offset outside the text yields no flags.
pub fn evaluate(text: &NormalizedText, offset: usize, lexicon: &Lexicon) -> ContextFlags {
    let Some(window) = text.preceding_window(offset, WINDOW_CHARS) else {
        return ContextFlags::default();
    };
    ContextFlags {
        negated: lexicon
            .negation_markers
            .iter()
            .any(|m| window.contains(m.as_str())),
        amplified: lexicon.amplifiers.iter().any(|a| window.contains(a.as_str())),
    }
}

/// True when a token ending in an amplifier is directly followed (whitespace
/// in between) by text that `follows` accepts. `follows` receives the rest of
/// the text starting at the next token.
pub fn amplifier_followed_by<F>(text: &NormalizedText, amplifiers: &[String], follows: F) -> bool
where
    F: Fn(&str) -> bool,
{
    let tokens = text.tokens();
    tokens.windows(2).any(|pair| {
        amplifiers.iter().any(|a| pair[0].text.ends_with(a.as_str()))
            && follows(&text.as_str()[pair[1].start..])
    })
}

/// `word` without its last code point (`mauvais` → `mauvai`).
pub fn truncated(word: &str) -> &str {
    match word.char_indices().last() {
        Some((i, _)) => &word[..i],
        None => word,
    }
}
