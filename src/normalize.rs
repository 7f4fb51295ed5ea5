// src/normalize.rs
//! Normalized review text: code-point aware lowercasing plus the substring
//! primitives the scanners are built on.
//!
//! Offsets handed out by this module are BYTE offsets into the normalized
//! string. Windows are measured in code points (Unicode scalar values), so a
//! 20-character window over "très" counts `è` once.

use once_cell::sync::Lazy;
use regex::Regex;

/// ASCII letters, then letters, `'` or `-`. Any other char separates words,
/// accented letters included: "problème" counts as "probl" + "me".
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z'-]*").expect("word regex"));

/// Lowercase one code point at a time. Multi-char expansions (e.g. `İ`) keep
/// only their first char so the code-point count never changes.
pub fn lowercase(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// A whitespace-delimited token with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Lowercased copy of one review, created per analysis and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    text: String,
}

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        Self {
            text: lowercase(raw),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    pub fn first_occurrence(&self, needle: &str) -> Option<usize> {
        self.text.find(needle)
    }

    /// Start offsets of every non-overlapping occurrence, left to right.
    pub fn occurrences<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.text.match_indices(needle).map(|(i, _)| i)
    }

    /// Number of non-overlapping occurrences.
    pub fn count(&self, needle: &str) -> usize {
        self.text.matches(needle).count()
    }

    /// The (at most) `chars` code points immediately before `offset`, clamped
    /// to the start of text. `None` if `offset` is not a char boundary inside
    /// the text.
    pub fn preceding_window(&self, offset: usize, chars: usize) -> Option<&str> {
        let head = self.text.get(..offset)?;
        let start = head
            .char_indices()
            .rev()
            .take(chars)
            .last()
            .map(|(i, _)| i)
            .unwrap_or(offset);
        Some(&head[start..])
    }

    /// Whitespace tokens in order.
    pub fn tokens(&self) -> Vec<Token<'_>> {
        let mut out = Vec::new();
        let mut start: Option<usize> = None;
        for (i, ch) in self.text.char_indices() {
            match (ch.is_whitespace(), start) {
                (true, Some(s)) => {
                    out.push(Token {
                        text: &self.text[s..i],
                        start: s,
                        end: i,
                    });
                    start = None;
                }
                (false, None) => start = Some(i),
                _ => {}
            }
        }
        if let Some(s) = start {
            out.push(Token {
                text: &self.text[s..],
                start: s,
                end: self.text.len(),
            });
        }
        out
    }

    /// Number of words in the text, as used by the score denominator.
    pub fn word_count(&self) -> usize {
        WORD_RE.find_iter(&self.text).count()
    }
}
