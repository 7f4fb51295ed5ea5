//! Score calculator: maps a review to `0..=100` (50 = neutral).
//!
//! Independent from the classifier on purpose: other weights, occurrence
//! counts instead of presence, and every occurrence of a negative word is
//! inspected (not only the first).
//!
//! | signal                                   | weight                |
//! |------------------------------------------|-----------------------|
//! | positive phrase present                  | +3 positive           |
//! | neutral-positive phrase present          | +1 positive           |
//! | negative phrase present                  | +3 negative           |
//! | positive word                            | +1 per occurrence     |
//! | neutral word                             | +0.3 per occurrence   |
//! | negative word negated somewhere          | +1 positive (once)    |
//! | negative word occurrence amplified       | +2 negative           |
//! | negative word neither negated/amplified  | +count negative       |
//! | booster present and positive > 0         | +1 positive (once)    |

use super::context::{self, truncated};
use super::scan::{self, Category};
use crate::lexicon::Lexicon;
use crate::normalize::NormalizedText;

pub const NEUTRAL_SCORE: f64 = 50.0;
/// Positive reviews never score above this.
pub const POSITIVE_CAP: f64 = 95.0;
/// Floor of the amplified-negative penalty.
pub const NEGATIVE_FLOOR: f64 = 5.0;

const NEUTRAL_WORD_WEIGHT: f64 = 0.3;

/// Intermediate accumulators, exposed for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize)]
pub struct ScoreTally {
    pub positive: f64,
    pub negative: f64,
    pub total_words: usize,
    pub neutral_words: usize,
    pub has_positive_phrase: bool,
    pub has_neutral_phrase: bool,
}

impl ScoreTally {
    pub fn difference(&self) -> f64 {
        self.positive - self.negative
    }
}

pub fn calculate(text: &NormalizedText, lexicon: &Lexicon) -> u8 {
    let tally = tally(text, lexicon);
    score_from_tally(text, lexicon, &tally)
}

pub fn tally(text: &NormalizedText, lexicon: &Lexicon) -> ScoreTally {
    let mut t = ScoreTally {
        total_words: text.word_count(),
        ..Default::default()
    };
    if t.total_words == 0 {
        return t;
    }

    let positive_phrases = scan::scan(
        text,
        &lexicon.positive_phrases,
        Category::PositivePhrase,
        3.0,
    );
    let neutral_phrases = scan::scan(
        text,
        &lexicon.neutral_positive_phrases,
        Category::NeutralPositivePhrase,
        1.0,
    );
    let negative_phrases = scan::scan(
        text,
        &lexicon.negative_phrases,
        Category::NegativePhrase,
        3.0,
    );
    t.has_positive_phrase = !positive_phrases.is_empty();
    t.has_neutral_phrase = !neutral_phrases.is_empty();
    t.positive += scan::total_weight(&positive_phrases) + scan::total_weight(&neutral_phrases);
    t.negative += scan::total_weight(&negative_phrases);

    for w in &lexicon.scored_positive_words {
        t.positive += text.count(w) as f64;
    }

    t.neutral_words = lexicon.neutral_words.iter().map(|w| text.count(w)).sum();
    t.positive += t.neutral_words as f64 * NEUTRAL_WORD_WEIGHT;

    for w in &lexicon.scored_negative_words {
        let mut count = 0usize;
        let mut negated = false;
        let mut amplified = false;
        for offset in text.occurrences(w) {
            count += 1;
            let flags = context::evaluate(text, offset, lexicon);
            negated |= flags.negated;
            if flags.amplified {
                amplified = true;
                t.negative += 2.0;
            }
        }
        if count == 0 {
            continue;
        }
        // a word flips at most once
        if negated {
            t.positive += 1.0;
        } else if !amplified {
            t.negative += count as f64;
        }
    }

    if text.contains(&lexicon.booster) && t.positive > 0.0 {
        t.positive += 1.0;
    }

    t
}

/// Map accumulators to the final integer score.
pub fn score_from_tally(text: &NormalizedText, lexicon: &Lexicon, t: &ScoreTally) -> u8 {
    if t.total_words == 0 {
        return NEUTRAL_SCORE as u8;
    }
    let diff = t.difference();

    let score = if t.has_neutral_phrase && t.neutral_words > 0 && diff.abs() < 3.0 {
        NEUTRAL_SCORE + diff * 2.0
    } else if t.neutral_words > 0 && t.positive <= 2.0 && t.negative == 0.0 {
        NEUTRAL_SCORE + t.positive * 2.0
    } else if diff > 0.0 {
        positive_score(text, lexicon, t, diff)
    } else if diff < 0.0 {
        negative_score(text, lexicon, t, diff)
    } else {
        NEUTRAL_SCORE
    };

    score.round().clamp(0.0, 100.0) as u8
}

fn positive_score(text: &NormalizedText, lexicon: &Lexicon, t: &ScoreTally, diff: f64) -> f64 {
    let ratio = (diff / (t.total_words as f64 * 0.7).max(1.0)).min(1.0);
    let mut score = NEUTRAL_SCORE + ratio * 40.0;

    if t.positive >= 3.0 {
        score += 8.0;
    }
    if t.positive >= 5.0 {
        score += 10.0;
    }
    if t.positive >= 7.0 {
        score += 5.0;
    }
    if t.has_positive_phrase {
        score += 5.0;
    }

    let amplified_positive = context::amplifier_followed_by(text, &lexicon.amplifiers, |rest| {
        lexicon
            .positive_words
            .iter()
            .any(|w| rest.starts_with(w.as_str()))
    });
    if amplified_positive {
        score += 8.0;
    }

    let very_positive = scan::scan(
        text,
        &lexicon.very_positive_words,
        Category::VeryPositiveWord,
        2.0,
    );
    score += scan::total_weight(&very_positive).min(6.0);

    score.min(POSITIVE_CAP)
}

fn negative_score(text: &NormalizedText, lexicon: &Lexicon, t: &ScoreTally, diff: f64) -> f64 {
    let ratio = (diff.abs() / (t.total_words as f64).max(1.0)).min(1.0);
    let score = NEUTRAL_SCORE - ratio * 45.0;

    let amplified_negative = context::amplifier_followed_by(text, &lexicon.amplifiers, |rest| {
        lexicon
            .negative_words
            .iter()
            .any(|w| rest.starts_with(w.as_str()) || rest.starts_with(truncated(w)))
    });
    if amplified_negative {
        (score - 15.0).max(NEGATIVE_FLOOR)
    } else {
        score
    }
}
