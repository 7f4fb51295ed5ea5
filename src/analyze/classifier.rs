//! Sentiment classifier: one pass over phrases and words, three outcomes.
//!
//! Weights: positive phrase +2, neutral-positive phrase +1, negative phrase
//! +2 (negative side), positive word +1 per word present. A negative word is
//! judged at its FIRST occurrence only: negated → +1 positive, otherwise +1
//! negative (amplification does not double here).

use super::context::{self, ContextFlags};
use super::scan::{self, Category};
use crate::lexicon::Lexicon;
use crate::normalize::NormalizedText;
use crate::sentiment::Sentiment;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ClassifierTally {
    pub positive: u32,
    pub negative: u32,
}

impl ClassifierTally {
    /// Close or weak tallies stay neutral.
    pub fn verdict(&self) -> Sentiment {
        let (pos, neg) = (self.positive, self.negative);
        if pos.abs_diff(neg) <= 1 && pos + neg < 3 {
            return Sentiment::Neutral;
        }
        match pos.cmp(&neg) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }
}

pub fn classify(text: &NormalizedText, lexicon: &Lexicon) -> Sentiment {
    tally(text, lexicon).verdict()
}

pub fn tally(text: &NormalizedText, lexicon: &Lexicon) -> ClassifierTally {
    let mut pos = 0.0;
    let mut neg = 0.0;

    pos += scan::total_weight(&scan::scan(
        text,
        &lexicon.positive_phrases,
        Category::PositivePhrase,
        2.0,
    ));
    pos += scan::total_weight(&scan::scan(
        text,
        &lexicon.neutral_positive_phrases,
        Category::NeutralPositivePhrase,
        1.0,
    ));
    neg += scan::total_weight(&scan::scan(
        text,
        &lexicon.negative_phrases,
        Category::NegativePhrase,
        2.0,
    ));
    pos += scan::total_weight(&scan::scan(
        text,
        &lexicon.scored_positive_words,
        Category::PositiveWord,
        1.0,
    ));

    for hit in scan::scan(
        text,
        &lexicon.scored_negative_words,
        Category::NegativeWord,
        1.0,
    ) {
        match context::evaluate(text, hit.start, lexicon) {
            ContextFlags { negated: true, .. } => pos += hit.base_weight,
            _ => neg += hit.base_weight,
        }
    }

    ClassifierTally {
        positive: pos as u32,
        negative: neg as u32,
    }
}
