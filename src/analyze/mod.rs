// src/analyze/mod.rs
//! Analysis pipeline: normalize once, then run the classifier, the score
//! calculator and the topic detector independently over the same text.
//!
//! The classifier and the calculator are two separate aggregations with
//! different weights and negation policies; they only share the scanner and
//! the context window primitives.

pub mod classifier;
pub mod context;
pub mod scan;
pub mod scoring;
pub mod topics;

use serde::Serialize;

use crate::lexicon::Lexicon;
use crate::normalize::NormalizedText;
use crate::sentiment::AnalysisResult;

// Re-export convenient types.
pub use crate::analyze::classifier::ClassifierTally;
pub use crate::analyze::context::{ContextFlags, WINDOW_CHARS};
pub use crate::analyze::scan::{Category, MatchEvent};
pub use crate::analyze::scoring::ScoreTally;

/// Result plus the accumulators behind it.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub result: AnalysisResult,
    pub classifier: ClassifierTally,
    pub scoring: ScoreTally,
}

pub fn analyze_text(raw: &str, lexicon: &Lexicon) -> AnalysisResult {
    let text = NormalizedText::new(raw);
    AnalysisResult {
        sentiment: classifier::classify(&text, lexicon),
        score: scoring::calculate(&text, lexicon),
        topics: topics::detect(&text, lexicon),
    }
}

/// Same as `analyze_text`, keeping both tallies for inspection.
pub fn explain_text(raw: &str, lexicon: &Lexicon) -> Explanation {
    let text = NormalizedText::new(raw);
    let classifier = classifier::tally(&text, lexicon);
    let scoring = scoring::tally(&text, lexicon);
    Explanation {
        result: AnalysisResult {
            sentiment: classifier.verdict(),
            score: scoring::score_from_tally(&text, lexicon, &scoring),
            topics: topics::detect(&text, lexicon),
        },
        classifier,
        scoring,
    }
}
