//! # Sentiment Engine
//! Pure, stateless analysis over a shared read-only lexicon.
//! No I/O; safe to call from any number of threads at once.

use std::sync::Arc;

use tracing::debug;

use crate::analyze::{self, Explanation};
use crate::debug::{anon_hash, dev_logging_enabled};
use crate::lexicon::Lexicon;
use crate::sentiment::AnalysisResult;

#[derive(Debug, Clone)]
pub struct SentimentEngine {
    lexicon: Arc<Lexicon>,
}

impl SentimentEngine {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Engine over the embedded French lexicon.
    pub fn builtin() -> Self {
        Self::new(Arc::new(Lexicon::builtin().clone()))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.explain(text).result
    }

    /// Analysis plus the classifier and score tallies behind it.
    pub fn explain(&self, text: &str) -> Explanation {
        let ex = analyze::explain_text(text, &self.lexicon);
        if !dev_logging_enabled() {
            return ex;
        }
        // Never log raw text. Only hashed id + tallies.
        debug!(
            target: "review_sentiment",
            id = %anon_hash(text),
            sentiment = %ex.result.sentiment,
            score = ex.result.score,
            topics = ?ex.result.topics,
            cls_pos = ex.classifier.positive,
            cls_neg = ex.classifier.negative,
            score_pos = ex.scoring.positive,
            score_neg = ex.scoring.negative,
            words = ex.scoring.total_words,
            "review analyzed"
        );
        ex
    }
}

impl Default for SentimentEngine {
    fn default() -> Self {
        Self::builtin()
    }
}
