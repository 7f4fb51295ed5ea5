// src/lib.rs
// Public library surface for integration tests (and reuse by other services).

pub mod analyze;
pub mod api;
pub mod config;
pub mod debug;
pub mod engine;
pub mod lexicon;
pub mod metrics;
pub mod normalize;
pub mod sentiment;
pub mod stats;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::engine::SentimentEngine;
pub use crate::lexicon::Lexicon;
pub use crate::sentiment::{AnalysisResult, Sentiment};
pub use crate::stats::ReviewStats;

/// Analyze one review with the built-in French lexicon.
///
/// Total over all inputs: empty or blank text yields score 50, `neutre`,
/// no topics.
///
/// ```
/// let r = review_sentiment::analyze("Le prix est élevé mais la livraison était rapide.");
/// assert_eq!(r.topics, vec!["livraison", "prix"]);
/// ```
pub fn analyze(text: &str) -> AnalysisResult {
    analyze::analyze_text(text, Lexicon::builtin())
}

/// API router plus the `/debug/*` routes when `DEBUG_ROUTES=1`.
pub fn app(state: AppState) -> axum::Router {
    let router = api::router(state.clone());
    if debug::debug_routes_enabled() {
        router.merge(debug::router(state))
    } else {
        router
    }
}
