//! Dev diagnostics: anonymized log ids, the dev-logging gate, and debug
//! endpoints to inspect the lexicon and preview analyses.
//! Mount with `app.merge(debug::router(state))` in dev only (`DEBUG_ROUTES=1`).

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::analyze::Explanation;
use crate::api::AppState;
use crate::lexicon::LexiconSizes;

pub const ENV_DEV_LOG: &str = "REVIEW_DEV_LOG";
pub const ENV_DEBUG_ROUTES: &str = "DEBUG_ROUTES";

fn is_dev_env() -> bool {
    if cfg!(debug_assertions) {
        return true;
    }
    matches!(
        std::env::var("SHUTTLE_ENV")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}

/// REVIEW_DEV_LOG=1 AND dev env (debug build or SHUTTLE_ENV in {local,development,dev}).
pub fn dev_logging_enabled() -> bool {
    std::env::var(ENV_DEV_LOG).ok().as_deref() == Some("1") && is_dev_env()
}

/// DEBUG_ROUTES=1 mounts the `/debug/*` routes.
pub fn debug_routes_enabled() -> bool {
    std::env::var(ENV_DEBUG_ROUTES).ok().as_deref() == Some("1")
}

/// Short, stable id for a review text (first 6 bytes of SHA-256, hex).
pub fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

#[derive(Debug, Serialize)]
pub struct LexiconOut {
    pub sizes: LexiconSizes,
    pub topics: Vec<String>,
    pub amplifiers: Vec<String>,
    pub negation_markers: Vec<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/debug/lexicon", get(get_lexicon))
        .route("/debug/explain", get(get_explain))
        .with_state(state)
}

async fn get_lexicon(State(state): State<AppState>) -> Json<LexiconOut> {
    let lex = state.engine.lexicon();
    Json(LexiconOut {
        sizes: lex.sizes(),
        topics: lex.topic_labels().into_iter().map(String::from).collect(),
        amplifiers: lex.amplifiers().to_vec(),
        negation_markers: lex.negation_markers().to_vec(),
    })
}

/// GET /debug/explain?text=...
async fn get_explain(
    State(state): State<AppState>,
    Query(q): Query<HashMap<String, String>>,
) -> Json<Explanation> {
    let text = q.get("text").cloned().unwrap_or_default();
    Json(state.engine.explain(&text))
}
