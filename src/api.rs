// src/api.rs
//! HTTP surface: a thin adapter around the engine. Validation (minimum
//! length, batch size) lives here; the engine itself accepts any text.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::engine::SentimentEngine;
use crate::lexicon::Lexicon;
use crate::metrics::{record_analysis, record_rejected};
use crate::sentiment::AnalysisResult;
use crate::stats::ReviewStats;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SentimentEngine>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(engine: SentimentEngine, config: AppConfig) -> Self {
        Self {
            engine: Arc::new(engine),
            config: Arc::new(config),
        }
    }

    /// Load the lexicon named by the config (built-in when unset).
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let lexicon = Lexicon::load(config.lexicon_path.as_deref())?;
        info!(
            topics = lexicon.topics().len(),
            min_text_chars = config.min_text_chars,
            max_batch = config.max_batch,
            "analysis state ready"
        );
        Ok(Self::new(SentimentEngine::new(Arc::new(lexicon)), config))
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_config(AppConfig::from_env())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/analyze", post(analyze))
        .route("/api/analyze/batch", post(analyze_batch))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct AnalyzeReq {
    text: String,
}

#[derive(Debug, Deserialize)]
struct BatchReq {
    texts: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResp {
    pub results: Vec<AnalysisResult>,
    pub stats: ReviewStats,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn reject(status: StatusCode, message: String, field: Option<String>) -> ApiError {
    record_rejected();
    (status, Json(ErrorBody { message, field }))
}

fn validate_text(text: &str, min_chars: usize, field: &str) -> Result<(), ApiError> {
    if text.chars().count() < min_chars {
        return Err(reject(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("The {field} field must be at least {min_chars} characters."),
            Some(field.to_string()),
        ));
    }
    Ok(())
}

async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeReq>,
) -> Result<Json<AnalysisResult>, ApiError> {
    validate_text(&body.text, state.config.min_text_chars, "text")?;
    let res = state.engine.analyze(&body.text);
    record_analysis(&res);
    Ok(Json(res))
}

async fn analyze_batch(
    State(state): State<AppState>,
    Json(body): Json<BatchReq>,
) -> Result<Json<BatchResp>, ApiError> {
    if body.texts.len() > state.config.max_batch {
        return Err(reject(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!(
                "At most {} texts per batch, got {}.",
                state.config.max_batch,
                body.texts.len()
            ),
            Some("texts".to_string()),
        ));
    }
    for (i, t) in body.texts.iter().enumerate() {
        validate_text(t, state.config.min_text_chars, &format!("texts.{i}"))?;
    }

    let results = body
        .texts
        .iter()
        .map(|t| {
            let res = state.engine.analyze(t);
            record_analysis(&res);
            res
        })
        .collect::<Vec<_>>();
    let stats = ReviewStats::from_results(&results);
    Ok(Json(BatchResp { results, stats }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_counts_characters_not_bytes() {
        // 10 chars, 14 bytes
        assert!(validate_text("éééé123456", 10, "text").is_ok());
        let err = validate_text("trop court", 11, "text").unwrap_err();
        assert_eq!(err.0, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.1.field.as_deref(), Some("text"));
    }
}
