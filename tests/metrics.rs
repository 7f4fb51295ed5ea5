// tests/metrics.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use review_sentiment::config::AppConfig;
use review_sentiment::metrics::Metrics;
use review_sentiment::{router, AppState, SentimentEngine};

// Only one test in this binary installs the global recorder.
fn build_app() -> Router {
    let state = AppState::new(SentimentEngine::builtin(), AppConfig::default());
    let metrics = Metrics::init(state.engine.lexicon()).expect("install recorder");
    router(state).merge(metrics.router())
}

fn analyze_req(text: &str) -> Request<Body> {
    Request::post("/api/analyze")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::json!({ "text": text }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn metrics_endpoint_tracks_analyses_and_rejections() {
    let app = build_app();

    let ok = app
        .clone()
        .oneshot(analyze_req(
            "Service client inexistant, produit défectueux. Je ne recommande pas.",
        ))
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);

    let rejected = app.clone().oneshot(analyze_req("court")).await.unwrap();
    assert_eq!(rejected.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    // axum::body::to_bytes requires an explicit limit
    let body = body::to_bytes(resp.into_body(), 1_048_576).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();

    for needle in [
        "review_analysis_total{sentiment=\"négatif\"} 1",
        "review_analysis_rejected_total 1",
        "review_analysis_score",
        "review_lexicon_entries{table=\"topics\"} 5",
        "review_lexicon_entries{table=\"amplifiers\"} 5",
        "review_lexicon_entries{table=\"very_positive_words\"} 6",
        "review_lexicon_entries{table=\"negation_markers\"}",
        "review_lexicon_entries{table=\"neutral_positive_phrases\"} 7",
    ] {
        assert!(
            text.contains(needle),
            "metrics exposition missing '{needle}'\n{text}"
        );
    }

    // a second recorder cannot be installed in the same process
    assert!(Metrics::init(review_sentiment::Lexicon::builtin()).is_err());
}
