//! Review sentiment service: binary entrypoint.
//! Boots the Axum HTTP server: engine state, API routes, optional debug
//! routes and the Prometheus `/metrics` endpoint.

use review_sentiment::{app, metrics::Metrics, AppState};
use shuttle_axum::ShuttleAxum;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Enable compact tracing logs in development only.
/// Activation requires BOTH:
///   - dev environment (debug build OR SHUTTLE_ENV in {local, development, dev})
///   - REVIEW_DEV_LOG=1
fn enable_dev_tracing() {
    if !review_sentiment::debug::dev_logging_enabled() {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("review_sentiment=debug,info"));

    // The runtime may already own the global subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    enable_dev_tracing();

    let state = AppState::from_env()?;
    let mut router = app(state.clone());

    match Metrics::init(state.engine.lexicon()) {
        Ok(metrics) => router = router.merge(metrics.router()),
        Err(e) => warn!(error = %e, "prometheus recorder not installed; /metrics disabled"),
    }

    info!("review sentiment service ready");
    Ok(router.into())
}
