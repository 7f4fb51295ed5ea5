use axum::{routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::lexicon::Lexicon;
use crate::sentiment::AnalysisResult;

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder and set one size gauge per lexicon table.
    /// Fails if a recorder is already installed in this process.
    pub fn init(lexicon: &Lexicon) -> anyhow::Result<Self> {
        // Use default buckets to avoid API differences across crate versions.
        let handle = PrometheusBuilder::new().install_recorder()?;

        for (table, n) in lexicon.sizes().entries() {
            gauge!("review_lexicon_entries", "table" => table).set(n as f64);
        }

        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// One analysis served. No-op until a recorder is installed.
pub fn record_analysis(res: &AnalysisResult) {
    counter!("review_analysis_total", "sentiment" => res.sentiment.as_str()).increment(1);
    histogram!("review_analysis_score").record(f64::from(res.score));
}

/// One request refused by validation.
pub fn record_rejected() {
    counter!("review_analysis_rejected_total").increment(1);
}
