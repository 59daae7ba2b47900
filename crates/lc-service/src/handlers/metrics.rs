//! Prometheus metrics endpoint handler.
//!
//! Provides the `/metrics` endpoint for Prometheus scraping. Scrapes are not
//! themselves observed by the latency middleware.

use axum::{extract::State, response::IntoResponse};
use metrics_exporter_prometheus::PrometheusHandle;

/// Handler for GET /metrics
///
/// Returns Prometheus-formatted metrics for scraping.
///
/// # Response
///
/// Returns 200 OK with Prometheus text format:
/// ```text
/// # TYPE http_request_duration_seconds histogram
/// http_request_duration_seconds_bucket{path="root",le="0.005"} 3
/// ...
/// http_request_duration_seconds_count{path="root"} 3
/// ```
#[tracing::instrument(skip_all, name = "lc.metrics.scrape")]
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    handle.render()
}
