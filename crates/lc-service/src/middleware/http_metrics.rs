//! HTTP latency middleware for the calendar page.
//!
//! Every request passing through this layer produces exactly one latency
//! observation, including requests whose handler answered with a 500.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;

use crate::observability::metrics::{path_label, RequestMetrics};

/// Middleware that times the inner handler and records the latency.
///
/// The label is the request path, with `/` reported as `root`. The
/// observation is recorded after the inner handler has produced its
/// response.
pub async fn http_metrics_middleware(
    State(metrics): State<Arc<dyn RequestMetrics>>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    metrics.observe_request(path_label(&path), start.elapsed());

    response
}
