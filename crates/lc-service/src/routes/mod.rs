//! HTTP routes for the Life Calendar service.
//!
//! Defines the Axum router and application state.

use crate::handlers;
use crate::middleware::http_metrics_middleware;
use crate::observability::metrics::RequestMetrics;
use crate::templates::PageRenderer;
use axum::{
    middleware,
    routing::{any, get},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Page renderer with the calendar template registered.
    pub renderer: Arc<dyn PageRenderer>,
}

/// Build the application routes.
///
/// Creates an Axum router with:
/// - `/` - Life calendar page (any method), timed by the HTTP metrics middleware
/// - any other path except `/metrics` - same page handler, same middleware
/// - `/metrics` - Prometheus exposition (not timed)
/// - TraceLayer for request logging
/// - 30 second request timeout
pub fn build_routes(
    state: Arc<AppState>,
    request_metrics: Arc<dyn RequestMetrics>,
    metrics_handle: PrometheusHandle,
) -> Router {
    // Page routes, wrapped by the latency middleware. The fallback catches
    // every path other than `/metrics`.
    let page_routes = Router::new()
        .route("/", any(handlers::calendar_page))
        .fallback(handlers::calendar_page)
        .with_state(state)
        .layer(middleware::from_fn_with_state(
            request_metrics,
            http_metrics_middleware,
        ));

    // Metrics route with its own state
    let metrics_routes = Router::new()
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(metrics_handle);

    // Layer order (bottom-to-top execution):
    // 1. TimeoutLayer - Timeout the request (innermost)
    // 2. TraceLayer - Log request details
    page_routes
        .merge(metrics_routes)
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http())
}
