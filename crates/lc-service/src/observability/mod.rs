//! Observability for the Life Calendar service.

pub mod metrics;

pub use metrics::{path_label, PrometheusMetrics, RequestMetrics};
