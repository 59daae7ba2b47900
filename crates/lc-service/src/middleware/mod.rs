//! Middleware for the Life Calendar service.
//!
//! # Components
//!
//! - `http_metrics` - Request latency middleware

pub mod http_metrics;

pub use http_metrics::http_metrics_middleware;
