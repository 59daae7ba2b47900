//! Life Calendar (LC) Service Library
//!
//! Renders a "life calendar": a fixed 90 × 52 grid of weeks where the weeks
//! already lived (derived from the `age` query parameter) are filled in.
//! Every page request is timed and recorded in a Prometheus histogram.
//!
//! # Architecture
//!
//! ```text
//! routes/mod.rs -> middleware/http_metrics.rs -> handlers/calendar.rs
//!                                                   -> grid.rs
//!                                                   -> templates.rs
//! ```
//!
//! # Modules
//!
//! - `config` - Service configuration from environment
//! - `errors` - Error types with HTTP status code mapping
//! - `grid` - Week grid data model and calculator
//! - `handlers` - HTTP request handlers
//! - `middleware` - Request latency middleware
//! - `observability` - Metrics collaborator and Prometheus exposition
//! - `routes` - Axum router setup
//! - `templates` - Page renderer backed by an embedded template

pub mod config;
pub mod errors;
pub mod grid;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod templates;
