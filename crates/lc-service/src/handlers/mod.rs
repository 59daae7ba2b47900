//! HTTP request handlers for the Life Calendar service.

pub mod calendar;
pub mod metrics;

pub use calendar::calendar_page;
pub use metrics::metrics_handler;
