//! Request latency metrics for the Life Calendar service.
//!
//! One histogram, `http_request_duration_seconds`, labeled by `path`, with
//! the conventional Prometheus default buckets.
//!
//! # Recorder ownership
//!
//! The Prometheus recorder is NOT installed as the process-global `metrics`
//! recorder. `PrometheusMetrics` owns it and is handed to the middleware
//! explicitly, so each router (and each test) gets isolated histogram state.
//!
//! # Cardinality
//!
//! The `path` label is the raw request path. The root path `/` is reported
//! as `root`; no other path is rewritten.

use crate::errors::LcError;
use metrics::{describe_histogram, histogram, Unit};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle, PrometheusRecorder};
use std::time::Duration;

/// Histogram name for page request latency.
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";

/// Default Prometheus latency buckets (seconds).
pub const DEFAULT_BUCKETS: &[f64] = &[0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0];

/// Label value reported for the root path.
pub const ROOT_PATH_LABEL: &str = "root";

/// Sink for request latency observations.
///
/// Recording is infallible: a metrics problem must never fail a request.
pub trait RequestMetrics: Send + Sync {
    fn observe_request(&self, path_label: &str, duration: Duration);
}

/// Derive the `path` label value for a request path.
pub fn path_label(path: &str) -> &str {
    if path == "/" {
        ROOT_PATH_LABEL
    } else {
        path
    }
}

/// Prometheus-backed request metrics.
pub struct PrometheusMetrics {
    recorder: PrometheusRecorder,
}

impl PrometheusMetrics {
    /// Build a recorder with the default latency buckets.
    ///
    /// # Errors
    ///
    /// Returns `LcError::Metrics` if the bucket configuration is rejected.
    pub fn new() -> Result<Self, LcError> {
        let recorder = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(HTTP_REQUEST_DURATION_SECONDS.to_string()),
                DEFAULT_BUCKETS,
            )
            .map_err(|e| LcError::Metrics(format!("Failed to set HTTP request buckets: {e}")))?
            .build_recorder();

        metrics::with_local_recorder(&recorder, || {
            describe_histogram!(
                HTTP_REQUEST_DURATION_SECONDS,
                Unit::Seconds,
                "Duration of HTTP requests in seconds"
            );
        });

        Ok(Self { recorder })
    }

    /// Handle for rendering the exposition text at `/metrics`.
    pub fn handle(&self) -> PrometheusHandle {
        self.recorder.handle()
    }
}

impl RequestMetrics for PrometheusMetrics {
    fn observe_request(&self, path_label: &str, duration: Duration) {
        metrics::with_local_recorder(&self.recorder, || {
            histogram!(HTTP_REQUEST_DURATION_SECONDS,
                "path" => path_label.to_string()
            )
            .record(duration.as_secs_f64());
        });
    }
}

/// In-memory metrics for tests.
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Records every observation in order.
    #[derive(Default)]
    pub struct RecordingMetrics {
        observations: Mutex<Vec<(String, Duration)>>,
    }

    impl RecordingMetrics {
        pub fn new() -> Self {
            Self::default()
        }

        /// Snapshot of `(path_label, duration)` pairs recorded so far.
        pub fn observations(&self) -> Vec<(String, Duration)> {
            self.observations
                .lock()
                .map(|obs| obs.clone())
                .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
        }

        /// Labels recorded so far, in order.
        pub fn labels(&self) -> Vec<String> {
            self.observations()
                .into_iter()
                .map(|(label, _)| label)
                .collect()
        }
    }

    impl RequestMetrics for RecordingMetrics {
        fn observe_request(&self, path_label: &str, duration: Duration) {
            let mut obs = self
                .observations
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            obs.push((path_label.to_string(), duration));
        }
    }
}
