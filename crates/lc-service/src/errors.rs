//! Life Calendar error types.
//!
//! Request-path errors map to HTTP responses via the `IntoResponse` impl.
//! The page must always render for any `age` input, so the only error a
//! client can observe is a template rendering failure.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Life Calendar error type.
///
/// Maps to HTTP status codes:
/// - Render, Template: 500 Internal Server Error (plain text body)
/// - Metrics: startup only, never produced while serving
#[derive(Debug, Error)]
pub enum LcError {
    #[error("{0}")]
    Render(String),

    #[error("Template registration failed: {0}")]
    Template(String),

    #[error("Metrics setup failed: {0}")]
    Metrics(String),
}

impl LcError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            LcError::Render(_) | LcError::Template(_) | LcError::Metrics(_) => 500,
        }
    }
}

impl IntoResponse for LcError {
    fn into_response(self) -> Response {
        if let LcError::Render(reason) = &self {
            tracing::error!(target: "lc.render", error = %reason, "Page rendering failed");
        }

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

impl From<minijinja::Error> for LcError {
    fn from(err: minijinja::Error) -> Self {
        LcError::Render(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_status_codes() {
        assert_eq!(LcError::Render("x".to_string()).status_code(), 500);
        assert_eq!(LcError::Template("x".to_string()).status_code(), 500);
        assert_eq!(LcError::Metrics("x".to_string()).status_code(), 500);
    }

    #[tokio::test]
    async fn test_render_error_body_is_error_text() {
        let response = LcError::Render("undefined value".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));

        let body = response
            .into_body()
            .collect()
            .await
            .expect("body should collect")
            .to_bytes();
        assert_eq!(&body[..], b"undefined value");
    }

    #[test]
    fn test_response_status_follows_status_code() {
        let err = LcError::Template("x".to_string());
        let expected = err.status_code();

        let response = err.into_response();

        assert_eq!(response.status().as_u16(), expected);
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            LcError::Template("bad syntax".to_string()).to_string(),
            "Template registration failed: bad syntax"
        );
        assert_eq!(
            LcError::Metrics("bad buckets".to_string()).to_string(),
            "Metrics setup failed: bad buckets"
        );
    }
}
