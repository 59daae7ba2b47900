//! Life calendar page handler.

use crate::errors::LcError;
use crate::grid::compute_grid;
use crate::routes::AppState;
use crate::templates::INDEX_TEMPLATE;
use axum::extract::{Query, State};
use axum::response::Html;
use std::sync::Arc;
use tracing::instrument;

/// Parse the `age` query value.
///
/// Anything that is not an integer (absent, empty, non-numeric, out of
/// range) reads as `0`. The page always renders.
pub fn parse_age(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.parse().ok()).unwrap_or(0)
}

/// Handler for GET / (and any other unmatched path).
///
/// Renders the calendar for the `age` query parameter. When `age` repeats,
/// the first occurrence wins.
///
/// ## Response
///
/// - 200 `text/html` with the rendered page
/// - 500 `text/plain` with the render error text
#[instrument(skip_all, name = "lc.calendar.page")]
pub async fn calendar_page(
    State(state): State<Arc<AppState>>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Result<Html<String>, LcError> {
    let raw_age = query
        .as_ref()
        .and_then(|Query(params)| params.iter().find(|(key, _)| key == "age"))
        .map(|(_, value)| value.as_str());
    let age = parse_age(raw_age);

    let payload = compute_grid(age);
    tracing::debug!(
        target: "lc.calendar",
        age = payload.age(),
        filled_weeks = payload.filled_weeks(),
        "Rendering calendar"
    );

    let html = state.renderer.render(INDEX_TEMPLATE, &payload)?;

    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_age_integer() {
        assert_eq!(parse_age(Some("30")), 30);
        assert_eq!(parse_age(Some("-5")), -5);
        assert_eq!(parse_age(Some("+7")), 7);
        assert_eq!(parse_age(Some("200")), 200);
    }

    #[test]
    fn test_parse_age_defaults_to_zero() {
        assert_eq!(parse_age(None), 0);
        assert_eq!(parse_age(Some("")), 0);
        assert_eq!(parse_age(Some("abc")), 0);
        assert_eq!(parse_age(Some("12.5")), 0);
        assert_eq!(parse_age(Some(" 12")), 0);
    }

    #[test]
    fn test_parse_age_out_of_range_defaults_to_zero() {
        assert_eq!(parse_age(Some("99999999999999999999999")), 0);
    }
}
