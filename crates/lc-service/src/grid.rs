//! Life calendar grid.
//!
//! A life calendar spans 90 years of 52 weeks each. Weeks already lived are
//! "filled". The grid is rebuilt for every request and never shared.

use serde::Serialize;

/// Number of years covered by the calendar.
pub const TOTAL_YEARS: i64 = 90;

/// Weeks counted per year.
pub const WEEKS_PER_YEAR: i64 = 52;

/// Number of cells in the grid (90 × 52).
pub const TOTAL_WEEKS: usize = (TOTAL_YEARS * WEEKS_PER_YEAR) as usize;

/// One week in the calendar.
///
/// Serialized with the field name `Filled` for the page template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeekCell {
    filled: bool,
}

impl WeekCell {
    /// Whether this week has already been lived.
    pub fn filled(&self) -> bool {
        self.filled
    }
}

/// Data handed to the page template.
///
/// Serialized as `Age`, `TotalWeeks`, `FilledWeeks` and `Weeks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RenderPayload {
    age: i64,
    total_weeks: usize,
    filled_weeks: usize,
    weeks: Vec<WeekCell>,
}

impl RenderPayload {
    /// The age as requested. Not clamped, so `200` displays as `200`.
    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn total_weeks(&self) -> usize {
        self.total_weeks
    }

    /// Weeks lived, clamped to `[0, total_weeks]`.
    pub fn filled_weeks(&self) -> usize {
        self.filled_weeks
    }

    /// Cells in chronological order.
    pub fn weeks(&self) -> &[WeekCell] {
        &self.weeks
    }
}

/// Number of filled weeks for `age`, clamped to the grid.
///
/// Saturates instead of overflowing, so every `i64` is a valid input.
pub fn filled_weeks_for(age: i64) -> usize {
    let raw = age.saturating_mul(WEEKS_PER_YEAR);
    // raw is within [0, TOTAL_WEEKS] after clamping, so the cast is lossless
    raw.clamp(0, TOTAL_WEEKS as i64) as usize
}

/// Build the calendar for `age`.
pub fn compute_grid(age: i64) -> RenderPayload {
    let filled_weeks = filled_weeks_for(age);
    let weeks = (0..TOTAL_WEEKS)
        .map(|i| WeekCell {
            filled: i < filled_weeks,
        })
        .collect();

    RenderPayload {
        age,
        total_weeks: TOTAL_WEEKS,
        filled_weeks,
        weeks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_grid_invariant(payload: &RenderPayload) {
        assert_eq!(payload.weeks().len(), TOTAL_WEEKS);
        for (i, week) in payload.weeks().iter().enumerate() {
            assert_eq!(
                week.filled(),
                i < payload.filled_weeks(),
                "week {} has wrong fill state",
                i
            );
        }
    }

    #[test]
    fn test_total_weeks_constant() {
        assert_eq!(TOTAL_WEEKS, 4680);
    }

    #[test]
    fn test_age_zero_has_no_filled_weeks() {
        let payload = compute_grid(0);

        assert_eq!(payload.age(), 0);
        assert_eq!(payload.total_weeks(), 4680);
        assert_eq!(payload.filled_weeks(), 0);
        assert!(payload.weeks().iter().all(|w| !w.filled()));
    }

    #[test]
    fn test_age_one_fills_first_year() {
        let payload = compute_grid(1);

        assert_eq!(payload.filled_weeks(), 52);
        assert_eq!(payload.weeks().iter().filter(|w| w.filled()).count(), 52);
        assert_eq!(payload.weeks().iter().filter(|w| !w.filled()).count(), 4628);
        assert_grid_invariant(&payload);
    }

    #[test]
    fn test_age_ninety_fills_everything() {
        let payload = compute_grid(90);

        assert_eq!(payload.filled_weeks(), 4680);
        assert!(payload.weeks().iter().all(|w| w.filled()));
    }

    #[test]
    fn test_large_age_is_clamped_but_displayed() {
        let payload = compute_grid(200);

        assert_eq!(payload.age(), 200);
        assert_eq!(payload.filled_weeks(), 4680);
        assert!(payload.weeks().iter().all(|w| w.filled()));
    }

    #[test]
    fn test_negative_age_matches_zero_grid() {
        let negative = compute_grid(-5);
        let zero = compute_grid(0);

        assert_eq!(negative.age(), -5);
        assert_eq!(negative.filled_weeks(), 0);
        assert_eq!(negative.weeks(), zero.weeks());
    }

    #[test]
    fn test_extreme_ages_do_not_overflow() {
        assert_eq!(filled_weeks_for(i64::MAX), TOTAL_WEEKS);
        assert_eq!(filled_weeks_for(i64::MIN), 0);
    }

    #[test]
    fn test_filled_weeks_formula() {
        for age in 0..=100_i64 {
            let expected = std::cmp::min(age * 52, 4680) as usize;
            assert_eq!(filled_weeks_for(age), expected, "age {}", age);
        }
        for age in [-1_i64, -52, -1000] {
            assert_eq!(filled_weeks_for(age), 0, "age {}", age);
        }
    }

    #[test]
    fn test_grid_invariant_across_ages() {
        for age in [-3_i64, 0, 1, 17, 45, 89, 90, 91, 1000] {
            assert_grid_invariant(&compute_grid(age));
        }
    }

    #[test]
    fn test_partial_year_boundary() {
        let payload = compute_grid(30);
        let boundary = 30 * 52;

        assert_eq!(payload.filled_weeks(), boundary);
        assert_eq!(payload.weeks().get(boundary - 1).map(WeekCell::filled), Some(true));
        assert_eq!(payload.weeks().get(boundary).map(WeekCell::filled), Some(false));
    }
}
