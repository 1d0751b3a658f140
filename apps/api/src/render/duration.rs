//! Tenure arithmetic: elapsed whole years and months between two partial dates.
//!
//! Counting is inclusive of the start month: a job that starts and ends in the same
//! month lasts one month. A missing month counts as January for arithmetic only.
//! `now` is always supplied by the caller; this module never reads the clock.

use std::fmt;

use serde::Serialize;

use crate::models::resume::PartialDate;
use crate::render::error::RenderError;

/// Elapsed tenure. Never both zero: the shortest duration is one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedDuration {
    pub years: u32,
    /// Remaining months, 0–11.
    pub months: u32,
}

impl DerivedDuration {
    /// Splits a month count into years and months, flooring at one month.
    pub fn from_total_months(total: u32) -> Self {
        let total = total.max(1);
        Self {
            years: total / 12,
            months: total % 12,
        }
    }
}

impl fmt::Display for DerivedDuration {
    /// `"2 yrs 1 mo"`, `"1 yr"`, `"5 mos"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::with_capacity(2);
        if self.years > 0 {
            let unit = if self.years > 1 { "yrs" } else { "yr" };
            parts.push(format!("{} {unit}", self.years));
        }
        if self.months > 0 {
            let unit = if self.months > 1 { "mos" } else { "mo" };
            parts.push(format!("{} {unit}", self.months));
        }
        if parts.is_empty() {
            return f.write_str("1 mo");
        }
        f.write_str(&parts.join(" "))
    }
}

/// Computes the tenure between `start` and `end`, using `now` when `end` is absent.
///
/// # Errors
/// - `InvalidDate` if `start` is absent or a month lies outside 1–12.
pub fn compute_duration(
    start: Option<&PartialDate>,
    end: Option<&PartialDate>,
    now: &PartialDate,
) -> Result<DerivedDuration, RenderError> {
    let start =
        start.ok_or_else(|| RenderError::invalid_date("startDate", "a duration needs a start date"))?;
    let start_month = arithmetic_month(start)?;

    let end = end.unwrap_or(now);
    let end_month = arithmetic_month(end)?;

    let total = i64::from(end.year - start.year) * 12 + i64::from(end_month)
        - i64::from(start_month)
        + 1;

    // Reversed ranges, open-ended ranges that start after `now`, and a year-only end
    // inside the start year all floor to a single month.
    let total = u32::try_from(total.max(1)).unwrap_or(u32::MAX);
    Ok(DerivedDuration::from_total_months(total))
}

/// Month used for arithmetic: the given month, or January when absent.
fn arithmetic_month(date: &PartialDate) -> Result<u32, RenderError> {
    match date.month {
        Some(m) if (1..=12).contains(&m) => Ok(m),
        Some(m) => Err(RenderError::invalid_date(
            date.to_string(),
            format!("month {m} is outside 1-12"),
        )),
        None => Ok(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> PartialDate {
        PartialDate::year_month(year, month)
    }

    fn now() -> PartialDate {
        ym(2024, 9)
    }

    // ── compute_duration ────────────────────────────────────────────────────

    #[test]
    fn test_same_month_counts_one_month() {
        let d = compute_duration(Some(&ym(2020, 1)), Some(&ym(2020, 1)), &now()).unwrap();
        assert_eq!(d, DerivedDuration { years: 0, months: 1 });
        assert_eq!(d.to_string(), "1 mo");
    }

    #[test]
    fn test_two_years_one_month() {
        let d = compute_duration(Some(&ym(2019, 3)), Some(&ym(2021, 3)), &now()).unwrap();
        assert_eq!(d, DerivedDuration { years: 2, months: 1 });
        assert_eq!(d.to_string(), "2 yrs 1 mo");
    }

    #[test]
    fn test_open_ended_uses_now() {
        let d = compute_duration(Some(&ym(2021, 6)), None, &ym(2021, 6)).unwrap();
        assert_eq!(d.to_string(), "1 mo");

        let d = compute_duration(Some(&ym(2023, 9)), None, &now()).unwrap();
        assert_eq!(d.to_string(), "1 yr 1 mo");
    }

    #[test]
    fn test_exact_years_omit_months() {
        let d = compute_duration(Some(&ym(2018, 1)), Some(&ym(2018, 12)), &now()).unwrap();
        assert_eq!(d.to_string(), "1 yr");
        let d = compute_duration(Some(&ym(2018, 1)), Some(&ym(2019, 12)), &now()).unwrap();
        assert_eq!(d.to_string(), "2 yrs");
    }

    #[test]
    fn test_plural_months() {
        let d = compute_duration(Some(&ym(2022, 2)), Some(&ym(2022, 6)), &now()).unwrap();
        assert_eq!(d.to_string(), "5 mos");
    }

    #[test]
    fn test_missing_start_month_defaults_to_january() {
        let start = PartialDate::new(2020, None);
        let d = compute_duration(Some(&start), Some(&ym(2020, 3)), &now()).unwrap();
        assert_eq!(d.to_string(), "3 mos");
    }

    #[test]
    fn test_missing_start_is_error() {
        let err = compute_duration(None, Some(&ym(2020, 3)), &now()).unwrap_err();
        assert!(matches!(err, RenderError::InvalidDate { .. }));
    }

    #[test]
    fn test_bad_month_is_error() {
        let err = compute_duration(Some(&ym(2020, 13)), None, &now()).unwrap_err();
        assert!(matches!(err, RenderError::InvalidDate { .. }));
        let err = compute_duration(Some(&ym(2020, 1)), Some(&ym(2020, 0)), &now()).unwrap_err();
        assert!(matches!(err, RenderError::InvalidDate { .. }));
    }

    #[test]
    fn test_explicit_end_before_start_floors_to_one_month() {
        let d = compute_duration(Some(&ym(2021, 5)), Some(&ym(2020, 5)), &now()).unwrap();
        assert_eq!(d.to_string(), "1 mo");
    }

    #[test]
    fn test_future_start_open_ended_floors_to_one_month() {
        let d = compute_duration(Some(&ym(2025, 3)), None, &now()).unwrap();
        assert_eq!(d.to_string(), "1 mo");
    }

    #[test]
    fn test_year_only_end_within_start_year_floors() {
        let end = PartialDate::new(2020, None);
        let d = compute_duration(Some(&ym(2020, 5)), Some(&end), &now()).unwrap();
        assert_eq!(d.to_string(), "1 mo");
    }

    // ── DerivedDuration ─────────────────────────────────────────────────────

    #[test]
    fn test_zero_total_floors_to_one_month() {
        let d = DerivedDuration::from_total_months(0);
        assert_eq!(d, DerivedDuration { years: 0, months: 1 });
    }

    #[test]
    fn test_display_guard_for_zero_parts() {
        let d = DerivedDuration {
            years: 0,
            months: 0,
        };
        assert_eq!(d.to_string(), "1 mo");
    }
}
