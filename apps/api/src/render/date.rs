//! Date display: turns a `PartialDate` into the text shown on the page.

use serde::{Deserialize, Serialize};

use crate::models::resume::PartialDate;
use crate::render::error::RenderError;

/// Shown in place of an absent end date.
pub const PRESENT: &str = "Present";

const FULL_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Month-name table selected by a style profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthNames {
    Full,
    Abbreviated,
}

impl MonthNames {
    /// Name for a 1-based month, or `None` outside 1–12.
    pub fn name(&self, month: u32) -> Option<&'static str> {
        let table = match self {
            MonthNames::Full => &FULL_MONTHS,
            MonthNames::Abbreviated => &SHORT_MONTHS,
        };
        let idx = usize::try_from(month).ok()?.checked_sub(1)?;
        table.get(idx).copied()
    }
}

/// Formats a single date: `"<Month> <Year>"`, `"<Year>"`, or `"Present"` when absent.
pub fn format_date(date: Option<&PartialDate>, months: MonthNames) -> Result<String, RenderError> {
    let Some(date) = date else {
        return Ok(PRESENT.to_string());
    };
    match date.month {
        Some(m) => {
            let name = months.name(m).ok_or_else(|| {
                RenderError::invalid_date(date.to_string(), format!("month {m} is outside 1-12"))
            })?;
            Ok(format!("{name} {}", date.year))
        }
        None => Ok(date.year.to_string()),
    }
}

/// Formats `"<start> - <end>"`; an absent end shows as `"Present"`.
pub fn format_range(
    start: Option<&PartialDate>,
    end: Option<&PartialDate>,
    months: MonthNames,
) -> Result<String, RenderError> {
    Ok(format!(
        "{} - {}",
        format_date(start, months)?,
        format_date(end, months)?
    ))
}
