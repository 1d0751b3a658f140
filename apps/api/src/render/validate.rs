//! Validation pass: runs before any text is emitted.
//!
//! Checks the only required field (`basics.name`) and every supplied date, so a
//! render either fails here or produces a complete document. Empty or absent
//! groups are never errors.

use crate::models::resume::{PartialDate, ResumeRecord};
use crate::render::error::RenderError;

/// Validates `record` and returns the trimmed display name.
pub fn validate_record(record: &ResumeRecord) -> Result<&str, RenderError> {
    let name = record
        .basics
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(RenderError::MissingRequiredField("basics.name"))?;

    for (i, job) in record.work.iter().enumerate() {
        let path = format!("work[{i}]");
        if job.start_date.is_none() {
            return Err(RenderError::invalid_date(
                format!("{path}.startDate"),
                "positions need a start date",
            ));
        }
        check_range(&path, job.start_date.as_ref(), job.end_date.as_ref())?;
    }

    for (group, entries) in [("freelance", &record.freelance), ("projects", &record.projects)] {
        for (i, e) in entries.iter().enumerate() {
            check_range(&format!("{group}[{i}]"), e.start_date.as_ref(), e.end_date.as_ref())?;
        }
    }

    for (i, edu) in record.education.iter().enumerate() {
        check_range(
            &format!("education[{i}]"),
            edu.start_date.as_ref(),
            edu.end_date.as_ref(),
        )?;
    }

    for (i, cert) in record.certificates.iter().enumerate() {
        check_month(&format!("certificates[{i}].date"), cert.date.as_ref())?;
    }

    Ok(name)
}

/// Checks a date supplied by the caller (e.g. `now`).
pub fn validate_date(field: &str, date: &PartialDate) -> Result<(), RenderError> {
    check_month(field, Some(date))
}

fn check_range(
    path: &str,
    start: Option<&PartialDate>,
    end: Option<&PartialDate>,
) -> Result<(), RenderError> {
    check_month(&format!("{path}.startDate"), start)?;
    check_month(&format!("{path}.endDate"), end)
}

fn check_month(field: &str, date: Option<&PartialDate>) -> Result<(), RenderError> {
    match date.and_then(|d| d.month) {
        Some(m) if !(1..=12).contains(&m) => Err(RenderError::invalid_date(
            field,
            format!("month {m} is outside 1-12"),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Basics, Certificate, Credential, Engagement, Position};

    fn named(name: &str) -> ResumeRecord {
        ResumeRecord {
            basics: Basics {
                name: Some(name.to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn position(start: Option<PartialDate>, end: Option<PartialDate>) -> Position {
        Position {
            position: "Engineer".to_string(),
            name: "Acme".to_string(),
            start_date: start,
            end_date: end,
            ..Default::default()
        }
    }

    #[test]
    fn test_name_only_is_valid() {
        assert_eq!(validate_record(&named("  Ada Lovelace ")).unwrap(), "Ada Lovelace");
    }

    #[test]
    fn test_missing_name_is_fatal() {
        let err = validate_record(&ResumeRecord::default()).unwrap_err();
        assert_eq!(err, RenderError::MissingRequiredField("basics.name"));
    }

    #[test]
    fn test_blank_name_is_missing() {
        let err = validate_record(&named("   ")).unwrap_err();
        assert_eq!(err, RenderError::MissingRequiredField("basics.name"));
    }

    #[test]
    fn test_position_without_start_is_invalid() {
        let mut record = named("Ada");
        record.work.push(position(None, None));
        match validate_record(&record).unwrap_err() {
            RenderError::InvalidDate { field, .. } => assert_eq!(field, "work[0].startDate"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_month_out_of_range_reports_path() {
        let mut record = named("Ada");
        record.work.push(position(Some(PartialDate::year_month(2020, 1)), None));
        record.education.push(Credential {
            institution: "MIT".to_string(),
            end_date: Some(PartialDate::year_month(2012, 14)),
            ..Default::default()
        });
        match validate_record(&record).unwrap_err() {
            RenderError::InvalidDate { field, .. } => assert_eq!(field, "education[0].endDate"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_end_before_start_is_accepted() {
        let mut record = named("Ada");
        record.freelance.push(Engagement {
            name: "Side gig".to_string(),
            start_date: Some(PartialDate::year_month(2021, 6)),
            end_date: Some(PartialDate::year_month(2021, 2)),
            ..Default::default()
        });
        record.education.push(Credential {
            institution: "Helsinki".to_string(),
            start_date: Some(PartialDate::year_month(1988, 9)),
            end_date: Some(PartialDate::year_month(1987, 5)),
            ..Default::default()
        });
        assert_eq!(validate_record(&record).unwrap(), "Ada");
    }

    #[test]
    fn test_engagement_without_dates_is_valid() {
        let mut record = named("Ada");
        record.projects.push(Engagement {
            name: "vita".to_string(),
            description: "Resume renderer".to_string(),
            ..Default::default()
        });
        assert!(validate_record(&record).is_ok());
    }

    #[test]
    fn test_certificate_bad_month() {
        let mut record = named("Ada");
        record.certificates.push(Certificate {
            name: "CKA".to_string(),
            date: Some(PartialDate::year_month(2022, 0)),
            ..Default::default()
        });
        assert!(validate_record(&record).is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("now", &PartialDate::year_month(2024, 12)).is_ok());
        assert!(validate_date("now", &PartialDate::year_month(2024, 13)).is_err());
    }
}
