//! Resume record: the input document rendered by the engine.
//!
//! Field names follow the JSON Resume convention (camelCase). Every list may be
//! absent or `null`; both deserialize to an empty `Vec`. Only `basics.name` is
//! required, and that requirement is enforced by the render validation pass, not
//! by deserialization.

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Deserializer, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// PartialDate
// ────────────────────────────────────────────────────────────────────────────

/// A calendar value with a required year and an optional month.
///
/// The month is stored as given; range checking (1–12) happens in
/// `render::validate` so that a bad month is reported with its field path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PartialDate {
    pub year: i32,
    pub month: Option<u32>,
}

impl PartialDate {
    pub fn new(year: i32, month: Option<u32>) -> Self {
        Self { year, month }
    }

    pub fn year_month(year: i32, month: u32) -> Self {
        Self {
            year,
            month: Some(month),
        }
    }

    /// Builds a year-month value from any chrono date (the day is dropped).
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        Self::year_month(date.year(), date.month())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDateError(String);

impl fmt::Display for ParseDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid date '{}': expected YYYY, YYYY-MM or YYYY-MM-DD", self.0)
    }
}

impl std::error::Error for ParseDateError {}

impl FromStr for PartialDate {
    type Err = ParseDateError;

    /// Accepts `YYYY`, `YYYY-MM` and `YYYY-MM-DD`. The day component is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDateError(s.to_string());
        let mut parts = s.trim().split('-');

        let year = parts
            .next()
            .filter(|p| !p.is_empty())
            .and_then(|p| p.parse::<i32>().ok())
            .ok_or_else(err)?;

        let month = match parts.next() {
            Some(p) => Some(p.parse::<u32>().map_err(|_| err())?),
            None => None,
        };

        if let Some(day) = parts.next() {
            day.parse::<u32>().map_err(|_| err())?;
        }
        if parts.next().is_some() {
            return Err(err());
        }

        Ok(Self { year, month })
    }
}

impl TryFrom<String> for PartialDate {
    type Error = ParseDateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PartialDate> for String {
    fn from(date: PartialDate) -> Self {
        date.to_string()
    }
}

impl fmt::Display for PartialDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.month {
            Some(m) => write!(f, "{:04}-{:02}", self.year, m),
            None => write!(f, "{:04}", self.year),
        }
    }
}

/// Optional date field: `null`, a missing key, or an empty string all mean "absent".
fn optional_date<'de, D>(deserializer: D) -> Result<Option<PartialDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Text field: a missing key and an explicit `null` both mean empty.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// List field: a missing key and an explicit `null` both mean empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// ────────────────────────────────────────────────────────────────────────────
// Record
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub basics: Basics,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub work: Vec<Position>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub freelance: Vec<Engagement>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub projects: Vec<Engagement>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub education: Vec<Credential>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub certificates: Vec<Certificate>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<Skill>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Basics {
    pub name: Option<String>,
    pub label: Option<String>,
    /// Free text; blank lines separate paragraphs.
    pub summary: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub profiles: Vec<ProfileLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city: Option<String>,
    pub region: Option<String>,
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileLink {
    #[serde(default, deserialize_with = "null_as_default")]
    pub network: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

/// A single job in the work history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
    /// Organization name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub url: Option<String>,
    pub employment_type: Option<String>,
    pub location_type: Option<String>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "optional_date")]
    pub start_date: Option<PartialDate>,
    #[serde(default, deserialize_with = "optional_date")]
    pub end_date: Option<PartialDate>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub highlights: Vec<String>,
}

/// A freelance or open-source project entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engagement {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "optional_date")]
    pub start_date: Option<PartialDate>,
    #[serde(default, deserialize_with = "optional_date")]
    pub end_date: Option<PartialDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    #[serde(default, deserialize_with = "null_as_default")]
    pub institution: String,
    pub url: Option<String>,
    pub study_type: Option<String>,
    pub area: Option<String>,
    #[serde(default, deserialize_with = "optional_date")]
    pub start_date: Option<PartialDate>,
    #[serde(default, deserialize_with = "optional_date")]
    pub end_date: Option<PartialDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub issuer: Option<String>,
    #[serde(default, deserialize_with = "optional_date")]
    pub date: Option<PartialDate>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Language {
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    pub fluency: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── PartialDate parsing ─────────────────────────────────────────────────

    #[test]
    fn test_parse_year_only() {
        let d: PartialDate = "2019".parse().unwrap();
        assert_eq!(d, PartialDate::new(2019, None));
    }

    #[test]
    fn test_parse_year_month_and_ignores_day() {
        assert_eq!(
            "2021-06".parse::<PartialDate>().unwrap(),
            PartialDate::year_month(2021, 6)
        );
        assert_eq!(
            "2021-06-30".parse::<PartialDate>().unwrap(),
            PartialDate::year_month(2021, 6)
        );
    }

    #[test]
    fn test_parse_keeps_out_of_range_month_for_validation() {
        let d: PartialDate = "2020-13".parse().unwrap();
        assert_eq!(d.month, Some(13));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("June 2020".parse::<PartialDate>().is_err());
        assert!("2020-ab".parse::<PartialDate>().is_err());
        assert!("2020-01-01-01".parse::<PartialDate>().is_err());
        assert!("".parse::<PartialDate>().is_err());
    }

    #[test]
    fn test_display_pads_month() {
        assert_eq!(PartialDate::year_month(2020, 3).to_string(), "2020-03");
        assert_eq!(PartialDate::new(2020, None).to_string(), "2020");
    }

    // ── Record deserialization ──────────────────────────────────────────────

    #[test]
    fn test_minimal_record_has_empty_lists() {
        let record: ResumeRecord =
            serde_json::from_value(json!({ "basics": { "name": "Ada" } })).unwrap();
        assert_eq!(record.basics.name.as_deref(), Some("Ada"));
        assert!(record.work.is_empty());
        assert!(record.languages.is_empty());
        assert!(record.basics.profiles.is_empty());
    }

    #[test]
    fn test_null_lists_are_empty() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "basics": { "name": "Ada", "profiles": null },
            "work": null,
            "skills": null
        }))
        .unwrap();
        assert!(record.work.is_empty());
        assert!(record.skills.is_empty());
        assert!(record.basics.profiles.is_empty());
    }

    #[test]
    fn test_empty_end_date_means_open_ended() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "basics": { "name": "Ada" },
            "work": [{
                "position": "Engineer",
                "name": "Acme",
                "startDate": "2020-02",
                "endDate": ""
            }]
        }))
        .unwrap();
        assert_eq!(
            record.work[0].start_date,
            Some(PartialDate::year_month(2020, 2))
        );
        assert_eq!(record.work[0].end_date, None);
    }

    #[test]
    fn test_camel_case_fields() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "basics": {
                "name": "Ada",
                "location": { "region": "Ontario", "countryCode": "CA" }
            },
            "work": [{
                "position": "Engineer",
                "name": "Acme",
                "employmentType": "Full-time",
                "locationType": "Remote",
                "startDate": "2020"
            }],
            "education": [{ "institution": "MIT", "studyType": "BSc", "area": "CS" }]
        }))
        .unwrap();
        let loc = record.basics.location.unwrap();
        assert_eq!(loc.country_code.as_deref(), Some("CA"));
        assert_eq!(record.work[0].employment_type.as_deref(), Some("Full-time"));
        assert_eq!(record.education[0].study_type.as_deref(), Some("BSc"));
    }

    #[test]
    fn test_null_text_fields_are_empty() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "basics": {
                "name": "Ada",
                "profiles": [{ "network": null, "url": "https://example.com/ada" }]
            },
            "work": [{ "position": null, "name": "Acme", "startDate": "2020-02" }],
            "projects": [{ "name": "vita", "description": null }],
            "education": [{ "institution": null, "studyType": "BSc" }],
            "skills": [{ "name": null, "keywords": ["Rust"] }],
            "languages": [{ "language": "English", "fluency": null }],
            "certificates": [{ "name": null }]
        }))
        .unwrap();
        assert_eq!(record.basics.profiles[0].network, "");
        assert_eq!(record.work[0].position, "");
        assert_eq!(record.projects[0].description, "");
        assert_eq!(record.education[0].institution, "");
        assert_eq!(record.skills[0].name, "");
        assert_eq!(record.certificates[0].name, "");
    }

    #[test]
    fn test_null_basics_is_default() {
        let record: ResumeRecord = serde_json::from_value(json!({ "basics": null })).unwrap();
        assert!(record.basics.name.is_none());
    }
}
