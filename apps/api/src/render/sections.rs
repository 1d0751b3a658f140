//! Section assembly: turns a validated record into target-neutral fragments.
//!
//! Each non-empty data group listed in the profile's section order yields exactly one
//! `Fragment`; empty groups yield nothing, so no composer can emit a bare heading.
//! Entries keep input order. Both composers (`markdown`, `html`) consume the same
//! fragments and only decide how to print them.

use crate::models::resume::{
    Basics, Certificate, Credential, Engagement, Language, PartialDate, Position, ResumeRecord,
    Skill,
};
use crate::render::date::{format_date, format_range};
use crate::render::duration::compute_duration;
use crate::render::error::RenderError;
use crate::render::profile::{LanguageLayout, SectionKind, StyleProfile};

// ────────────────────────────────────────────────────────────────────────────
// Fragment tree
// ────────────────────────────────────────────────────────────────────────────

/// Inline content. Text is stored raw; escaping is the composer's job.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    Strong(Vec<Inline>),
    Link { label: String, href: String },
}

pub type Line = Vec<Inline>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryLayout {
    /// Title line, byline, dates, then bullets (positions, credentials).
    Block,
    /// Flow target prints it as one list item; the styled target as a block.
    Line,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub layout: EntryLayout,
    pub heading: Line,
    pub byline: Line,
    pub dates: Option<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    Paragraphs(Vec<String>),
    Entries(Vec<Entry>),
    /// One item per line.
    Items(Vec<Line>),
    /// Items joined by the profile separator on a single line.
    InlineItems(Vec<Line>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub kind: SectionKind,
    pub title: String,
    pub body: SectionBody,
}

/// Contact line item; composers pick labels per target.
#[derive(Debug, Clone, PartialEq)]
pub enum Contact {
    Text(String),
    Email(String),
    Profile { network: String, url: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub name: String,
    pub label: Option<String>,
    pub contacts: Vec<Contact>,
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

/// Builds the document header. `name` comes from the validation pass.
pub fn build_header(name: &str, basics: &Basics, profile: &StyleProfile) -> Header {
    let mut contacts = Vec::new();

    if let Some(loc) = &basics.location {
        let mut parts: Vec<&str> = Vec::new();
        if profile.show_city {
            parts.extend(non_blank(loc.city.as_deref()));
        }
        parts.extend(non_blank(loc.region.as_deref()));
        parts.extend(non_blank(loc.country_code.as_deref()));
        if !parts.is_empty() {
            contacts.push(Contact::Text(parts.join(", ")));
        }
    }
    if let Some(phone) = non_blank(basics.phone.as_deref()) {
        contacts.push(Contact::Text(phone.to_string()));
    }
    if let Some(email) = non_blank(basics.email.as_deref()) {
        contacts.push(Contact::Email(email.to_string()));
    }
    for p in &basics.profiles {
        if p.url.trim().is_empty() && p.network.trim().is_empty() {
            continue;
        }
        contacts.push(Contact::Profile {
            network: p.network.clone(),
            url: p.url.clone(),
        });
    }

    Header {
        name: name.to_string(),
        label: non_blank(basics.label.as_deref()).map(str::to_string),
        contacts,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

/// Assembles one fragment per non-empty section, in the profile's order.
///
/// Expects a record that passed `validate_record`; date errors are still
/// propagated rather than guessed around.
pub fn assemble_sections(
    record: &ResumeRecord,
    profile: &StyleProfile,
    now: &PartialDate,
) -> Result<Vec<Fragment>, RenderError> {
    let mut fragments = Vec::new();

    for spec in &profile.sections {
        let body = match spec.kind {
            SectionKind::Summary => summary_paragraphs(record.basics.summary.as_deref())
                .map(SectionBody::Paragraphs),
            SectionKind::Experience => non_empty(&record.work)
                .map(|work| {
                    work.iter()
                        .map(|p| position_entry(p, profile, now))
                        .collect::<Result<Vec<_>, _>>()
                })
                .transpose()?
                .map(SectionBody::Entries),
            SectionKind::Freelance => engagements(&record.freelance, profile, now)?,
            SectionKind::Projects => engagements(&record.projects, profile, now)?,
            SectionKind::Education => non_empty(&record.education)
                .map(|edu| {
                    edu.iter()
                        .map(|c| credential_entry(c, profile))
                        .collect::<Result<Vec<_>, _>>()
                })
                .transpose()?
                .map(SectionBody::Entries),
            SectionKind::Languages => non_empty(&record.languages).map(|langs| {
                let items = langs.iter().map(language_line).collect();
                match profile.languages {
                    LanguageLayout::Inline => SectionBody::InlineItems(items),
                    LanguageLayout::Block => SectionBody::Items(items),
                }
            }),
            SectionKind::Skills => non_empty(&record.skills)
                .map(|skills| SectionBody::Items(skills.iter().map(skill_line).collect())),
            SectionKind::Certificates => non_empty(&record.certificates)
                .map(|certs| {
                    certs
                        .iter()
                        .map(|c| certificate_line(c, profile))
                        .collect::<Result<Vec<_>, _>>()
                })
                .transpose()?
                .map(SectionBody::Items),
        };

        if let Some(body) = body {
            fragments.push(Fragment {
                kind: spec.kind,
                title: spec.title.clone(),
                body,
            });
        }
    }

    Ok(fragments)
}

fn engagements(
    entries: &[Engagement],
    profile: &StyleProfile,
    now: &PartialDate,
) -> Result<Option<SectionBody>, RenderError> {
    non_empty(entries)
        .map(|items| {
            items
                .iter()
                .map(|e| engagement_entry(e, profile, now))
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()
        .map(|entries| entries.map(SectionBody::Entries))
}

// ────────────────────────────────────────────────────────────────────────────
// Per-entry renderers
// ────────────────────────────────────────────────────────────────────────────

fn position_entry(
    job: &Position,
    profile: &StyleProfile,
    now: &PartialDate,
) -> Result<Entry, RenderError> {
    let mut byline = vec![Inline::Strong(vec![link_or_text(
        &job.name,
        job.url.as_deref(),
        profile,
    )])];

    if profile.show_position_meta {
        let meta: Vec<&str> = [
            job.employment_type.as_deref(),
            job.location_type.as_deref(),
            job.location.as_deref(),
        ]
        .into_iter()
        .filter_map(non_blank)
        .collect();
        if !meta.is_empty() {
            byline.push(Inline::Text(format!(
                "{}{}",
                profile.separator,
                meta.join(profile.separator.as_str())
            )));
        }
    }

    Ok(Entry {
        layout: EntryLayout::Block,
        heading: vec![Inline::Text(job.position.clone())],
        byline,
        dates: Some(dated_range(
            job.start_date.as_ref(),
            job.end_date.as_ref(),
            profile,
            now,
        )?),
        bullets: job
            .highlights
            .iter()
            .filter(|h| !h.trim().is_empty())
            .cloned()
            .collect(),
    })
}

fn engagement_entry(
    e: &Engagement,
    profile: &StyleProfile,
    now: &PartialDate,
) -> Result<Entry, RenderError> {
    let dates = match (&e.start_date, &e.end_date) {
        (Some(start), end) => Some(dated_range(Some(start), end.as_ref(), profile, now)?),
        (None, Some(end)) => Some(format_date(Some(end), profile.months)?),
        (None, None) => None,
    };

    let description = e.description.trim();
    Ok(Entry {
        layout: EntryLayout::Line,
        heading: vec![link_or_text(&e.name, e.url.as_deref(), profile)],
        byline: if description.is_empty() {
            Vec::new()
        } else {
            vec![Inline::Text(description.to_string())]
        },
        dates,
        bullets: Vec::new(),
    })
}

fn credential_entry(edu: &Credential, profile: &StyleProfile) -> Result<Entry, RenderError> {
    let title: Vec<&str> = [edu.study_type.as_deref(), edu.area.as_deref()]
        .into_iter()
        .filter_map(non_blank)
        .collect();

    let dates = match &edu.start_date {
        Some(start) => format_range(Some(start), edu.end_date.as_ref(), profile.months)?,
        None => format_date(edu.end_date.as_ref(), profile.months)?,
    };

    let institution = link_or_text(&edu.institution, edu.url.as_deref(), profile);
    // Without a study type or area the institution becomes the title line.
    let (heading, byline) = if title.is_empty() {
        (vec![institution], Vec::new())
    } else {
        (
            vec![Inline::Text(title.join(", "))],
            vec![Inline::Strong(vec![institution])],
        )
    };

    Ok(Entry {
        layout: EntryLayout::Block,
        heading,
        byline,
        dates: Some(dates),
        bullets: Vec::new(),
    })
}

fn skill_line(skill: &Skill) -> Line {
    let keywords: Vec<&str> = skill
        .keywords
        .iter()
        .map(String::as_str)
        .filter_map(|k| non_blank(Some(k)))
        .collect();
    let name = skill.name.trim();

    match (name.is_empty(), keywords.is_empty()) {
        (false, false) => vec![
            Inline::Strong(vec![Inline::Text(name.to_string())]),
            Inline::Text(format!(": {}", keywords.join(", "))),
        ],
        (false, true) => vec![Inline::Strong(vec![Inline::Text(name.to_string())])],
        (true, _) => vec![Inline::Text(keywords.join(", "))],
    }
}

fn certificate_line(cert: &Certificate, profile: &StyleProfile) -> Result<Line, RenderError> {
    let mut line = vec![Inline::Strong(vec![link_or_text(
        &cert.name,
        cert.url.as_deref(),
        profile,
    )])];
    if let Some(issuer) = non_blank(cert.issuer.as_deref()) {
        line.push(Inline::Text(format!(", {issuer}")));
    }
    if let Some(date) = &cert.date {
        line.push(Inline::Text(format!(
            " ({})",
            format_date(Some(date), profile.months)?
        )));
    }
    Ok(line)
}

fn language_line(lang: &Language) -> Line {
    let text = match non_blank(lang.fluency.as_deref()) {
        Some(fluency) => format!("{} ({fluency})", lang.language),
        None => lang.language.clone(),
    };
    vec![Inline::Text(text)]
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// `"<range>"` or `"<range><sep><duration>"` when the profile shows durations.
fn dated_range(
    start: Option<&PartialDate>,
    end: Option<&PartialDate>,
    profile: &StyleProfile,
    now: &PartialDate,
) -> Result<String, RenderError> {
    let range = format_range(start, end, profile.months)?;
    if !profile.show_durations {
        return Ok(range);
    }
    let duration = compute_duration(start, end, now)?;
    Ok(format!("{range}{}{duration}", profile.separator))
}

fn link_or_text(label: &str, url: Option<&str>, profile: &StyleProfile) -> Inline {
    match non_blank(url) {
        Some(href) if profile.show_links => Inline::Link {
            label: label.to_string(),
            href: href.to_string(),
        },
        _ => Inline::Text(label.to_string()),
    }
}

/// Splits the summary on blank lines; `None` when nothing but whitespace remains.
fn summary_paragraphs(summary: Option<&str>) -> Option<Vec<String>> {
    let paragraphs: Vec<String> = summary?
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    (!paragraphs.is_empty()).then_some(paragraphs)
}

fn non_empty<T>(items: &[T]) -> Option<&[T]> {
    (!items.is_empty()).then_some(items)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
