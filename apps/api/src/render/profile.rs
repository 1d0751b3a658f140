//! Style profiles: named layout bundles that parameterize the renderer.
//!
//! A profile is data, not code. Selecting one fixes month names, section order and
//! titles, the separator glyph, which optional fields are surfaced, and the
//! typography of the HTML target. The assembler and composers never branch on a
//! profile's name.

use serde::{Deserialize, Serialize};

use crate::render::date::MonthNames;
use crate::render::page::{
    default_page_format, uniform_margins, FontFamily, HeaderAlign, HeadingRule, PageFormat,
    PaperSize, Typography,
};

// ────────────────────────────────────────────────────────────────────────────
// Section kinds
// ────────────────────────────────────────────────────────────────────────────

/// The optional data groups a resume can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Freelance,
    Projects,
    Education,
    Languages,
    Skills,
    Certificates,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Freelance => "freelance",
            SectionKind::Projects => "projects",
            SectionKind::Education => "education",
            SectionKind::Languages => "languages",
            SectionKind::Skills => "skills",
            SectionKind::Certificates => "certificates",
        }
    }
}

/// One slot in a profile's section order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub kind: SectionKind,
    pub title: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Profile options
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageLayout {
    /// `English (Native) · French (Fluent)` on one line.
    Inline,
    /// One line per language.
    Block,
}

/// What text labels a profile link in the HTML contact line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkLabel {
    Network,
    Url,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    pub name: String,
    pub description: String,
    pub months: MonthNames,
    /// Sections in render order. Kinds not listed are never rendered.
    pub sections: Vec<SectionSpec>,
    /// Glyph between contact fields, metadata tags, and inline list items.
    pub separator: String,
    /// Employment type, location type, and location after the organization name.
    pub show_position_meta: bool,
    pub show_links: bool,
    /// Append tenure (`· 2 yrs 1 mo`) to experience and freelance date ranges.
    pub show_durations: bool,
    /// Prefix the city to `region, countryCode` in the contact line.
    pub show_city: bool,
    pub languages: LanguageLayout,
    pub contact_link_label: LinkLabel,
    pub typography: Typography,
    pub page: PageFormat,
}

/// Names of the built-in profiles, in catalogue order.
pub const BUILTIN_PROFILES: [&str; 4] = ["classic", "modern", "compact", "plain"];

impl StyleProfile {
    /// Looks up a built-in profile by name (case-insensitive).
    pub fn builtin(name: &str) -> Option<StyleProfile> {
        match name.trim().to_ascii_lowercase().as_str() {
            "classic" => Some(classic()),
            "modern" => Some(modern()),
            "compact" => Some(compact()),
            "plain" => Some(plain()),
            _ => None,
        }
    }
}

/// All built-in profiles in catalogue order.
pub fn builtin_profiles() -> Vec<StyleProfile> {
    vec![classic(), modern(), compact(), plain()]
}

fn sections(specs: &[(SectionKind, &str)]) -> Vec<SectionSpec> {
    specs
        .iter()
        .map(|(kind, title)| SectionSpec {
            kind: *kind,
            title: title.to_string(),
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Built-in profiles
// ────────────────────────────────────────────────────────────────────────────

/// Centred serif header, full month names, dense single page on US letter.
fn classic() -> StyleProfile {
    StyleProfile {
        name: "classic".to_string(),
        description: "Centred serif layout with full month names".to_string(),
        months: MonthNames::Full,
        sections: sections(&[
            (SectionKind::Summary, "Summary"),
            (SectionKind::Experience, "Relevant Experience"),
            (SectionKind::Freelance, "Other Projects"),
            (SectionKind::Projects, "Open Source"),
            (SectionKind::Education, "Education"),
            (SectionKind::Languages, "Languages"),
            (SectionKind::Skills, "Skills"),
            (SectionKind::Certificates, "Certificates"),
        ]),
        separator: " · ".to_string(),
        show_position_meta: true,
        show_links: true,
        show_durations: true,
        show_city: false,
        languages: LanguageLayout::Inline,
        contact_link_label: LinkLabel::Url,
        typography: Typography {
            font: FontFamily::TimesNewRoman,
            base_size_pt: 9.0,
            small_size_pt: 8.5,
            name_size_pt: 13.0,
            heading_size_pt: 10.0,
            line_height: 1.2,
            section_spacing_pt: 5.0,
            entry_spacing_pt: 5.0,
            header_align: HeaderAlign::Center,
            heading_rule: HeadingRule::Underline,
            accent_color: "#000".to_string(),
        },
        page: default_page_format(),
    }
}

/// Left-aligned sans-serif with an accent colour and abbreviated months.
fn modern() -> StyleProfile {
    StyleProfile {
        name: "modern".to_string(),
        description: "Left-aligned sans-serif with accent colour and short month names"
            .to_string(),
        months: MonthNames::Abbreviated,
        sections: sections(&[
            (SectionKind::Summary, "Profile"),
            (SectionKind::Experience, "Experience"),
            (SectionKind::Projects, "Projects"),
            (SectionKind::Freelance, "Freelance"),
            (SectionKind::Skills, "Skills"),
            (SectionKind::Education, "Education"),
            (SectionKind::Certificates, "Certifications"),
            (SectionKind::Languages, "Languages"),
        ]),
        separator: " | ".to_string(),
        show_position_meta: true,
        show_links: true,
        show_durations: true,
        show_city: true,
        languages: LanguageLayout::Block,
        contact_link_label: LinkLabel::Network,
        typography: Typography {
            font: FontFamily::Inter,
            base_size_pt: 10.0,
            small_size_pt: 9.0,
            name_size_pt: 18.0,
            heading_size_pt: 11.0,
            line_height: 1.3,
            section_spacing_pt: 8.0,
            entry_spacing_pt: 6.0,
            header_align: HeaderAlign::Left,
            heading_rule: HeadingRule::BottomBorder,
            accent_color: "#1f4e79".to_string(),
        },
        page: uniform_margins(PaperSize::Letter, 0.5),
    }
}

/// Tight spacing, no metadata cluster or durations; fits long histories on one page.
fn compact() -> StyleProfile {
    StyleProfile {
        name: "compact".to_string(),
        description: "Dense layout without employment metadata or durations".to_string(),
        months: MonthNames::Abbreviated,
        sections: sections(&[
            (SectionKind::Summary, "Summary"),
            (SectionKind::Experience, "Experience"),
            (SectionKind::Skills, "Skills"),
            (SectionKind::Projects, "Projects"),
            (SectionKind::Freelance, "Freelance"),
            (SectionKind::Education, "Education"),
            (SectionKind::Certificates, "Certificates"),
            (SectionKind::Languages, "Languages"),
        ]),
        separator: " · ".to_string(),
        show_position_meta: false,
        show_links: true,
        show_durations: false,
        show_city: false,
        languages: LanguageLayout::Inline,
        contact_link_label: LinkLabel::Network,
        typography: Typography {
            font: FontFamily::Georgia,
            base_size_pt: 8.5,
            small_size_pt: 8.0,
            name_size_pt: 12.0,
            heading_size_pt: 9.5,
            line_height: 1.15,
            section_spacing_pt: 3.0,
            entry_spacing_pt: 3.0,
            header_align: HeaderAlign::Center,
            heading_rule: HeadingRule::BottomBorder,
            accent_color: "#000".to_string(),
        },
        page: uniform_margins(PaperSize::Letter, 0.35),
    }
}

/// ATS-friendly: no hyperlinks, upper-case headings, skills first, A4.
fn plain() -> StyleProfile {
    StyleProfile {
        name: "plain".to_string(),
        description: "ATS-friendly plain layout without hyperlinks".to_string(),
        months: MonthNames::Full,
        sections: sections(&[
            (SectionKind::Summary, "SUMMARY"),
            (SectionKind::Skills, "SKILLS"),
            (SectionKind::Experience, "WORK EXPERIENCE"),
            (SectionKind::Projects, "PROJECTS"),
            (SectionKind::Freelance, "FREELANCE"),
            (SectionKind::Education, "EDUCATION"),
            (SectionKind::Certificates, "CERTIFICATIONS"),
            (SectionKind::Languages, "LANGUAGES"),
        ]),
        separator: " | ".to_string(),
        show_position_meta: true,
        show_links: false,
        show_durations: true,
        show_city: true,
        languages: LanguageLayout::Inline,
        contact_link_label: LinkLabel::Url,
        typography: Typography {
            font: FontFamily::Arial,
            base_size_pt: 10.0,
            small_size_pt: 10.0,
            name_size_pt: 14.0,
            heading_size_pt: 11.0,
            line_height: 1.25,
            section_spacing_pt: 8.0,
            entry_spacing_pt: 6.0,
            header_align: HeaderAlign::Left,
            heading_rule: HeadingRule::None,
            accent_color: "#000".to_string(),
        },
        page: uniform_margins(PaperSize::A4, 0.6),
    }
}
