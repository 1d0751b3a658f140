//! Typography and page format for the styled (HTML) target.
//!
//! Only the HTML composer and the PDF collaborator read these values; the section
//! assembler never does. Sizes are in points, page dimensions and margins in inches.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font family
// ────────────────────────────────────────────────────────────────────────────

/// Font families available to the built-in profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    /// Classic profile: traditional print serif.
    TimesNewRoman,
    /// Modern profile: humanist sans-serif.
    Inter,
    /// Compact profile: narrow serif that stays legible at small sizes.
    Georgia,
    /// Plain profile: system sans-serif parsed reliably by ATS tools.
    Arial,
}

impl FontFamily {
    /// CSS `font-family` stack, primary face first.
    pub fn css_stack(&self) -> &'static str {
        match self {
            FontFamily::TimesNewRoman => "'Times New Roman', Times, serif",
            FontFamily::Inter => "Inter, 'Helvetica Neue', Helvetica, Arial, sans-serif",
            FontFamily::Georgia => "Georgia, 'Times New Roman', serif",
            FontFamily::Arial => "Arial, Helvetica, sans-serif",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Typography
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderAlign {
    Center,
    Left,
}

impl HeaderAlign {
    pub fn css(&self) -> &'static str {
        match self {
            HeaderAlign::Center => "center",
            HeaderAlign::Left => "left",
        }
    }
}

/// How section titles are set apart from their content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingRule {
    /// Underlined title text.
    Underline,
    /// Thin rule below the title, full width.
    BottomBorder,
    /// Bold title only.
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub font: FontFamily,
    pub base_size_pt: f32,
    /// Size used for contact line, dates, and highlights.
    pub small_size_pt: f32,
    pub name_size_pt: f32,
    pub heading_size_pt: f32,
    pub line_height: f32,
    pub section_spacing_pt: f32,
    pub entry_spacing_pt: f32,
    pub header_align: HeaderAlign,
    pub heading_rule: HeadingRule,
    /// CSS colour for the name and section titles.
    pub accent_color: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Page format
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperSize {
    Letter,
    A4,
}

impl PaperSize {
    /// `(width, height)` in inches.
    pub fn dimensions_in(&self) -> (f32, f32) {
        match self {
            PaperSize::Letter => (8.5, 11.0),
            PaperSize::A4 => (8.27, 11.69),
        }
    }
}

/// Page setup handed to the PDF collaborator together with the HTML document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageFormat {
    pub paper: PaperSize,
    pub margin_top_in: f32,
    pub margin_bottom_in: f32,
    pub margin_left_in: f32,
    pub margin_right_in: f32,
    /// Keep CSS backgrounds when printing.
    pub print_background: bool,
}

impl PageFormat {
    pub fn width_in(&self) -> f32 {
        self.paper.dimensions_in().0
    }

    pub fn height_in(&self) -> f32 {
        self.paper.dimensions_in().1
    }
}

/// Returns the default page format: US letter, 0.4" margins all sides, backgrounds kept.
pub fn default_page_format() -> PageFormat {
    uniform_margins(PaperSize::Letter, 0.4)
}

pub(crate) fn uniform_margins(paper: PaperSize, margin_in: f32) -> PageFormat {
    PageFormat {
        paper,
        margin_top_in: margin_in,
        margin_bottom_in: margin_in,
        margin_left_in: margin_in,
        margin_right_in: margin_in,
        print_background: true,
    }
}
