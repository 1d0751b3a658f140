// Render engine: record → validated → fragments → Markdown or HTML document.
// Everything here is synchronous and pure; `now` is always passed in.
// The only I/O is `export_pdf`, which hands finished HTML to the PDF collaborator.

pub mod date;
pub mod duration;
pub mod error;
pub mod handlers;
pub mod html;
pub mod markdown;
pub mod page;
pub mod profile;
pub mod sections;
pub mod validate;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::models::resume::{PartialDate, ResumeRecord};
use crate::pdf_client::{PdfError, PdfRenderer};

pub use error::RenderError;
pub use profile::StyleProfile;

/// Text output kinds produced without any external dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderTarget {
    Markdown,
    Html,
}

/// Failure of a PDF export: either the document could not be composed, or the
/// collaborator could not convert it.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Collaborator(#[from] PdfError),
}

/// Renders `record` with `profile` into the requested text target.
///
/// Pure function of its inputs: identical arguments give byte-identical output.
/// All validation runs before any text is produced, so the result is either a
/// complete document or an error.
pub fn render_document(
    record: &ResumeRecord,
    profile: &StyleProfile,
    target: RenderTarget,
    now: &PartialDate,
) -> Result<String, RenderError> {
    validate::validate_date("now", now)?;
    let name = validate::validate_record(record)?;

    let header = sections::build_header(name, &record.basics, profile);
    let fragments = sections::assemble_sections(record, profile, now)?;

    debug!(
        profile = %profile.name,
        ?target,
        sections = fragments.len(),
        "Assembled resume sections"
    );

    Ok(match target {
        RenderTarget::Markdown => markdown::compose_markdown(&header, &fragments, profile),
        RenderTarget::Html => html::compose_html(&header, &fragments, profile),
    })
}

/// Composes the HTML document, then awaits the collaborator for the PDF.
///
/// The collaborator is only called once the document is complete; its failure is
/// surfaced unchanged.
pub async fn export_pdf(
    record: &ResumeRecord,
    profile: &StyleProfile,
    now: &PartialDate,
    renderer: &dyn PdfRenderer,
) -> Result<Bytes, ExportError> {
    let html = render_document(record, profile, RenderTarget::Html, now)?;
    let pdf = renderer
        .render_pdf(&html, &profile.page)
        .await
        .map_err(|e| {
            warn!(profile = %profile.name, error = %e, "PDF collaborator failed");
            e
        })?;
    info!(profile = %profile.name, bytes = pdf.len(), "PDF export complete");
    Ok(pdf)
}
