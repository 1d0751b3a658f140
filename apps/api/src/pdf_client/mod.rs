/// PDF client: the single point of contact with the headless-browser renderer.
///
/// ARCHITECTURAL RULE: the render engine never talks to the renderer. Only the
/// PDF export path calls through the `PdfRenderer` trait, after a complete HTML
/// document has been composed.
///
/// The default backend speaks the Gotenberg Chromium API: a single multipart POST
/// carrying `index.html` plus page size and margins, answered with PDF bytes.
/// One request per export, no retries.
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::render::page::PageFormat;

const CONVERT_HTML_PATH: &str = "/forms/chromium/convert/html";

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Renderer error (status {status}): {message}")]
    Renderer { status: u16, message: String },

    #[error("Renderer timed out after {0:?}")]
    Timeout(Duration),

    #[error("Renderer returned an empty document")]
    EmptyDocument,
}

/// Converts a composed HTML document into a paginated PDF.
///
/// Carried in `AppState` as `Arc<dyn PdfRenderer>` so tests can swap in a fake.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render_pdf(&self, html: &str, page: &PageFormat) -> Result<Bytes, PdfError>;
}

// ────────────────────────────────────────────────────────────────────────────
// ChromiumClient (Gotenberg-compatible HTTP backend)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct ChromiumClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ChromiumClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PdfError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}{CONVERT_HTML_PATH}", self.base_url)
    }
}

#[async_trait]
impl PdfRenderer for ChromiumClient {
    async fn render_pdf(&self, html: &str, page: &PageFormat) -> Result<Bytes, PdfError> {
        let document = Part::text(html.to_string())
            .file_name("index.html")
            .mime_str("text/html")?;

        let form = page_fields(page)
            .into_iter()
            .fold(Form::new().part("files", document), |form, (key, value)| {
                form.text(key, value)
            });

        debug!(endpoint = %self.endpoint(), bytes = html.len(), "Sending document to renderer");

        let response = self
            .client
            .post(self.endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("Renderer returned {}: {}", status, message);
            return Err(PdfError::Renderer {
                status: status.as_u16(),
                message,
            });
        }

        let pdf = response.bytes().await.map_err(|e| self.classify(e))?;
        if pdf.is_empty() {
            return Err(PdfError::EmptyDocument);
        }

        debug!("Renderer produced {} bytes", pdf.len());
        Ok(pdf)
    }
}

impl ChromiumClient {
    fn classify(&self, err: reqwest::Error) -> PdfError {
        if err.is_timeout() {
            PdfError::Timeout(self.timeout)
        } else {
            PdfError::Http(err)
        }
    }
}

/// Form fields describing the page: paper size and margins in inches, backgrounds on/off.
pub(crate) fn page_fields(page: &PageFormat) -> Vec<(&'static str, String)> {
    vec![
        ("paperWidth", page.width_in().to_string()),
        ("paperHeight", page.height_in().to_string()),
        ("marginTop", page.margin_top_in.to_string()),
        ("marginBottom", page.margin_bottom_in.to_string()),
        ("marginLeft", page.margin_left_in.to_string()),
        ("marginRight", page.margin_right_in.to_string()),
        ("printBackground", page.print_background.to_string()),
    ]
}
