use std::sync::Arc;

use crate::config::Config;
use crate::pdf_client::PdfRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// PDF collaborator. Default: ChromiumClient against `RENDERER_URL`.
    pub pdf: Arc<dyn PdfRenderer>,
}
