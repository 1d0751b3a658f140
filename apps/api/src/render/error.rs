use thiserror::Error;

/// Errors raised by the render engine.
///
/// Both variants are detected by the validation pass before any output text is
/// produced, so a render either yields a complete document or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Invalid date in {field}: {reason}")]
    InvalidDate { field: String, reason: String },
}

impl RenderError {
    pub(crate) fn invalid_date(field: impl Into<String>, reason: impl Into<String>) -> Self {
        RenderError::InvalidDate {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
