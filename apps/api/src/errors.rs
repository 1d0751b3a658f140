use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::pdf_client::PdfError;
use crate::render::{ExportError, RenderError};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("PDF renderer error: {0}")]
    Pdf(#[from] PdfError),
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Render(e) => AppError::Render(e),
            ExportError::Collaborator(e) => AppError::Pdf(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Render(e) => {
                let code = match e {
                    RenderError::MissingRequiredField(_) => "MISSING_REQUIRED_FIELD",
                    RenderError::InvalidDate { .. } => "INVALID_DATE",
                };
                (StatusCode::UNPROCESSABLE_ENTITY, code, e.to_string())
            }
            AppError::Pdf(e) => {
                tracing::error!("PDF renderer error: {e}");
                let code = match e {
                    PdfError::Timeout(_) => "RENDERER_TIMEOUT",
                    _ => "RENDERER_ERROR",
                };
                (
                    StatusCode::BAD_GATEWAY,
                    code,
                    "The PDF renderer could not produce a document".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;
    use std::time::Duration;

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_render_error_maps_to_422_with_field() {
        let (status, body) = body_json(AppError::from(RenderError::invalid_date(
            "work[1].endDate",
            "month 13 is outside 1-12",
        )))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INVALID_DATE");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("work[1].endDate"));
    }

    #[tokio::test]
    async fn test_missing_field_code() {
        let (status, body) =
            body_json(AppError::from(RenderError::MissingRequiredField("basics.name"))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
    }

    #[tokio::test]
    async fn test_collaborator_error_hides_details() {
        let (status, body) = body_json(AppError::from(ExportError::Collaborator(
            PdfError::Timeout(Duration::from_secs(60)),
        )))
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "RENDERER_TIMEOUT");
    }

    #[tokio::test]
    async fn test_validation_is_bad_request() {
        let (status, body) = body_json(AppError::Validation("now: bad date".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_not_found_shape() {
        let (status, body) = body_json(AppError::NotFound("Unknown style profile 'x'".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({"error": {"code": "NOT_FOUND", "message": "Unknown style profile 'x'"}})
        );
    }
}
