use axum::Json;
use serde_json::{json, Value};

use crate::render::profile::BUILTIN_PROFILES;

/// GET /health
/// Liveness only; the PDF renderer is not probed.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "vita",
        "profiles": BUILTIN_PROFILES,
    }))
}
