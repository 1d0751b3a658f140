pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::render::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/profiles", get(handlers::handle_list_profiles))
        .route(
            "/api/v1/render/markdown",
            post(handlers::handle_render_markdown),
        )
        .route("/api/v1/render/html", post(handlers::handle_render_html))
        .route("/api/v1/render/pdf", post(handlers::handle_render_pdf))
        .with_state(state)
}
