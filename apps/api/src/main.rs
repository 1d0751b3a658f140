mod config;
mod errors;
mod models;
mod pdf_client;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::pdf_client::ChromiumClient;
use crate::render::profile::StyleProfile;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting vita v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PDF collaborator
    let pdf = ChromiumClient::new(&config.renderer_url, config.renderer_timeout)?;
    info!(
        "PDF renderer at {} (timeout {:?})",
        config.renderer_url, config.renderer_timeout
    );

    if let Some(profile) = StyleProfile::builtin(&config.default_profile) {
        info!(
            "Default profile: {} ({:?}, {:?})",
            profile.name, profile.typography.font, profile.page.paper
        );
    }

    let state = AppState {
        config: config.clone(),
        pdf: Arc::new(pdf),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
