use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::{PartialDate, ResumeRecord};
use crate::render::page::PageFormat;
use crate::render::profile::{builtin_profiles, SectionSpec, StyleProfile};
use crate::render::{export_pdf, render_document, RenderTarget};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub resume: ResumeRecord,
    /// Built-in profile name; falls back to `DEFAULT_PROFILE`.
    #[serde(default)]
    pub profile: Option<String>,
    /// Reference month for open-ended durations (`"YYYY-MM"`). Defaults to today.
    #[serde(default)]
    pub now: Option<String>,
}

#[derive(Serialize)]
pub struct ProfileSummary {
    pub name: String,
    pub description: String,
    pub sections: Vec<SectionSpec>,
    pub page: PageFormat,
}

#[derive(Serialize)]
pub struct ProfileListResponse {
    pub default: String,
    pub profiles: Vec<ProfileSummary>,
}

/// GET /api/v1/profiles
pub async fn handle_list_profiles(State(state): State<AppState>) -> Json<ProfileListResponse> {
    let profiles = builtin_profiles()
        .into_iter()
        .map(|p| ProfileSummary {
            name: p.name,
            description: p.description,
            sections: p.sections,
            page: p.page,
        })
        .collect();

    Json(ProfileListResponse {
        default: state.config.default_profile.clone(),
        profiles,
    })
}

/// POST /api/v1/render/markdown
pub async fn handle_render_markdown(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Response, AppError> {
    let (profile, now) = resolve(&state, &req)?;
    let markdown = render_document(&req.resume, &profile, RenderTarget::Markdown, &now)?;
    info!(profile = %profile.name, bytes = markdown.len(), "Rendered markdown");

    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        markdown,
    )
        .into_response())
}

/// POST /api/v1/render/html
pub async fn handle_render_html(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Response, AppError> {
    let (profile, now) = resolve(&state, &req)?;
    let html = render_document(&req.resume, &profile, RenderTarget::Html, &now)?;
    info!(profile = %profile.name, bytes = html.len(), "Rendered html");

    Ok((
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
        .into_response())
}

/// POST /api/v1/render/pdf
pub async fn handle_render_pdf(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Response, AppError> {
    let (profile, now) = resolve(&state, &req)?;
    let pdf = export_pdf(&req.resume, &profile, &now, state.pdf.as_ref()).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, "inline; filename=\"resume.pdf\""),
        ],
        pdf,
    )
        .into_response())
}

fn resolve(state: &AppState, req: &RenderRequest) -> Result<(StyleProfile, PartialDate), AppError> {
    let name = req
        .profile
        .as_deref()
        .unwrap_or(state.config.default_profile.as_str());
    let profile = StyleProfile::builtin(name)
        .ok_or_else(|| AppError::NotFound(format!("Unknown style profile '{name}'")))?;

    // The engine never reads the clock; it is sampled once here.
    let now = match req.now.as_deref() {
        Some(raw) => raw
            .parse::<PartialDate>()
            .map_err(|e| AppError::Validation(format!("now: {e}")))?,
        None => PartialDate::from_date(&Utc::now().date_naive()),
    };

    Ok((profile, now))
}
