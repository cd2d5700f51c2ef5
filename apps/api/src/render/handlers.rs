use anyhow::Context;
use axum::{
    extract::{Query, State},
    Json,
};
use maud::Markup;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::quality::{inspect, DataIssue};
use crate::models::resume::ResumeData;
use crate::render::page::{default_page_config, PageConfig, PageSize};
use crate::render::{print_document, render_resume, VisualDocument};
use crate::state::AppState;
use crate::templates::{LayoutFamily, Theme};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResponse {
    pub template_id: String,
    pub family: LayoutFamily,
    pub theme: Theme,
    pub html: String,
    pub issues: Vec<DataIssue>,
}

#[derive(Debug, Serialize)]
pub struct InspectResponse {
    pub issues: Vec<DataIssue>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PrintQuery {
    pub page: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SampleQuery {
    pub template: Option<String>,
}

/// Renders on the blocking pool; layout work is CPU-bound.
async fn render_blocking(data: ResumeData, page: PageConfig) -> Result<VisualDocument, AppError> {
    let doc = tokio::task::spawn_blocking(move || render_resume(&data, &page))
        .await
        .context("render task failed")?;
    Ok(doc)
}

// ────────────────────────────────────────────────────────────────────────────
// Render API
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/render
pub async fn handle_render(
    State(state): State<AppState>,
    Json(data): Json<ResumeData>,
) -> Result<Json<RenderResponse>, AppError> {
    let template_id = data.selected_template.clone();
    let issues = inspect(&data);
    if !issues.is_empty() {
        debug!(count = issues.len(), "Resume data has quality issues");
    }

    let doc = render_blocking(data, state.page_config).await?;
    info!(
        template = %template_id,
        family = %doc.family,
        bytes = doc.html().len(),
        "Resume rendered"
    );

    Ok(Json(RenderResponse {
        template_id,
        family: doc.family,
        theme: doc.theme.clone(),
        html: doc.into_html(),
        issues,
    }))
}

/// POST /api/v1/render/preview
/// Returns the page fragment as `text/html`.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(data): Json<ResumeData>,
) -> Result<Markup, AppError> {
    let doc = render_blocking(data, state.page_config).await?;
    Ok(doc.markup)
}

/// POST /api/v1/render/print?page=letter|a4
/// Returns a standalone print-ready document.
pub async fn handle_print(
    State(state): State<AppState>,
    Query(params): Query<PrintQuery>,
    Json(data): Json<ResumeData>,
) -> Result<Markup, AppError> {
    let page = match params.page.as_deref() {
        Some(raw) => default_page_config(raw.parse::<PageSize>().map_err(AppError::Validation)?),
        None => state.page_config,
    };

    let doc = render_blocking(data, page).await?;
    info!(page = %page.size, title = %doc.title, "Print document exported");
    Ok(print_document(&doc, &page))
}

// ────────────────────────────────────────────────────────────────────────────
// Resume data API
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resumes/sample
pub async fn handle_sample(
    State(state): State<AppState>,
    Query(params): Query<SampleQuery>,
) -> Json<ResumeData> {
    let mut data = ResumeData::sample();
    data.selected_template = params
        .template
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| state.config.default_template.clone());
    Json(data)
}

/// POST /api/v1/resumes/inspect
pub async fn handle_inspect(Json(data): Json<ResumeData>) -> Json<InspectResponse> {
    Json(InspectResponse {
        issues: inspect(&data),
    })
}
