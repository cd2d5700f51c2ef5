use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::templates::registry::{filter_templates, find_template, industries, TemplateInfo};

#[derive(Debug, Default, Deserialize)]
pub struct TemplateQuery {
    pub industry: Option<String>,
    pub q: Option<String>,
}

/// GET /api/v1/templates
pub async fn handle_list_templates(
    Query(params): Query<TemplateQuery>,
) -> Json<Vec<&'static TemplateInfo>> {
    let templates = filter_templates(params.industry.as_deref(), params.q.as_deref());
    tracing::debug!(
        industry = ?params.industry,
        q = ?params.q,
        count = templates.len(),
        "Template catalog filtered"
    );
    Json(templates)
}

/// GET /api/v1/templates/industries
pub async fn handle_list_industries() -> Json<Vec<&'static str>> {
    Json(industries())
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(
    Path(id): Path<String>,
) -> Result<Json<&'static TemplateInfo>, AppError> {
    find_template(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Template {id} not found")))
}
