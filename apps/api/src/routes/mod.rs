pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::render::handlers as render;
use crate::state::AppState;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_body_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Template catalog
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route(
            "/api/v1/templates/industries",
            get(templates::handle_list_industries),
        )
        .route("/api/v1/templates/:id", get(templates::handle_get_template))
        // Resume data
        .route("/api/v1/resumes/sample", get(render::handle_sample))
        .route("/api/v1/resumes/inspect", post(render::handle_inspect))
        // Rendering
        .route("/api/v1/render", post(render::handle_render))
        .route("/api/v1/render/preview", post(render::handle_preview))
        .route("/api/v1/render/print", post(render::handle_print))
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::models::resume::ResumeData;
    use crate::render::page::{default_page_config, PageSize};

    fn test_state() -> AppState {
        let config = Config {
            port: 0,
            rust_log: "debug".into(),
            page_size: PageSize::Letter,
            max_body_bytes: 1024 * 1024,
            default_template: "modern".into(),
        };
        AppState {
            page_config: default_page_config(config.page_size),
            config,
        }
    }

    async fn send(req: Request<Body>) -> Response {
        build_router(test_state()).oneshot(req).await.unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(res: Response) -> String {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(res: Response) -> Value {
        serde_json::from_str(&body_string(res).await).unwrap()
    }

    fn sample_json() -> Value {
        serde_json::to_value(ResumeData::sample()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let res = send(get_req("/health")).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "vitae-api");
    }

    // ── catalog ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_list_templates_filters_by_industry() {
        let res = send(get_req("/api/v1/templates?industry=Healthcare")).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        let list = body.as_array().unwrap();
        assert!(!list.is_empty());
        assert!(list.iter().all(|t| t["industry"] == "Healthcare"));
        assert!(list.iter().all(|t| t["family"].is_string()));
    }

    #[tokio::test]
    async fn test_list_templates_unfiltered() {
        let res = send(get_req("/api/v1/templates")).await;
        let body = body_json(res).await;
        assert_eq!(body.as_array().unwrap().len(), 32);
    }

    #[tokio::test]
    async fn test_industries_start_with_all() {
        let body = body_json(send(get_req("/api/v1/templates/industries")).await).await;
        assert_eq!(body[0], "All");
    }

    #[tokio::test]
    async fn test_get_template_by_id() {
        let res = send(get_req("/api/v1/templates/nonprofit")).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["id"], "nonprofit");
        assert_eq!(body["family"], "minimal");
    }

    #[tokio::test]
    async fn test_unknown_template_is_404() {
        let res = send(get_req("/api/v1/templates/nope")).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = body_json(res).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    // ── resume data ─────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_sample_uses_requested_template() {
        let body = body_json(send(get_req("/api/v1/resumes/sample?template=executive")).await).await;
        assert_eq!(body["selectedTemplate"], "executive");
        assert_eq!(body["personalInfo"]["fullName"], "Alex Johnson");
    }

    #[tokio::test]
    async fn test_sample_defaults_to_configured_template() {
        let body = body_json(send(get_req("/api/v1/resumes/sample")).await).await;
        assert_eq!(body["selectedTemplate"], "modern");
    }

    #[tokio::test]
    async fn test_inspect_reports_issues() {
        let payload = json!({
            "skills": [
                {"id": "s1", "name": "Rust", "level": 9},
                {"id": "s1", "name": "Go", "level": 3}
            ]
        });
        let res = send(post_json("/api/v1/resumes/inspect", &payload)).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        let kinds: Vec<&str> = body["issues"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["kind"].as_str().unwrap())
            .collect();
        assert!(kinds.contains(&"duplicate_id"));
        assert!(kinds.contains(&"level_out_of_range"));
    }

    // ── rendering ───────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_render_returns_document_and_metadata() {
        let res = send(post_json("/api/v1/render", &sample_json())).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["templateId"], "modern");
        assert_eq!(body["family"], "modern");
        assert_eq!(body["theme"]["fontFamily"], "Inter");
        assert!(body["html"].as_str().unwrap().contains("Alex Johnson"));
        assert_eq!(body["issues"], json!([]));
    }

    #[tokio::test]
    async fn test_render_empty_object() {
        let res = send(post_json("/api/v1/render", &json!({}))).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert!(body["html"].as_str().unwrap().contains("Your Name"));
    }

    #[tokio::test]
    async fn test_preview_is_html_fragment() {
        let res = send(post_json("/api/v1/render/preview", &sample_json())).await;
        assert_eq!(res.status(), StatusCode::OK);
        let content_type = res.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
        let html = body_string(res).await;
        assert!(html.starts_with("<div"));
        assert!(!html.contains("<!DOCTYPE"));
    }

    #[tokio::test]
    async fn test_print_a4_document() {
        let res = send(post_json("/api/v1/render/print?page=a4", &sample_json())).await;
        assert_eq!(res.status(), StatusCode::OK);
        let html = body_string(res).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("size: A4"));
    }

    #[tokio::test]
    async fn test_print_defaults_to_configured_page() {
        let html = body_string(send(post_json("/api/v1/render/print", &sample_json())).await).await;
        assert!(html.contains("size: letter"));
    }

    #[tokio::test]
    async fn test_print_rejects_unknown_page() {
        let res = send(post_json("/api/v1/render/print?page=tabloid", &sample_json())).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = body_json(res).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let req = Request::builder()
            .method("POST")
            .uri("/api/v1/render")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let res = send(req).await;
        assert!(res.status().is_client_error());
    }
}
