//! HTTP request handlers for the brief server.
//!
//! Implements the brief-by-citation and health check endpoints using axum.

use crate::runner::{case_name_from_path, ClerkRunner, RunError};
use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Form, Router as AxumRouter,
};
use clerk_domain::WritingMode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// Header carrying the display name of the case
pub const CASE_NAME_HEADER: &str = "x-case-name";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Spawns the brief pipeline
    pub runner: Arc<ClerkRunner>,
}

/// Form fields of a brief request
#[derive(Debug, Deserialize)]
pub struct BriefForm {
    /// Reporter citation
    pub citation: String,

    /// Writing mode
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Output format; only `pdf` is served
    #[serde(default = "default_fmt")]
    pub fmt: String,
}

fn default_mode() -> String {
    WritingMode::Professional.as_str().to_string()
}

fn default_fmt() -> String {
    "pdf".to_string()
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Server version
    pub version: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Rejected before spawning anything
    BadRequest(String),
    /// The pipeline failed
    PipelineError(RunError),
    /// Internal server error
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::PipelineError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<RunError> for AppError {
    fn from(e: RunError) -> Self {
        AppError::PipelineError(e)
    }
}

fn header_value(value: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(value)
        .map_err(|e| AppError::InternalError(format!("Invalid header value: {}", e)))
}

/// POST /api/brief/by-citation - Generate a PDF brief for a citation
async fn brief_by_citation(
    State(state): State<AppState>,
    Form(form): Form<BriefForm>,
) -> Result<Response, AppError> {
    if form.citation.trim().is_empty() {
        return Err(AppError::BadRequest("Citation cannot be empty".to_string()));
    }
    if !form.fmt.trim().eq_ignore_ascii_case("pdf") {
        return Err(AppError::BadRequest(
            "This endpoint only supports PDF".to_string(),
        ));
    }
    let mode = WritingMode::parse(&form.mode)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown mode '{}'", form.mode)))?;

    let path = state.runner.run(&form.citation, mode).await.map_err(|e| {
        error!("Brief generation failed: {}", e);
        AppError::from(e)
    })?;

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| AppError::InternalError(format!("Cannot read {}: {}", path.display(), e)))?;

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().replace('"', "'"))
        .unwrap_or_default();
    let case_name = case_name_from_path(&path);
    info!(file = %filename, bytes = bytes.len(), "Serving brief");

    let headers = [
        (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
        (
            header::CONTENT_DISPOSITION,
            header_value(&format!("attachment; filename=\"{}\"", filename))?,
        ),
        (
            HeaderName::from_static(CASE_NAME_HEADER),
            header_value(&case_name)?,
        ),
    ];
    Ok((headers, bytes).into_response())
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/api/brief/by-citation", post(brief_by_citation))
        .route("/health", get(health_check))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt; // for oneshot

    fn create_test_state() -> AppState {
        AppState {
            runner: Arc::new(ClerkRunner::new("/nonexistent/clerk-binary", ".")),
        }
    }

    fn form_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/brief/by-citation")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn error_message(response: Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        value["error"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(create_test_state());
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_empty_citation_rejected() {
        let app = create_router(create_test_state());
        let response = app.oneshot(form_request("citation=++&mode=student")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(response).await, "Citation cannot be empty");
    }

    #[tokio::test]
    async fn test_non_pdf_rejected() {
        let app = create_router(create_test_state());
        let response = app
            .oneshot(form_request("citation=410+U.S.+113&fmt=json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(response).await, "This endpoint only supports PDF");
    }

    #[tokio::test]
    async fn test_unknown_mode_rejected() {
        let app = create_router(create_test_state());
        let response = app
            .oneshot(form_request("citation=410+U.S.+113&mode=casual"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_spawn_failure_is_500() {
        let app = create_router(create_test_state());
        let response = app
            .oneshot(form_request("citation=410+U.S.+113"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error_message(response).await.contains("Failed to start"));
    }
}
