//! Integration tests for the brief server

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use clerk_server::{
    handlers::{create_router, AppState, HealthCheckResponse},
    runner::ClerkRunner,
};
use std::sync::Arc;
use tower::ServiceExt; // for oneshot

fn app_for(runner: ClerkRunner) -> Router {
    create_router(AppState {
        runner: Arc::new(runner),
    })
}

fn brief_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/brief/by-citation")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn error_message(response: Response) -> String {
    let value: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    value["error"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = app_for(ClerkRunner::new("clerk", "."));
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthCheckResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn test_missing_citation_field() {
    let app = app_for(ClerkRunner::new("clerk", "."));
    let response = app.oneshot(brief_request("mode=student")).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_json_format_rejected() {
    let app = app_for(ClerkRunner::new("clerk", "."));
    let response = app
        .oneshot(brief_request("citation=410+U.S.+113&fmt=txt"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response).await, "This endpoint only supports PDF");
}

#[cfg(unix)]
mod with_fake_pipeline {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;

    /// Write an executable shell script standing in for `clerk`
    fn fake_clerk(dir: &Path, body: &str) -> ClerkRunner {
        let script = dir.join("fake-clerk.sh");
        std::fs::write(&script, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        ClerkRunner::new(script, dir)
    }

    #[tokio::test]
    async fn test_pdf_served_as_attachment() {
        let dir = TempDir::new().unwrap();
        let runner = fake_clerk(
            dir.path(),
            r#"printf '%s\n' "$@" > args.txt
printf '%%PDF-1.5 fake' > Roe_v._Wade.pdf
echo "Brief saved to Roe_v._Wade.pdf"
echo "Roe_v._Wade.pdf""#,
        );

        let response = app_for(runner)
            .oneshot(brief_request("citation=410+U.S.+113&mode=student&fmt=pdf"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers().clone();
        assert_eq!(headers["content-type"], "application/pdf");
        assert_eq!(
            headers["content-disposition"],
            "attachment; filename=\"Roe_v._Wade.pdf\""
        );
        assert_eq!(headers["x-case-name"], "Roe v Wade");
        assert_eq!(body_bytes(response).await, b"%PDF-1.5 fake");

        let args = std::fs::read_to_string(dir.path().join("args.txt")).unwrap();
        assert_eq!(
            args.lines().collect::<Vec<_>>(),
            vec![
                "--case",
                "410 U.S. 113",
                "--mode",
                "student",
                "--format",
                "pdf",
                "--no-color"
            ]
        );
    }

    #[tokio::test]
    async fn test_default_mode_is_professional() {
        let dir = TempDir::new().unwrap();
        let runner = fake_clerk(
            dir.path(),
            r#"printf '%s\n' "$@" > args.txt
printf 'x' > brief.pdf
echo brief.pdf"#,
        );

        let response = app_for(runner)
            .oneshot(brief_request("citation=347+U.S.+483"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let args = std::fs::read_to_string(dir.path().join("args.txt")).unwrap();
        assert!(args.contains("--mode\nprofessional\n"));
    }

    #[tokio::test]
    async fn test_pipeline_failure_reports_stderr() {
        let dir = TempDir::new().unwrap();
        let runner = fake_clerk(
            dir.path(),
            "echo 'Error: CourtListener returned no match' >&2\nexit 1",
        );

        let response = app_for(runner)
            .oneshot(brief_request("citation=999+U.S.+999"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let message = error_message(response).await;
        assert!(message.starts_with("Pipeline error:\n"));
        assert!(message.contains("CourtListener returned no match"));
    }

    #[tokio::test]
    async fn test_silent_pipeline_is_an_error() {
        let dir = TempDir::new().unwrap();
        let runner = fake_clerk(dir.path(), "exit 0");

        let response = app_for(runner)
            .oneshot(brief_request("citation=410+U.S.+113"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_reported_file_missing() {
        let dir = TempDir::new().unwrap();
        let runner = fake_clerk(dir.path(), "echo ghost.pdf");

        let response = app_for(runner)
            .oneshot(brief_request("citation=410+U.S.+113"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error_message(response).await.contains("ghost.pdf"));
    }
}
