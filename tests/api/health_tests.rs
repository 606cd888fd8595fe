//! Health, Metrics and Docs Tests

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();

    let response = app.request(Method::GET, "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "healthy");
}

#[tokio::test]
async fn test_liveness() {
    let app = TestApp::new();

    let response = app.request(Method::GET, "/health/live", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "alive");
}

#[tokio::test]
async fn test_readiness_without_database() {
    let app = TestApp::new();

    let response = app.request(Method::GET, "/health/ready", None, None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["database"]["status"], "unhealthy");
}

#[tokio::test]
async fn test_metrics_count_matched_routes() {
    let app = TestApp::new();
    app.request(Method::GET, "/health", None, None).await;

    let (status, body) = app.get_text("/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("messenger_api_http_requests_total"));
    assert!(body.contains("path=\"/health\""));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = TestApp::new();

    let response = app
        .request(Method::GET, "/docs/openapi.json", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["paths"]["/chats/{id}"].is_object());
    assert!(response.body["components"]["securitySchemes"]["bearer"].is_object());
}
