//! HTTP-level tests for the Jumble API
//!
//! These drive the real router through `axum-test` and check status codes,
//! content types and the shape of generated payloads.

use axum::http::StatusCode;
use axum_test::TestServer;
use jumble_api::types::{ComplexArrayResponse, ErrorResponse, INDEX_HTML, RESPONSE_DESCRIPTION};
use jumble_api::{AppState, create_app};
use jumble_core::{GenerationConfig, Value};
use serde_json::json;

/// Create a test server with default limits
fn create_test_server() -> TestServer {
    create_test_server_with(GenerationConfig::default())
}

fn create_test_server_with(config: GenerationConfig) -> TestServer {
    let app = create_app(AppState::new(config));
    TestServer::new(app).expect("Failed to create test server")
}

fn assert_json_content_type(response: &axum_test::TestResponse) {
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("application/json"));
}

#[tokio::test]
async fn test_root_serves_html_placeholder() {
    let server = create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.header("content-type").to_str().unwrap().starts_with("text/html"));
    assert_eq!(response.text(), INDEX_HTML);
}

#[tokio::test]
async fn test_default_parameters() {
    let server = create_test_server();

    let response = server.get("/api/complex-array").await;

    response.assert_status_ok();
    assert_json_content_type(&response);

    let body: ComplexArrayResponse = response.json();
    assert_eq!(body.description, RESPONSE_DESCRIPTION);
    assert_eq!(body.parameters.size, 10);
    assert_eq!(body.parameters.max_depth, 3);
    assert_eq!(body.data.len(), 10);
    assert!(body.data.iter().all(|v| v.depth() <= 3));
}

#[tokio::test]
async fn test_explicit_parameters() {
    let server = create_test_server();

    let response =
        server.get("/api/complex-array").add_query_param("size", 15).add_query_param("maxDepth", 4).await;

    response.assert_status_ok();
    let body: ComplexArrayResponse = response.json();
    assert_eq!(body.parameters.size, 15);
    assert_eq!(body.parameters.max_depth, 4);
    assert_eq!(body.data.len(), 15);
    assert!(body.data.iter().all(|v| v.depth() <= 4));
}

#[tokio::test]
async fn test_size_zero_clamps_to_one() {
    let server = create_test_server();

    let response = server.get("/api/complex-array?size=0").await;

    response.assert_status_ok();
    let body: ComplexArrayResponse = response.json();
    assert_eq!(body.parameters.size, 1);
    assert_eq!(body.data.len(), 1);
}

#[tokio::test]
async fn test_size_above_limit_clamps_to_max() {
    let server = create_test_server_with(GenerationConfig::new(5, 40, 5).unwrap());

    let response = server.get("/api/complex-array?size=100000&maxDepth=1").await;

    let body: ComplexArrayResponse = response.json();
    assert_eq!(body.parameters.size, 40);
    assert_eq!(body.data.len(), 40);
}

#[tokio::test]
async fn test_non_numeric_size_uses_default() {
    let server = create_test_server();

    let response = server.get("/api/complex-array?size=abc&maxDepth=xyz").await;

    response.assert_status_ok();
    let body: ComplexArrayResponse = response.json();
    assert_eq!(body.parameters.size, 10);
    assert_eq!(body.parameters.max_depth, 3);
    assert_eq!(body.data.len(), 10);
}

#[tokio::test]
async fn test_negative_depth_yields_primitives() {
    let server = create_test_server();

    let response = server.get("/api/complex-array?size=50&maxDepth=-5").await;

    let body: ComplexArrayResponse = response.json();
    assert_eq!(body.parameters.max_depth, -5);
    assert_eq!(body.data.len(), 50);
    assert!(body.data.iter().all(Value::is_primitive));
}

#[tokio::test]
async fn test_depth_above_limit_is_capped() {
    let server = create_test_server();

    let response = server.get("/api/complex-array?size=100&maxDepth=999").await;

    let body: ComplexArrayResponse = response.json();
    assert_eq!(body.parameters.max_depth, 5);
    assert!(body.data.iter().all(|v| v.depth() <= 5));
}

#[tokio::test]
async fn test_parameters_and_timestamp_in_raw_json() {
    let server = create_test_server();

    let response = server.get("/api/complex-array?size=2&maxDepth=1").await;

    let raw: serde_json::Value = response.json();
    assert_eq!(raw["parameters"]["size"], json!(2));
    assert_eq!(raw["parameters"]["maxDepth"], json!(1));

    let timestamp = raw["parameters"]["generatedTimestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert!(timestamp.ends_with('Z'));
    assert_eq!(raw["data"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_alias_path_serves_data() {
    let server = create_test_server();

    let response = server.get("/complex-array?size=3").await;

    response.assert_status_ok();
    let body: ComplexArrayResponse = response.json();
    assert_eq!(body.data.len(), 3);
}

#[tokio::test]
async fn test_unknown_path_returns_json_404() {
    let server = create_test_server();

    let response = server.get("/unknown/path").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_json_content_type(&response);
    response.assert_json(&json!({ "error": "Not Found" }));
}

#[tokio::test]
async fn test_wrong_method_returns_json_404() {
    let server = create_test_server();

    let response = server.post("/api/complex-array").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: ErrorResponse = response.json();
    assert_eq!(body.error, "Not Found");
}

#[tokio::test]
async fn test_collections_respect_configured_size() {
    let server = create_test_server_with(GenerationConfig::new(2, 1000, 5).unwrap());

    let response = server.get("/api/complex-array?size=200&maxDepth=5").await;
    let body: ComplexArrayResponse = response.json();

    fn check(value: &Value) {
        if let Some(count) = value.child_count() {
            assert!((1..=2).contains(&count));
        }
        match value {
            Value::Object(map) => map.values().for_each(check),
            Value::Array(items) => items.iter().for_each(check),
            _ => {}
        }
    }
    body.data.iter().for_each(check);
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let server = create_test_server();

    let (a, b, c) = tokio::join!(
        async { server.get("/api/complex-array?size=5").await },
        async { server.get("/api/complex-array?size=6").await },
        async { server.get("/api/complex-array?size=7").await },
    );

    let sizes: Vec<usize> = [a, b, c]
        .iter()
        .map(|r| r.json::<ComplexArrayResponse>().data.len())
        .collect();
    assert_eq!(sizes, [5, 6, 7]);
}
