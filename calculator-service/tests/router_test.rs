//! Router-level tests that drive the service without binding a socket.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use calculator_service::build_router;
use tower::util::ServiceExt;

async fn send(app: Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn unknown_path_returns_json_404() {
    let (status, _, body) = send(build_router(), get("/modulo?number1=1&number2=2")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["detail"], "Not Found");
}

#[tokio::test]
async fn calculate_requires_post() {
    let (status, _, _) = send(build_router(), get("/calculate")).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn calculate_rejects_non_json_body() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/calculate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("number1=1&number2=2"))
        .unwrap();

    let (status, _, body) = send(build_router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn calculate_rejects_string_operands() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/calculate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"number1": "eight", "number2": 3.5, "operation": "multiply"}"#,
        ))
        .unwrap();

    let (status, _, _) = send(build_router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn calculate_adds_via_json_body() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/calculate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"number1": -2.5, "number2": 4, "operation": "add"}"#,
        ))
        .unwrap();

    let (status, _, body) = send(build_router(), request).await;

    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"result": 1.5, "detail": "-2.5 + 4.0", "operation": "add"})
    );
}

#[tokio::test]
async fn overflowing_result_is_rejected() {
    let (status, _, body) = send(
        build_router(),
        get("/multiply?number1=1e308&number2=10"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["detail"], "Result is not a finite number");
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let (_, headers, _) = send(build_router(), get("/health")).await;

    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn metrics_endpoint_answers_without_recorder() {
    let (status, headers, body) = send(build_router(), get("/metrics")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/plain; charset=utf-8");
    assert!(String::from_utf8(body).unwrap().starts_with('#'));
}

#[tokio::test]
async fn openapi_document_lists_every_endpoint() {
    let (status, _, body) = send(build_router(), get("/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(doc["info"]["title"], "Calculator API");
    for path in ["/health", "/calculate", "/add", "/subtract", "/multiply", "/divide"] {
        assert!(doc["paths"][path].is_object(), "missing path {}", path);
    }
    assert!(doc["paths"]["/calculate"]["post"].is_object());
    assert!(doc["paths"]["/divide"]["get"].is_object());

    let operations = &doc["components"]["schemas"]["Operation"]["enum"];
    assert_eq!(
        operations,
        &serde_json::json!(["add", "subtract", "multiply", "divide"])
    );
}
