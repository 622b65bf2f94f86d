use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode, header},
    middleware,
    routing::get,
};
use serde_json::json;
use tower::ServiceExt;

use sems_server::{
    config::{AppEnvironment, CorsConfig},
    middleware::{catch_panic_layer, json_error_middleware},
    test_helpers::{test_config, test_router, test_router_with},
};

async fn json_response(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.expect("request should succeed");
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("body should be json");
    (status, json)
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn root_lists_entry_points() {
    let (status, json) = json_response(test_router(), get_request("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "message": "Smart Enterprise Management System API",
            "version": "1.0.0",
            "endpoints": { "health": "/api/health", "docs": "/api/docs" }
        })
    );
}

#[tokio::test]
async fn health_reports_healthy_service() {
    let (status, json) = json_response(test_router(), get_request("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "status": "healthy",
            "service": "Smart Enterprise Management System",
            "version": "1.0.0",
            "environment": "development"
        })
    );
}

#[tokio::test]
async fn health_reports_configured_environment() {
    let mut cfg = test_config();
    cfg.general.environment = AppEnvironment::from("staging");

    let (status, json) = json_response(test_router_with(cfg), get_request("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["environment"], "staging");
}

#[tokio::test]
async fn docs_lists_planned_modules() {
    let (status, json) = json_response(test_router(), get_request("/api/docs")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["endpoints"]["health"], "/api/health");
    assert_eq!(json["endpoints"]["auth"], "/api/auth/* (coming soon)");
    assert_eq!(json["endpoints"]["maintenance"], "/api/maintenance/* (coming soon)");
    assert_eq!(json["endpoints"]["education"], "/api/education/* (coming soon)");
    assert_eq!(
        json["documentation"],
        "API documentation will be available here"
    );
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let (status, json) = json_response(test_router(), get_request("/api/missing")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json,
        json!({
            "error": "Not Found",
            "message": "The requested resource was not found",
            "status_code": 404
        })
    );
}

#[tokio::test]
async fn wrong_method_is_normalized_to_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let (status, json) = json_response(test_router(), request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["error"], "Method Not Allowed");
    assert_eq!(json["status_code"], 405);
}

#[tokio::test]
async fn panics_become_generic_500() {
    async fn boom() -> &'static str {
        panic!("database exploded")
    }

    let app = Router::new()
        .route("/boom", get(boom))
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer());

    let (status, json) = json_response(app, get_request("/boom")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json,
        json!({
            "error": "Internal Server Error",
            "message": "An internal server error occurred",
            "status_code": 500
        })
    );
}

#[tokio::test]
async fn plain_text_server_errors_hide_details() {
    async fn failing() -> (StatusCode, &'static str) {
        (StatusCode::SERVICE_UNAVAILABLE, "pool timed out")
    }

    let app = Router::new()
        .route("/fail", get(failing))
        .layer(middleware::from_fn(json_error_middleware));

    let (status, json) = json_response(app, get_request("/fail")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["message"], "An internal server error occurred");
    assert_eq!(json["status_code"], 503);
}

#[tokio::test]
async fn cors_allows_configured_origin() {
    let mut cfg = test_config();
    cfg.cors = CorsConfig {
        origins: vec!["http://localhost:5000".to_string()],
    };
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/health")
        .header(header::ORIGIN, "http://localhost:5000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();

    let response = test_router_with(cfg)
        .oneshot(request)
        .await
        .expect("request should succeed");

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("http://localhost:5000")
    );
}

#[tokio::test]
async fn cors_ignores_unlisted_origin() {
    let request = Request::builder()
        .method("GET")
        .uri("/api/health")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();

    let response = test_router()
        .oneshot(request)
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
