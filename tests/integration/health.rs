use crate::common;

use axum::http::StatusCode;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_reports_memory_storage() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::empty_request("GET", "/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["storage"], "memory");
}

#[tokio::test]
async fn test_api_root() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::empty_request("GET", "/api", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("running"));
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::empty_request("GET", "/api-docs/openapi.json", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert!(json["paths"]["/api/inquiries"].is_object());
}

#[tokio::test]
async fn test_unknown_route() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::empty_request("GET", "/api/nothing-here", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
