use crate::common;

use axum::http::StatusCode;
use classdesk::domain::auth::{AdminAccount, AuthService};
use classdesk::infrastructure::auth::JwtAuthService;
use classdesk::infrastructure::state::AppState;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_login_success() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/admin/login",
            json!({ "username": "admin", "password": "admin123" }),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert!(json.get("data").is_none());
    assert!(json["token"].is_string());
    assert_eq!(json["token_type"], "Bearer");
    assert_eq!(json["username"], "admin");
    assert_eq!(json["expires_in"], 900);
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let app = common::create_test_app();

    let bodies = [
        json!({ "username": "admin", "password": "admin124" }),
        json!({ "username": "root", "password": "admin123" }),
        json!({ "username": "admin", "password": "" }),
        json!({ "username": "", "password": "" }),
        json!({ "username": "admin" }),
        json!({}),
    ];

    for body in bodies {
        let response = app
            .clone()
            .oneshot(common::json_request("POST", "/api/admin/login", body, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = common::body_json(response).await;
        assert_eq!(json["errors"][0]["code"], "invalid_credentials");
        assert_eq!(json["errors"][0]["detail"], "Invalid credentials");
    }
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let app = common::create_test_app();
    let token = common::login(&app).await;

    let response = app
        .clone()
        .oneshot(common::empty_request("POST", "/api/admin/logout", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(common::empty_request("GET", "/api/inquiries", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(common::empty_request("POST", "/api/admin/logout", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // A fresh session is unaffected
    let token = common::login(&app).await;
    let response = app
        .oneshot(common::empty_request("GET", "/api/inquiries", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_rejects_malformed_authorization_headers() {
    let app = common::create_test_app();
    let token = common::login(&app).await;

    for header in [format!("Basic {}", token), token.clone(), "Bearer ".to_string()] {
        let response = app
            .clone()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/api/inquiries")
                    .header("Authorization", header)
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn test_rejects_expired_token() {
    let app = common::create_test_app();
    let expired_issuer = JwtAuthService::new_from_secret(b"integration-test-secret", -60);
    let token = expired_issuer
        .generate_access_token(&common::test_admin())
        .unwrap();

    let response = app
        .oneshot(common::empty_request("GET", "/api/inquiries", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_rejects_token_for_other_username() {
    let app = common::create_test_app();
    let token = common::create_test_auth_service()
        .generate_access_token(&AdminAccount::new("someone-else", "hash"))
        .unwrap();

    let response = app
        .oneshot(common::empty_request("GET", "/api/inquiries", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_es256_sessions() {
    let state = AppState::in_memory(common::create_es256_auth_service(), common::test_admin());
    let app = common::app_with_state(state);
    let token = common::login(&app).await;

    let response = app
        .clone()
        .oneshot(common::empty_request("GET", "/api/inquiries", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // HS256 tokens are not accepted by an ES256 deployment
    let foreign = common::create_test_auth_service()
        .generate_access_token(&common::test_admin())
        .unwrap();
    let response = app
        .oneshot(common::empty_request("GET", "/api/inquiries", Some(&foreign)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
