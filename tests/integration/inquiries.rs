use crate::common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_submit_list_and_contact_scenario() {
    let app = common::create_test_app();

    let inquiry = common::submit_inquiry(&app, "Asha").await;
    assert!(inquiry.get("data").is_none());
    assert_eq!(inquiry["name"], "Asha");
    assert_eq!(inquiry["status"], "new");
    assert!(inquiry["created_at"].is_string());
    let id = inquiry["id"].as_str().unwrap().to_string();

    let token = common::login(&app).await;

    let response = app
        .clone()
        .oneshot(common::empty_request(
            "PATCH",
            &format!("/api/inquiries/{}?status=contacted", id),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "contacted");
    assert_eq!(json["id"], id.as_str());

    let response = app
        .oneshot(common::empty_request("GET", "/api/inquiries", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    let data = json.as_array().expect("list body is a bare array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["status"], "contacted");
}

#[tokio::test]
async fn test_identical_submissions_get_distinct_ids() {
    let app = common::create_test_app();

    let first = common::submit_inquiry(&app, "Ravi").await;
    let second = common::submit_inquiry(&app, "Ravi").await;

    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_submit_with_optional_fields() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/inquiries",
            json!({
                "name": "Meera",
                "phone": "9876543210",
                "email": "meera@example.com",
                "course_interested": "Mechanical Engineering - Diploma",
                "message": "Weekend batch?"
            }),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = common::body_json(response).await;
    assert_eq!(json["email"], "meera@example.com");
    assert_eq!(json["message"], "Weekend batch?");
}

#[tokio::test]
async fn test_blank_email_is_accepted_as_absent() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::json_request(
            "POST",
            "/api/inquiries",
            json!({
                "name": "Kiran",
                "phone": "9000000000",
                "email": "",
                "course_interested": "Civil Engineering - Degree",
                "message": ""
            }),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = common::body_json(response).await;
    assert!(json["email"].is_null());
}

#[tokio::test]
async fn test_missing_required_fields_create_nothing() {
    let app = common::create_test_app();

    for body in [
        json!({ "phone": "9990001111", "course_interested": "Civil" }),
        json!({ "name": "   ", "phone": "9990001111", "course_interested": "Civil" }),
        json!({ "name": "Asha", "phone": "", "course_interested": "Civil" }),
        json!({ "name": "Asha", "phone": "9990001111" }),
        json!({ "name": "Asha", "phone": "9990001111", "course_interested": "Civil", "email": "nope" }),
    ] {
        let response = app
            .clone()
            .oneshot(common::json_request("POST", "/api/inquiries", body, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = common::body_json(response).await;
        assert_eq!(json["errors"][0]["code"], "validation_error");
    }

    let token = common::login(&app).await;
    let response = app
        .oneshot(common::empty_request("GET", "/api/inquiries", Some(&token)))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri("/api/inquiries")
                .header("content-type", "application/json")
                .body(axum::body::Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_invalid_status_leaves_record_unchanged() {
    let app = common::create_test_app();
    let inquiry = common::submit_inquiry(&app, "Asha").await;
    let id = inquiry["id"].as_str().unwrap();
    let token = common::login(&app).await;

    for status in ["archived", "Contacted", ""] {
        let response = app
            .clone()
            .oneshot(common::empty_request(
                "PATCH",
                &format!("/api/inquiries/{}?status={}", id, status),
                Some(&token),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = common::body_json(response).await;
        assert_eq!(json["errors"][0]["code"], "invalid_status");
    }

    let response = app
        .oneshot(common::empty_request(
            "GET",
            &format!("/api/inquiries/{}", id),
            Some(&token),
        ))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "new");
}

#[tokio::test]
async fn test_status_transitions_are_unconstrained() {
    let app = common::create_test_app();
    let inquiry = common::submit_inquiry(&app, "Asha").await;
    let id = inquiry["id"].as_str().unwrap();
    let token = common::login(&app).await;

    for status in ["completed", "new", "contacted", "completed"] {
        let response = app
            .clone()
            .oneshot(common::empty_request(
                "PATCH",
                &format!("/api/inquiries/{}?status={}", id, status),
                Some(&token),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = common::body_json(response).await;
        assert_eq!(json["status"], status);
    }
}

#[tokio::test]
async fn test_status_on_unknown_inquiry() {
    let app = common::create_test_app();
    let token = common::login(&app).await;

    for id in [uuid::Uuid::new_v4().to_string(), "42".to_string()] {
        let response = app
            .clone()
            .oneshot(common::empty_request(
                "PATCH",
                &format!("/api/inquiries/{}?status=contacted", id),
                Some(&token),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    let app = common::create_test_app();
    let inquiry = common::submit_inquiry(&app, "Asha").await;
    let id = inquiry["id"].as_str().unwrap();

    let requests = [
        common::empty_request("GET", "/api/inquiries", None),
        common::empty_request("GET", &format!("/api/inquiries/{}", id), None),
        common::empty_request(
            "PATCH",
            &format!("/api/inquiries/{}?status=completed", id),
            None,
        ),
        common::empty_request(
            "PATCH",
            &format!("/api/inquiries/{}?status=completed", id),
            Some("forged.token.value"),
        ),
    ];

    for request in requests {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = common::body_json(response).await;
        assert_eq!(json["errors"][0]["code"], "unauthorized");
    }

    let token = common::login(&app).await;
    let response = app
        .oneshot(common::empty_request(
            "GET",
            &format!("/api/inquiries/{}", id),
            Some(&token),
        ))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "new");
}
