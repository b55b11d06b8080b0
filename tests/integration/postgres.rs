use crate::common;

use axum::http::StatusCode;
use serde_json::json;
use serial_test::serial;
use tower::ServiceExt;

#[tokio::test]
#[serial]
async fn test_health_reports_connected_database() {
    let pool = setup_test_db_or_skip!();
    let app = common::app_with_state(common::create_postgres_app_state(pool));

    let response = app
        .oneshot(common::empty_request("GET", "/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["storage"], "connected");
}

#[tokio::test]
#[serial]
async fn test_inquiry_scenario_on_postgres() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;
    let app = common::app_with_state(common::create_postgres_app_state(pool.clone()));

    let inquiry = common::submit_inquiry(&app, "Asha").await;
    assert_eq!(inquiry["status"], "new");
    let id = inquiry["id"].as_str().unwrap();

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

    let response = app
        .oneshot(common::empty_request("GET", "/api/inquiries", Some(&token)))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["status"], "contacted");

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_course_crud_on_postgres() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;
    let app = common::app_with_state(common::create_postgres_app_state(pool.clone()));
    let token = common::login(&app).await;

    let course = common::create_course(&app, &token, "Civil Engineering", "Civil").await;
    common::create_course(&app, &token, "Mechanical Engineering", "Mechanical").await;
    let uri = format!("/api/courses/{}", course["id"].as_str().unwrap());

    let response = app
        .clone()
        .oneshot(common::json_request(
            "PUT",
            &uri,
            json!({ "duration": "3 Years" }),
            Some(&token),
        ))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(json["duration"], "3 Years");
    assert_eq!(json["features"][0], "Weekend batches");

    let response = app
        .clone()
        .oneshot(common::empty_request("GET", "/api/courses?stream=Civil", None))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    for expected in [StatusCode::NO_CONTENT, StatusCode::NOT_FOUND] {
        let response = app
            .clone()
            .oneshot(common::empty_request("DELETE", &uri, Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), expected);
    }

    common::cleanup_test_db(&pool).await;
}

#[tokio::test]
#[serial]
async fn test_logout_on_postgres() {
    let pool = setup_test_db_or_skip!();
    common::cleanup_test_db(&pool).await;
    let app = common::app_with_state(common::create_postgres_app_state(pool.clone()));
    let token = common::login(&app).await;

    let response = app
        .clone()
        .oneshot(common::empty_request("POST", "/api/admin/logout", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(common::empty_request("GET", "/api/notices", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    common::cleanup_test_db(&pool).await;
}
