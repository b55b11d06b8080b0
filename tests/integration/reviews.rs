use crate::common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

fn review(name: &str, rating: i32, approved: bool) -> serde_json::Value {
    json!({
        "name": name,
        "rating": rating,
        "comment": "Faculty explain every concept patiently.",
        "course": "Civil Engineering - Degree",
        "approved": approved
    })
}

#[tokio::test]
async fn test_public_listing_hides_unapproved_reviews() {
    let app = common::create_test_app();
    let token = common::login(&app).await;

    for body in [review("Asha", 5, true), review("Ravi", 2, false)] {
        let response = app
            .clone()
            .oneshot(common::json_request("POST", "/api/reviews", body, Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .clone()
        .oneshot(common::empty_request("GET", "/api/reviews", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Asha");

    let response = app
        .oneshot(common::empty_request("GET", "/api/reviews?all=true", None))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
    // newest first
    assert_eq!(json[0]["name"], "Ravi");
}

#[tokio::test]
async fn test_rating_out_of_range_is_rejected() {
    let app = common::create_test_app();
    let token = common::login(&app).await;

    for rating in [0, 6] {
        let response = app
            .clone()
            .oneshot(common::json_request(
                "POST",
                "/api/reviews",
                review("Asha", rating, true),
                Some(&token),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    let response = app
        .oneshot(common::empty_request("GET", "/api/reviews?all=true", None))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_review_requires_token() {
    let app = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/api/reviews",
            review("Asha", 5, true),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(common::empty_request("GET", "/api/reviews?all=true", None))
        .await
        .unwrap();
    let json = common::body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}
