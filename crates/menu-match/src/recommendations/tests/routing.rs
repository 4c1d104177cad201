use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::catalog::MenuCatalog;
use crate::recommendations::{
    recommendation_router, DietaryPreference, RecommendationService, Recommender,
};

fn router() -> axum::Router {
    let service = RecommendationService::new(
        Arc::new(MenuCatalog::sample()),
        Recommender::default(),
        5,
    );
    recommendation_router(Arc::new(service))
}

fn post_json(uri: &str, payload: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).expect("serialize")))
        .expect("request")
}

#[tokio::test]
async fn restaurants_route_lists_catalog() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/restaurants")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["restaurants"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["restaurants"][0]["name"], "Green Leaf Cafe");
}

#[tokio::test]
async fn recommendations_route_ranks_for_user() {
    let payload = json!({
        "user": user(Some(DietaryPreference::Vegetarian)),
        "limit": 3,
        "explain": true,
    });

    let response = router()
        .oneshot(post_json("/api/v1/recommendations", payload))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let recommendations = body["recommendations"].as_array().expect("array");
    assert_eq!(recommendations.len(), 3);

    let scores: Vec<u64> = recommendations
        .iter()
        .map(|entry| entry["score"].as_u64().expect("score"))
        .collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    for entry in recommendations {
        let tags = entry["item"]["tags"].as_array().expect("tags");
        assert!(tags.iter().any(|tag| tag == "vegetarian" || tag == "vegan"));
        assert_eq!(entry["breakdown"]["components"].as_array().map(Vec::len), Some(4));
    }
}

#[tokio::test]
async fn anonymous_request_uses_default_limit_and_neutral_scores() {
    let response = router()
        .oneshot(post_json("/api/v1/recommendations", json!({})))
        .await
        .expect("response");

    let body = read_json_body(response).await;
    let recommendations = body["recommendations"].as_array().expect("array");
    assert_eq!(recommendations.len(), 5);
    assert!(recommendations
        .iter()
        .all(|entry| entry["score"] == 50 && entry["tier"] == "low"));
    assert!(recommendations[0].get("breakdown").is_none());
}

#[tokio::test]
async fn restaurant_route_scopes_results() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/restaurants/3/recommendations",
            json!({ "user": user(None) }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let recommendations = body["recommendations"].as_array().expect("array");
    assert_eq!(recommendations.len(), 4);
    assert!(recommendations
        .iter()
        .all(|entry| entry["item"]["restaurant_id"] == "3"));
}

#[tokio::test]
async fn unknown_restaurant_returns_not_found() {
    let response = router()
        .oneshot(post_json("/api/v1/restaurants/99/recommendations", json!({})))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert!(body["error"].as_str().expect("error").contains("99"));
}

#[tokio::test]
async fn highlights_route_groups_by_restaurant() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/recommendations/by-restaurant",
            json!({ "user": user(Some(DietaryPreference::Keto)) }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let restaurants = body["restaurants"].as_array().expect("array");
    let ids: Vec<&str> = restaurants
        .iter()
        .map(|entry| entry["restaurant"]["id"].as_str().expect("id"))
        .collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
    for entry in restaurants {
        assert!(entry["recommendations"].as_array().expect("array").len() <= 3);
    }
}

#[tokio::test]
async fn malformed_payload_is_rejected() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/recommendations",
            json!({ "user": { "dietary_preference": "carnivore" } }),
        ))
        .await
        .expect("response");

    assert!(response.status().is_client_error());
}
