use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::RestaurantId;
use super::service::{RecommendationRequest, RecommendationService, RecommendationServiceError};

/// Router builder exposing catalog and recommendation endpoints.
pub fn recommendation_router(service: Arc<RecommendationService>) -> Router {
    Router::new()
        .route("/api/v1/restaurants", get(restaurants_handler))
        .route(
            "/api/v1/restaurants/:restaurant_id/recommendations",
            post(restaurant_recommendations_handler),
        )
        .route("/api/v1/recommendations", post(recommendations_handler))
        .route(
            "/api/v1/recommendations/by-restaurant",
            post(highlights_handler),
        )
        .with_state(service)
}

pub(crate) async fn restaurants_handler(
    State(service): State<Arc<RecommendationService>>,
) -> Response {
    let restaurants = service.catalog().restaurants();
    (StatusCode::OK, Json(json!({ "restaurants": restaurants }))).into_response()
}

pub(crate) async fn recommendations_handler(
    State(service): State<Arc<RecommendationService>>,
    Json(request): Json<RecommendationRequest>,
) -> Response {
    recommendation_response(&service, &request)
}

pub(crate) async fn restaurant_recommendations_handler(
    State(service): State<Arc<RecommendationService>>,
    Path(restaurant_id): Path<String>,
    Json(mut request): Json<RecommendationRequest>,
) -> Response {
    request.restaurant_id = Some(RestaurantId(restaurant_id));
    recommendation_response(&service, &request)
}

pub(crate) async fn highlights_handler(
    State(service): State<Arc<RecommendationService>>,
    Json(request): Json<RecommendationRequest>,
) -> Response {
    let highlights = service.highlights(&request);
    (StatusCode::OK, Json(json!({ "restaurants": highlights }))).into_response()
}

fn recommendation_response(
    service: &RecommendationService,
    request: &RecommendationRequest,
) -> Response {
    match service.recommend(request) {
        Ok(recommendations) => (
            StatusCode::OK,
            Json(json!({ "recommendations": recommendations })),
        )
            .into_response(),
        Err(error @ RecommendationServiceError::UnknownRestaurant(_)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
