//! Ranks restaurant menu items by how closely they fit a user's per-meal macro goals.

mod dietary;
pub mod domain;
mod ranking;
pub mod router;
mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use dietary::{filter_by_dietary_preference, satisfies_preference};
pub use domain::{
    DietaryPreference, MatchTier, MenuItem, MenuItemId, Nutrient, Nutrients, NutritionTarget,
    RestaurantId, ScoredItem, TagSet, UserProfile,
};
pub use ranking::{
    recommend_menu_items, RecommendationQuery, Recommender, RestaurantHighlights, DEFAULT_LIMIT,
    DEFAULT_RESTAURANT_LIMIT,
};
pub use router::recommendation_router;
pub use scoring::{
    score_item, MatchScorer, NutrientRule, ScoreBreakdown, ScoreComponent, ScoringRubric,
};
pub use service::{
    RecommendationRequest, RecommendationService, RecommendationServiceError,
    RecommendationView, RestaurantHighlightsView,
};
