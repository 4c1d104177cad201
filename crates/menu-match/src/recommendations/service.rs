use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::{MatchTier, MenuItem, RestaurantId, ScoredItem, UserProfile};
use super::ranking::{RecommendationQuery, Recommender, DEFAULT_RESTAURANT_LIMIT};
use super::scoring::ScoreBreakdown;
use crate::catalog::{MenuCatalog, Restaurant};

/// Service pairing a shared catalog with the recommender.
pub struct RecommendationService {
    catalog: Arc<MenuCatalog>,
    recommender: Recommender,
    default_limit: usize,
}

impl RecommendationService {
    pub fn new(catalog: Arc<MenuCatalog>, recommender: Recommender, default_limit: usize) -> Self {
        Self {
            catalog,
            recommender,
            default_limit,
        }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    /// Ranks the whole catalog, or one restaurant when the request names it.
    pub fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<RecommendationView>, RecommendationServiceError> {
        if let Some(id) = request
            .restaurant_id
            .as_ref()
            .filter(|id| !id.as_str().is_empty())
        {
            self.ensure_restaurant(id)?;
        }

        let query = RecommendationQuery {
            restaurant_id: request.restaurant_id.clone(),
            limit: request.limit.unwrap_or(self.default_limit),
        };

        Ok(self.views(
            self.recommender
                .recommend(self.catalog.items(), request.user.as_ref(), &query),
            request,
        ))
    }

    /// Top items for every restaurant in the catalog.
    pub fn highlights(&self, request: &RecommendationRequest) -> Vec<RestaurantHighlightsView> {
        let limit = request.limit.unwrap_or(DEFAULT_RESTAURANT_LIMIT);

        self.recommender
            .recommend_by_restaurant(&self.catalog, request.user.as_ref(), limit)
            .into_iter()
            .map(|highlights| RestaurantHighlightsView {
                restaurant: highlights.restaurant.clone(),
                recommendations: self.views(highlights.items, request),
            })
            .collect()
    }

    fn ensure_restaurant(&self, id: &RestaurantId) -> Result<(), RecommendationServiceError> {
        match self.catalog.restaurant(id) {
            Some(_) => Ok(()),
            None => Err(RecommendationServiceError::UnknownRestaurant(id.clone())),
        }
    }

    fn views(
        &self,
        scored: Vec<ScoredItem<'_>>,
        request: &RecommendationRequest,
    ) -> Vec<RecommendationView> {
        let target = request.user.as_ref().map(|user| &user.nutrition_target);

        scored
            .into_iter()
            .map(|entry| RecommendationView {
                item: entry.item.clone(),
                score: entry.score,
                tier: entry.tier(),
                breakdown: if request.explain {
                    self.recommender.scorer().breakdown(entry.item, target)
                } else {
                    None
                },
            })
            .collect()
    }
}

/// Inbound payload shared by the CLI and HTTP surfaces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub restaurant_id: Option<RestaurantId>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub explain: bool,
}

/// Owned, serializable form of a scored item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationView {
    pub item: MenuItem,
    pub score: u8,
    pub tier: MatchTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantHighlightsView {
    pub restaurant: Restaurant,
    pub recommendations: Vec<RecommendationView>,
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationServiceError {
    #[error("restaurant '{0}' is not in the catalog")]
    UnknownRestaurant(RestaurantId),
}
