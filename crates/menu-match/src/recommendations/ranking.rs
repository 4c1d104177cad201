use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dietary::satisfies_preference;
use super::domain::{MenuItem, RestaurantId, ScoredItem, UserProfile};
use super::scoring::MatchScorer;
use crate::catalog::{MenuCatalog, Restaurant};

pub const DEFAULT_LIMIT: usize = 5;
/// Per-restaurant limit used when highlighting every restaurant at once.
pub const DEFAULT_RESTAURANT_LIMIT: usize = 3;

/// Scope and size of a recommendation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationQuery {
    #[serde(default)]
    pub restaurant_id: Option<RestaurantId>,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for RecommendationQuery {
    fn default() -> Self {
        Self {
            restaurant_id: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl RecommendationQuery {
    pub fn for_restaurant(restaurant_id: RestaurantId, limit: usize) -> Self {
        Self {
            restaurant_id: Some(restaurant_id),
            limit,
        }
    }

    fn scope(&self) -> Option<&RestaurantId> {
        self.restaurant_id
            .as_ref()
            .filter(|id| !id.as_str().is_empty())
    }
}

/// Ranks catalog items against a user's goals.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    scorer: MatchScorer,
}

impl Recommender {
    pub fn new(scorer: MatchScorer) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &MatchScorer {
        &self.scorer
    }

    /// Best `query.limit` items, highest score first.
    ///
    /// Items are narrowed to the query's restaurant and the user's dietary
    /// preference before scoring. Equal scores keep catalog order.
    pub fn recommend<'a>(
        &self,
        items: &'a [MenuItem],
        user: Option<&UserProfile>,
        query: &RecommendationQuery,
    ) -> Vec<ScoredItem<'a>> {
        let restaurant = query.scope();
        let preference = user.and_then(|user| user.dietary_preference);
        let target = user.map(|user| &user.nutrition_target);

        let mut scored: Vec<ScoredItem<'a>> = items
            .iter()
            .filter(|item| restaurant.map_or(true, |id| &item.restaurant_id == id))
            .filter(|item| satisfies_preference(item, preference))
            .map(|item| ScoredItem {
                item,
                score: self.scorer.score_item(item, target),
            })
            .collect();

        let candidates = scored.len();
        // `sort_by` is stable, so ties stay in catalog order.
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(query.limit);

        debug!(
            candidates,
            returned = scored.len(),
            restaurant = restaurant.map(RestaurantId::as_str),
            "ranked menu items"
        );

        scored
    }
}

/// Ranks with the standard rubric; see [`Recommender::recommend`].
pub fn recommend_menu_items<'a>(
    items: &'a [MenuItem],
    user: Option<&UserProfile>,
    restaurant_id: Option<&RestaurantId>,
    limit: usize,
) -> Vec<ScoredItem<'a>> {
    let query = RecommendationQuery {
        restaurant_id: restaurant_id.cloned(),
        limit,
    };
    Recommender::default().recommend(items, user, &query)
}

/// Top items for one restaurant, as shown on the map view.
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantHighlights<'a> {
    pub restaurant: &'a Restaurant,
    pub items: Vec<ScoredItem<'a>>,
}

impl Recommender {
    /// Runs one scoped ranking per restaurant in catalog order, skipping
    /// restaurants where nothing survives the user's dietary filter.
    pub fn recommend_by_restaurant<'a>(
        &self,
        catalog: &'a MenuCatalog,
        user: Option<&UserProfile>,
        limit: usize,
    ) -> Vec<RestaurantHighlights<'a>> {
        catalog
            .restaurants()
            .iter()
            .filter_map(|restaurant| {
                let query = RecommendationQuery::for_restaurant(restaurant.id.clone(), limit);
                let items = self.recommend(catalog.items(), user, &query);
                (!items.is_empty()).then_some(RestaurantHighlights { restaurant, items })
            })
            .collect()
    }
}
