use axum::response::Response;
use serde_json::Value;

use crate::recommendations::domain::{
    DietaryPreference, MenuItem, MenuItemId, Nutrients, NutritionTarget, RestaurantId, TagSet,
    UserProfile,
};

pub(super) fn item(id: &str, restaurant: &str, nutrients: Nutrients, tags: &[&str]) -> MenuItem {
    MenuItem {
        id: MenuItemId(id.to_string()),
        restaurant_id: RestaurantId(restaurant.to_string()),
        name: format!("Dish {id}"),
        description: String::new(),
        price: 10.0,
        nutrients,
        tags: TagSet::new(tags),
    }
}

/// Daily target whose per-meal split is exactly {200 kcal, 40 g, 25 g, 10 g}.
pub(super) fn target() -> NutritionTarget {
    NutritionTarget::new(700.0, 140.0, 87.5, 35.0)
}

pub(super) fn meal_target() -> Nutrients {
    Nutrients::new(200.0, 40.0, 25.0, 10.0)
}

pub(super) fn user(preference: Option<DietaryPreference>) -> UserProfile {
    UserProfile {
        id: "user-1".to_string(),
        name: "Alex Johnson".to_string(),
        nutrition_target: target(),
        dietary_preference: preference,
    }
}

pub(super) fn restaurant(id: &str) -> RestaurantId {
    RestaurantId(id.to_string())
}

pub(super) fn ids(items: &[&MenuItem]) -> Vec<String> {
    items.iter().map(|item| item.id.0.clone()).collect()
}

/// Mixed catalog across two restaurants with a spread of tags.
pub(super) fn tagged_catalog() -> Vec<MenuItem> {
    vec![
        item("v1", "1", Nutrients::new(210.0, 38.0, 26.0, 10.0), &["vegan"]),
        item("g1", "1", Nutrients::new(300.0, 20.0, 40.0, 12.0), &["Vegetarian"]),
        item("f1", "2", Nutrients::new(250.0, 45.0, 5.0, 9.0), &["seafood", "low-carb"]),
        item("p1", "2", Nutrients::new(180.0, 30.0, 8.0, 11.0), &["pescatarian"]),
        item("k1", "1", Nutrients::new(400.0, 25.0, 6.0, 30.0), &["KETO"]),
        item("o1", "2", Nutrients::new(350.0, 35.0, 20.0, 14.0), &["paleo", "high-protein"]),
        item("m1", "1", Nutrients::new(700.0, 50.0, 60.0, 35.0), &[]),
    ]
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
