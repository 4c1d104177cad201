use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog menu items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenuItemId(pub String);

/// Identifier wrapper for restaurants owning menu items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RestaurantId(pub String);

impl RestaurantId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Daily macro goals taken from a user's profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTarget {
    pub daily_calories: f64,
    pub daily_protein_g: f64,
    pub daily_carbs_g: f64,
    pub daily_fats_g: f64,
}

impl NutritionTarget {
    pub const fn new(
        daily_calories: f64,
        daily_protein_g: f64,
        daily_carbs_g: f64,
        daily_fats_g: f64,
    ) -> Self {
        Self {
            daily_calories,
            daily_protein_g,
            daily_carbs_g,
            daily_fats_g,
        }
    }

    /// Splits each daily goal evenly across `meals_per_day` meals.
    pub fn per_meal(&self, meals_per_day: f64) -> Nutrients {
        Nutrients {
            calories: self.daily_calories / meals_per_day,
            protein_g: self.daily_protein_g / meals_per_day,
            carbs_g: self.daily_carbs_g / meals_per_day,
            fats_g: self.daily_fats_g / meals_per_day,
        }
    }
}

/// Macro content of a single menu item, or a per-meal goal derived from a target.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrients {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
}

impl Nutrients {
    pub const fn new(calories: f64, protein_g: f64, carbs_g: f64, fats_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fats_g,
        }
    }

    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein_g,
            Nutrient::Carbs => self.carbs_g,
            Nutrient::Fats => self.fats_g,
        }
    }
}

/// The four macros the scorer compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fats,
}

impl Nutrient {
    pub const fn ordered() -> [Self; 4] {
        [Self::Calories, Self::Protein, Self::Carbs, Self::Fats]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fats => "fats",
        }
    }
}

/// Lowercase, trimmed tag set so dietary checks ignore case and ordering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter().collect()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(&normalize_tag(tag))
    }

    pub fn contains_any(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.contains(tag))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|tag| normalize_tag(tag.as_ref()))
                .filter(|tag| !tag.is_empty())
                .collect(),
        )
    }
}

impl From<Vec<String>> for TagSet {
    fn from(value: Vec<String>) -> Self {
        value.into_iter().collect()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(value: TagSet) -> Self {
        value.0.into_iter().collect()
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Immutable catalog record for a dish offered by a restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub nutrients: Nutrients,
    #[serde(default)]
    pub tags: TagSet,
}

/// Eating pattern selected during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    NoPreference,
    Vegetarian,
    Vegan,
    Pescatarian,
    Keto,
    Paleo,
}

impl DietaryPreference {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::NoPreference,
            Self::Vegetarian,
            Self::Vegan,
            Self::Pescatarian,
            Self::Keto,
            Self::Paleo,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NoPreference => "no_preference",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::Pescatarian => "pescatarian",
            Self::Keto => "keto",
            Self::Paleo => "paleo",
        }
    }

    /// Tags any one of which admits an item; `None` admits everything.
    pub const fn accepted_tags(self) -> Option<&'static [&'static str]> {
        const VEGETARIAN: &[&str] = &["vegetarian", "vegan"];
        const VEGAN: &[&str] = &["vegan"];
        const PESCATARIAN: &[&str] = &["vegetarian", "vegan", "pescatarian", "seafood"];
        const KETO: &[&str] = &["keto", "low-carb"];
        const PALEO: &[&str] = &["paleo"];

        match self {
            Self::NoPreference => None,
            Self::Vegetarian => Some(VEGETARIAN),
            Self::Vegan => Some(VEGAN),
            Self::Pescatarian => Some(PESCATARIAN),
            Self::Keto => Some(KETO),
            Self::Paleo => Some(PALEO),
        }
    }
}

impl std::str::FromStr for DietaryPreference {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        Self::ordered()
            .into_iter()
            .find(|preference| preference.label() == normalized)
            .ok_or_else(|| format!("unknown dietary preference '{value}'"))
    }
}

/// The slice of a user profile the recommender consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub nutrition_target: NutritionTarget,
    #[serde(default)]
    pub dietary_preference: Option<DietaryPreference>,
}

/// Coarse grade of a match score used when presenting results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    High,
    Medium,
    Low,
}

impl MatchTier {
    pub const fn from_score(score: u8) -> Self {
        if score > 85 {
            Self::High
        } else if score > 70 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// A catalog item paired with its match score for one ranking call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredItem<'a> {
    pub item: &'a MenuItem,
    pub score: u8,
}

impl ScoredItem<'_> {
    pub const fn tier(&self) -> MatchTier {
        MatchTier::from_score(self.score)
    }
}
