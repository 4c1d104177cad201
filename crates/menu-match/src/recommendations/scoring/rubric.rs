use serde::{Deserialize, Serialize};

use super::super::domain::Nutrient;

/// Constants describing how a menu item is graded against a per-meal goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRubric {
    /// Daily goals are divided by this to obtain the per-meal goal.
    pub meals_per_day: f64,
    /// Score reported when there is no target to compare against.
    pub neutral_score: u8,
    pub calories: NutrientRule,
    pub protein: NutrientRule,
    pub carbs: NutrientRule,
    pub fats: NutrientRule,
}

/// Tolerance band and weight for one nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientRule {
    /// Relative deviation from target still treated as a perfect match.
    pub tolerance: f64,
    pub weight: f64,
}

impl ScoringRubric {
    /// Assumes three to four meals a day, with tighter bands on carbs and fats.
    pub const fn standard() -> Self {
        Self {
            meals_per_day: 3.5,
            neutral_score: 50,
            calories: NutrientRule {
                tolerance: 0.3,
                weight: 0.3,
            },
            protein: NutrientRule {
                tolerance: 0.3,
                weight: 0.3,
            },
            carbs: NutrientRule {
                tolerance: 0.2,
                weight: 0.2,
            },
            fats: NutrientRule {
                tolerance: 0.2,
                weight: 0.2,
            },
        }
    }

    pub const fn rule(&self, nutrient: Nutrient) -> NutrientRule {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fats => self.fats,
        }
    }
}

impl Default for ScoringRubric {
    fn default() -> Self {
        Self::standard()
    }
}
