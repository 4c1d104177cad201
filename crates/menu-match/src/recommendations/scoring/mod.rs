mod proximity;
mod rubric;

pub use rubric::{NutrientRule, ScoringRubric};

use super::domain::{MenuItem, Nutrient, NutritionTarget};
use proximity::proximity;
use serde::{Deserialize, Serialize};

/// Stateless scorer that grades menu items against a rubric.
#[derive(Debug, Clone, Default)]
pub struct MatchScorer {
    rubric: ScoringRubric,
}

impl MatchScorer {
    pub fn new(rubric: ScoringRubric) -> Self {
        Self { rubric }
    }

    pub fn rubric(&self) -> &ScoringRubric {
        &self.rubric
    }

    /// Match score in `[0, 100]`; the rubric's neutral score when there is no target.
    pub fn score_item(&self, item: &MenuItem, target: Option<&NutritionTarget>) -> u8 {
        match target {
            Some(target) => self.score_against(item, target).0,
            None => self.rubric.neutral_score,
        }
    }

    /// Per-nutrient audit trail behind a score. `None` without a target.
    pub fn breakdown(
        &self,
        item: &MenuItem,
        target: Option<&NutritionTarget>,
    ) -> Option<ScoreBreakdown> {
        let target = target?;
        let (score, components) = self.score_against(item, target);
        Some(ScoreBreakdown { score, components })
    }

    fn score_against(&self, item: &MenuItem, target: &NutritionTarget) -> (u8, Vec<ScoreComponent>) {
        let meal_target = target.per_meal(self.rubric.meals_per_day);
        let mut components = Vec::with_capacity(4);
        let mut total = 0.0;

        for nutrient in Nutrient::ordered() {
            let rule = self.rubric.rule(nutrient);
            let actual = item.nutrients.get(nutrient);
            let goal = meal_target.get(nutrient);
            let closeness = proximity(actual, goal, rule.tolerance);

            total += closeness * rule.weight;
            components.push(ScoreComponent {
                nutrient,
                actual,
                meal_target: goal,
                proximity: closeness,
                weight: rule.weight,
            });
        }

        (to_percent(total), components)
    }
}

fn to_percent(total: f64) -> u8 {
    (total * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Scores with the standard rubric.
pub fn score_item(item: &MenuItem, target: Option<&NutritionTarget>) -> u8 {
    MatchScorer::default().score_item(item, target)
}

/// One nutrient's contribution to a match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub nutrient: Nutrient,
    pub actual: f64,
    pub meal_target: f64,
    pub proximity: f64,
    pub weight: f64,
}

/// Final score together with the components it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub score: u8,
    pub components: Vec<ScoreComponent>,
}
