use crate::infra::{load_catalog, load_catalog_from_path};
use clap::Args;
use menu_match::catalog::MenuCatalog;
use menu_match::config::AppConfig;
use menu_match::error::AppError;
use menu_match::recommendations::{
    DietaryPreference, NutritionTarget, RecommendationRequest, RecommendationService,
    RecommendationServiceError, RecommendationView, Recommender, RestaurantId, UserProfile,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// Daily calorie goal; without goals every item gets the neutral score
    #[arg(long, requires_all = ["protein", "carbs", "fats"])]
    pub(crate) calories: Option<f64>,
    /// Daily protein goal in grams
    #[arg(long, requires_all = ["calories", "carbs", "fats"])]
    pub(crate) protein: Option<f64>,
    /// Daily carbohydrate goal in grams
    #[arg(long, requires_all = ["calories", "protein", "fats"])]
    pub(crate) carbs: Option<f64>,
    /// Daily fat goal in grams
    #[arg(long, requires_all = ["calories", "protein", "carbs"])]
    pub(crate) fats: Option<f64>,
    /// Dietary preference (vegetarian, vegan, pescatarian, keto, paleo, no_preference)
    #[arg(long)]
    pub(crate) diet: Option<DietaryPreference>,
    /// Only rank items from this restaurant id
    #[arg(long)]
    pub(crate) restaurant: Option<String>,
    /// Number of items to return (defaults to the configured limit)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Menu catalog CSV; overrides APP_CATALOG_PATH
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Show top picks for every restaurant instead of one ranked list
    #[arg(long, conflicts_with = "restaurant")]
    pub(crate) by_restaurant: bool,
    /// Print the per-nutrient breakdown behind each score
    #[arg(long)]
    pub(crate) explain: bool,
}

impl RecommendArgs {
    fn user(&self) -> Option<UserProfile> {
        let target = NutritionTarget::new(self.calories?, self.protein?, self.carbs?, self.fats?);
        Some(UserProfile {
            id: "cli".to_string(),
            name: "Command line".to_string(),
            nutrition_target: target,
            dietary_preference: self.diet,
        })
    }

    fn request(&self) -> RecommendationRequest {
        RecommendationRequest {
            user: self.user(),
            restaurant_id: self.restaurant.clone().map(RestaurantId),
            limit: self.limit,
            explain: self.explain,
        }
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = match args.catalog.as_deref() {
        Some(path) => load_catalog_from_path(path)?,
        None => load_catalog(&config.catalog)?,
    };

    let service = RecommendationService::new(
        Arc::new(catalog),
        Recommender::default(),
        config.recommendations.default_limit,
    );
    let request = args.request();

    if request.user.is_none() {
        println!("No goals supplied: every item receives the neutral score.");
        if args.diet.is_some() {
            println!("Dietary preference is only applied together with goals.");
        }
    }

    if args.by_restaurant {
        for highlights in service.highlights(&request) {
            println!("\n{}", highlights.restaurant.name);
            render_views(&highlights.recommendations);
        }
        return Ok(());
    }

    match service.recommend(&request) {
        Ok(views) => {
            print_scope(service.catalog(), request.restaurant_id.as_ref());
            render_views(&views);
        }
        Err(RecommendationServiceError::UnknownRestaurant(id)) => {
            println!("Restaurant '{id}' is not in the catalog.");
            println!("Known restaurants:");
            for restaurant in service.catalog().restaurants() {
                println!("- {} ({})", restaurant.id, restaurant.name);
            }
        }
    }

    Ok(())
}

fn print_scope(catalog: &MenuCatalog, restaurant: Option<&RestaurantId>) {
    match restaurant.and_then(|id| catalog.restaurant(id)) {
        Some(restaurant) => println!("Top picks at {}", restaurant.name),
        None => println!("Top picks across {} restaurants", catalog.restaurants().len()),
    }
}

fn render_views(views: &[RecommendationView]) {
    if views.is_empty() {
        println!("- no matching items");
        return;
    }

    for view in views {
        println!(
            "- {:>3}% [{}] {} (${:.2}) | {:.0} kcal, {:.0}g protein, {:.0}g carbs, {:.0}g fats",
            view.score,
            view.tier.label(),
            view.item.name,
            view.item.price,
            view.item.nutrients.calories,
            view.item.nutrients.protein_g,
            view.item.nutrients.carbs_g,
            view.item.nutrients.fats_g,
        );

        if let Some(breakdown) = &view.breakdown {
            for component in &breakdown.components {
                println!(
                    "    {:<8} {:>6.1} vs {:>6.1} per meal -> {:.2} x {:.1}",
                    component.nutrient.label(),
                    component.actual,
                    component.meal_target,
                    component.proximity,
                    component.weight,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goals_build_a_user_profile() {
        let args = RecommendArgs {
            calories: Some(2000.0),
            protein: Some(150.0),
            carbs: Some(200.0),
            fats: Some(60.0),
            diet: Some(DietaryPreference::Keto),
            restaurant: Some("1".to_string()),
            limit: Some(2),
            ..Default::default()
        };

        let request = args.request();

        let user = request.user.expect("user present");
        assert_eq!(user.nutrition_target.daily_protein_g, 150.0);
        assert_eq!(user.dietary_preference, Some(DietaryPreference::Keto));
        assert_eq!(request.restaurant_id, Some(RestaurantId("1".to_string())));
        assert_eq!(request.limit, Some(2));
    }

    #[test]
    fn missing_goals_leave_request_anonymous() {
        let args = RecommendArgs {
            diet: Some(DietaryPreference::Vegan),
            ..Default::default()
        };

        assert!(args.request().user.is_none());
    }
}
