//! Catalog CSV import feeding straight into recommendations.

use menu_match::catalog::{CatalogImportError, MenuCatalogImporter};
use menu_match::recommendations::{
    recommend_menu_items, DietaryPreference, NutritionTarget, RestaurantId, UserProfile,
};
use std::io::Cursor;

const MENU: &str = "\
id,restaurant_id,restaurant_name,name,description,price,calories,protein,carbs,fats,tags
1,harbor,Harbor Grill,Seared Tuna,With greens,18.5,200,40,25,10,seafood;high-protein
2,harbor,Harbor Grill,Fish Tacos,,13,640,22,70,28,seafood
3,harbor,Harbor Grill,Burger,,14,900,45,60,50,
4,oak,Oak Table,Roast Veg Plate,,11,220,12,30,9,VEGAN;Vegetarian
";

#[test]
fn imported_catalog_ranks_against_user_goals() {
    let catalog = MenuCatalogImporter::from_reader(Cursor::new(MENU)).expect("import");
    let user = UserProfile {
        id: "u".to_string(),
        name: "Sam".to_string(),
        nutrition_target: NutritionTarget::new(700.0, 140.0, 87.5, 35.0),
        dietary_preference: Some(DietaryPreference::Pescatarian),
    };
    let harbor = RestaurantId("harbor".to_string());

    let ranked = recommend_menu_items(catalog.items(), Some(&user), Some(&harbor), 5);

    let names: Vec<&str> = ranked.iter().map(|entry| entry.item.name.as_str()).collect();
    assert_eq!(names, vec!["Seared Tuna", "Fish Tacos"]);
    assert_eq!(ranked[0].score, 100);
    assert_eq!(catalog.restaurants().len(), 2);
    assert_eq!(catalog.restaurants()[1].name, "Oak Table");
}

#[test]
fn non_finite_values_are_rejected() {
    let csv = "id,restaurant_id,name,price,calories,protein,carbs,fats\n9,r,Mystery,5,NaN,1,1,1\n";

    let error = MenuCatalogImporter::from_reader(Cursor::new(csv)).expect_err("rejects NaN");

    assert!(matches!(
        error,
        CatalogImportError::InvalidValue { field: "calories", .. }
    ));
}
