use crate::catalog::Restaurant;
use crate::recommendations::domain::{MenuItem, MenuItemId, Nutrients, RestaurantId, TagSet};

pub(super) fn restaurants() -> Vec<Restaurant> {
    vec![
        restaurant(
            "1",
            "Green Leaf Cafe",
            (37.7749, -122.4194),
            4.8,
            "Organic salads and grain bowls",
        ),
        restaurant(
            "2",
            "Nourish Kitchen",
            (37.7739, -122.4312),
            4.6,
            "Plant-based meals and smoothies",
        ),
        restaurant(
            "3",
            "Fresh Bites",
            (37.7829, -122.4074),
            4.5,
            "Healthy wraps and bowls",
        ),
        restaurant(
            "4",
            "Vitality Juice Bar",
            (37.7699, -122.4269),
            4.7,
            "Cold-pressed juices and acai bowls",
        ),
    ]
}

pub(super) fn menu_items() -> Vec<MenuItem> {
    vec![
        item(
            "101",
            "1",
            "Grilled Chicken Salad",
            "Mixed greens, grilled chicken, cherry tomatoes, balsamic",
            12.99,
            Nutrients::new(420.0, 35.0, 15.0, 22.0),
            &["high-protein", "low-carb", "gluten-free"],
        ),
        item(
            "102",
            "1",
            "Quinoa Power Bowl",
            "Quinoa, roasted chickpeas, kale, tahini dressing",
            11.49,
            Nutrients::new(480.0, 18.0, 62.0, 16.0),
            &["vegan", "vegetarian", "high-fiber"],
        ),
        item(
            "103",
            "1",
            "Salmon Grain Bowl",
            "Seared salmon, farro, cucumber, herb yogurt",
            15.99,
            Nutrients::new(560.0, 38.0, 45.0, 24.0),
            &["seafood", "pescatarian", "high-protein"],
        ),
        item(
            "104",
            "1",
            "Caprese Sandwich",
            "Fresh mozzarella, tomato, basil, ciabatta",
            9.99,
            Nutrients::new(610.0, 24.0, 58.0, 30.0),
            &["vegetarian"],
        ),
        item(
            "201",
            "2",
            "Tofu Buddha Bowl",
            "Crispy tofu, brown rice, edamame, miso glaze",
            12.49,
            Nutrients::new(520.0, 28.0, 60.0, 18.0),
            &["vegan", "vegetarian", "high-protein"],
        ),
        item(
            "202",
            "2",
            "Lentil Curry",
            "Red lentils, coconut milk, spinach, basmati",
            10.99,
            Nutrients::new(590.0, 22.0, 78.0, 20.0),
            &["vegan", "vegetarian", "gluten-free"],
        ),
        item(
            "203",
            "2",
            "Green Goddess Smoothie",
            "Spinach, banana, almond butter, oat milk",
            7.49,
            Nutrients::new(340.0, 9.0, 48.0, 14.0),
            &["vegan", "vegetarian"],
        ),
        item(
            "204",
            "2",
            "Zucchini Noodle Pesto",
            "Spiralized zucchini, basil pesto, pine nuts, parmesan",
            11.99,
            Nutrients::new(390.0, 14.0, 16.0, 30.0),
            &["vegetarian", "keto", "low-carb"],
        ),
        item(
            "301",
            "3",
            "Turkey Avocado Wrap",
            "Roast turkey, avocado, romaine, whole wheat wrap",
            10.49,
            Nutrients::new(530.0, 36.0, 42.0, 22.0),
            &["high-protein"],
        ),
        item(
            "302",
            "3",
            "Steak and Sweet Potato Bowl",
            "Grass-fed sirloin, roasted sweet potato, broccoli",
            14.99,
            Nutrients::new(640.0, 45.0, 48.0, 26.0),
            &["paleo", "high-protein", "gluten-free"],
        ),
        item(
            "303",
            "3",
            "Shrimp Lettuce Cups",
            "Garlic shrimp, butter lettuce, mango salsa",
            12.99,
            Nutrients::new(310.0, 28.0, 14.0, 15.0),
            &["seafood", "low-carb", "paleo"],
        ),
        item(
            "304",
            "3",
            "Falafel Wrap",
            "Falafel, hummus, pickled onion, pita",
            9.49,
            Nutrients::new(580.0, 19.0, 70.0, 24.0),
            &["vegan", "vegetarian"],
        ),
        item(
            "401",
            "4",
            "Classic Acai Bowl",
            "Acai, granola, banana, berries, honey",
            9.99,
            Nutrients::new(450.0, 8.0, 82.0, 12.0),
            &["vegetarian"],
        ),
        item(
            "402",
            "4",
            "Protein Berry Shake",
            "Whey, mixed berries, almond milk",
            8.49,
            Nutrients::new(320.0, 32.0, 30.0, 7.0),
            &["high-protein", "gluten-free"],
        ),
        item(
            "403",
            "4",
            "Avocado Keto Smoothie",
            "Avocado, coconut cream, cacao, stevia",
            8.99,
            Nutrients::new(410.0, 6.0, 12.0, 38.0),
            &["vegan", "keto", "low-carb"],
        ),
        item(
            "404",
            "4",
            "Citrus Cold Press",
            "Orange, grapefruit, ginger",
            6.49,
            Nutrients::new(160.0, 2.0, 38.0, 0.0),
            &["vegan", "vegetarian", "paleo"],
        ),
    ]
}

fn restaurant(
    id: &str,
    name: &str,
    (latitude, longitude): (f64, f64),
    rating: f32,
    description: &str,
) -> Restaurant {
    Restaurant {
        id: RestaurantId(id.to_string()),
        name: name.to_string(),
        latitude,
        longitude,
        rating,
        description: description.to_string(),
    }
}

fn item(
    id: &str,
    restaurant_id: &str,
    name: &str,
    description: &str,
    price: f64,
    nutrients: Nutrients,
    tags: &[&str],
) -> MenuItem {
    MenuItem {
        id: MenuItemId(id.to_string()),
        restaurant_id: RestaurantId(restaurant_id.to_string()),
        name: name.to_string(),
        description: description.to_string(),
        price,
        nutrients,
        tags: TagSet::new(tags),
    }
}
