//! Menu catalog container and CSV import.

mod parser;
mod sample;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::recommendations::domain::{MenuItem, MenuItemId, RestaurantId};

/// Restaurant metadata shown next to its recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: f32,
    pub description: String,
}

impl Restaurant {
    /// Stand-in for a restaurant only known through its menu items.
    pub fn unlisted(id: RestaurantId, name: Option<String>) -> Self {
        let name = name.unwrap_or_else(|| id.0.clone());
        Self {
            id,
            name,
            latitude: 0.0,
            longitude: 0.0,
            rating: 0.0,
            description: String::new(),
        }
    }
}

/// Read-only set of restaurants and the items they serve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuCatalog {
    restaurants: Vec<Restaurant>,
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Builds a catalog, adding an unlisted restaurant for every item whose
    /// owner is missing from `restaurants`.
    pub fn new(mut restaurants: Vec<Restaurant>, items: Vec<MenuItem>) -> Self {
        let mut known: HashSet<RestaurantId> =
            restaurants.iter().map(|restaurant| restaurant.id.clone()).collect();

        for item in &items {
            if known.insert(item.restaurant_id.clone()) {
                restaurants.push(Restaurant::unlisted(item.restaurant_id.clone(), None));
            }
        }

        Self { restaurants, items }
    }

    /// Demo catalog bundled with the crate.
    pub fn sample() -> Self {
        Self::new(sample::restaurants(), sample::menu_items())
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn restaurant(&self, id: &RestaurantId) -> Option<&Restaurant> {
        self.restaurants.iter().find(|restaurant| &restaurant.id == id)
    }

    pub fn items_for<'a>(&'a self, id: &'a RestaurantId) -> impl Iterator<Item = &'a MenuItem> {
        self.items.iter().filter(move |item| &item.restaurant_id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidValue {
        item: MenuItemId,
        field: &'static str,
        value: f64,
    },
    DuplicateItem(MenuItemId),
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read menu catalog: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid menu catalog CSV data: {}", err),
            CatalogImportError::InvalidValue { item, field, value } => write!(
                f,
                "menu item '{}' has invalid {} value {} (expected a non-negative number)",
                item.0, field, value
            ),
            CatalogImportError::DuplicateItem(item) => {
                write!(f, "menu item '{}' appears more than once", item.0)
            }
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::InvalidValue { .. } | CatalogImportError::DuplicateItem(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct MenuCatalogImporter;

impl MenuCatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<MenuCatalog, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads `id,restaurant_id,name,description,price,calories,protein,carbs,fats,tags`
    /// rows, with an optional `restaurant_name` column. Tags are `;`-separated.
    pub fn from_reader<R: Read>(reader: R) -> Result<MenuCatalog, CatalogImportError> {
        let mut restaurants: Vec<Restaurant> = Vec::new();
        let mut items = Vec::new();
        let mut seen: HashSet<MenuItemId> = HashSet::new();

        for record in parser::parse_records(reader)? {
            record.validate()?;

            if !seen.insert(record.item.id.clone()) {
                return Err(CatalogImportError::DuplicateItem(record.item.id));
            }

            if !restaurants
                .iter()
                .any(|restaurant| restaurant.id == record.item.restaurant_id)
            {
                restaurants.push(Restaurant::unlisted(
                    record.item.restaurant_id.clone(),
                    record.restaurant_name,
                ));
            }

            items.push(record.item);
        }

        Ok(MenuCatalog::new(restaurants, items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "id,restaurant_id,restaurant_name,name,description,price,calories,protein,carbs,fats,tags\n";

    #[test]
    fn importer_reads_items_and_derives_restaurants() {
        let csv = format!(
            "{HEADER}a1,r1,Harbor Grill,Seared Tuna,With greens,18.5,520,42,20,18,Seafood; High-Protein\n\
a2,r1,Harbor Grill,Garden Plate,,12,380,14,48,12,vegan\n\
b1,r2,,Steak Bowl,Rice and steak,16,690,48,60,24,\n"
        );

        let catalog = MenuCatalogImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.restaurants().len(), 2);
        assert_eq!(catalog.restaurants()[0].name, "Harbor Grill");
        assert_eq!(catalog.restaurants()[1].name, "r2");

        let tuna = &catalog.items()[0];
        assert!(tuna.tags.contains("seafood"));
        assert!(tuna.tags.contains("high-protein"));
        assert_eq!(tuna.nutrients.protein_g, 42.0);
        assert!(catalog.items()[2].tags.is_empty());

        let r1 = RestaurantId("r1".to_string());
        assert_eq!(catalog.items_for(&r1).count(), 2);
    }

    #[test]
    fn importer_rejects_negative_nutrients() {
        let csv = format!("{HEADER}a1,r1,,Bad Soup,,6,200,-3,10,5,\n");

        let error = MenuCatalogImporter::from_reader(Cursor::new(csv)).expect_err("rejects row");

        match error {
            CatalogImportError::InvalidValue { item, field, .. } => {
                assert_eq!(item.0, "a1");
                assert_eq!(field, "protein");
            }
            other => panic!("expected invalid value, got {other:?}"),
        }
    }

    #[test]
    fn importer_rejects_duplicate_ids() {
        let csv = format!("{HEADER}a1,r1,,Soup,,6,200,3,10,5,\na1,r1,,Soup,,6,200,3,10,5,\n");

        let error = MenuCatalogImporter::from_reader(Cursor::new(csv)).expect_err("rejects dup");

        assert!(matches!(error, CatalogImportError::DuplicateItem(id) if id.0 == "a1"));
    }

    #[test]
    fn importer_surfaces_malformed_numbers() {
        let csv = format!("{HEADER}a1,r1,,Soup,,6,lots,3,10,5,\n");

        let error = MenuCatalogImporter::from_reader(Cursor::new(csv)).expect_err("rejects row");

        assert!(matches!(error, CatalogImportError::Csv(_)));
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error = MenuCatalogImporter::from_path("./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            CatalogImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn sample_catalog_lists_every_owner() {
        let catalog = MenuCatalog::sample();

        assert_eq!(catalog.restaurants().len(), 4);
        for item in catalog.items() {
            assert!(catalog.restaurant(&item.restaurant_id).is_some());
        }
    }

    #[test]
    fn new_adds_unlisted_restaurants_for_orphan_items() {
        let mut item = MenuCatalog::sample().items()[0].clone();
        item.restaurant_id = RestaurantId("pop-up".to_string());

        let catalog = MenuCatalog::new(Vec::new(), vec![item]);

        let restaurant = catalog
            .restaurant(&RestaurantId("pop-up".to_string()))
            .expect("unlisted restaurant added");
        assert_eq!(restaurant.name, "pop-up");
    }
}
