use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::CatalogImportError;
use crate::recommendations::domain::{MenuItem, MenuItemId, Nutrients, RestaurantId, TagSet};

#[derive(Debug)]
pub(crate) struct MenuRecord {
    pub(crate) item: MenuItem,
    pub(crate) restaurant_name: Option<String>,
}

impl MenuRecord {
    /// Rejects negative or non-finite numbers so scoring only sees sane values.
    pub(crate) fn validate(&self) -> Result<(), CatalogImportError> {
        let nutrients = &self.item.nutrients;
        let fields = [
            ("price", self.item.price),
            ("calories", nutrients.calories),
            ("protein", nutrients.protein_g),
            ("carbs", nutrients.carbs_g),
            ("fats", nutrients.fats_g),
        ];

        match fields
            .into_iter()
            .find(|(_, value)| !(value.is_finite() && *value >= 0.0))
        {
            Some((field, value)) => Err(CatalogImportError::InvalidValue {
                item: self.item.id.clone(),
                field,
                value,
            }),
            None => Ok(()),
        }
    }
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<MenuRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<MenuRow>() {
        records.push(record?.into_record());
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct MenuRow {
    id: String,
    restaurant_id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    restaurant_name: Option<String>,
    name: String,
    #[serde(default)]
    description: String,
    price: f64,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
    #[serde(default)]
    tags: String,
}

impl MenuRow {
    fn into_record(self) -> MenuRecord {
        let tags: TagSet = self.tags.split(';').collect();

        MenuRecord {
            item: MenuItem {
                id: MenuItemId(self.id),
                restaurant_id: RestaurantId(self.restaurant_id),
                name: self.name,
                description: self.description,
                price: self.price,
                nutrients: Nutrients::new(self.calories, self.protein, self.carbs, self.fats),
                tags,
            },
            restaurant_name: self.restaurant_name,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
