use super::domain::{DietaryPreference, MenuItem};

/// Keeps the items compatible with `preference`, preserving input order.
///
/// `None` and [`DietaryPreference::NoPreference`] return every item. Otherwise an
/// item survives when its tags contain any of the preference's accepted tags.
pub fn filter_by_dietary_preference<'a, I>(
    items: I,
    preference: Option<DietaryPreference>,
) -> Vec<&'a MenuItem>
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    items
        .into_iter()
        .filter(|item| satisfies_preference(item, preference))
        .collect()
}

pub fn satisfies_preference(item: &MenuItem, preference: Option<DietaryPreference>) -> bool {
    match preference.and_then(DietaryPreference::accepted_tags) {
        Some(accepted) => item.tags.contains_any(accepted),
        None => true,
    }
}
