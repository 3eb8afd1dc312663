//! Dish catalog loading.
//!
//! The catalog is read-only input: a JSON array or a CSV table of dishes,
//! or the built-in fallback when no file is supplied. Catalog order is
//! meaningful downstream (selection tie-breaks on first occurrence), so
//! loading preserves file order while deduplicating by name.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{MentorError, Result};
use crate::models::{Dish, MealShare};

/// The four-dish table the original dashboards shipped hardcoded; used
/// when no catalog file exists.
pub fn builtin_catalog() -> Vec<Dish> {
    vec![
        Dish::new("Vegetable Poha", "Breakfast", 270.0),
        Dish::new("Grilled Chicken Salad", "Lunch", 420.0),
        Dish::new("Dal Tadka with Rice", "Dinner", 540.0),
        Dish::new("Mixed Fruit Bowl", "Snacks", 150.0),
    ]
}

/// Deduplicate by lowercase name: last occurrence wins, first position is
/// kept, so file order survives.
fn dedupe_dishes(dishes: Vec<Dish>) -> Vec<Dish> {
    let mut ordered: Vec<Dish> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for dish in dishes {
        match index_by_key.get(&dish.key()) {
            Some(&i) => ordered[i] = dish,
            None => {
                index_by_key.insert(dish.key(), ordered.len());
                ordered.push(dish);
            }
        }
    }

    ordered
}

/// Load dishes from a JSON array file.
pub fn load_dishes<P: AsRef<Path>>(path: P) -> Result<Vec<Dish>> {
    let content = fs::read_to_string(path)?;
    let dishes: Vec<Dish> = serde_json::from_str(&content)?;
    Ok(dedupe_dishes(dishes))
}

/// Load dishes from a CSV file with `Name,Category,Calories` headers.
pub fn load_dishes_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Dish>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut dishes = Vec::new();
    for record in reader.deserialize() {
        let dish: Dish = record?;
        dishes.push(dish);
    }
    Ok(dedupe_dishes(dishes))
}

/// Load a catalog file, dispatching on its extension.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Dish>> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_dishes(path),
        Some("csv") => load_dishes_csv(path),
        other => Err(MentorError::UnsupportedFormat(format!(
            "{} (expected .json or .csv)",
            other.unwrap_or("<none>")
        ))),
    }
}

/// Load a meal-share configuration from a JSON array file.
///
/// Order in the file is the slot order within each planned day.
pub fn load_shares<P: AsRef<Path>>(path: P) -> Result<Vec<MealShare>> {
    let content = fs::read_to_string(path)?;
    let shares: Vec<MealShare> = serde_json::from_str(&content)?;
    Ok(shares)
}

/// Split a catalog into valid dishes and one warning per dropped row.
pub fn validate_dishes(dishes: Vec<Dish>) -> (Vec<Dish>, Vec<String>) {
    let mut valid = Vec::new();
    let mut warnings = Vec::new();

    for dish in dishes {
        if dish.is_valid() {
            valid.push(dish);
        } else {
            warnings.push(format!(
                "Dropped invalid catalog row: '{}' ({}, {} cal)",
                dish.name, dish.category, dish.calories
            ));
        }
    }

    (valid, warnings)
}
