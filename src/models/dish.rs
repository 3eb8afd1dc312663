use serde::{Deserialize, Serialize};

/// A dish in the catalog: a named recipe with a meal category and a
/// calorie count.
///
/// The category is a free string ("Breakfast", "Snacks", ...) matched
/// loosely against meal-share keys; see `planner::selection`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "Calories")]
    pub calories: f64,
}

impl Dish {
    pub fn new(name: &str, category: &str, calories: f64) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            calories,
        }
    }

    /// Canonical key for lookups and the used-meal set (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Basic validation: non-empty name and category, finite non-negative calories.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.category.trim().is_empty()
            && self.calories.is_finite()
            && self.calories >= 0.0
    }
}

impl PartialEq for Dish {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl Eq for Dish {}

impl std::hash::Hash for Dish {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.to_lowercase().hash(state);
    }
}
