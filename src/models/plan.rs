use serde::{Deserialize, Serialize};

/// One selected slot in the weekly plan: a dish assigned to a meal
/// category on a specific day (1-based).
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPlanEntry {
    pub day: u32,
    pub dish_name: String,
    pub category: String,
    pub calories: f64,
}

impl DailyPlanEntry {
    pub fn new(day: u32, dish_name: String, category: String, calories: f64) -> Self {
        Self {
            day,
            dish_name,
            category,
            calories,
        }
    }
}

/// One entry of the meal-share configuration: a category name and its
/// percentage share of the daily calorie target.
///
/// Shares are kept in a `Vec` because configuration order is the slot
/// order within each planned day. Percent values need not sum to 100;
/// the selector normalizes them before use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealShare {
    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "Percent")]
    pub percent: f64,
}

impl MealShare {
    pub fn new(category: &str, percent: f64) -> Self {
        Self {
            category: category.to_string(),
            percent,
        }
    }
}
