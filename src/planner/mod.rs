pub mod constants;
pub mod estimator;
pub mod selection;

pub use constants::*;
pub use estimator::{
    bmi, bmi_category, bmr, calorie_target, estimate_targets, BmiCategory, MetabolicEstimate,
};
pub use selection::{
    category_matches, normalize_shares, pick_dish, plan_day, select_meal_plan, SelectionOutcome,
};
