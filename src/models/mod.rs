pub mod dish;
pub mod plan;
pub mod profile;

pub use dish::Dish;
pub use plan::{DailyPlanEntry, MealShare};
pub use profile::{ActivityLevel, FitnessGoal, Gender, UserProfile};
