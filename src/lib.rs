pub mod advisor;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;

pub use error::{MentorError, Result};
pub use models::{DailyPlanEntry, Dish, MealShare, UserProfile};
