pub mod prompts;
pub mod render;

pub use prompts::{
    collect_user_profile, prompt_activity, prompt_age_years, prompt_gender, prompt_goal,
    prompt_height_m, prompt_vegetarian, prompt_weight_kg, prompt_yes_no,
};
pub use render::{display_advice, display_estimate, display_warnings, display_week_plan};
