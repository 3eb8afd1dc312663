use dialoguer::{Confirm, Input, Select};

use crate::error::{MentorError, Result};
use crate::models::{ActivityLevel, FitnessGoal, Gender, UserProfile};

/// Prompt for body weight in kilograms.
pub fn prompt_weight_kg() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Your weight in kg")
        .default("70".to_string())
        .interact_text()?;

    let weight: f64 = input
        .parse()
        .map_err(|_| MentorError::InvalidInput("Invalid weight".to_string()))?;

    if weight <= 0.0 || !weight.is_finite() {
        return Err(MentorError::InvalidInput(
            "Weight must be greater than 0".to_string(),
        ));
    }

    Ok(weight)
}

/// Prompt for height in meters.
pub fn prompt_height_m() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Your height in m")
        .default("1.70".to_string())
        .interact_text()?;

    let height: f64 = input
        .parse()
        .map_err(|_| MentorError::InvalidInput("Invalid height".to_string()))?;

    if height <= 0.0 || !height.is_finite() {
        return Err(MentorError::InvalidInput(
            "Height must be greater than 0".to_string(),
        ));
    }

    Ok(height)
}

/// Prompt for age in years.
pub fn prompt_age_years() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Your age in years")
        .default("30".to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| MentorError::InvalidInput("Invalid age".to_string()))
}

/// Prompt for gender.
pub fn prompt_gender() -> Result<Gender> {
    let labels: Vec<&str> = Gender::ALL.iter().map(|g| g.label()).collect();

    let selection = Select::new()
        .with_prompt("Your gender")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Gender::ALL[selection])
}

/// Prompt for activity level.
pub fn prompt_activity() -> Result<ActivityLevel> {
    let labels: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("Your activity level")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

/// Prompt for fitness goal.
pub fn prompt_goal() -> Result<FitnessGoal> {
    let labels: Vec<&str> = FitnessGoal::ALL.iter().map(|g| g.label()).collect();

    let selection = Select::new()
        .with_prompt("Your fitness goal")
        .items(&labels)
        .default(1)
        .interact()?;

    Ok(FitnessGoal::ALL[selection])
}

/// Prompt for vegetarian preference.
pub fn prompt_vegetarian() -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt("Do you prefer vegetarian food?")
        .default(false)
        .interact()?)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect the full user profile for planning and advice.
pub fn collect_user_profile() -> Result<UserProfile> {
    let weight_kg = prompt_weight_kg()?;
    let height_m = prompt_height_m()?;
    let age_years = prompt_age_years()?;
    let gender = prompt_gender()?;
    let activity = prompt_activity()?;
    let goal = prompt_goal()?;
    let vegetarian = prompt_vegetarian()?;

    Ok(UserProfile {
        weight_kg,
        height_m,
        age_years,
        gender,
        activity,
        goal,
        vegetarian,
    })
}
