use assert_float_eq::assert_float_absolute_eq;

use meal_mentor_rs::models::{ActivityLevel, FitnessGoal, Gender, UserProfile};
use meal_mentor_rs::planner::{
    bmi_category, bmr, calorie_target, estimate_targets, BmiCategory,
};

fn profile(
    weight_kg: f64,
    height_m: f64,
    age_years: u32,
    gender: Gender,
    activity: ActivityLevel,
    goal: FitnessGoal,
) -> UserProfile {
    UserProfile {
        weight_kg,
        height_m,
        age_years,
        gender,
        activity,
        goal,
        vegetarian: false,
    }
}

#[test]
fn test_bmi_category_boundaries() {
    assert_eq!(bmi_category(18.5).label(), "Normal weight");
    assert_eq!(bmi_category(24.999).label(), "Normal weight");
    assert_eq!(bmi_category(25.0).label(), "Overweight");
    assert_eq!(bmi_category(29.999).label(), "Overweight");
    assert_eq!(bmi_category(30.0).label(), "Obese");
    assert_eq!(bmi_category(18.499).label(), "Underweight");
}

#[test]
fn test_goal_adjustment_scenario() {
    // BMR 1500, multiplier 1.2 -> TDEE 1800.
    let tdee = 1500.0 * ActivityLevel::Sedentary.multiplier();
    assert_float_absolute_eq!(tdee, 1800.0, 1e-9);

    assert_float_absolute_eq!(calorie_target(tdee, FitnessGoal::LoseWeight), 1300.0, 1e-9);
    assert_float_absolute_eq!(calorie_target(tdee, FitnessGoal::GainWeight), 2300.0, 1e-9);
    assert_float_absolute_eq!(
        calorie_target(tdee, FitnessGoal::MaintainWeight),
        1800.0,
        1e-9
    );
}

#[test]
fn test_goal_adjustment_from_decorated_labels() {
    // Labels as the original dashboards rendered them.
    let lose = FitnessGoal::from_label("Lose Weight 🔽").unwrap();
    let gain = FitnessGoal::from_label("Gain Weight 🔼").unwrap();
    let maintain = FitnessGoal::from_label("Maintain Weight ⚖️").unwrap();

    assert_float_absolute_eq!(calorie_target(1800.0, lose), 1300.0, 1e-9);
    assert_float_absolute_eq!(calorie_target(1800.0, gain), 2300.0, 1e-9);
    assert_float_absolute_eq!(calorie_target(1800.0, maintain), 1800.0, 1e-9);
}

#[test]
fn test_harris_benedict_worked_values() {
    // Male, 80kg, 1.80m, 40y:
    // 88.362 + 13.397*80 + 4.799*180 - 5.677*40 = 1796.862
    assert_float_absolute_eq!(bmr(80.0, 1.80, 40, Gender::Male), 1796.862, 0.001);

    // Female, 55kg, 1.60m, 50y:
    // 447.593 + 9.247*55 + 3.098*160 - 4.330*50 = 1235.358
    assert_float_absolute_eq!(bmr(55.0, 1.60, 50, Gender::Female), 1235.358, 0.001);
}

#[test]
fn test_other_gender_shares_female_formula() {
    assert_eq!(
        bmr(55.0, 1.60, 50, Gender::Other),
        bmr(55.0, 1.60, 50, Gender::Female)
    );
}

#[test]
fn test_estimate_targets_end_to_end() {
    let p = profile(
        90.0,
        1.70,
        35,
        Gender::Male,
        ActivityLevel::ModeratelyActive,
        FitnessGoal::LoseWeight,
    );

    let estimate = estimate_targets(&p);

    // 90 / 1.7^2 = 31.14 -> obese band.
    assert_eq!(estimate.bmi_category, BmiCategory::Obese);
    assert_float_absolute_eq!(estimate.bmi, 31.142, 0.001);

    let expected_bmr = bmr(90.0, 1.70, 35, Gender::Male);
    assert_float_absolute_eq!(estimate.tdee, expected_bmr * 1.55, 1e-9);
    assert_float_absolute_eq!(estimate.calorie_target, estimate.tdee - 500.0, 1e-9);
}
