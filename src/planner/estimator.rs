//! Metabolic estimates: BMI, Harris-Benedict BMR, TDEE and the
//! goal-adjusted daily calorie target.

use crate::models::{FitnessGoal, Gender, UserProfile};
use crate::planner::constants::{
    BMI_NORMAL_MAX, BMI_OVERWEIGHT_MAX, BMI_UNDERWEIGHT_MAX, GOAL_ADJUSTMENT_KCAL,
};

/// Harris-Benedict coefficients, male formula.
mod hb_male {
    pub const BASE: f64 = 88.362;
    pub const WEIGHT: f64 = 13.397;
    pub const HEIGHT_CM: f64 = 4.799;
    pub const AGE: f64 = 5.677;
}

/// Harris-Benedict coefficients, female formula.
mod hb_female {
    pub const BASE: f64 = 447.593;
    pub const WEIGHT: f64 = 9.247;
    pub const HEIGHT_CM: f64 = 3.098;
    pub const AGE: f64 = 4.330;
}

/// BMI band, labelled as rendered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Full estimator output for one profile.
#[derive(Debug, Clone)]
pub struct MetabolicEstimate {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    pub tdee: f64,
    pub calorie_target: f64,
}

/// Body Mass Index: weight over height squared.
pub fn bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Classify a BMI value. The lower bound of each band is inclusive.
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < BMI_UNDERWEIGHT_MAX {
        BmiCategory::Underweight
    } else if bmi < BMI_NORMAL_MAX {
        BmiCategory::NormalWeight
    } else if bmi < BMI_OVERWEIGHT_MAX {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Basal Metabolic Rate via Harris-Benedict.
///
/// `Other` deliberately shares the female coefficients: the estimator has
/// a binary branch only.
pub fn bmr(weight_kg: f64, height_m: f64, age_years: u32, gender: Gender) -> f64 {
    let height_cm = height_m * 100.0;
    let age = age_years as f64;

    match gender {
        Gender::Male => {
            hb_male::BASE + hb_male::WEIGHT * weight_kg + hb_male::HEIGHT_CM * height_cm
                - hb_male::AGE * age
        }
        Gender::Female | Gender::Other => {
            hb_female::BASE + hb_female::WEIGHT * weight_kg + hb_female::HEIGHT_CM * height_cm
                - hb_female::AGE * age
        }
    }
}

/// Shift a TDEE by the fixed goal adjustment.
pub fn calorie_target(tdee: f64, goal: FitnessGoal) -> f64 {
    match goal {
        FitnessGoal::LoseWeight => tdee - GOAL_ADJUSTMENT_KCAL,
        FitnessGoal::GainWeight => tdee + GOAL_ADJUSTMENT_KCAL,
        FitnessGoal::MaintainWeight => tdee,
    }
}

/// Compute the full metabolic estimate for a profile.
///
/// Pure arithmetic over pre-validated inputs; there is no failure mode.
pub fn estimate_targets(profile: &UserProfile) -> MetabolicEstimate {
    let bmi_value = bmi(profile.weight_kg, profile.height_m);
    let bmr_value = bmr(
        profile.weight_kg,
        profile.height_m,
        profile.age_years,
        profile.gender,
    );
    let tdee = bmr_value * profile.activity.multiplier();

    MetabolicEstimate {
        bmi: bmi_value,
        bmi_category: bmi_category(bmi_value),
        bmr: bmr_value,
        tdee,
        calorie_target: calorie_target(tdee, profile.goal),
    }
}
