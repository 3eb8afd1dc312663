use crate::models::MealShare;

/// Planning horizon in days.
pub const PLAN_DAYS: u32 = 7;

/// Headroom ceiling over a slot's calorie target: a dish may be cheaper
/// than the target but never more than 20% over it.
pub const CALORIE_HEADROOM: f64 = 1.2;

/// Calorie shift applied to TDEE for a lose/gain goal.
pub const GOAL_ADJUSTMENT_KCAL: f64 = 500.0;

// ─────────────────────────────────────────────────────────────────────────────
// BMI category bands (lower bound of each band is inclusive)
// ─────────────────────────────────────────────────────────────────────────────

/// Below this BMI: underweight.
pub const BMI_UNDERWEIGHT_MAX: f64 = 18.5;

/// Below this BMI (and at least BMI_UNDERWEIGHT_MAX): normal weight.
pub const BMI_NORMAL_MAX: f64 = 25.0;

/// Below this BMI (and at least BMI_NORMAL_MAX): overweight. Above: obese.
pub const BMI_OVERWEIGHT_MAX: f64 = 30.0;

/// Default per-category calorie shares, used when no shares file is given.
///
/// The order here is the slot order within each planned day.
pub fn default_shares() -> Vec<MealShare> {
    vec![
        MealShare::new("Breakfast", 25.0),
        MealShare::new("Lunch", 35.0),
        MealShare::new("Dinner", 30.0),
        MealShare::new("Snack", 10.0),
    ]
}
