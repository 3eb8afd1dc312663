//! Calorie-budgeted meal selection over a 7-day horizon.
//!
//! Each day walks the share configuration in order, budgets the day's
//! calorie target by each share, and picks the unused dish closest to the
//! slot budget. The used-meal set spans the whole week, so a dish never
//! repeats across the run even in a different category slot.

use std::collections::HashSet;

use crate::models::{DailyPlanEntry, Dish, MealShare};
use crate::planner::constants::{CALORIE_HEADROOM, PLAN_DAYS};

/// Result of a selection run: the week's entries plus any non-fatal
/// warnings raised while normalizing the share configuration.
#[derive(Debug, Clone, Default)]
pub struct SelectionOutcome {
    pub entries: Vec<DailyPlanEntry>,
    pub warnings: Vec<String>,
}

/// Rescale shares so they sum to exactly 100.
///
/// Entries with an empty category or a non-finite / non-positive percent
/// are dropped, one warning each. An input with no usable entry returns
/// an empty list.
pub fn normalize_shares(shares: &[MealShare]) -> (Vec<MealShare>, Vec<String>) {
    let mut warnings = Vec::new();
    let mut usable: Vec<&MealShare> = Vec::new();

    for share in shares {
        if share.category.trim().is_empty() {
            warnings.push("Dropped meal share with empty category".to_string());
        } else if !share.percent.is_finite() || share.percent <= 0.0 {
            warnings.push(format!(
                "Dropped meal share '{}' with unusable percent {}",
                share.category, share.percent
            ));
        } else {
            usable.push(share);
        }
    }

    let total: f64 = usable.iter().map(|s| s.percent).sum();
    if total <= 0.0 {
        return (Vec::new(), warnings);
    }

    let normalized = usable
        .into_iter()
        .map(|s| MealShare::new(&s.category, s.percent / total * 100.0))
        .collect();

    (normalized, warnings)
}

/// Loose category test: the share key must appear in the dish's category,
/// case-insensitively ("Snack" matches a dish filed under "Snacks").
pub fn category_matches(dish_category: &str, share_category: &str) -> bool {
    dish_category
        .to_lowercase()
        .contains(&share_category.to_lowercase())
}

/// Pick the dish closest to the slot's calorie budget.
///
/// Candidates must match the category, fit under the headroom ceiling
/// (budget × 1.2) and not already be used this week. Ties resolve to the
/// first occurrence in catalog order.
pub fn pick_dish<'a>(
    catalog: &'a [Dish],
    share_category: &str,
    slot_target: f64,
    used: &HashSet<String>,
) -> Option<&'a Dish> {
    let ceiling = slot_target * CALORIE_HEADROOM;

    let mut best: Option<(&Dish, f64)> = None;
    for dish in catalog {
        if !category_matches(&dish.category, share_category) {
            continue;
        }
        if dish.calories > ceiling {
            continue;
        }
        if used.contains(&dish.key()) {
            continue;
        }

        let distance = (dish.calories - slot_target).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((dish, distance)),
        }
    }

    best.map(|(dish, _)| dish)
}

/// Plan a single day against the week's used-meal set.
///
/// Shares are expected pre-normalized. Slots with no feasible dish are
/// skipped; chosen dish keys are added to `used`.
pub fn plan_day(
    day: u32,
    calorie_target: f64,
    shares: &[MealShare],
    catalog: &[Dish],
    used: &mut HashSet<String>,
) -> Vec<DailyPlanEntry> {
    let mut entries = Vec::new();

    for share in shares {
        let slot_target = calorie_target * share.percent / 100.0;

        if let Some(dish) = pick_dish(catalog, &share.category, slot_target, used) {
            used.insert(dish.key());
            entries.push(DailyPlanEntry::new(
                day,
                dish.name.clone(),
                dish.category.clone(),
                dish.calories,
            ));
        }
    }

    entries
}

/// Select one week of meals for a daily calorie target.
///
/// The used-meal set starts empty once per run and is threaded through
/// every day, so uniqueness holds week-wide. A catalog smaller than
/// slots × days starves the later days; that is expected, not an error.
pub fn select_meal_plan(
    calorie_target: f64,
    shares: &[MealShare],
    catalog: &[Dish],
) -> SelectionOutcome {
    let (normalized, warnings) = normalize_shares(shares);

    let mut entries = Vec::new();
    let mut used: HashSet<String> = HashSet::new();

    for day in 1..=PLAN_DAYS {
        entries.extend(plan_day(day, calorie_target, &normalized, catalog, &mut used));
    }

    SelectionOutcome { entries, warnings }
}
