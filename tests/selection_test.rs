use std::collections::HashSet;

use meal_mentor_rs::models::{Dish, MealShare};
use meal_mentor_rs::planner::{normalize_shares, select_meal_plan, CALORIE_HEADROOM};

fn sample_catalog() -> Vec<Dish> {
    vec![
        Dish::new("Vegetable Poha", "Breakfast", 270.0),
        Dish::new("Oats Porridge", "Breakfast", 280.0),
        Dish::new("Masala Omelette", "Breakfast", 320.0),
        Dish::new("Grilled Chicken Salad", "Lunch", 420.0),
        Dish::new("Paneer Wrap", "Lunch", 480.0),
        Dish::new("Dal Tadka with Rice", "Dinner", 540.0),
        Dish::new("Vegetable Khichdi", "Dinner", 460.0),
        Dish::new("Mixed Fruit Bowl", "Snacks", 150.0),
        Dish::new("Roasted Chana", "Snacks", 180.0),
    ]
}

fn sample_shares() -> Vec<MealShare> {
    vec![
        MealShare::new("Breakfast", 25.0),
        MealShare::new("Lunch", 35.0),
        MealShare::new("Dinner", 30.0),
        MealShare::new("Snack", 10.0),
    ]
}

#[test]
fn test_selection_is_deterministic() {
    let catalog = sample_catalog();
    let shares = sample_shares();

    let first = select_meal_plan(1800.0, &shares, &catalog);
    let second = select_meal_plan(1800.0, &shares, &catalog);

    assert_eq!(first.entries, second.entries);
}

#[test]
fn test_normalized_shares_sum_to_100_for_any_positive_input() {
    for raw in [
        vec![MealShare::new("Breakfast", 1.0), MealShare::new("Lunch", 1.0)],
        vec![
            MealShare::new("Breakfast", 40.0),
            MealShare::new("Lunch", 80.0),
            MealShare::new("Dinner", 30.0),
        ],
        vec![MealShare::new("Snack", 0.25)],
    ] {
        let (normalized, warnings) = normalize_shares(&raw);
        assert!(warnings.is_empty());

        let total: f64 = normalized.iter().map(|s| s.percent).sum();
        assert!(
            (total - 100.0).abs() < 1e-9,
            "Normalized shares summed to {}",
            total
        );
    }
}

#[test]
fn test_no_dish_repeats_across_the_week() {
    let catalog = sample_catalog();
    let outcome = select_meal_plan(1800.0, &sample_shares(), &catalog);

    let mut seen = HashSet::new();
    for entry in &outcome.entries {
        assert!(
            seen.insert(entry.dish_name.to_lowercase()),
            "Dish '{}' appeared twice in the weekly plan",
            entry.dish_name
        );
    }
}

#[test]
fn test_selected_dishes_respect_calorie_ceiling() {
    let catalog = sample_catalog();
    let shares = sample_shares();
    let calorie_target = 1800.0;

    let outcome = select_meal_plan(calorie_target, &shares, &catalog);
    assert!(!outcome.entries.is_empty());

    let share_total: f64 = shares.iter().map(|s| s.percent).sum();
    for entry in &outcome.entries {
        // Recover the slot target from the share whose key the entry's
        // category contains.
        let share = shares
            .iter()
            .find(|s| {
                entry
                    .category
                    .to_lowercase()
                    .contains(&s.category.to_lowercase())
            })
            .expect("entry category should match a share");

        let slot_target = calorie_target * (share.percent / share_total * 100.0) / 100.0;
        assert!(
            entry.calories <= slot_target * CALORIE_HEADROOM + 1e-9,
            "'{}' ({} cal) exceeds ceiling for {} ({} cal target)",
            entry.dish_name,
            entry.calories,
            entry.category,
            slot_target
        );
    }
}

#[test]
fn test_starvation_single_breakfast_dish() {
    // One breakfast dish; breakfast budget of 200 with a 240 ceiling fits
    // the dish every day, yet it may only be served once.
    let catalog = vec![Dish::new("Oats Porridge", "Breakfast", 200.0)];
    let shares = vec![MealShare::new("Breakfast", 100.0)];

    let outcome = select_meal_plan(200.0, &shares, &catalog);

    assert_eq!(outcome.entries.len(), 1);
    assert_eq!(outcome.entries[0].day, 1);
    assert_eq!(outcome.entries[0].dish_name, "Oats Porridge");
}

#[test]
fn test_empty_catalog_yields_empty_plan() {
    let outcome = select_meal_plan(2000.0, &sample_shares(), &[]);
    assert!(outcome.entries.is_empty());
    assert!(outcome.warnings.is_empty());
}

#[test]
fn test_snack_share_matches_snacks_category() {
    // Share key "Snack", dishes filed under "Snacks".
    let catalog = vec![
        Dish::new("Mixed Fruit Bowl", "Snacks", 150.0),
        Dish::new("Roasted Chana", "Snacks", 180.0),
    ];
    let shares = vec![MealShare::new("Snack", 100.0)];

    let outcome = select_meal_plan(160.0, &shares, &catalog);
    assert!(!outcome.entries.is_empty());
    assert_eq!(outcome.entries[0].category, "Snacks");
}

#[test]
fn test_unusable_shares_surface_warnings_not_errors() {
    let catalog = sample_catalog();
    let shares = vec![
        MealShare::new("Breakfast", 60.0),
        MealShare::new("Lunch", -5.0),
    ];

    let outcome = select_meal_plan(500.0, &shares, &catalog);

    assert_eq!(outcome.warnings.len(), 1);
    // Breakfast keeps planning with the remaining share.
    assert!(outcome.entries.iter().all(|e| e.category == "Breakfast"));
    assert!(!outcome.entries.is_empty());
}

#[test]
fn test_days_are_tagged_in_order() {
    let catalog = sample_catalog();
    let outcome = select_meal_plan(1800.0, &sample_shares(), &catalog);

    let days: Vec<u32> = outcome.entries.iter().map(|e| e.day).collect();
    let mut sorted = days.clone();
    sorted.sort_unstable();
    assert_eq!(days, sorted, "Entries should be in day-major order");
    assert!(days.iter().all(|&d| (1..=7).contains(&d)));
}
