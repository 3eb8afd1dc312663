use crate::models::DailyPlanEntry;
use crate::planner::MetabolicEstimate;

/// Display the metabolic estimate block.
pub fn display_estimate(estimate: &MetabolicEstimate) {
    println!();
    println!("=== Your Metabolic Estimate ===");
    println!();
    println!("BMI:            {:>7.1} ({})", estimate.bmi, estimate.bmi_category.label());
    println!("BMR:            {:>7.0} kcal", estimate.bmr);
    println!("TDEE:           {:>7.0} kcal", estimate.tdee);
    println!("Calorie target: {:>7.0} kcal/day", estimate.calorie_target);
    println!();
}

/// Display the weekly plan grouped by day.
pub fn display_week_plan(entries: &[DailyPlanEntry]) {
    if entries.is_empty() {
        println!("No meal plan generated (no dish fits the calorie budgets).");
        return;
    }

    println!();
    println!("=== 7-Day Meal Plan ===");

    let max_name_len = entries.iter().map(|e| e.dish_name.len()).max().unwrap_or(10);
    let max_cat_len = entries.iter().map(|e| e.category.len()).max().unwrap_or(8);

    let mut current_day = 0;
    for entry in entries {
        if entry.day != current_day {
            current_day = entry.day;
            println!();
            println!("--- Day {} ---", current_day);
        }

        println!(
            "  {:<cat_width$}  {:<name_width$}  {:>5.0} cal",
            entry.category,
            entry.dish_name,
            entry.calories,
            cat_width = max_cat_len,
            name_width = max_name_len
        );
    }

    let total_calories: f64 = entries.iter().map(|e| e.calories).sum();
    let days_covered: std::collections::HashSet<u32> = entries.iter().map(|e| e.day).collect();

    println!();
    println!("--- Summary ---");
    println!("Meals planned: {}", entries.len());
    println!("Days with at least one meal: {}", days_covered.len());
    println!("Total calories over the week: {:.0}", total_calories);
    println!();
}

/// Display the advisory text block.
pub fn display_advice(advice: &str) {
    println!();
    println!("=== Coaching Advice ===");
    println!();
    println!("{}", advice);
    println!();
}

/// Write non-fatal warnings to stderr.
pub fn display_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }
}
