use clap::Parser;
use std::path::Path;

use meal_mentor_rs::advisor::{AdvisoryProvider, HttpAdvisor};
use meal_mentor_rs::catalog::{builtin_catalog, load_catalog, load_shares, validate_dishes};
use meal_mentor_rs::cli::{Cli, Command};
use meal_mentor_rs::error::Result;
use meal_mentor_rs::interface::{
    collect_user_profile, display_advice, display_estimate, display_warnings, display_week_plan,
    prompt_yes_no,
};
use meal_mentor_rs::models::{Dish, MealShare, UserProfile};
use meal_mentor_rs::planner::{default_shares, estimate_targets, select_meal_plan};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan => cmd_plan(&cli.file, cli.shares.as_deref()),
        Command::Estimate => cmd_estimate(),
        Command::Advise => cmd_advise(),
    }
}

/// Load the catalog file, or fall back to the built-in table.
fn load_dishes_or_builtin(file_path: &str) -> Result<Vec<Dish>> {
    let path = Path::new(file_path);

    if !path.exists() {
        println!("Catalog file not found: {}", file_path);
        println!("Using the built-in dish catalog.");
        return Ok(builtin_catalog());
    }

    let dishes = load_catalog(path)?;
    println!("Loaded {} dishes from {}", dishes.len(), file_path);
    Ok(dishes)
}

/// Load the shares file, or fall back to the default split.
fn load_shares_or_default(shares_path: Option<&str>) -> Result<Vec<MealShare>> {
    match shares_path {
        Some(path) => load_shares(path),
        None => Ok(default_shares()),
    }
}

/// Full flow: profile, estimate, weekly plan, optional advice.
fn cmd_plan(file_path: &str, shares_path: Option<&str>) -> Result<()> {
    let profile = collect_user_profile()?;

    let estimate = estimate_targets(&profile);
    display_estimate(&estimate);

    let dishes = load_dishes_or_builtin(file_path)?;
    let (dishes, catalog_warnings) = validate_dishes(dishes);
    display_warnings(&catalog_warnings);

    if dishes.is_empty() {
        println!("No usable dishes in the catalog. Nothing to plan.");
        return Ok(());
    }

    let shares = load_shares_or_default(shares_path)?;

    println!();
    println!(
        "Planning 7 days at {:.0} kcal/day across {} meal categories...",
        estimate.calorie_target,
        shares.len()
    );

    let outcome = select_meal_plan(estimate.calorie_target, &shares, &dishes);
    display_warnings(&outcome.warnings);
    display_week_plan(&outcome.entries);

    if prompt_yes_no("Request coaching advice from the advisory service?", false)? {
        request_advice(&profile);
    }

    Ok(())
}

/// Show the metabolic estimate only.
fn cmd_estimate() -> Result<()> {
    let profile = collect_user_profile()?;
    let estimate = estimate_targets(&profile);
    display_estimate(&estimate);
    Ok(())
}

/// Request coaching advice only.
fn cmd_advise() -> Result<()> {
    let profile = collect_user_profile()?;
    request_advice(&profile);
    Ok(())
}

/// Call the advisory service; failures degrade to a notice, never an exit.
fn request_advice(profile: &UserProfile) {
    let advice = HttpAdvisor::from_env().and_then(|advisor| advisor.generate_advice(profile));

    match advice {
        Ok(text) => display_advice(&text),
        Err(e) => {
            eprintln!("Advisory service unavailable: {}", e);
            println!("No recommendation text available.");
        }
    }
}
