use clap::{Parser, Subcommand};

/// MealMentor — plans a week of meals against your metabolic calorie target.
#[derive(Parser, Debug)]
#[command(name = "meal_mentor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the dish catalog (JSON or CSV). Falls back to the built-in
    /// catalog when the file does not exist.
    #[arg(short, long, default_value = "dishes.json")]
    pub file: String,

    /// Path to a meal-share configuration JSON file.
    #[arg(long)]
    pub shares: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate calorie targets and generate a 7-day meal plan.
    Plan,

    /// Show the metabolic estimate only.
    Estimate,

    /// Request coaching advice from the advisory service.
    Advise,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}
