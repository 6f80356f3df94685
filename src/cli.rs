use clap::{Args, Parser, Subcommand};

use crate::models::NutrientBounds;
use crate::planner::{DEFAULT_MAX_SERVINGS, DEFAULT_ZERO_EPSILON};

/// Meal plan optimizer: picks the tastiest extra servings that keep the day
/// within calorie and macro-nutrient bounds.
#[derive(Parser, Debug)]
#[command(name = "meal_plan_optimizer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog CSV file.
    #[arg(short, long, default_value = "data/meals.csv", global = true)]
    pub catalog: String,

    /// Maximum additional servings of any one food.
    #[arg(long, default_value_t = DEFAULT_MAX_SERVINGS, global = true)]
    pub max_servings: f64,

    /// Solver values at or below this magnitude count as zero servings.
    #[arg(long, default_value_t = DEFAULT_ZERO_EPSILON, global = true)]
    pub zero_epsilon: f64,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the food catalog with the indices used for consumed servings.
    Catalog {
        /// Print the catalog as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Compute a plan from bound flags and consumed servings.
    Plan {
        #[command(flatten)]
        bounds: BoundsArgs,

        /// Food already eaten, as <index|name>=<servings>. Repeatable.
        #[arg(long = "consumed", value_name = "FOOD=SERVINGS")]
        consumed: Vec<String>,

        /// Print the plan as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Compute a plan from a form-encoded request body
    /// (meal_<i>=<servings>&calorie_limit=...).
    Calculate {
        /// Request body; read from stdin when omitted.
        #[arg(long)]
        form: Option<String>,

        /// Print the plan as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Enter consumed foods and bounds interactively.
    Interactive,
}

impl Default for Command {
    fn default() -> Self {
        Command::Catalog { json: false }
    }
}

/// The seven daily bounds as command-line flags.
#[derive(Args, Debug, Clone)]
pub struct BoundsArgs {
    /// Upper limit on total calories for the day.
    #[arg(long)]
    pub calorie_limit: f64,

    /// Minimum total protein (g).
    #[arg(long)]
    pub protein_min: f64,

    /// Maximum total protein (g).
    #[arg(long)]
    pub protein_max: f64,

    /// Minimum total carbohydrates (g).
    #[arg(long)]
    pub carb_min: f64,

    /// Maximum total carbohydrates (g).
    #[arg(long)]
    pub carb_max: f64,

    /// Minimum total fat (g).
    #[arg(long)]
    pub fat_min: f64,

    /// Maximum total fat (g).
    #[arg(long)]
    pub fat_max: f64,
}

impl From<BoundsArgs> for NutrientBounds {
    fn from(args: BoundsArgs) -> Self {
        NutrientBounds {
            calorie_limit: args.calorie_limit,
            protein_min: args.protein_min,
            protein_max: args.protein_max,
            carb_min: args.carb_min,
            carb_max: args.carb_max,
            fat_min: args.fat_min,
            fat_max: args.fat_max,
        }
    }
}
