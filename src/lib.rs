pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;

pub use catalog::{FoodCatalog, load_catalog};
pub use error::{PlannerError, Result};
pub use models::{ConsumedServings, FoodItem, NutrientBounds, PlanResult};
pub use planner::{MealPlanner, PlannerConfig};
