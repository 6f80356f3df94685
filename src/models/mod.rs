mod food;
mod plan;

pub use food::FoodItem;
pub use plan::{ConsumedServings, NutrientBounds, NutrientTotals, PlanResult, PlannedServing};
