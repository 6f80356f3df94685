mod food_catalog;
mod loader;

pub use food_catalog::{FoodCatalog, FUZZY_MATCH_THRESHOLD};
pub use loader::load_catalog;
