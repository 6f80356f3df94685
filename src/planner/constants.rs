/// Default ceiling on additional servings of any single food.
pub const DEFAULT_MAX_SERVINGS: f64 = 3.0;

/// Solver outputs with magnitude at or below this are treated as "not recommended".
pub const DEFAULT_ZERO_EPSILON: f64 = 1e-9;

/// Slack allowed when checking a constraint row that has no non-zero coefficients.
pub const EMPTY_ROW_TOLERANCE: f64 = 1e-9;

/// Number of nutrient rows (calories, fat max/min, carbs max/min, protein max/min)
/// that precede the per-food serving rows.
pub const NUTRIENT_ROW_COUNT: usize = 7;
