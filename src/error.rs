use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid catalog row {row}: {reason}")]
    InvalidFood { row: usize, reason: String },

    #[error("Catalog contains no foods")]
    EmptyCatalog,

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No feasible meal plan exists for these bounds")]
    NoFeasiblePlan,

    #[error("Meal plan computation failed: {0}")]
    Solver(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
