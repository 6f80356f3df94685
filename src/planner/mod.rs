pub mod config;
pub mod constants;
pub mod formulation;
pub mod optimizer;
pub mod solver;

pub use config::PlannerConfig;
pub use constants::*;
pub use formulation::{build_program, consumed_totals};
pub use optimizer::MealPlanner;
pub use solver::{LinearProgram, LpSolver, SimplexSolver, SolveError};
