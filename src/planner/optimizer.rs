use log::{debug, error, info};

use crate::catalog::FoodCatalog;
use crate::error::{PlannerError, Result};
use crate::models::{ConsumedServings, NutrientBounds, PlanResult, PlannedServing};
use crate::planner::config::PlannerConfig;
use crate::planner::formulation::{build_program, consumed_totals};
use crate::planner::solver::{LpSolver, SimplexSolver, SolveError};

/// Owns the catalog and settings; built once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct MealPlanner<S = SimplexSolver> {
    catalog: FoodCatalog,
    config: PlannerConfig,
    solver: S,
}

impl MealPlanner<SimplexSolver> {
    pub fn new(catalog: FoodCatalog, config: PlannerConfig) -> Result<Self> {
        Self::with_solver(catalog, config, SimplexSolver)
    }
}

impl<S: LpSolver> MealPlanner<S> {
    pub fn with_solver(catalog: FoodCatalog, config: PlannerConfig, solver: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            catalog,
            config,
            solver,
        })
    }

    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Find the additional servings that maximize tastiness within the bounds.
    ///
    /// Returns [`PlannerError::NoFeasiblePlan`] when no choice of servings can
    /// satisfy every bound given what was already eaten.
    pub fn optimize(&self, consumed: &ConsumedServings, bounds: &NutrientBounds) -> Result<PlanResult> {
        bounds.validate()?;
        let eaten = consumed_totals(&self.catalog, consumed)?;

        let program = build_program(&self.catalog, &eaten, bounds, self.config.max_servings);
        debug!(
            "Solving for {} foods, {} constraints; consumed {:.1} cal, P:{:.1} F:{:.1} C:{:.1}",
            program.num_vars(),
            program.num_constraints(),
            eaten.calories,
            eaten.protein_g,
            eaten.fat_g,
            eaten.carbs_g
        );

        let values = match self.solver.minimize(&program) {
            Ok(values) => values,
            Err(SolveError::Infeasible) => {
                info!("No feasible plan for bounds {:?}", bounds);
                return Err(PlannerError::NoFeasiblePlan);
            }
            Err(e) => {
                error!("Solver failed: {}", e);
                return Err(PlannerError::Solver(e.to_string()));
            }
        };

        if values.len() != self.catalog.len() {
            error!(
                "Solver returned {} values for {} foods",
                values.len(),
                self.catalog.len()
            );
            return Err(PlannerError::Solver(format!(
                "expected {} values, got {}",
                self.catalog.len(),
                values.len()
            )));
        }

        let mut servings = Vec::new();
        let mut totals = eaten;
        let mut tastiness_score = 0.0;

        for ((index, food), &value) in self.catalog.iter().zip(&values) {
            if !self.config.is_recommended(value) {
                continue;
            }

            totals.add_servings(food, value);
            tastiness_score += food.tastiness * value;
            servings.push(PlannedServing {
                index,
                name: food.name.clone(),
                servings: value,
            });
        }

        debug!(
            "Plan has {} foods, tastiness {:.2}, total {:.1} cal",
            servings.len(),
            tastiness_score,
            totals.calories
        );

        Ok(PlanResult {
            servings,
            consumed: eaten,
            totals,
            tastiness_score,
        })
    }
}
