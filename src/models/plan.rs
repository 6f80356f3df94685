use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::FoodItem;

/// Servings already eaten, keyed by catalog index.
///
/// Missing entries count as zero servings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumedServings {
    servings: BTreeMap<usize, f64>,
}

impl ConsumedServings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the servings eaten of one food, replacing any earlier value.
    pub fn set(&mut self, index: usize, servings: f64) -> Result<()> {
        if !servings.is_finite() || servings < 0.0 {
            return Err(PlannerError::InvalidInput(format!(
                "consumed servings for food {} must be a non-negative number, got {}",
                index, servings
            )));
        }

        if servings == 0.0 {
            self.servings.remove(&index);
        } else {
            self.servings.insert(index, servings);
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> f64 {
        self.servings.get(&index).copied().unwrap_or(0.0)
    }

    /// Non-zero entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.servings.iter().map(|(index, servings)| (*index, *servings))
    }

    pub fn len(&self) -> usize {
        self.servings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servings.is_empty()
    }
}

/// Daily calorie ceiling and macro-nutrient windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientBounds {
    pub calorie_limit: f64,
    pub protein_min: f64,
    pub protein_max: f64,
    pub carb_min: f64,
    pub carb_max: f64,
    pub fat_min: f64,
    pub fat_max: f64,
}

impl NutrientBounds {
    /// Reject non-finite values. Contradictory windows (min > max) are left
    /// for the optimizer to report as infeasible.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("calorie_limit", self.calorie_limit),
            ("protein_min", self.protein_min),
            ("protein_max", self.protein_max),
            ("carb_min", self.carb_min),
            ("carb_max", self.carb_max),
            ("fat_min", self.fat_min),
            ("fat_max", self.fat_max),
        ];

        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(PlannerError::InvalidInput(format!(
                "{} must be a finite number, got {}",
                name, value
            ))),
            None => Ok(()),
        }
    }
}

/// Calorie and macro-nutrient sums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

impl NutrientTotals {
    /// Add `servings` servings of `food`.
    pub fn add_servings(&mut self, food: &FoodItem, servings: f64) {
        self.calories += food.calories * servings;
        self.protein_g += food.protein_g * servings;
        self.fat_g += food.fat_g * servings;
        self.carbs_g += food.carbs_g * servings;
    }
}

/// One recommended line of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedServing {
    pub index: usize,
    pub name: String,
    pub servings: f64,
}

/// The optimal additional servings and the resulting day totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    /// Recommended foods in catalog order; foods with no servings are omitted.
    pub servings: Vec<PlannedServing>,

    /// Totals from consumed food alone.
    pub consumed: NutrientTotals,

    /// Consumed plus recommended totals.
    pub totals: NutrientTotals,

    /// Tastiness achieved by the recommended servings.
    pub tastiness_score: f64,
}

impl PlanResult {
    pub fn is_empty(&self) -> bool {
        self.servings.is_empty()
    }

    /// Recommended servings for one food, zero if it is not in the plan.
    pub fn servings_for(&self, index: usize) -> f64 {
        self.servings
            .iter()
            .find(|s| s.index == index)
            .map(|s| s.servings)
            .unwrap_or(0.0)
    }
}
