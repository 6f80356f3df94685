use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::FoodItem;

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.85;

/// The fixed, index-stable list of foods a plan is built from.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    foods: Vec<FoodItem>,
}

impl FoodCatalog {
    /// Build a catalog, rejecting empty lists and invalid rows.
    pub fn new(foods: Vec<FoodItem>) -> Result<Self> {
        if foods.is_empty() {
            return Err(PlannerError::EmptyCatalog);
        }

        for (row, food) in foods.iter().enumerate() {
            if let Some(reason) = food.validation_error() {
                return Err(PlannerError::InvalidFood { row, reason });
            }
        }

        Ok(Self { foods })
    }

    pub fn get(&self, index: usize) -> Option<&FoodItem> {
        self.foods.get(index)
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &FoodItem)> {
        self.foods.iter().enumerate()
    }

    /// Find a food index by name: case-insensitive exact match first, then a
    /// single fuzzy candidate above [`FUZZY_MATCH_THRESHOLD`].
    pub fn find_by_name(&self, name: &str) -> Result<usize> {
        let wanted = name.trim().to_lowercase();

        if let Some(index) = self.foods.iter().position(|f| f.key() == wanted) {
            return Ok(index);
        }

        let candidates = self.fuzzy_candidates(&wanted);
        match candidates.as_slice() {
            [(index, _)] => Ok(*index),
            [] => Err(PlannerError::FoodNotFound(name.to_string())),
            _ => {
                let names: Vec<&str> = candidates
                    .iter()
                    .take(5)
                    .map(|(i, _)| self.foods[*i].name.as_str())
                    .collect();
                Err(PlannerError::InvalidInput(format!(
                    "'{}' is ambiguous, did you mean one of: {}",
                    name,
                    names.join(", ")
                )))
            }
        }
    }

    /// Fuzzy matches for `name`, best first.
    pub fn fuzzy_candidates(&self, name: &str) -> Vec<(usize, f64)> {
        let wanted = name.trim().to_lowercase();
        let mut candidates: Vec<(usize, f64)> = self
            .foods
            .iter()
            .enumerate()
            .map(|(i, f)| (i, jaro_winkler(&f.key(), &wanted)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates
    }

    /// Resolve a food reference given either as a catalog index or a name.
    pub fn resolve(&self, reference: &str) -> Result<usize> {
        match reference.trim().parse::<usize>() {
            Ok(index) if index < self.foods.len() => Ok(index),
            Ok(index) => Err(PlannerError::InvalidInput(format!(
                "food index {} is out of range (catalog has {} foods)",
                index,
                self.foods.len()
            ))),
            Err(_) => self.find_by_name(reference),
        }
    }

    /// Count of foods in the catalog.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Always false for a constructed catalog; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
