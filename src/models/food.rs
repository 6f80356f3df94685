use serde::{Deserialize, Serialize};

/// A catalog row: one serving of a meal and its nutritional values.
///
/// Field names on the wire follow the catalog CSV headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Tastiness Index")]
    pub tastiness: f64,

    #[serde(rename = "Total Calories")]
    pub calories: f64,

    #[serde(rename = "Protein (g)")]
    pub protein_g: f64,

    #[serde(rename = "Fat (g)")]
    pub fat_g: f64,

    #[serde(rename = "Carbs (g)")]
    pub carbs_g: f64,
}

impl FoodItem {
    /// Describe why this row cannot be part of a catalog, if anything.
    pub fn validation_error(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("name is empty".to_string());
        }
        if !self.tastiness.is_finite() {
            return Some(format!("tastiness of '{}' is not a finite number", self.name));
        }

        let nutrients = [
            ("calories", self.calories),
            ("protein", self.protein_g),
            ("fat", self.fat_g),
            ("carbs", self.carbs_g),
        ];
        nutrients
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
            .map(|(label, value)| format!("{} of '{}' is invalid: {}", label, self.name, value))
    }

    /// Basic validation: non-empty name, finite tastiness, non-negative nutrients.
    pub fn is_valid(&self) -> bool {
        self.validation_error().is_none()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} cal, P:{} F:{} C:{}, taste:{}",
            self.name, self.calories, self.protein_g, self.fat_g, self.carbs_g, self.tastiness
        )
    }

    /// Canonical key for lookups (lowercase, trimmed name).
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> FoodItem {
        FoodItem {
            name: "Oatmeal".to_string(),
            tastiness: 4.0,
            calories: 150.0,
            protein_g: 5.0,
            fat_g: 3.0,
            carbs_g: 27.0,
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_food().is_valid());

        let mut negative = sample_food();
        negative.fat_g = -1.0;
        assert!(!negative.is_valid());

        let mut unnamed = sample_food();
        unnamed.name = "   ".to_string();
        assert!(!unnamed.is_valid());

        let mut nan = sample_food();
        nan.calories = f64::NAN;
        assert!(!nan.is_valid());
    }

    #[test]
    fn test_negative_tastiness_is_allowed() {
        let mut food = sample_food();
        food.tastiness = -2.0;
        assert!(food.is_valid());
    }

    #[test]
    fn test_validation_error_names_field() {
        let mut food = sample_food();
        food.carbs_g = -5.0;
        let reason = food.validation_error().unwrap();
        assert!(reason.contains("carbs"), "unexpected reason: {}", reason);
    }

    #[test]
    fn test_key_is_case_insensitive() {
        let mut food = sample_food();
        food.name = " OATMEAL ".to_string();
        assert_eq!(food.key(), "oatmeal");
    }
}
