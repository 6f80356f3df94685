use crate::catalog::FoodCatalog;
use crate::error::{PlannerError, Result};
use crate::models::{ConsumedServings, FoodItem, NutrientBounds, NutrientTotals};
use crate::planner::solver::LinearProgram;

/// Sum the nutrients of everything already eaten.
pub fn consumed_totals(catalog: &FoodCatalog, consumed: &ConsumedServings) -> Result<NutrientTotals> {
    let mut totals = NutrientTotals::default();
    for (index, servings) in consumed.iter() {
        let food = catalog.get(index).ok_or_else(|| {
            PlannerError::InvalidInput(format!(
                "consumed food index {} is out of range (catalog has {} foods)",
                index,
                catalog.len()
            ))
        })?;
        totals.add_servings(food, servings);
    }
    Ok(totals)
}

fn column(foods: &[FoodItem], value: impl Fn(&FoodItem) -> f64) -> Vec<f64> {
    foods.iter().map(value).collect()
}

fn negated(row: &[f64]) -> Vec<f64> {
    row.iter().map(|v| -v).collect()
}

/// Translate the bounds into `minimize -tastiness · x` subject to `A·x <= b`.
///
/// Row layout: calories, fat max, fat min, carbs max, carbs min, protein max,
/// protein min, then one `x_i <= max_servings` row per food, then one
/// `-x_i <= 0` row per food. The same serving range is also set on each
/// variable.
pub fn build_program(
    catalog: &FoodCatalog,
    consumed: &NutrientTotals,
    bounds: &NutrientBounds,
    max_servings: f64,
) -> LinearProgram {
    let foods = catalog.foods();
    let n = foods.len();

    let mut program = LinearProgram::new(column(foods, |f| -f.tastiness));
    program.bound_all(0.0, max_servings);

    program.push_le(
        column(foods, |f| f.calories),
        bounds.calorie_limit - consumed.calories,
    );

    let macros = [
        (column(foods, |f| f.fat_g), bounds.fat_max, bounds.fat_min, consumed.fat_g),
        (column(foods, |f| f.carbs_g), bounds.carb_max, bounds.carb_min, consumed.carbs_g),
        (column(foods, |f| f.protein_g), bounds.protein_max, bounds.protein_min, consumed.protein_g),
    ];
    for (row, max, min, eaten) in macros {
        let lower = negated(&row);
        program.push_le(row, max - eaten);
        program.push_le(lower, -min + eaten);
    }

    for i in 0..n {
        let mut row = vec![0.0; n];
        row[i] = 1.0;
        program.push_le(row, max_servings);
    }

    for i in 0..n {
        let mut row = vec![0.0; n];
        row[i] = -1.0;
        program.push_le(row, 0.0);
    }

    program
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::constants::NUTRIENT_ROW_COUNT;

    fn sample_catalog() -> FoodCatalog {
        FoodCatalog::new(vec![
            FoodItem {
                name: "Eggs".to_string(),
                tastiness: 6.0,
                calories: 150.0,
                protein_g: 12.0,
                fat_g: 10.0,
                carbs_g: 1.0,
            },
            FoodItem {
                name: "Bagel".to_string(),
                tastiness: 4.0,
                calories: 280.0,
                protein_g: 10.0,
                fat_g: 2.0,
                carbs_g: 55.0,
            },
        ])
        .unwrap()
    }

    fn sample_bounds() -> NutrientBounds {
        NutrientBounds {
            calorie_limit: 2000.0,
            protein_min: 50.0,
            protein_max: 150.0,
            carb_min: 100.0,
            carb_max: 300.0,
            fat_min: 30.0,
            fat_max: 80.0,
        }
    }

    #[test]
    fn test_consumed_totals() {
        let catalog = sample_catalog();
        let mut consumed = ConsumedServings::new();
        consumed.set(0, 2.0).unwrap();
        consumed.set(1, 0.5).unwrap();

        let totals = consumed_totals(&catalog, &consumed).unwrap();
        assert!((totals.calories - 440.0).abs() < 1e-9);
        assert!((totals.protein_g - 29.0).abs() < 1e-9);
        assert!((totals.fat_g - 21.0).abs() < 1e-9);
        assert!((totals.carbs_g - 29.5).abs() < 1e-9);
    }

    #[test]
    fn test_consumed_out_of_range() {
        let catalog = sample_catalog();
        let mut consumed = ConsumedServings::new();
        consumed.set(5, 1.0).unwrap();
        assert!(matches!(
            consumed_totals(&catalog, &consumed),
            Err(PlannerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_program_shape() {
        let catalog = sample_catalog();
        let program = build_program(&catalog, &NutrientTotals::default(), &sample_bounds(), 3.0);

        assert_eq!(program.num_vars(), 2);
        assert_eq!(program.num_constraints(), NUTRIENT_ROW_COUNT + 4);
        assert_eq!(program.objective, vec![-6.0, -4.0]);
        assert_eq!(program.rows[0], vec![150.0, 280.0]);
        assert_eq!(program.rhs[0], 2000.0);
        assert_eq!(program.rows[NUTRIENT_ROW_COUNT], vec![1.0, 0.0]);
        assert_eq!(program.rhs[NUTRIENT_ROW_COUNT + 1], 3.0);
        assert_eq!(program.rows[NUTRIENT_ROW_COUNT + 3], vec![0.0, -1.0]);
        assert_eq!(program.rhs[NUTRIENT_ROW_COUNT + 3], 0.0);
        assert_eq!(program.var_bounds, vec![(0.0, 3.0), (0.0, 3.0)]);
    }

    #[test]
    fn test_program_subtracts_consumed() {
        let catalog = sample_catalog();
        let consumed = NutrientTotals {
            calories: 500.0,
            protein_g: 20.0,
            fat_g: 10.0,
            carbs_g: 40.0,
        };
        let program = build_program(&catalog, &consumed, &sample_bounds(), 3.0);

        assert_eq!(
            &program.rhs[..NUTRIENT_ROW_COUNT],
            &[1500.0, 70.0, -20.0, 260.0, -60.0, 130.0, -30.0]
        );
        assert_eq!(program.rows[1], vec![10.0, 2.0]);
        assert_eq!(program.rows[2], vec![-10.0, -2.0]);
    }
}
