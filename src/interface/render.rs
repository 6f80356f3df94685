use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::models::PlanResult;

/// The plan as display lines: one `Name: servings` line per recommended
/// food, then the four day totals. Values are printed unrounded.
pub fn plan_lines(plan: &PlanResult) -> Vec<String> {
    let mut lines: Vec<String> = plan
        .servings
        .iter()
        .map(|s| format!("{}: {}", s.name, s.servings))
        .collect();

    lines.push(format!("Total Calories: {}", plan.totals.calories));
    lines.push(format!("Total Protein: {} g", plan.totals.protein_g));
    lines.push(format!("Total Fat: {} g", plan.totals.fat_g));
    lines.push(format!("Total Carbohydrates: {} g", plan.totals.carbs_g));
    lines
}

/// Display a meal plan.
pub fn display_plan(plan: &PlanResult) {
    println!();
    println!("=== Meal Plan ===");
    println!();

    if plan.is_empty() {
        println!("No additional servings recommended.");
    }

    for line in plan_lines(plan) {
        println!("{}", line);
    }

    println!();
    println!("Tastiness score: {:.2}", plan.tastiness_score);
    println!();
}

/// Display the catalog with the indices used to report consumed servings.
pub fn display_catalog(catalog: &FoodCatalog) {
    println!();
    println!("=== Food Catalog ({} items) ===", catalog.len());
    println!();

    let max_name_len = catalog
        .foods()
        .iter()
        .map(|f| f.name.len())
        .max()
        .unwrap_or(10);

    println!(
        "{:>4}  {:<width$}  {:>6}  {:>7}  {:>8}  {:>6}  {:>6}",
        "#",
        "Name",
        "Taste",
        "Cal",
        "Protein",
        "Fat",
        "Carbs",
        width = max_name_len
    );

    for (index, food) in catalog.iter() {
        println!(
            "{:>4}  {:<width$}  {:>6.1}  {:>7.0}  {:>7.1}g  {:>5.1}g  {:>5.1}g",
            index,
            food.name,
            food.tastiness,
            food.calories,
            food.protein_g,
            food.fat_g,
            food.carbs_g,
            width = max_name_len
        );
    }

    println!();
}

pub fn plan_json(plan: &PlanResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

pub fn catalog_json(catalog: &FoodCatalog) -> Result<String> {
    Ok(serde_json::to_string_pretty(catalog.foods())?)
}
