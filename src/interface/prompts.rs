use dialoguer::{Confirm, Input, Select};

use crate::catalog::FoodCatalog;
use crate::error::{PlannerError, Result};
use crate::models::{ConsumedServings, NutrientBounds};

/// Prompt for a number with a default.
pub fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))?;

    if !value.is_finite() {
        return Err(PlannerError::InvalidInput("Invalid number".to_string()));
    }
    Ok(value)
}

/// Prompt for the daily calorie limit and macro windows.
pub fn prompt_bounds() -> Result<NutrientBounds> {
    let calorie_limit = prompt_number("Daily calorie limit", 2000.0)?;
    let protein_min = prompt_number("Minimum protein (g)", 50.0)?;
    let protein_max = prompt_number("Maximum protein (g)", 150.0)?;
    let carb_min = prompt_number("Minimum carbohydrates (g)", 100.0)?;
    let carb_max = prompt_number("Maximum carbohydrates (g)", 300.0)?;
    let fat_min = prompt_number("Minimum fat (g)", 30.0)?;
    let fat_max = prompt_number("Maximum fat (g)", 80.0)?;

    Ok(NutrientBounds {
        calorie_limit,
        protein_min,
        protein_max,
        carb_min,
        carb_max,
        fat_min,
        fat_max,
    })
}

/// Ask which food the user meant, resolving exact then fuzzy matches.
fn prompt_food_choice(catalog: &FoodCatalog, input: &str) -> Result<Option<usize>> {
    if let Ok(index) = input.parse::<usize>() {
        if catalog.get(index).is_some() {
            return Ok(Some(index));
        }
    }

    let wanted = input.to_lowercase();
    if let Some((index, _)) = catalog.iter().find(|(_, f)| f.key() == wanted) {
        return Ok(Some(index));
    }

    let candidates = catalog.fuzzy_candidates(input);

    if candidates.is_empty() {
        println!("No matching food found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let index = candidates[0].0;
        let name = &catalog.foods()[index].name;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", name))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(index));
    }

    let options: Vec<usize> = candidates.iter().take(5).map(|(i, _)| *i).collect();
    let mut labels: Vec<String> = options
        .iter()
        .map(|i| catalog.foods()[*i].name.clone())
        .collect();
    labels.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options.get(selection).copied())
}

/// Prompt for the foods already eaten today and how many servings of each.
pub fn prompt_consumed(catalog: &FoodCatalog) -> Result<ConsumedServings> {
    let mut consumed = ConsumedServings::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Food already eaten (name or #, Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let Some(index) = prompt_food_choice(catalog, input)? else {
            continue;
        };

        let name = &catalog.foods()[index].name;
        let servings = prompt_number(&format!("Servings of {} eaten", name), 1.0)?;
        match consumed.set(index, servings) {
            Ok(()) => println!("Recorded: {} x {}", name, servings),
            Err(e) => println!("{}", e),
        }
    }

    Ok(consumed)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
