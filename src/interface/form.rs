use std::collections::HashMap;

use url::form_urlencoded;

use crate::catalog::FoodCatalog;
use crate::error::{PlannerError, Result};
use crate::models::{ConsumedServings, NutrientBounds};

/// Prefix of the per-food consumed-servings fields (`meal_0`, `meal_1`, ...).
pub const MEAL_FIELD_PREFIX: &str = "meal_";

/// A validated planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub consumed: ConsumedServings,
    pub bounds: NutrientBounds,
}

fn parse_number(field: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        PlannerError::InvalidInput(format!("{} must be a number, got '{}'", field, raw))
    })?;

    if !value.is_finite() {
        return Err(PlannerError::InvalidInput(format!(
            "{} must be a finite number, got '{}'",
            field, raw
        )));
    }
    Ok(value)
}

fn required(fields: &HashMap<String, String>, name: &str) -> Result<f64> {
    match fields.get(name) {
        Some(raw) if !raw.trim().is_empty() => parse_number(name, raw),
        _ => Err(PlannerError::MissingField(name.to_string())),
    }
}

/// Decode an `application/x-www-form-urlencoded` planning request.
///
/// `meal_<i>` fields are optional and default to zero servings; the seven
/// bound fields are required. Unknown fields are ignored.
pub fn parse_form(body: &str, catalog_len: usize) -> Result<PlanRequest> {
    let fields: HashMap<String, String> = form_urlencoded::parse(body.trim().as_bytes())
        .into_owned()
        .collect();

    let mut consumed = ConsumedServings::new();
    for index in 0..catalog_len {
        let field = format!("{}{}", MEAL_FIELD_PREFIX, index);
        match fields.get(&field) {
            Some(raw) if !raw.trim().is_empty() => {
                let servings = parse_number(&field, raw)?;
                consumed.set(index, servings)?;
            }
            _ => {}
        }
    }

    let bounds = NutrientBounds {
        calorie_limit: required(&fields, "calorie_limit")?,
        protein_min: required(&fields, "protein_min")?,
        protein_max: required(&fields, "protein_max")?,
        carb_min: required(&fields, "carb_min")?,
        carb_max: required(&fields, "carb_max")?,
        fat_min: required(&fields, "fat_min")?,
        fat_max: required(&fields, "fat_max")?,
    };

    Ok(PlanRequest { consumed, bounds })
}

/// Parse a `<index|name>=<servings>` entry against the catalog.
pub fn parse_consumed_entry(catalog: &FoodCatalog, entry: &str) -> Result<(usize, f64)> {
    let (reference, servings) = entry.rsplit_once('=').ok_or_else(|| {
        PlannerError::InvalidInput(format!(
            "expected <food>=<servings>, got '{}'",
            entry
        ))
    })?;

    let index = catalog.resolve(reference)?;
    let servings = parse_number(reference.trim(), servings)?;
    Ok((index, servings))
}

/// Collect repeated `<index|name>=<servings>` entries; later entries for the
/// same food replace earlier ones.
pub fn parse_consumed_entries(catalog: &FoodCatalog, entries: &[String]) -> Result<ConsumedServings> {
    let mut consumed = ConsumedServings::new();
    for entry in entries {
        let (index, servings) = parse_consumed_entry(catalog, entry)?;
        consumed.set(index, servings)?;
    }
    Ok(consumed)
}
