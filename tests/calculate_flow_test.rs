use std::io::Write;

use tempfile::NamedTempFile;

use meal_plan_optimizer::catalog::load_catalog;
use meal_plan_optimizer::error::PlannerError;
use meal_plan_optimizer::interface::{parse_consumed_entries, parse_form, plan_lines};
use meal_plan_optimizer::planner::{MealPlanner, PlannerConfig};

const CATALOG_CSV: &str = "\
Name,Tastiness Index,Total Calories,Protein (g),Fat (g),Carbs (g)
Oatmeal,4,150,5,3,27
Grilled Chicken,3,280,53,6,0
Chocolate Cake,9,450,5,22,60
Lentil Soup,5,300,18,4,48
";

const BOUNDS: &str = "calorie_limit=2000&protein_min=60&protein_max=200\
                      &carb_min=100&carb_max=250&fat_min=20&fat_max=70";

fn planner_from_csv(csv: &str) -> MealPlanner {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(csv.as_bytes()).unwrap();
    let catalog = load_catalog(file.path()).unwrap();
    MealPlanner::new(catalog, PlannerConfig::default()).unwrap()
}

#[test]
fn test_shipped_catalog_loads() {
    let catalog = load_catalog(concat!(env!("CARGO_MANIFEST_DIR"), "/data/meals.csv")).unwrap();
    assert!(catalog.len() >= 20);
    assert!(catalog.foods().iter().all(|f| f.is_valid()));
}

#[test]
fn test_form_request_to_rendered_lines() {
    let planner = planner_from_csv(CATALOG_CSV);
    let body = format!("meal_0=1&meal_3=&{}", BOUNDS);
    let request = parse_form(&body, planner.catalog().len()).unwrap();

    let plan = planner.optimize(&request.consumed, &request.bounds).unwrap();
    let lines = plan_lines(&plan);

    assert_eq!(lines.len(), plan.servings.len() + 4);
    for (line, serving) in lines.iter().zip(&plan.servings) {
        assert!(line.starts_with(&format!("{}: ", serving.name)), "bad line: {}", line);
    }
    assert!(lines[lines.len() - 4].starts_with("Total Calories: "));
    assert!(lines[lines.len() - 1].starts_with("Total Carbohydrates: "));

    assert!(plan.totals.calories <= 2000.0 + 1e-6);
    assert!(plan.consumed.calories > 149.0);
}

#[test]
fn test_cli_style_consumed_entries() {
    let planner = planner_from_csv(CATALOG_CSV);
    let entries = vec!["oatmeal=1".to_string(), "3=0.5".to_string()];
    let consumed = parse_consumed_entries(planner.catalog(), &entries).unwrap();

    assert_eq!(consumed.get(0), 1.0);
    assert_eq!(consumed.get(3), 0.5);

    let request = parse_form(BOUNDS, planner.catalog().len()).unwrap();
    let plan = planner.optimize(&consumed, &request.bounds).unwrap();
    assert!((plan.consumed.calories - 300.0).abs() < 1e-9);
}

#[test]
fn test_infeasible_request_yields_no_lines() {
    let planner = planner_from_csv(CATALOG_CSV);
    let body = BOUNDS.replace("protein_min=60", "protein_min=500");
    let request = parse_form(&body, planner.catalog().len()).unwrap();

    let err = planner
        .optimize(&request.consumed, &request.bounds)
        .unwrap_err();
    assert!(matches!(err, PlannerError::NoFeasiblePlan));
    assert_eq!(err.to_string(), "No feasible meal plan exists for these bounds");
}

#[test]
fn test_missing_field_rejected_before_optimizing() {
    let planner = planner_from_csv(CATALOG_CSV);
    let body = BOUNDS.replace("calorie_limit=2000&", "");

    let err = parse_form(&body, planner.catalog().len()).unwrap_err();
    assert_eq!(err.to_string(), "Missing required field: calorie_limit");
}

#[test]
fn test_malformed_catalog_is_fatal() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Name,Tastiness Index\nOatmeal,4\n").unwrap();
    assert!(load_catalog(file.path()).is_err());
}
