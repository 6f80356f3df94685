use std::io::Read;

use clap::Parser;
use log::LevelFilter;

use meal_plan_optimizer::catalog::load_catalog;
use meal_plan_optimizer::cli::{Cli, Command};
use meal_plan_optimizer::error::Result;
use meal_plan_optimizer::interface::{
    catalog_json, display_catalog, display_plan, parse_consumed_entries, parse_form, plan_json,
    prompt_bounds, prompt_consumed, prompt_yes_no,
};
use meal_plan_optimizer::models::{ConsumedServings, NutrientBounds};
use meal_plan_optimizer::planner::{MealPlanner, PlannerConfig};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = PlannerConfig::new(cli.max_servings, cli.zero_epsilon)?;
    let catalog = load_catalog(&cli.catalog)?;
    let planner = MealPlanner::new(catalog, config)?;

    match cli.command.unwrap_or_default() {
        Command::Catalog { json } => cmd_catalog(&planner, json),
        Command::Plan {
            bounds,
            consumed,
            json,
        } => {
            let consumed = parse_consumed_entries(planner.catalog(), &consumed)?;
            cmd_plan(&planner, &consumed, &bounds.into(), json)
        }
        Command::Calculate { form, json } => cmd_calculate(&planner, form, json),
        Command::Interactive => cmd_interactive(&planner),
    }
}

/// Show the catalog.
fn cmd_catalog(planner: &MealPlanner, json: bool) -> Result<()> {
    if json {
        println!("{}", catalog_json(planner.catalog())?);
    } else {
        display_catalog(planner.catalog());
    }
    Ok(())
}

/// Optimize and print one plan.
fn cmd_plan(
    planner: &MealPlanner,
    consumed: &ConsumedServings,
    bounds: &NutrientBounds,
    json: bool,
) -> Result<()> {
    let plan = planner.optimize(consumed, bounds)?;

    if json {
        println!("{}", plan_json(&plan)?);
    } else {
        display_plan(&plan);
    }
    Ok(())
}

/// Handle a form-encoded planning request.
fn cmd_calculate(planner: &MealPlanner, form: Option<String>, json: bool) -> Result<()> {
    let body = match form {
        Some(body) => body,
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            body
        }
    };

    let request = parse_form(&body, planner.catalog().len())?;
    cmd_plan(planner, &request.consumed, &request.bounds, json)
}

/// Prompt for consumed foods and bounds, then plan; repeat on request.
fn cmd_interactive(planner: &MealPlanner) -> Result<()> {
    display_catalog(planner.catalog());
    let consumed = prompt_consumed(planner.catalog())?;

    loop {
        let bounds = prompt_bounds()?;

        match planner.optimize(&consumed, &bounds) {
            Ok(plan) => display_plan(&plan),
            Err(e) => eprintln!("Error: {}", e),
        }

        if !prompt_yes_no("Try different bounds?", false)? {
            break;
        }
    }

    Ok(())
}
