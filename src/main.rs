use clap::Parser;
use std::path::Path;

use production_coster_rs::cli::{Cli, Command};
use production_coster_rs::error::{CostError, Result};
use production_coster_rs::interface::{
    display_batch_report, display_cost_breakdown, display_recipe_list, display_scenarios,
    prompt_sale_record, prompt_yes_no, resolve_recipe, scenario_rows, write_scenario_csv,
};
use production_coster_rs::models::{Recipe, RecipeStatus};
use production_coster_rs::state::{load_products, load_recipes, save_recipes, ProductSnapshot};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let (snapshot, recipes) = load_state(&cli.products, &cli.recipes, cli.rate)?;

    match command {
        Command::List => {
            display_recipe_list(&snapshot, &recipes);
            Ok(())
        }
        Command::Cost { recipe } => {
            let recipe = resolve_recipe(&recipes, &recipe)?;
            display_cost_breakdown(&snapshot, recipe);
            Ok(())
        }
        Command::Scenarios { recipe } => {
            let recipe = resolve_recipe(&recipes, &recipe)?;
            display_scenarios(&snapshot, recipe);
            Ok(())
        }
        Command::Batch { recipe } => {
            let recipe = resolve_recipe(&recipes, &recipe)?;
            display_batch_report(&snapshot, recipe);
            Ok(())
        }
        Command::RecordSale { recipe } => cmd_record_sale(&cli.recipes, &snapshot, recipes, &recipe),
        Command::Export { recipe, out } => {
            let recipe = resolve_recipe(&recipes, &recipe)?;
            let rows = scenario_rows(&snapshot, recipe);
            write_scenario_csv(&rows, Path::new(&out))?;
            println!("Wrote {} scenario rows to {}", rows.len(), out);
            Ok(())
        }
    }
}

fn load_state(
    products_path: &str,
    recipes_path: &str,
    rate: f64,
) -> Result<(ProductSnapshot, Vec<Recipe>)> {
    let products = load_products(products_path)?;
    let recipes = load_recipes(recipes_path)?;
    println!("Loaded {} products, {} recipes", products.len(), recipes.len());
    Ok((ProductSnapshot::new(products, rate), recipes))
}

/// Append a sale record to a batch and save the recipes file.
fn cmd_record_sale(
    recipes_path: &str,
    snapshot: &ProductSnapshot,
    mut recipes: Vec<Recipe>,
    name: &str,
) -> Result<()> {
    let target = resolve_recipe(&recipes, name)?;
    let target_id = target.id.clone();
    let target_name = target.name.clone();

    if !target.is_batch() {
        return Err(CostError::NotABatch(target_name));
    }
    if target.status != RecipeStatus::Active {
        return Err(CostError::InvalidInput(format!(
            "{} is {}, sales can only be recorded on active batches",
            target_name,
            target.status.label()
        )));
    }

    let sale = prompt_sale_record()?;
    println!(
        "Sale: {} heads, {:.1} kg at {:.2} USD/kg",
        sale.quantity, sale.total_weight_kg, sale.price_per_kg
    );

    if !prompt_yes_no("Record this sale?", true)? {
        println!("Discarded.");
        return Ok(());
    }

    let recipe = recipes
        .iter_mut()
        .find(|r| r.id == target_id)
        .ok_or_else(|| CostError::RecipeNotFound(target_name.clone()))?;
    if let Some(data) = recipe.chicken_data.as_mut() {
        data.sales.push(sale);
    }

    save_recipes(recipes_path, &recipes)?;
    println!("Sale recorded.");

    let recipe = recipes
        .iter()
        .find(|r| r.id == target_id)
        .ok_or_else(|| CostError::RecipeNotFound(target_name))?;
    display_batch_report(snapshot, recipe);
    Ok(())
}
