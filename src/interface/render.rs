use crate::engine::{
    batch_figures, base_cost, ingredient_cost, price_scenario, CostMode, ScenarioPricing,
};
use crate::models::Recipe;
use crate::state::ProductSnapshot;

/// Display the recipe list with status and base cost.
pub fn display_recipe_list(snapshot: &ProductSnapshot, recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes loaded.");
        return;
    }

    let max_name_len = recipes.iter().map(|r| r.name.len()).max().unwrap_or(10);

    for recipe in recipes {
        let tag = if recipe.is_batch() { " [batch]" } else { "" };
        println!(
            "{:<width$}  {:<9}  base cost {:>10.2} USD{}",
            recipe.name,
            recipe.status.label(),
            base_cost(snapshot, recipe),
            tag,
            width = max_name_len
        );
    }
}

/// Display a per-ingredient cost breakdown for one recipe.
pub fn display_cost_breakdown(snapshot: &ProductSnapshot, recipe: &Recipe) {
    println!();
    println!("=== {} ===", recipe.name);
    println!();

    if recipe.ingredients.is_empty() {
        println!("No ingredients.");
        return;
    }

    let mode = if recipe.is_batch() {
        CostMode::Batch
    } else {
        CostMode::Standard
    };

    for (i, ing) in recipe.ingredients.iter().enumerate() {
        let name = snapshot
            .get(&ing.product_id)
            .map(|p| p.name.as_str())
            .unwrap_or("(unknown product)");
        let cost = ingredient_cost(snapshot, ing, mode);

        println!(
            "{:>3}. {:<24} x {:>10.2} = {:>10.2} USD",
            i + 1,
            name,
            ing.usage_weight,
            cost
        );
    }

    println!();
    println!("Base cost: {:.2} USD", base_cost(snapshot, recipe));
}

/// Display the scenario pricing table for one recipe.
pub fn display_scenarios(snapshot: &ProductSnapshot, recipe: &Recipe) {
    println!();
    println!("=== {} (scenarios) ===", recipe.name);
    println!();

    if recipe.scenarios.is_empty() {
        println!("No scenarios defined.");
        return;
    }

    let max_name_len = recipe
        .scenarios
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(10);

    println!(
        "{:<width$}  {:>8}  {:>10}  {:>10}  {:>8}",
        "scenario",
        "yield",
        "unit cost",
        "unit price",
        "margin",
        width = max_name_len
    );

    for scenario in &recipe.scenarios {
        let pricing = price_scenario(snapshot, recipe, scenario);
        println!(
            "{:<width$}  {:>8.1}  {:>10.4}  {:>10.4}  {:>7.1}%",
            scenario.name,
            pricing.estimated_yield,
            pricing.unit_cost,
            pricing.unit_price,
            pricing.margin_percent,
            width = max_name_len
        );
    }
}

/// Rows for the CSV export of a scenario table.
pub fn scenario_rows(snapshot: &ProductSnapshot, recipe: &Recipe) -> Vec<(String, ScenarioPricing)> {
    recipe
        .scenarios
        .iter()
        .map(|s| (s.name.clone(), price_scenario(snapshot, recipe, s)))
        .collect()
}

/// Display the full batch ledger report.
pub fn display_batch_report(snapshot: &ProductSnapshot, recipe: &Recipe) {
    let Some(figures) = batch_figures(snapshot, recipe) else {
        println!("{} is not a livestock batch.", recipe.name);
        return;
    };

    println!();
    println!("=== {} (batch ledger, {}) ===", recipe.name, recipe.status.label());
    println!();
    println!("Chick investment:     {:>12.2} USD", figures.chicken_investment);
    println!("Feed investment:      {:>12.2} USD", figures.feed_investment);
    println!("Total batch cost:     {:>12.2} USD", figures.total_batch_cost);
    println!("Cost per chicken:     {:>12.2} USD", figures.cost_per_chicken);
    println!();
    println!("Starter feed needed:  {:>12.1} kg", figures.starter_feed_kg);
    println!("Fattening feed:       {:>12.1} kg", figures.fattening_feed_kg);
    println!();
    println!("At target weight:     {:>12.1} kg", figures.total_target_weight_kg);
    println!("Projected income:     {:>12.2} USD", figures.projected_income);
    println!("Projected profit:     {:>12.2} USD", figures.projected_profit);
    println!();
    println!("At current weight:    {:>12.1} kg", figures.total_current_weight_kg);
    println!("Current income:       {:>12.2} USD", figures.current_income);
    println!("Current profit:       {:>12.2} USD", figures.current_profit);

    let sales = &figures.sales;
    println!();
    println!("Sold:                 {:>12} heads", sales.quantity_sold);
    println!("Remaining:            {:>12} heads", sales.remaining_quantity);
    println!("Weight sold:          {:>12.1} kg", sales.weight_sold_kg);
    println!("Avg weight sold:      {:>12.2} kg", sales.avg_weight_kg);
    println!("Avg price:            {:>12.2} USD/kg", sales.avg_price_kg);
    println!("Realized income:      {:>12.2} USD", sales.realized_income);
    println!("Realized profit:      {:>12.2} USD", sales.realized_profit);
}
