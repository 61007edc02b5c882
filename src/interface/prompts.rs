use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{CostError, Result};
use crate::models::{Recipe, SaleRecord};

/// Resolve a recipe by name: exact case-insensitive match first, then fuzzy
/// matching with confirmation.
pub fn resolve_recipe<'a>(recipes: &'a [Recipe], name: &str) -> Result<&'a Recipe> {
    let wanted = name.trim().to_lowercase();

    if let Some(recipe) = recipes.iter().find(|r| r.name.to_lowercase() == wanted) {
        return Ok(recipe);
    }

    // Try fuzzy matching
    let mut candidates: Vec<(&Recipe, f64)> = recipes
        .iter()
        .map(|r| (r, jaro_winkler(&r.name.to_lowercase(), &wanted)))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Err(CostError::RecipeNotFound(name.to_string()));
    }

    if candidates.len() == 1 {
        let recipe = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", recipe.name))
            .default(true)
            .interact()?;

        return if confirm {
            Ok(recipe)
        } else {
            Err(CostError::RecipeNotFound(name.to_string()))
        };
    }

    // Multiple matches - let user select
    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(r, _)| r.name.clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(candidates[selection].0)
    } else {
        Err(CostError::RecipeNotFound(name.to_string()))
    }
}

/// Prompt for one partial-sale record of a batch.
pub fn prompt_sale_record() -> Result<SaleRecord> {
    let quantity: String = Input::new()
        .with_prompt("Heads sold")
        .interact_text()?;
    let quantity: u32 = quantity
        .parse()
        .map_err(|_| CostError::InvalidInput("Invalid head count".to_string()))?;

    let total_weight_kg = prompt_positive_number("Total weight sold (kg)")?;
    let price_per_kg = prompt_positive_number("Price per kg (USD)")?;

    Ok(SaleRecord {
        quantity,
        total_weight_kg,
        price_per_kg,
    })
}

/// Yes/no confirmation with a default.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn prompt_positive_number(prompt: &str) -> Result<f64> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;
    let value: f64 = input
        .parse()
        .map_err(|_| CostError::InvalidInput("Invalid number".to_string()))?;

    if value < 0.0 || !value.is_finite() {
        return Err(CostError::InvalidInput(
            "Value must be a non-negative number".to_string(),
        ));
    }

    Ok(value)
}
