use crate::engine::costing::{base_cost, utility_cost};
use crate::engine::pricing::convert_to_usd;
use crate::models::{Recipe, RecipeScenario, YieldMode};
use crate::state::ProductSnapshot;

/// Profit margin applied to a utility line that declares none.
pub const DEFAULT_UTILITY_MARGIN_PERCENT: f64 = 50.0;

/// Per-unit economics of one packaging scenario.
#[derive(Debug, Clone, Default)]
pub struct ScenarioPricing {
    /// Sellable units this scenario produces from the recipe's raw input.
    pub estimated_yield: f64,

    /// Recipe base cost spread over the yield.
    pub ingredient_cost_per_unit: f64,

    /// Sum of the scenario's utility line costs.
    pub utility_cost_per_unit: f64,

    /// Ingredient plus utility cost per unit; `0` when yield is degenerate.
    pub unit_cost: f64,

    /// Sale price per unit in USD (fixed, or margin-derived).
    pub unit_price: f64,

    /// Margin actually realized by `unit_price` over `unit_cost`, percent.
    pub margin_percent: f64,
}

/// Units produced by one scenario.
///
/// By-unit scenarios divide the recipe's fixed unit count by the scenario
/// value when one is declared, else the value itself is the count. By-weight
/// scenarios divide the net input weight (total minus processing loss,
/// floored at zero) by grams per unit.
pub fn estimated_yield(recipe: &Recipe, scenario: &RecipeScenario) -> f64 {
    match scenario.yield_mode {
        YieldMode::ByUnit => match recipe.fixed_units {
            Some(total_units) => {
                if scenario.value > 0.0 {
                    total_units / scenario.value
                } else {
                    0.0
                }
            }
            None => scenario.value.max(0.0),
        },
        YieldMode::ByWeight => {
            if recipe.total_weight_g <= 0.0 || scenario.value <= 0.0 {
                return 0.0;
            }
            let net_weight = (recipe.total_weight_g - recipe.weight_loss_g).max(0.0);
            net_weight / scenario.value
        }
    }
}

/// Full per-unit economics for one scenario of a recipe.
pub fn price_scenario(
    snapshot: &ProductSnapshot,
    recipe: &Recipe,
    scenario: &RecipeScenario,
) -> ScenarioPricing {
    let yield_units = estimated_yield(recipe, scenario);

    let utility_per_unit: f64 = scenario
        .utilities
        .iter()
        .map(|u| utility_cost(snapshot, u))
        .sum();

    let (ingredient_per_unit, unit_cost) = if yield_units > 0.0 {
        let ingredient = base_cost(snapshot, recipe) / yield_units;
        (ingredient, ingredient + utility_per_unit)
    } else {
        (0.0, 0.0)
    };

    let unit_price = unit_sale_price(snapshot, recipe, scenario, ingredient_per_unit);

    let margin_percent = if unit_cost > 0.0 {
        ((unit_price / unit_cost) - 1.0) * 100.0
    } else {
        0.0
    };

    ScenarioPricing {
        estimated_yield: yield_units,
        ingredient_cost_per_unit: ingredient_per_unit,
        utility_cost_per_unit: utility_per_unit,
        unit_cost,
        unit_price,
        margin_percent,
    }
}

/// Sale price per unit.
///
/// A fixed price on the scenario wins unconditionally. Otherwise the recipe
/// margin marks up the ingredient cost and each utility line is marked up by
/// its own margin independently.
fn unit_sale_price(
    snapshot: &ProductSnapshot,
    recipe: &Recipe,
    scenario: &RecipeScenario,
    ingredient_cost_per_unit: f64,
) -> f64 {
    if let Some(fixed) = &scenario.fixed_price {
        return convert_to_usd(fixed.amount, fixed.currency, snapshot.rate_or_one()).max(0.0);
    }

    let ingredient_component =
        ingredient_cost_per_unit * (1.0 + recipe.profit_margin_percent / 100.0);

    let utility_component: f64 = scenario
        .utilities
        .iter()
        .map(|u| {
            let margin = u.profit_margin.unwrap_or(DEFAULT_UTILITY_MARGIN_PERCENT);
            utility_cost(snapshot, u) * (1.0 + margin / 100.0)
        })
        .sum();

    ingredient_component + utility_component
}
