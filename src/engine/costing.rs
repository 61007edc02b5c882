use crate::engine::pricing::resolve_price;
use crate::engine::units::to_kilograms;
use crate::models::{Recipe, RecipeIngredient, RecipeUtility, UtilitySource};
use crate::state::ProductSnapshot;

/// How ingredient quantities relate to packaging quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostMode {
    /// Usage and packaging share the product's native unit.
    Standard,
    /// Usage is kilograms; packaging is normalized to kilograms first.
    Batch,
}

/// Cost contribution of one ingredient line.
///
/// Missing product or non-positive packaging quantity contributes `0`; the
/// result is always finite and non-negative.
pub fn ingredient_cost(
    snapshot: &ProductSnapshot,
    ingredient: &RecipeIngredient,
    mode: CostMode,
) -> f64 {
    let Some(product) = snapshot.get(&ingredient.product_id) else {
        return 0.0;
    };
    if !product.is_costable() {
        return 0.0;
    }

    let price = resolve_price(
        snapshot,
        product,
        ingredient.establishment_id.as_deref(),
        ingredient.price_override,
    );

    let basis = match mode {
        CostMode::Standard => {
            // Recipe-products may cost against their final cooked weight.
            match (ingredient.use_cooked_weight, product.final_weight_grams) {
                (true, Some(final_weight)) if final_weight > 0.0 => final_weight,
                _ => product.measurement_value,
            }
        }
        CostMode::Batch => to_kilograms(product.unit, product.measurement_value),
    };

    per_unit_cost(price, basis, ingredient.usage_weight)
}

/// Cost contribution of one scenario utility line.
pub fn utility_cost(snapshot: &ProductSnapshot, utility: &RecipeUtility) -> f64 {
    match &utility.source {
        UtilitySource::Product {
            product_id,
            establishment_id,
        } => {
            let Some(product) = snapshot.get(product_id) else {
                return 0.0;
            };
            if !product.is_costable() {
                return 0.0;
            }
            let price = resolve_price(snapshot, product, establishment_id.as_deref(), None);
            per_unit_cost(price, product.measurement_value, utility.quantity)
        }
        UtilitySource::Standalone {
            cost, yield_amount, ..
        } => per_unit_cost(*cost, *yield_amount, utility.quantity),
    }
}

/// Sum of all ingredient line costs: the recipe's base cost.
///
/// Batch recipes cost their ingredients in kilograms; everything else uses
/// the products' native units.
pub fn base_cost(snapshot: &ProductSnapshot, recipe: &Recipe) -> f64 {
    let mode = if recipe.is_batch() {
        CostMode::Batch
    } else {
        CostMode::Standard
    };

    recipe
        .ingredients
        .iter()
        .map(|ing| ingredient_cost(snapshot, ing, mode))
        .sum()
}

/// `(price / basis) * usage`, degraded to `0` for degenerate denominators
/// or non-finite inputs.
fn per_unit_cost(price: f64, basis: f64, usage: f64) -> f64 {
    if basis <= 0.0 || !basis.is_finite() {
        return 0.0;
    }
    let usage = if usage.is_finite() { usage.max(0.0) } else { 0.0 };
    let cost = (price / basis) * usage;
    if cost.is_finite() { cost.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MeasurementUnit, Product};
    use assert_float_eq::assert_float_absolute_eq;

    fn product(id: &str, unit: MeasurementUnit, measurement_value: f64, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            unit,
            measurement_value,
            price,
            prices: vec![],
            average_price: None,
            kind: None,
            final_weight_grams: None,
        }
    }

    fn ingredient(product_id: &str, usage_weight: f64) -> RecipeIngredient {
        RecipeIngredient {
            product_id: product_id.to_string(),
            usage_weight,
            establishment_id: None,
            price_override: None,
            ideal_quantity: None,
            use_cooked_weight: false,
        }
    }

    #[test]
    fn test_standard_mode_example() {
        // 1000 g pack at 10 USD, 200 g used => 2 USD
        let snapshot = ProductSnapshot::new(
            vec![product("p1", MeasurementUnit::Grams, 1000.0, 10.0)],
            1.0,
        );
        let cost = ingredient_cost(&snapshot, &ingredient("p1", 200.0), CostMode::Standard);
        assert_float_absolute_eq!(cost, 2.0, 1e-9);
    }

    #[test]
    fn test_missing_product_is_zero() {
        let snapshot = ProductSnapshot::new(vec![], 1.0);
        let cost = ingredient_cost(&snapshot, &ingredient("ghost", 200.0), CostMode::Standard);
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn test_zero_packaging_quantity_is_zero() {
        let snapshot =
            ProductSnapshot::new(vec![product("p1", MeasurementUnit::Grams, 0.0, 10.0)], 1.0);
        let cost = ingredient_cost(&snapshot, &ingredient("p1", 200.0), CostMode::Standard);
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn test_batch_mode_normalizes_grams() {
        // 1000 g sack at 10 USD => 1 kg basis; 5 kg used => 50 USD
        let snapshot = ProductSnapshot::new(
            vec![product("feed", MeasurementUnit::Grams, 1000.0, 10.0)],
            1.0,
        );
        let cost = ingredient_cost(&snapshot, &ingredient("feed", 5.0), CostMode::Batch);
        assert_float_absolute_eq!(cost, 50.0, 1e-9);
    }

    #[test]
    fn test_cooked_weight_substitutes_basis() {
        let mut prod = product("dough", MeasurementUnit::Grams, 2000.0, 8.0);
        prod.final_weight_grams = Some(1600.0);
        let snapshot = ProductSnapshot::new(vec![prod], 1.0);

        let mut ing = ingredient("dough", 400.0);
        ing.use_cooked_weight = true;
        let cost = ingredient_cost(&snapshot, &ing, CostMode::Standard);
        assert_float_absolute_eq!(cost, 2.0, 1e-9); // (8/1600)*400

        ing.use_cooked_weight = false;
        let cost = ingredient_cost(&snapshot, &ing, CostMode::Standard);
        assert_float_absolute_eq!(cost, 1.6, 1e-9); // (8/2000)*400
    }

    #[test]
    fn test_standalone_utility_ratio() {
        let snapshot = ProductSnapshot::new(vec![], 1.0);
        let util = RecipeUtility {
            source: UtilitySource::Standalone {
                name: "Bags".to_string(),
                cost: 5.0,
                yield_amount: 100.0,
            },
            quantity: 2.0,
            profit_margin: None,
        };
        assert_float_absolute_eq!(utility_cost(&snapshot, &util), 0.1, 1e-9);
    }

    #[test]
    fn test_product_utility_resolves_establishment_price() {
        // 100-unit pack priced 360 Bs at e1, rate 36 => 10 USD => 0.1/unit
        let mut prod = product("bags", MeasurementUnit::Units, 100.0, 20.0);
        prod.prices.push(crate::models::EstablishmentPrice {
            establishment_id: "e1".to_string(),
            price: 360.0,
            currency: crate::models::Currency::Bs,
        });
        let snapshot = ProductSnapshot::new(vec![prod], 36.0);

        let util = RecipeUtility {
            source: UtilitySource::Product {
                product_id: "bags".to_string(),
                establishment_id: Some("e1".to_string()),
            },
            quantity: 2.0,
            profit_margin: None,
        };
        assert_float_absolute_eq!(utility_cost(&snapshot, &util), 0.2, 1e-9);
    }

    #[test]
    fn test_product_utility_missing_product_is_zero() {
        let snapshot = ProductSnapshot::new(vec![], 1.0);
        let util = RecipeUtility {
            source: UtilitySource::Product {
                product_id: "ghost".to_string(),
                establishment_id: None,
            },
            quantity: 2.0,
            profit_margin: None,
        };
        assert_eq!(utility_cost(&snapshot, &util), 0.0);
    }

    #[test]
    fn test_standalone_utility_zero_yield_is_zero() {
        let snapshot = ProductSnapshot::new(vec![], 1.0);
        let util = RecipeUtility {
            source: UtilitySource::Standalone {
                name: "Labor".to_string(),
                cost: 5.0,
                yield_amount: 0.0,
            },
            quantity: 2.0,
            profit_margin: None,
        };
        assert_eq!(utility_cost(&snapshot, &util), 0.0);
    }

    #[test]
    fn test_base_cost_sums_lines() {
        let snapshot = ProductSnapshot::new(
            vec![
                product("p1", MeasurementUnit::Grams, 1000.0, 10.0),
                product("p2", MeasurementUnit::Kilograms, 1.0, 4.0),
            ],
            1.0,
        );
        let recipe = Recipe {
            id: "r1".to_string(),
            name: "Mix".to_string(),
            ingredients: vec![ingredient("p1", 200.0), ingredient("p2", 0.5)],
            total_weight_g: 0.0,
            weight_loss_g: 0.0,
            fixed_units: None,
            profit_margin_percent: 0.0,
            scenarios: vec![],
            chicken_data: None,
            status: crate::models::RecipeStatus::Active,
        };
        assert_float_absolute_eq!(base_cost(&snapshot, &recipe), 4.0, 1e-9); // 2 + 2
    }

    #[test]
    fn test_empty_recipe_base_cost_zero() {
        let snapshot = ProductSnapshot::new(vec![], 1.0);
        let recipe = Recipe {
            id: "r1".to_string(),
            name: "Empty".to_string(),
            ingredients: vec![],
            total_weight_g: 0.0,
            weight_loss_g: 0.0,
            fixed_units: None,
            profit_margin_percent: 0.0,
            scenarios: vec![],
            chicken_data: None,
            status: crate::models::RecipeStatus::Active,
        };
        assert_eq!(base_cost(&snapshot, &recipe), 0.0);
    }
}
