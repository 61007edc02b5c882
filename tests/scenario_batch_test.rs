use assert_float_eq::assert_float_absolute_eq;

use production_coster_rs::engine::{batch_figures, price_scenario};
use production_coster_rs::models::{
    ChickenBatchData, Currency, FixedPrice, MeasurementUnit, Product, ProductKind, Recipe,
    RecipeIngredient, RecipeScenario, RecipeStatus, RecipeUtility, SaleRecord, UtilitySource,
    YieldMode,
};
use production_coster_rs::state::ProductSnapshot;

fn flour() -> Product {
    Product {
        id: "flour".to_string(),
        name: "Flour".to_string(),
        unit: MeasurementUnit::Grams,
        measurement_value: 1000.0,
        price: 10.0,
        prices: vec![],
        average_price: None,
        kind: None,
        final_weight_grams: None,
    }
}

fn bread_recipe() -> Recipe {
    Recipe {
        id: "bread".to_string(),
        name: "Bread".to_string(),
        ingredients: vec![RecipeIngredient {
            product_id: "flour".to_string(),
            usage_weight: 900.0,
            establishment_id: None,
            price_override: None,
            ideal_quantity: None,
            use_cooked_weight: false,
        }],
        total_weight_g: 1000.0,
        weight_loss_g: 100.0,
        fixed_units: None,
        profit_margin_percent: 40.0,
        scenarios: vec![],
        chicken_data: None,
        status: RecipeStatus::Active,
    }
}

fn sachet_scenario() -> RecipeScenario {
    RecipeScenario {
        id: "s1".to_string(),
        name: "Sachet 50g".to_string(),
        yield_mode: YieldMode::ByWeight,
        value: 50.0,
        utilities: vec![RecipeUtility {
            source: UtilitySource::Standalone {
                name: "Sachet bag".to_string(),
                cost: 2.0,
                yield_amount: 100.0,
            },
            quantity: 1.0,
            profit_margin: Some(20.0),
        }],
        fixed_price: None,
    }
}

#[test]
fn test_scenario_end_to_end() {
    let snapshot = ProductSnapshot::new(vec![flour()], 1.0);
    let recipe = bread_recipe();
    let pricing = price_scenario(&snapshot, &recipe, &sachet_scenario());

    // (1000 - 100) / 50 = 18 units; base cost 9 => 0.5/unit; bag 0.02/unit
    assert_float_absolute_eq!(pricing.estimated_yield, 18.0, 1e-9);
    assert_float_absolute_eq!(pricing.ingredient_cost_per_unit, 0.5, 1e-9);
    assert_float_absolute_eq!(pricing.utility_cost_per_unit, 0.02, 1e-9);
    assert_float_absolute_eq!(pricing.unit_cost, 0.52, 1e-9);
    // 0.5 * 1.4 + 0.02 * 1.2
    assert_float_absolute_eq!(pricing.unit_price, 0.724, 1e-9);
    assert!(pricing.margin_percent > 0.0);
}

#[test]
fn test_unit_cost_non_negative_and_zero_on_degenerate_yield() {
    let snapshot = ProductSnapshot::new(vec![flour()], 1.0);
    let recipe = bread_recipe();

    for value in [0.0, -10.0] {
        let mut scenario = sachet_scenario();
        scenario.value = value;
        let pricing = price_scenario(&snapshot, &recipe, &scenario);
        assert_eq!(pricing.unit_cost, 0.0);
        assert_eq!(pricing.margin_percent, 0.0);
    }

    let pricing = price_scenario(&snapshot, &recipe, &sachet_scenario());
    assert!(pricing.unit_cost >= 0.0);
}

#[test]
fn test_fixed_price_beats_any_margin() {
    let snapshot = ProductSnapshot::new(vec![flour()], 1.0);
    let mut recipe = bread_recipe();
    recipe.profit_margin_percent = 900.0;

    let mut scenario = sachet_scenario();
    scenario.fixed_price = Some(FixedPrice {
        amount: 0.99,
        currency: Currency::Usd,
    });

    let pricing = price_scenario(&snapshot, &recipe, &scenario);
    assert_float_absolute_eq!(pricing.unit_price, 0.99, 1e-9);
}

fn chicken_batch() -> (ProductSnapshot, Recipe) {
    let feed = Product {
        id: "feed".to_string(),
        name: "Feed".to_string(),
        unit: MeasurementUnit::Kilograms,
        measurement_value: 25.0,
        price: 25.0,
        prices: vec![],
        average_price: None,
        kind: Some(ProductKind::Feed),
        final_weight_grams: None,
    };
    let recipe = Recipe {
        id: "b1".to_string(),
        name: "Batch 1".to_string(),
        ingredients: vec![RecipeIngredient {
            product_id: "feed".to_string(),
            usage_weight: 150.0,
            establishment_id: None,
            price_override: None,
            ideal_quantity: None,
            use_cooked_weight: false,
        }],
        total_weight_g: 0.0,
        weight_loss_g: 0.0,
        fixed_units: None,
        profit_margin_percent: 0.0,
        scenarios: vec![],
        chicken_data: Some(ChickenBatchData {
            initial_quantity: 100,
            current_weight_g: 1200.0,
            target_weight_g: 2500.0,
            live_weight_price_kg: 3.0,
            starter_feed_per_chicken_g: 1200.0,
            fattening_feed_per_chicken_g: 3400.0,
            batch_product_id: None,
            price_override: Some(2.0),
            sales: vec![],
        }),
        status: RecipeStatus::Active,
    };
    (ProductSnapshot::new(vec![feed], 1.0), recipe)
}

#[test]
fn test_batch_worked_example() {
    let (snapshot, recipe) = chicken_batch();
    let figures = batch_figures(&snapshot, &recipe).unwrap();
    assert_float_absolute_eq!(figures.total_batch_cost, 350.0, 1e-9);
    assert_float_absolute_eq!(figures.cost_per_chicken, 3.5, 1e-9);
}

#[test]
fn test_remaining_quantity_invariant() {
    let (snapshot, mut recipe) = chicken_batch();
    let sales = vec![
        SaleRecord {
            quantity: 15,
            total_weight_kg: 37.0,
            price_per_kg: 3.1,
        },
        SaleRecord {
            quantity: 25,
            total_weight_kg: 63.0,
            price_per_kg: 3.3,
        },
    ];
    recipe.chicken_data.as_mut().unwrap().sales = sales.clone();

    let figures = batch_figures(&snapshot, &recipe).unwrap();
    let sold: u32 = sales.iter().map(|s| s.quantity).sum();
    assert_eq!(figures.sales.remaining_quantity, 100 - sold);
}

#[test]
fn test_no_sales_realized_profit_equals_negative_cost() {
    let (snapshot, recipe) = chicken_batch();
    let figures = batch_figures(&snapshot, &recipe).unwrap();
    assert_float_absolute_eq!(
        figures.sales.realized_profit,
        -figures.total_batch_cost,
        1e-9
    );
}

#[test]
fn test_engine_is_pure_across_calls() {
    let (snapshot, recipe) = chicken_batch();
    let a = batch_figures(&snapshot, &recipe).unwrap();
    let b = batch_figures(&snapshot, &recipe).unwrap();
    assert_eq!(a.total_batch_cost.to_bits(), b.total_batch_cost.to_bits());
    assert_eq!(a.projected_profit.to_bits(), b.projected_profit.to_bits());
    assert_eq!(
        a.sales.realized_profit.to_bits(),
        b.sales.realized_profit.to_bits()
    );
}
