use crate::engine::costing::{base_cost, ingredient_cost, CostMode};
use crate::engine::pricing::product_price;
use crate::models::{ChickenBatchData, ProductKind, Recipe, SaleRecord};
use crate::state::ProductSnapshot;

/// Realized figures reconciled from a batch's recorded partial sales.
#[derive(Debug, Clone, Default)]
pub struct SalesSummary {
    pub quantity_sold: u32,
    pub weight_sold_kg: f64,
    pub realized_income: f64,
    /// Average live weight per head sold; `0` when nothing was sold.
    pub avg_weight_kg: f64,
    /// Income per kilogram sold; `0` when no weight was sold.
    pub avg_price_kg: f64,
    pub realized_profit: f64,
    pub remaining_quantity: u32,
}

/// Full ledger for one livestock batch.
#[derive(Debug, Clone)]
pub struct BatchFigures {
    /// Cost of acquiring the chicks.
    pub chicken_investment: f64,

    /// Ingredient cost restricted to feed-tagged products.
    pub feed_investment: f64,

    /// All ingredient costs plus the acquisition investment.
    pub total_batch_cost: f64,

    pub cost_per_chicken: f64,

    pub starter_feed_kg: f64,

    pub fattening_feed_kg: f64,

    pub total_target_weight_kg: f64,

    pub projected_income: f64,

    pub projected_profit: f64,

    pub total_current_weight_kg: f64,

    pub current_income: f64,

    pub current_profit: f64,

    pub sales: SalesSummary,
}

/// Compute the batch ledger for a recipe, or `None` when the recipe carries
/// no batch payload.
///
/// Every figure degrades to `0` on zero head counts or missing products;
/// status is not consulted, the caller decides what figures mean for a
/// finished or cancelled batch.
pub fn batch_figures(snapshot: &ProductSnapshot, recipe: &Recipe) -> Option<BatchFigures> {
    let data = recipe.chicken_data.as_ref()?;
    let qty = data.initial_quantity as f64;

    let chicken_investment = acquisition_price_per_head(snapshot, data) * qty;
    let feed_investment = feed_only_cost(snapshot, recipe);
    let total_batch_cost = base_cost(snapshot, recipe) + chicken_investment;

    let cost_per_chicken = if qty > 0.0 {
        total_batch_cost / qty
    } else {
        0.0
    };

    let starter_feed_kg = data.starter_feed_per_chicken_g.max(0.0) * qty / 1000.0;
    let fattening_feed_kg = data.fattening_feed_per_chicken_g.max(0.0) * qty / 1000.0;

    let (total_target_weight_kg, projected_income) =
        projection(data.target_weight_g, qty, data.live_weight_price_kg);
    let (total_current_weight_kg, current_income) =
        projection(data.current_weight_g, qty, data.live_weight_price_kg);

    let sales = summarize_sales(&data.sales, data.initial_quantity, total_batch_cost);

    Some(BatchFigures {
        chicken_investment,
        feed_investment,
        total_batch_cost,
        cost_per_chicken,
        starter_feed_kg,
        fattening_feed_kg,
        total_target_weight_kg,
        projected_income,
        projected_profit: projected_income - total_batch_cost,
        total_current_weight_kg,
        current_income,
        current_profit: current_income - total_batch_cost,
        sales,
    })
}

/// Acquisition price per head: explicit override, else the linked product's
/// resolved price. `0` when neither exists.
fn acquisition_price_per_head(snapshot: &ProductSnapshot, data: &ChickenBatchData) -> f64 {
    if let Some(value) = data.price_override {
        return value.max(0.0);
    }
    let Some(product_id) = data.batch_product_id.as_deref() else {
        return 0.0;
    };
    match snapshot.get(product_id) {
        Some(product) => product_price(product).max(0.0),
        None => 0.0,
    }
}

/// Ingredient cost over feed-tagged products only, always in batch mode.
fn feed_only_cost(snapshot: &ProductSnapshot, recipe: &Recipe) -> f64 {
    recipe
        .ingredients
        .iter()
        .filter(|ing| {
            snapshot
                .get(&ing.product_id)
                .is_some_and(|p| p.kind == Some(ProductKind::Feed))
        })
        .map(|ing| ingredient_cost(snapshot, ing, CostMode::Batch))
        .sum()
}

/// Total mass in kilograms at a per-head weight in grams, and its income at
/// the live-weight price.
fn projection(weight_g: f64, qty: f64, price_per_kg: f64) -> (f64, f64) {
    let total_kg = weight_g.max(0.0) * qty / 1000.0;
    (total_kg, total_kg * price_per_kg.max(0.0))
}

fn summarize_sales(
    sales: &[SaleRecord],
    initial_quantity: u32,
    total_batch_cost: f64,
) -> SalesSummary {
    let quantity_sold: u32 = sales
        .iter()
        .fold(0u32, |acc, s| acc.saturating_add(s.quantity));
    let weight_sold_kg: f64 = sales.iter().map(|s| s.total_weight_kg.max(0.0)).sum();
    let realized_income: f64 = sales
        .iter()
        .map(|s| s.total_weight_kg.max(0.0) * s.price_per_kg.max(0.0))
        .sum();

    let avg_weight_kg = if quantity_sold > 0 {
        weight_sold_kg / quantity_sold as f64
    } else {
        0.0
    };
    let avg_price_kg = if weight_sold_kg > 0.0 {
        realized_income / weight_sold_kg
    } else {
        0.0
    };

    SalesSummary {
        quantity_sold,
        weight_sold_kg,
        realized_income,
        avg_weight_kg,
        avg_price_kg,
        realized_profit: realized_income - total_batch_cost,
        remaining_quantity: initial_quantity.saturating_sub(quantity_sold),
    }
}
