use serde::{Deserialize, Serialize};

use crate::models::Currency;

/// One ingredient line of a recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub product_id: String,

    /// Quantity consumed, in the product's native unit (kilograms in batch
    /// mode).
    pub usage_weight: f64,

    /// Buy from this establishment's recorded price when set.
    #[serde(default)]
    pub establishment_id: Option<String>,

    /// Explicit unit price in USD; wins over every other price source.
    #[serde(default)]
    pub price_override: Option<f64>,

    /// Target amount for restocking; informational only.
    #[serde(default)]
    pub ideal_quantity: Option<f64>,

    /// Cost against the product's final cooked weight instead of its
    /// packaging quantity (recipe-products only).
    #[serde(default)]
    pub use_cooked_weight: bool,
}

/// Where a utility line gets its price from. The two cases are exclusive:
/// either a linked product goes through the normal price resolution, or the
/// line carries its own cost/yield pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum UtilitySource {
    Product {
        product_id: String,
        #[serde(default)]
        establishment_id: Option<String>,
    },
    Standalone {
        name: String,
        cost: f64,
        yield_amount: f64,
    },
}

/// A non-ingredient input to cost (packaging, labor) attached to a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeUtility {
    #[serde(flatten)]
    pub source: UtilitySource,

    /// Usage per produced unit.
    pub quantity: f64,

    /// Per-line profit margin percent; 50 when absent.
    #[serde(default)]
    pub profit_margin: Option<f64>,
}

/// How a scenario turns raw input into sellable units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YieldMode {
    /// `value` is grams of finished product per unit.
    ByWeight,
    /// `value` is a unit count, or a divisor of the recipe's fixed units.
    ByUnit,
}

/// A fixed sale price declared on a scenario, in its own currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedPrice {
    pub amount: f64,
    pub currency: Currency,
}

/// A named packaging/sale plan for a recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeScenario {
    pub id: String,

    pub name: String,

    pub yield_mode: YieldMode,

    pub value: f64,

    #[serde(default)]
    pub utilities: Vec<RecipeUtility>,

    /// When set, wins over margin-derived pricing unconditionally.
    #[serde(default)]
    pub fixed_price: Option<FixedPrice>,
}

/// One partial sale of a livestock batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    pub quantity: u32,
    pub total_weight_kg: f64,
    pub price_per_kg: f64,
}

/// Livestock-batch payload on a recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChickenBatchData {
    pub initial_quantity: u32,

    /// Current average live weight per head, grams.
    pub current_weight_g: f64,

    /// Target live weight per head, grams.
    pub target_weight_g: f64,

    /// Sale price per kilogram of live weight, USD.
    pub live_weight_price_kg: f64,

    pub starter_feed_per_chicken_g: f64,

    pub fattening_feed_per_chicken_g: f64,

    /// Product representing the acquired chicks.
    #[serde(default)]
    pub batch_product_id: Option<String>,

    /// Overrides the acquisition price per head when set.
    #[serde(default)]
    pub price_override: Option<f64>,

    #[serde(default)]
    pub sales: Vec<SaleRecord>,
}

/// Lifecycle of a recipe/batch. Transitions are driven by the caller; the
/// engine computes figures for whatever state it is handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeStatus {
    Active,
    Finished,
    Cancelled,
}

impl Default for RecipeStatus {
    fn default() -> Self {
        RecipeStatus::Active
    }
}

impl RecipeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RecipeStatus::Active => "active",
            RecipeStatus::Finished => "finished",
            RecipeStatus::Cancelled => "cancelled",
        }
    }
}

/// A production recipe with its ingredients and packaging scenarios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,

    /// Total raw input weight, grams.
    #[serde(default)]
    pub total_weight_g: f64,

    /// Weight lost in processing, grams.
    #[serde(default)]
    pub weight_loss_g: f64,

    /// Explicit total yield in units, when the recipe produces a fixed count
    /// rather than being divided by weight.
    #[serde(default)]
    pub fixed_units: Option<f64>,

    /// Global profit margin percent applied to ingredient cost.
    #[serde(default)]
    pub profit_margin_percent: f64,

    #[serde(default)]
    pub scenarios: Vec<RecipeScenario>,

    /// Present when the recipe is a livestock batch.
    #[serde(default)]
    pub chicken_data: Option<ChickenBatchData>,

    #[serde(default)]
    pub status: RecipeStatus,
}

impl Recipe {
    pub fn is_batch(&self) -> bool {
        self.chicken_data.is_some()
    }

    /// Scenario lookup by case-insensitive name.
    pub fn scenario(&self, name: &str) -> Option<&RecipeScenario> {
        self.scenarios
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }
}
