use serde::{Deserialize, Serialize};

/// Unit of account. `Usd` is the default; `Bs` figures are divided by the
/// current exchange rate before mixing with USD figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "Bs")]
    Bs,
}

/// Declared measurement unit of a product's packaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementUnit {
    #[serde(rename = "Kg")]
    Kilograms,
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "L")]
    Liters,
    #[serde(rename = "ml")]
    Milliliters,
    #[serde(rename = "unit")]
    Units,
}

/// Classification tag. Only `Feed` is read by the batch ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Feed,
    Packaging,
    Other,
}

/// A price recorded at one establishment, in its own currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstablishmentPrice {
    pub establishment_id: String,
    pub price: f64,
    pub currency: Currency,
}

/// A purchasable product.
///
/// `measurement_value` is the packaging quantity in `unit` (e.g. a 1000 g
/// sack of feed). A non-positive packaging quantity makes every cost
/// contribution of the product zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,

    pub name: String,

    pub unit: MeasurementUnit,

    pub measurement_value: f64,

    /// Base price in USD.
    pub price: f64,

    /// Per-establishment prices, looked up by establishment id.
    #[serde(default)]
    pub prices: Vec<EstablishmentPrice>,

    /// Rolling average purchase price, preferred over `price` when positive.
    #[serde(default)]
    pub average_price: Option<f64>,

    #[serde(default)]
    pub kind: Option<ProductKind>,

    /// Final cooked weight in grams, set on products that were created from a
    /// recipe. Ingredients may cost against this instead of the packaging
    /// quantity.
    #[serde(default)]
    pub final_weight_grams: Option<f64>,
}

impl Product {
    /// Canonical key for lookups (trimmed id).
    pub fn key(&self) -> String {
        self.id.trim().to_string()
    }

    /// Price at a given establishment, if one is recorded.
    pub fn establishment_price(&self, establishment_id: &str) -> Option<&EstablishmentPrice> {
        self.prices
            .iter()
            .find(|p| p.establishment_id == establishment_id)
    }

    /// Whether the product can contribute a per-unit cost at all.
    pub fn is_costable(&self) -> bool {
        self.measurement_value > 0.0 && self.measurement_value.is_finite()
    }
}
