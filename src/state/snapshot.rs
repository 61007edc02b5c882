use std::collections::HashMap;

use crate::models::Product;

/// Immutable view of the product catalog plus the current exchange rate
/// (Bs per USD), passed explicitly into every engine call.
///
/// Re-invoking any engine function against the same snapshot yields
/// bit-identical results; nothing here mutates or caches.
pub struct ProductSnapshot {
    /// All products keyed by trimmed id.
    products: HashMap<String, Product>,

    exchange_rate: f64,
}

impl ProductSnapshot {
    pub fn new(products: Vec<Product>, exchange_rate: f64) -> Self {
        let mut map = HashMap::new();
        for product in products {
            map.insert(product.key(), product);
        }
        Self {
            products: map,
            exchange_rate,
        }
    }

    /// Get a product by id (trimmed match).
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id.trim())
    }

    pub fn exchange_rate(&self) -> f64 {
        self.exchange_rate
    }

    /// Exchange rate guarded for division: `1` when zero, negative, or
    /// non-finite, so a bad rate skips conversion instead of blowing up.
    pub fn rate_or_one(&self) -> f64 {
        if self.exchange_rate.is_finite() && self.exchange_rate > 0.0 {
            self.exchange_rate
        } else {
            1.0
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
