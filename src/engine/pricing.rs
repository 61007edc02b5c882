use crate::models::{Currency, Product};
use crate::state::ProductSnapshot;

/// A product's own price: rolling average when positive, else base price.
pub fn product_price(product: &Product) -> f64 {
    match product.average_price {
        Some(avg) if avg > 0.0 => avg,
        _ => product.price.max(0.0),
    }
}

/// Convert an amount to USD. Bs amounts divide by the rate; a degenerate
/// rate already comes in as `1`, which skips conversion.
pub fn convert_to_usd(amount: f64, currency: Currency, rate_or_one: f64) -> f64 {
    match currency {
        Currency::Usd => amount,
        Currency::Bs => amount / rate_or_one,
    }
}

/// Resolve the single authoritative unit price for a product, in USD.
///
/// Resolution order, first applicable wins:
/// 1. explicit override (already USD),
/// 2. matching establishment price (Bs converted via the exchange rate),
/// 3. rolling average when positive,
/// 4. base price.
///
/// Total function: never errors, never returns a negative or non-finite
/// value.
pub fn resolve_price(
    snapshot: &ProductSnapshot,
    product: &Product,
    establishment_id: Option<&str>,
    price_override: Option<f64>,
) -> f64 {
    if let Some(value) = price_override {
        return sanitize(value);
    }

    if let Some(est_id) = establishment_id {
        if let Some(est_price) = product.establishment_price(est_id) {
            let price = convert_to_usd(est_price.price, est_price.currency, snapshot.rate_or_one());
            return sanitize(price);
        }
    }

    sanitize(product_price(product))
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
