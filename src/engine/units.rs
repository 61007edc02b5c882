use crate::models::MeasurementUnit;

/// Express a packaging quantity in kilograms for batch-feed costing.
///
/// Grams divide by 1000. Discrete units pass through as one kilogram-
/// equivalent each; that approximation is confined to batch-feed costing and
/// must not be generalized without per-product density data. Mass/volume
/// native units pass through unchanged.
pub fn to_kilograms(unit: MeasurementUnit, quantity: f64) -> f64 {
    match unit {
        MeasurementUnit::Grams => quantity / 1000.0,
        MeasurementUnit::Kilograms
        | MeasurementUnit::Liters
        | MeasurementUnit::Milliliters
        | MeasurementUnit::Units => quantity,
    }
}
