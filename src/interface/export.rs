use std::path::Path;

use crate::engine::ScenarioPricing;
use crate::error::Result;

/// Write a scenario pricing table to a CSV file.
pub fn write_scenario_csv(rows: &[(String, ScenarioPricing)], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "scenario",
        "estimated_yield",
        "ingredient_cost_per_unit",
        "utility_cost_per_unit",
        "unit_cost",
        "unit_price",
        "margin_percent",
    ])?;

    for (name, pricing) in rows {
        wtr.write_record([
            name.clone(),
            format!("{:.2}", pricing.estimated_yield),
            format!("{:.4}", pricing.ingredient_cost_per_unit),
            format!("{:.4}", pricing.utility_cost_per_unit),
            format!("{:.4}", pricing.unit_cost),
            format!("{:.4}", pricing.unit_price),
            format!("{:.2}", pricing.margin_percent),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
