pub mod batch;
pub mod costing;
pub mod pricing;
pub mod scenario;
pub mod units;

pub use batch::{batch_figures, BatchFigures, SalesSummary};
pub use costing::{base_cost, ingredient_cost, utility_cost, CostMode};
pub use pricing::{convert_to_usd, product_price, resolve_price};
pub use scenario::{
    estimated_yield, price_scenario, ScenarioPricing, DEFAULT_UTILITY_MARGIN_PERCENT,
};
pub use units::to_kilograms;
