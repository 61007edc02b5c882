pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_scenario_csv;
pub use prompts::{prompt_sale_record, prompt_yes_no, resolve_recipe};
pub use render::{
    display_batch_report, display_cost_breakdown, display_recipe_list, display_scenarios,
    scenario_rows,
};
