pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{CostError, Result};
pub use models::{Product, Recipe};
pub use state::ProductSnapshot;
