pub mod persistence;
pub mod snapshot;

pub use persistence::{load_products, load_recipes, save_recipes};
pub use snapshot::ProductSnapshot;
