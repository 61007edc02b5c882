pub mod product;
pub mod recipe;

pub use product::{Currency, EstablishmentPrice, MeasurementUnit, Product, ProductKind};
pub use recipe::{
    ChickenBatchData, FixedPrice, Recipe, RecipeIngredient, RecipeScenario, RecipeStatus,
    RecipeUtility, SaleRecord, UtilitySource, YieldMode,
};
