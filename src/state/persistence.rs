use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{Product, Recipe};

/// Load products from a JSON file.
pub fn load_products<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    let content = fs::read_to_string(path)?;
    let products: Vec<Product> = serde_json::from_str(&content)?;
    Ok(products)
}

/// Load recipes from a JSON file.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)?;
    let recipes: Vec<Recipe> = serde_json::from_str(&content)?;
    Ok(recipes)
}

/// Save recipes to a JSON file (pretty-printed, written whole).
pub fn save_recipes<P: AsRef<Path>>(path: P, recipes: &[Recipe]) -> Result<()> {
    let json = serde_json::to_string_pretty(recipes)?;
    fs::write(path, json)?;
    Ok(())
}
