use clap::{Parser, Subcommand};

/// ProductionCoster — per-recipe costs, scenario pricing, and batch ledgers
/// from a product/price snapshot.
#[derive(Parser, Debug)]
#[command(name = "production_coster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the products JSON file.
    #[arg(short, long, default_value = "products.json")]
    pub products: String,

    /// Path to the recipes JSON file.
    #[arg(short, long, default_value = "recipes.json")]
    pub recipes: String,

    /// Exchange rate, Bs per USD. A zero rate disables conversion.
    #[arg(long, default_value_t = 1.0)]
    pub rate: f64,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List recipes with their status and base cost.
    List,

    /// Per-ingredient cost breakdown for a recipe.
    Cost {
        /// Recipe name (fuzzy matched).
        recipe: String,
    },

    /// Scenario pricing table for a recipe.
    Scenarios {
        recipe: String,
    },

    /// Batch ledger report for a livestock batch.
    Batch {
        recipe: String,
    },

    /// Record a partial sale on a livestock batch.
    RecordSale {
        recipe: String,
    },

    /// Export a recipe's scenario pricing table as CSV.
    Export {
        recipe: String,

        /// Output CSV path.
        #[arg(short, long, default_value = "scenarios.csv")]
        out: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::List
    }
}
