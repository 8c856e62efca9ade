//! Recipe extraction engine: turns arbitrary cooking-site HTML into a
//! structured [`Recipe`], escalating from a plain HTTP fetch to a
//! headless-browser render when the cheap result is too sparse.

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod model;
pub mod pipeline;
pub mod server;
pub mod sparse;

pub use crate::config::ImporterConfig;
pub use crate::error::ImportError;
pub use crate::extract::extract;
pub use crate::extract::time::parse_minutes;
pub use crate::model::{Ingredient, Recipe, Section, Step, PLACEHOLDER_STEP};
pub use crate::pipeline::{import_recipe, import_recipe_with, import_with_config, ImportOptions};
pub use crate::sparse::{is_sparse, SparsePolicy};

/// Import a recipe using configuration from `importer.toml` and
/// `IMPORTER__*` environment variables.
pub async fn import_recipe_with_defaults(url: &str) -> Result<Recipe, ImportError> {
    let config = ImporterConfig::load()?;
    import_with_config(url, &config).await
}
