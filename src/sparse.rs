use serde::Deserialize;

use crate::model::Recipe;

/// Rule set deciding when an extracted recipe is too incomplete to be
/// useful, which triggers the expensive render-fallback path.
///
/// The two variants differ in how eagerly they escalate; the policy is
/// configurable because either can be the right trade-off depending on
/// how costly headless rendering is in a given deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SparsePolicy {
    /// Sparse when `ingredients.len() <= 1` or `steps.len() <= 1`.
    #[default]
    CountThreshold,
    /// Sparse only when ingredients are empty and the single step is the
    /// placeholder, i.e. extraction produced nothing at all.
    PlaceholderOnly,
}

pub fn is_sparse(recipe: &Recipe, policy: SparsePolicy) -> bool {
    match policy {
        SparsePolicy::CountThreshold => {
            recipe.ingredients.len() <= 1 || recipe.steps.len() <= 1
        }
        SparsePolicy::PlaceholderOnly => {
            recipe.ingredients.is_empty()
                && recipe.steps.len() == 1
                && recipe.steps[0].is_placeholder()
        }
    }
}
