//! Escalation controller: plain fetch first, headless render only when the
//! cheap result failed or came back sparse.

use std::time::Duration;

use log::{debug, warn};

use crate::config::ImporterConfig;
use crate::error::ImportError;
use crate::extract::extract;
use crate::fetch::{ChromeFetcher, Fetcher, RequestFetcher};
use crate::model::Recipe;
use crate::sparse::{is_sparse, SparsePolicy};

#[derive(Debug, Clone, Copy)]
pub struct ImportOptions {
    /// Whether the headless-browser tier may be used at all.
    pub allow_render: bool,
    pub sparse_policy: SparsePolicy,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            allow_render: true,
            sparse_policy: SparsePolicy::default(),
        }
    }
}

impl From<&ImporterConfig> for ImportOptions {
    fn from(config: &ImporterConfig) -> Self {
        Self {
            allow_render: config.render_fallback,
            sparse_policy: config.sparse_policy,
        }
    }
}

/// Import a recipe from a URL using the default fetchers.
pub async fn import_recipe(url: &str, options: ImportOptions) -> Result<Recipe, ImportError> {
    let plain = RequestFetcher::default();
    let render = ChromeFetcher::default();
    import_recipe_with(&plain, &render, url, options).await
}

/// Import a recipe with timeouts and policy taken from configuration.
pub async fn import_with_config(
    url: &str,
    config: &ImporterConfig,
) -> Result<Recipe, ImportError> {
    let plain = RequestFetcher::new(Some(Duration::from_secs(config.fetch_timeout_secs)));
    let render = ChromeFetcher::new(Some(Duration::from_secs(config.render_timeout_secs)));
    import_recipe_with(&plain, &render, url, ImportOptions::from(config)).await
}

/// The escalation state machine over explicit fetch tiers.
///
/// Fails with `ImportError::Fetch` only when the plain fetch failed and
/// rendering was disallowed or also failed with no prior result; every
/// other anomaly degrades to a best-effort `Recipe`.
pub async fn import_recipe_with(
    plain: &dyn Fetcher,
    render: &dyn Fetcher,
    url: &str,
    options: ImportOptions,
) -> Result<Recipe, ImportError> {
    let mut first = match plain.fetch(url).await {
        Ok(html) => Some(extract(&html, url)),
        Err(e) if options.allow_render => {
            warn!("Plain fetch of {url} failed ({e}); escalating to rendered fetch");
            None
        }
        Err(e) => return Err(ImportError::Fetch(e.to_string())),
    };

    if let Some(recipe) = first.take() {
        if !is_sparse(&recipe, options.sparse_policy) {
            return Ok(recipe);
        }
        if !options.allow_render {
            debug!("Result for {url} is sparse but render fallback is disabled; keeping it");
            return Ok(recipe);
        }
        debug!("Result for {url} is sparse; escalating to rendered fetch");
        first = Some(recipe);
    }

    // One escalation attempt only; its result is returned without a
    // second sparse check.
    match render.fetch(url).await {
        Ok(html) => Ok(extract(&html, url)),
        Err(e) => match first {
            Some(recipe) => {
                warn!("Rendered fetch of {url} failed ({e}); keeping earlier result");
                Ok(recipe)
            }
            None => Err(ImportError::Fetch(e.to_string())),
        },
    }
}
