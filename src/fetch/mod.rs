//! HTML acquisition: a cheap plain-HTTP tier and an expensive
//! headless-browser tier behind a common `Fetcher` trait.

mod chrome;
mod request;

pub use self::chrome::{ChromeFetcher, RenderError};
pub use self::request::RequestFetcher;

use std::error::Error;

use async_trait::async_trait;

/// User-Agent sent by both tiers, identifying the tool.
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; RecipeImporter/0.1)";

pub type FetchResult = Result<String, Box<dyn Error + Send + Sync>>;

/// A strategy for turning a URL into an HTML document.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchResult;
}
