use thiserror::Error;

/// Errors that can occur during recipe import operations.
///
/// Only `Fetch` is ever raised by the escalation core itself: every other
/// anomaly (missing fields, sparse results, render failures) is absorbed
/// into a degraded-but-valid `Recipe`.
#[derive(Error, Debug)]
pub enum ImportError {
    /// No URL supplied (CLI/HTTP boundary only)
    #[error("No URL supplied")]
    MissingInput,

    /// The initial fetch failed and render fallback was unavailable or
    /// also failed with no usable prior result
    #[error("Failed to fetch URL: {0}")]
    Fetch(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
