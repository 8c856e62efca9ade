use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::sparse::SparsePolicy;

/// Importer configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ImporterConfig {
    /// Whether the headless-browser render fallback may be used at all
    #[serde(default = "default_render_fallback")]
    pub render_fallback: bool,
    /// Which rule set decides that a fetch-based result is too sparse
    #[serde(default)]
    pub sparse_policy: SparsePolicy,
    /// Plain HTTP fetch timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
    /// Overall headless-render timeout in seconds
    #[serde(default = "default_render_timeout")]
    pub render_timeout_secs: u64,
    /// Bind address for the HTTP entrypoint
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            render_fallback: default_render_fallback(),
            sparse_policy: SparsePolicy::default(),
            fetch_timeout_secs: default_fetch_timeout(),
            render_timeout_secs: default_render_timeout(),
            listen_addr: default_listen_addr(),
        }
    }
}

fn default_render_fallback() -> bool {
    true
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_render_timeout() -> u64 {
    30
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

impl ImporterConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with IMPORTER__ prefix
    /// 2. importer.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: IMPORTER__RENDER_FALLBACK=false
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("importer").required(false))
            .add_source(
                Environment::with_prefix("IMPORTER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
