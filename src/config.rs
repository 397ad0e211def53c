use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Catalog backend configuration
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Base URL of the hosted catalog backend
    pub base_url: String,
    /// API key for authentication (can also be set via environment variable)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Status assigned to newly created products
    #[serde(default = "default_status")]
    pub default_status: String,
    /// Category to link products to when the caller does not supply one
    #[serde(default)]
    pub default_category: Option<String>,
}

fn default_timeout() -> u64 {
    30
}

fn default_status() -> String {
    "draft".to_string()
}

impl StoreConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with CATALOG__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: CATALOG__BASE_URL, CATALOG__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested keys: CATALOG__BASE_URL
            .add_source(
                Environment::with_prefix("CATALOG")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Construct a config directly, for callers that already hold the values.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        StoreConfig {
            base_url: base_url.into(),
            api_key,
            timeout: default_timeout(),
            default_status: default_status(),
            default_category: None,
        }
    }
}
