use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Finder configuration: where to look recipes up and how to talk to it
#[derive(Debug, Deserialize, Clone)]
pub struct FinderConfig {
    /// Base URL of the recipe lookup API
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Base URL of the human-facing meal detail pages
    #[serde(default = "default_meal_page_base")]
    pub meal_page_base: String,
    /// Per-request timeout in seconds; `None` means no timeout at all,
    /// matching the original page's behavior
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// User agent sent with every lookup request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            meal_page_base: default_meal_page_base(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_api_base() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_meal_page_base() -> String {
    "https://www.themealdb.com/meal".to_string()
}

fn default_user_agent() -> String {
    format!("pantry-finder/{}", env!("CARGO_PKG_VERSION"))
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with PANTRY_ prefix
/// 2. config.toml file in current directory
/// 3. Default values
///
/// Environment variable format: PANTRY_API_BASE
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("PANTRY")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
