//! Configuration management for Smart Tour server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::analytics::InsightThresholds;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    /// When set, logs are also written to a daily rolling file in this directory
    pub directory: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Range used when a request does not name one (7d, 30d, 90d, 1y)
    pub default_range: String,
    /// Region label reported when a request does not name one
    pub default_region: String,
    /// Number of most recent days used for growth and prediction windows
    pub window_size: usize,
    /// Seconds between background refreshes of the cached series (0 disables)
    pub refresh_interval_secs: u64,
    pub thresholds: InsightThresholds,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChatbotConfig {
    /// Language used when a message names none, and for untranslated languages
    pub default_language: String,
    /// Oldest turns beyond this count are dropped
    pub max_history: usize,
    /// JSON file mirroring the conversation history; in memory only when unset
    pub history_file: Option<String>,
    /// JSON reply table replacing the built-in one
    pub responses_file: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub chatbot: ChatbotConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (e.g. SMART_TOUR__SERVER__PORT=9000)
            .add_source(
                Environment::with_prefix("SMART_TOUR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            directory: None,
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            default_range: "30d".to_string(),
            default_region: "all".to_string(),
            window_size: 7,
            refresh_interval_secs: 300,
            thresholds: InsightThresholds::default(),
        }
    }
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            max_history: 500,
            history_file: None,
            responses_file: None,
        }
    }
}
