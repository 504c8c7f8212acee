//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::stats::StatField;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// disease.sh API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://disease.sh".to_string()
}

fn default_request_timeout() -> u64 {
    15
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Dashboard display configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_table_limit")]
    pub table_limit: usize,

    #[serde(default = "default_history_days")]
    pub history_days: u32,

    /// Metric highlighted by default: cases, deaths, recovered, or their
    /// today_* variants
    #[serde(default = "default_metric")]
    pub metric: String,
}

fn default_table_limit() -> usize {
    20
}

fn default_history_days() -> u32 {
    120
}

fn default_metric() -> String {
    "cases".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            table_limit: default_table_limit(),
            history_days: default_history_days(),
            metric: default_metric(),
        }
    }
}

impl DashboardConfig {
    /// Parse the configured metric, falling back to cases if it is invalid.
    pub fn metric_field(&self) -> StatField {
        match self.metric.parse() {
            Ok(field) => field,
            Err(e) => {
                tracing::warn!("invalid configured metric: {}", e);
                StatField::Cases
            }
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("covtrack").join("config.toml")),
            Some(PathBuf::from("/etc/covtrack/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("COVTRACK_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(timeout) = std::env::var("COVTRACK_API_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.api.request_timeout_secs = t;
            }
        }

        if let Ok(limit) = std::env::var("COVTRACK_TABLE_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.dashboard.table_limit = l;
            }
        }
        if let Ok(metric) = std::env::var("COVTRACK_METRIC") {
            self.dashboard.metric = metric;
        }

        if let Ok(level) = std::env::var("COVTRACK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("COVTRACK_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Covtrack Configuration
#
# Environment variables override these settings:
# - COVTRACK_API_URL
# - COVTRACK_API_TIMEOUT_SECS
# - COVTRACK_TABLE_LIMIT
# - COVTRACK_METRIC
# - COVTRACK_LOG_LEVEL
# - COVTRACK_LOG_FORMAT

[api]
# disease.sh API base URL
base_url = "https://disease.sh"

# Request timeout in seconds
request_timeout_secs = 15

[dashboard]
# Rows shown in the country table
table_limit = 20

# Days of worldwide history for the graph
history_days = 120

# Metric highlighted by default: cases, today_cases, deaths, today_deaths,
# recovered, today_recovered
metric = "cases"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
