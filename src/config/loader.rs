//! Configuration Loader
//!
//! Loads and validates configuration from TOML files matching the structure
//! of config/default.toml. Provider base URLs are required and validated
//! before any network call; environment variables override the file values
//! at read time.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Default RugCheck gate: tokens scoring below this are dropped when the
/// gate is active
pub const DEFAULT_RUG_SCORE_THRESHOLD: f64 = 50.0;

fn default_timeout_secs() -> u64 {
    10
}

fn default_rug_threshold() -> f64 {
    DEFAULT_RUG_SCORE_THRESHOLD
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure matching config/default.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub sources: SourcesSection,
    #[serde(default)]
    pub filters: FiltersSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Provider endpoint configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesSection {
    /// pump.fun API base URL
    pub pump_fun_url: String,
    /// DexScreener API base URL
    pub dexscreener_url: String,
    /// RugCheck API base URL
    pub rugcheck_url: String,
    /// Request timeout in seconds for every provider call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl SourcesSection {
    /// pump.fun URL with environment variable override.
    /// Checks PUMPFUN_URL first, falls back to the config value.
    pub fn get_pump_fun_url(&self) -> String {
        std::env::var("PUMPFUN_URL").unwrap_or_else(|_| self.pump_fun_url.clone())
    }

    /// DexScreener URL with environment variable override.
    /// Checks DEX_API_URL first, falls back to the config value.
    pub fn get_dexscreener_url(&self) -> String {
        std::env::var("DEX_API_URL").unwrap_or_else(|_| self.dexscreener_url.clone())
    }

    /// RugCheck URL with environment variable override.
    /// Checks RUGCHECK_API_URL first, falls back to the config value.
    pub fn get_rugcheck_url(&self) -> String {
        std::env::var("RUGCHECK_API_URL").unwrap_or_else(|_| self.rugcheck_url.clone())
    }
}

/// Filter policy section: each rule toggles independently, no forked
/// pipeline variants
#[derive(Debug, Clone, Deserialize)]
pub struct FiltersSection {
    /// Keep only tokens on the Solana chain
    #[serde(default)]
    pub solana_only: bool,
    /// Drop tokens flagged by the suspicion heuristics
    #[serde(default)]
    pub drop_suspicious: bool,
    /// Drop tokens whose RugCheck score is absent or below the threshold
    #[serde(default)]
    pub rug_score_gate: bool,
    /// RugCheck score threshold used by the gate
    #[serde(default = "default_rug_threshold")]
    pub rug_score_threshold: f64,
}

impl Default for FiltersSection {
    fn default() -> Self {
        Self {
            solana_only: false,
            drop_suspicious: false,
            rug_score_gate: false,
            rug_score_threshold: DEFAULT_RUG_SCORE_THRESHOLD,
        }
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters. A missing provider URL is
    /// fatal here, before any network call.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sources.pump_fun_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "pump_fun_url cannot be empty".to_string(),
            ));
        }

        if self.sources.dexscreener_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "dexscreener_url cannot be empty".to_string(),
            ));
        }

        if self.sources.rugcheck_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "rugcheck_url cannot be empty".to_string(),
            ));
        }

        if self.sources.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(format!(
                "timeout_secs must be > 0, got {}",
                self.sources.timeout_secs
            )));
        }

        if self.filters.rug_score_threshold < 0.0 || self.filters.rug_score_threshold > 100.0 {
            return Err(ConfigError::ValidationError(format!(
                "rug_score_threshold must be 0-100, got {}",
                self.filters.rug_score_threshold
            )));
        }

        Ok(())
    }
}
