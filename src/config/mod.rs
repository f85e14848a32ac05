//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{AnalysisOptions, Period, DEFAULT_MIN_BUCKET_GAMES, DEFAULT_TOP_N};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Defaults applied to every analysis run from the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Entries per best/worst list
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Games a bucket needs before it is ranked
    #[serde(default = "default_min_bucket_games")]
    pub min_bucket_games: u32,

    /// Period used when the command line does not name one
    #[serde(default)]
    pub default_period: Period,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_min_bucket_games() -> u32 {
    DEFAULT_MIN_BUCKET_GAMES
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            min_bucket_games: default_min_bucket_games(),
            default_period: Period::default(),
        }
    }
}

impl AnalysisConfig {
    /// Analysis options seeded from these defaults.
    pub fn to_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            period: self.default_period,
            top_n: self.top_n,
            min_bucket_games: self.min_bucket_games,
            ..AnalysisOptions::default()
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// JSON Lines file with match records, most recent first
    #[serde(default)]
    pub records_path: Option<PathBuf>,

    /// Analysis defaults
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            records_path: None,
            analysis: AnalysisConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, or the defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.top_n == 0 {
            return Err(ConfigError::ValidationError(
                "analysis.top_n must be greater than 0".to_string(),
            ));
        }

        if self.analysis.min_bucket_games == 0 {
            return Err(ConfigError::ValidationError(
                "analysis.min_bucket_games must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
