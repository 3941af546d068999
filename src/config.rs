//! Storefront Configuration
//!
//! Presentation settings only. Prices, fragments and labels are fixed
//! tables and cannot be overridden here.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::DEFAULT_MAX_TEXT_LEN;
use crate::ENGINE_VERSION;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid version string: {0}")]
    InvalidVersion(String),

    #[error("Config requires engine >= {required}, current is {current}")]
    EngineVersionMismatch { required: String, current: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontConfig {
    #[serde(default = "default_version")]
    pub config_version: String,
    #[serde(default = "default_version")]
    pub engine_min_version: String,
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
    #[serde(default = "default_max_text_len")]
    pub max_text_length: usize,
    #[serde(default = "default_empty_label")]
    pub empty_text_label: String,
    #[serde(default)]
    pub placeholder: PlaceholderConfig,
}

fn default_version() -> String { "1.0.0".to_string() }
fn default_currency() -> String { "$".to_string() }
fn default_max_text_len() -> usize { DEFAULT_MAX_TEXT_LEN }
fn default_empty_label() -> String { "NOMBRE".to_string() }

/// Where substitute images come from when an asset is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_preview_size")]
    pub preview_size: String,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_foreground")]
    pub foreground: String,
    #[serde(default = "default_thumbnail_size")]
    pub thumbnail_size: String,
}

fn default_base_url() -> String { "https://placehold.co".to_string() }
fn default_preview_size() -> String { "400x400".to_string() }
fn default_background() -> String { "E2E8F0".to_string() }
fn default_foreground() -> String { "2C3E50".to_string() }
fn default_thumbnail_size() -> String { "100x100".to_string() }

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            preview_size: default_preview_size(),
            background: default_background(),
            foreground: default_foreground(),
            thumbnail_size: default_thumbnail_size(),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            config_version: default_version(),
            engine_min_version: default_version(),
            currency_symbol: default_currency(),
            max_text_length: default_max_text_len(),
            empty_text_label: default_empty_label(),
            placeholder: PlaceholderConfig::default(),
        }
    }
}

impl StorefrontConfig {
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.check_engine_version()?;
        Ok(config)
    }

    /// Load from `path`, or defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn check_engine_version(&self) -> Result<(), ConfigError> {
        let engine = semver::Version::parse(ENGINE_VERSION)
            .map_err(|_| ConfigError::InvalidVersion(ENGINE_VERSION.to_string()))?;
        semver::Version::parse(&self.config_version)
            .map_err(|_| ConfigError::InvalidVersion(self.config_version.clone()))?;
        let required = semver::Version::parse(&self.engine_min_version)
            .map_err(|_| ConfigError::InvalidVersion(self.engine_min_version.clone()))?;

        if engine < required {
            return Err(ConfigError::EngineVersionMismatch {
                required: self.engine_min_version.clone(),
                current: ENGINE_VERSION.to_string(),
            });
        }
        Ok(())
    }
}
