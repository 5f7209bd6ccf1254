//! Configuration system for Motorspec
//!
//! Supports loading configuration from:
//! 1. CLI --config argument (`.json` or `.toml`)
//! 2. ~/.config/motorspec/config.{MOTORSPEC_ENV}.json
//! 3. Default values
//!
//! Where MOTORSPEC_ENV can be: production (default), development, test
//!
//! # Examples
//!
//! ```
//! use motorspec::config::AppConfig;
//!
//! let mut config = AppConfig::default();
//! config.site_url = "https://engines.example.com/".to_string();
//! config.validate().unwrap();
//! assert_eq!(config.base_url(), "https://engines.example.com");
//! ```
//!
//! ## Environment Variables
//!
//! Environment variables override config file values:
//! - MOTORSPEC_SITE_URL
//! - MOTORSPEC_DATA_DIR
//! - MOTORSPEC_DEBUG

use crate::related::WindowPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Failed to parse config TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Site name used in page titles
    #[serde(default = "default_site_name")]
    pub site_name: String,

    /// Public base URL, used for canonical links and schema
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// Extra brand files to merge over the built-in catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Related engines window
    #[serde(default)]
    pub related: WindowPolicy,

    /// Number of assembled pages kept in memory
    #[serde(default = "default_page_cache_size")]
    pub page_cache_size: usize,

    /// Enable debug logging
    #[serde(default)]
    pub debug: bool,
}

fn default_site_name() -> String {
    "Motorspec".to_string()
}

fn default_site_url() -> String {
    "https://motorspec.example.com".to_string()
}

fn default_page_cache_size() -> usize {
    256
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            site_url: default_site_url(),
            data_dir: None,
            related: WindowPolicy::default(),
            page_cache_size: default_page_cache_size(),
            debug: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config: AppConfig = match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration with standard priority:
    /// 1. Explicit path
    /// 2. ~/.config/motorspec/config.{MOTORSPEC_ENV}.json
    /// 3. Defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit_path {
            if path.exists() {
                tracing::info!("Loading config from: {:?}", path);
                return Self::from_file(path);
            } else {
                return Err(ConfigError::ValidationError(format!(
                    "Config file not found: {:?}",
                    path
                )));
            }
        }

        let env = std::env::var("MOTORSPEC_ENV").unwrap_or_else(|_| "production".to_string());

        if let Some(config_dir) = Self::config_dir() {
            let config_path = config_dir.join(format!("config.{}.json", env));

            if config_path.exists() {
                tracing::info!("Loading config from: {:?}", config_path);
                return Self::from_file(&config_path);
            }
        }

        tracing::info!("Using default configuration with environment overrides");
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("MOTORSPEC_SITE_URL") {
            self.site_url = url;
        }

        if let Ok(dir) = std::env::var("MOTORSPEC_DATA_DIR") {
            if !dir.trim().is_empty() {
                self.data_dir = Some(PathBuf::from(dir));
            }
        }

        if let Ok(debug) = std::env::var("MOTORSPEC_DEBUG") {
            self.debug = debug.eq_ignore_ascii_case("true")
                || debug == "1"
                || debug.eq_ignore_ascii_case("yes");
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.site_url.trim();
        if url.is_empty() {
            return Err(ConfigError::ValidationError(
                "site_url cannot be empty".to_string(),
            ));
        }

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationError(format!(
                "site_url must start with http:// or https://, got {}",
                url
            )));
        }

        if self.site_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "site_name cannot be empty".to_string(),
            ));
        }

        if self.page_cache_size == 0 {
            return Err(ConfigError::ValidationError(
                "page_cache_size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Site URL without trailing slashes
    pub fn base_url(&self) -> &str {
        self.site_url.trim().trim_end_matches('/')
    }

    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("motorspec"))
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.related, WindowPolicy::new(3, 4, 7));
        assert_eq!(config.page_cache_size, 256);
    }

    #[test]
    fn test_site_url_validation() {
        let mut config = AppConfig::default();
        config.site_url = "".to_string();
        assert!(config.validate().is_err());

        config.site_url = "ftp://engines.example.com".to_string();
        assert!(config.validate().is_err());

        config.site_url = "http://localhost:3000/".to_string();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_zero_cache_rejected() {
        let config = AppConfig {
            page_cache_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"site_name": "Engines", "related": {"total": 5}}"#).unwrap();
        assert_eq!(config.site_name, "Engines");
        assert_eq!(config.site_url, default_site_url());
        assert_eq!(config.related, WindowPolicy::new(3, 4, 5));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.site_url, config.site_url);
        assert_eq!(parsed.related, config.related);
    }
}
