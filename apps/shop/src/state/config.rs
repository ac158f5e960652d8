//! # Store Configuration
//!
//! Settings loaded once when a session starts.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BLOOM_STORE_NAME="Bloom Centro"                                    │
//! │     BLOOM_STARTER_KIT=1,2,4                                            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/bloom-storefront/storefront.toml (Linux)                 │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! store_name = "Bloom Skin Studio"
//! currency_code = "COP"
//! starter_kit = [1, 2, 4]
//! default_sort = "featured"
//! ```
//!
//! Configuration is read-only once the session holds it.

use bloom_core::{ProductId, SortMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

// =============================================================================
// Config Error
// =============================================================================

/// Failures while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for `StoreConfig`.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values are present but unusable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Convenience type alias for config results.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Store Config
// =============================================================================

/// Storefront settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store name shown in the page header.
    pub store_name: String,

    /// ISO 4217 currency of catalog prices; the renderer formats with it.
    pub currency_code: String,

    /// Products the "kit" button adds, one of each, in order.
    pub starter_kit: Vec<ProductId>,

    /// Sort mode a fresh query starts with.
    pub default_sort: SortMode,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: "Bloom Skin Studio".to_string(),
            currency_code: "COP".to_string(),
            starter_kit: vec![ProductId::new(1), ProductId::new(2), ProductId::new(4)],
            default_sort: SortMode::Featured,
        }
    }
}

impl StoreConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, or the platform config dir)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load store config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading store config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.store_name.trim().is_empty() {
            return Err(ConfigError::Invalid("store_name must not be empty".into()));
        }

        if self.currency_code.trim().is_empty() {
            return Err(ConfigError::Invalid("currency_code must not be empty".into()));
        }

        if self.starter_kit.iter().any(|id| id.get() == 0) {
            return Err(ConfigError::Invalid(
                "starter_kit ids must be positive".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the process environment in
    /// production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("BLOOM_STORE_NAME") {
            debug!(store_name = %name, "Overriding store name from environment");
            self.store_name = name;
        }

        if let Some(code) = lookup("BLOOM_CURRENCY") {
            self.currency_code = code.trim().to_uppercase();
        }

        if let Some(raw) = lookup("BLOOM_STARTER_KIT") {
            let parsed: Result<Vec<ProductId>, _> = raw
                .split(',')
                .filter(|part| !part.trim().is_empty())
                .map(str::parse)
                .collect();
            match parsed {
                Ok(ids) => self.starter_kit = ids,
                Err(e) => warn!(starter_kit = %raw, error = %e, "Ignoring invalid starter kit"),
            }
        }

        if let Some(raw) = lookup("BLOOM_DEFAULT_SORT") {
            match raw.parse() {
                Ok(sort) => self.default_sort = sort,
                Err(e) => warn!(sort = %raw, error = %e, "Ignoring invalid default sort"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("co", "bloom", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.currency_code, "COP");
        assert_eq!(
            config.starter_kit,
            vec![ProductId::new(1), ProductId::new(2), ProductId::new(4)]
        );
        assert_eq!(config.default_sort, SortMode::Featured);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "store_name = \"Bloom Centro\"").unwrap();
        writeln!(file, "default_sort = \"price-desc\"").unwrap();

        let config = StoreConfig::from_file(file.path()).unwrap();
        assert_eq!(config.store_name, "Bloom Centro");
        assert_eq!(config.default_sort, SortMode::PriceDescending);
        // Missing keys keep defaults
        assert_eq!(config.currency_code, "COP");
        assert_eq!(config.starter_kit.len(), 3);
    }

    #[test]
    fn test_from_file_starter_kit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "starter_kit = [6, 3]").unwrap();

        let config = StoreConfig::from_file(file.path()).unwrap();
        assert_eq!(config.starter_kit, vec![ProductId::new(6), ProductId::new(3)]);
    }

    #[test]
    fn test_from_file_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_sort = \"cheapest\"").unwrap();

        assert!(matches!(
            StoreConfig::from_file(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let config = StoreConfig::load_or_default(Some(path));
        assert_eq!(config.store_name, StoreConfig::default().store_name);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = StoreConfig {
            store_name: "  ".to_string(),
            ..StoreConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = StoreConfig {
            starter_kit: vec![ProductId::new(0)],
            ..StoreConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides_win() {
        let mut config = StoreConfig::default();
        config.apply_overrides(lookup_from(&[
            ("BLOOM_STORE_NAME", "Bloom Norte"),
            ("BLOOM_CURRENCY", " usd "),
            ("BLOOM_STARTER_KIT", "5, 6"),
            ("BLOOM_DEFAULT_SORT", "price-asc"),
        ]));

        assert_eq!(config.store_name, "Bloom Norte");
        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.starter_kit, vec![ProductId::new(5), ProductId::new(6)]);
        assert_eq!(config.default_sort, SortMode::PriceAscending);
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let mut config = StoreConfig::default();
        config.apply_overrides(lookup_from(&[
            ("BLOOM_STARTER_KIT", "1,two"),
            ("BLOOM_DEFAULT_SORT", "random"),
        ]));

        assert_eq!(config, StoreConfig::default());
    }
}
