//! Configuration management

use crate::catalog::{default_catalog_rows, CatalogRow};
use crate::core::{Currency, Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    /// Default power ratings offered when adding equipment
    #[serde(default = "default_catalog_rows")]
    pub catalog: Vec<CatalogRow>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            pricing: PricingConfig::default(),
            storage: StorageConfig::default(),
            catalog: default_catalog_rows(),
        }
    }
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join("powercost-estimator");

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            log::info!("Created default configuration at {}", path.display());
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;

        if config.pricing.rate_per_kwh < 0.0 || !config.pricing.rate_per_kwh.is_finite() {
            return Err(Error::Config(format!(
                "rate_per_kwh must be a non-negative number, got {}",
                config.pricing.rate_per_kwh
            )));
        }

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Re-read the file at `path`, apply `change` and write it back.
    ///
    /// Fails without touching the file when it cannot be read or does not validate.
    pub fn update_file(path: &Path, change: impl FnOnce(&mut Config)) -> Result<Self> {
        let mut config = Self::load_from(path)?;
        change(&mut config);
        config.save_to(path)?;
        log::info!("Saved configuration to {}", path.display());
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "en", "fr"
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String { "auto".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// Pricing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Currency the rate is expressed in (INR, USD, EUR, GBP)
    #[serde(default)]
    pub currency: Currency,
    /// Flat rate per kWh
    #[serde(default)]
    pub rate_per_kwh: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            rate_per_kwh: 0.0,
        }
    }
}

/// Where records and reports are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Append-only CSV of every added entry
    #[serde(default = "default_record_file")]
    pub record_file: PathBuf,
    /// Spreadsheet written by the export action
    #[serde(default = "default_export_file")]
    pub export_file: PathBuf,
}

fn default_record_file() -> PathBuf { PathBuf::from("electricity_consumption.csv") }
fn default_export_file() -> PathBuf { PathBuf::from("electricity_consumption.xlsx") }

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            record_file: default_record_file(),
            export_file: default_export_file(),
        }
    }
}
