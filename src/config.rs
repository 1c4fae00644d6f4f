use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatasetsConfig {
    pub historical_prices: String,
    pub state_purchases: String,
}

impl Default for DatasetsConfig {
    fn default() -> Self {
        DatasetsConfig {
            historical_prices: "historical_silver_price.csv".to_string(),
            state_purchases: "state_wise_silver_purchased_kg.csv".to_string(),
        }
    }
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_price_per_gram() -> f64 {
    6500.0
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub datasets: DatasetsConfig,
    /// Display currency when the calculator is not given one explicitly.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Pre-filled price per gram for the calculator, in INR.
    #[serde(default = "default_price_per_gram")]
    pub price_per_gram: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            datasets: DatasetsConfig::default(),
            currency: default_currency(),
            price_per_gram: default_price_per_gram(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the platform config dir, falling back to
    /// defaults when no file exists there.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config file found, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "argent", "argent")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
