use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{DealrankError, Result};
use crate::score::Weights;

/// Persisted dealrank settings: scoring weights plus the result-count cap.
/// Loaded once per invocation and passed by value into the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_price_weight")]
    pub price_weight: f64,

    #[serde(default = "default_rating_weight")]
    pub rating_weight: f64,

    #[serde(default = "default_review_weight")]
    pub review_weight: f64,

    /// Maximum candidates in a ranked result
    #[serde(default = "default_max_products")]
    pub max_products: usize,
}

fn default_price_weight() -> f64 {
    30.0
}

fn default_rating_weight() -> f64 {
    40.0
}

fn default_review_weight() -> f64 {
    30.0
}

fn default_max_products() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            price_weight: default_price_weight(),
            rating_weight: default_rating_weight(),
            review_weight: default_review_weight(),
            max_products: default_max_products(),
        }
    }
}

impl Settings {
    /// Load settings from the default location; missing file means defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| DealrankError::ConfigError(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Get the config file path
    ///
    /// Supports DEALRANK_CONFIG environment variable for test isolation
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("DEALRANK_CONFIG") {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", "dealrank").ok_or_else(|| {
            DealrankError::ConfigError("Could not determine config directory".into())
        })?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// The scoring weights carried by these settings
    pub fn weights(&self) -> Weights {
        Weights {
            price_weight: self.price_weight,
            rating_weight: self.rating_weight,
            review_weight: self.review_weight,
        }
    }
}
