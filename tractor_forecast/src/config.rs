//! Application configuration

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the series file
pub const DATA_PATH_ENV: &str = "TRACTOR_DATA_PATH";

/// Environment variable overriding the model parameter file
pub const MODEL_PATH_ENV: &str = "TRACTOR_MODEL_PATH";

/// Where to find inputs and which years a caller may request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Historical sales CSV
    pub data_path: PathBuf,
    /// Fitted model parameters (JSON)
    pub model_path: PathBuf,
    /// Earliest selectable year
    pub min_year: i32,
    /// Latest selectable year
    pub max_year: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("Tractor-Sales.csv"),
            model_path: PathBuf::from("exponential_smoothing_model.json"),
            min_year: 2014,
            max_year: 2025,
        }
    }
}

impl AppConfig {
    /// Parse configuration from JSON; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    ///
    /// Relative data and model paths resolve against the file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::from_json_str(&fs::read_to_string(path)?)?;
        if let Some(dir) = path.parent() {
            if config.data_path.is_relative() {
                config.data_path = dir.join(&config.data_path);
            }
            if config.model_path.is_relative() {
                config.model_path = dir.join(&config.model_path);
            }
        }
        Ok(config)
    }

    /// Apply `TRACTOR_DATA_PATH` and `TRACTOR_MODEL_PATH` when set
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = env::var(DATA_PATH_ENV) {
            self.data_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var(MODEL_PATH_ENV) {
            self.model_path = PathBuf::from(path);
        }
        self
    }

    /// Reject inverted year ranges
    pub fn validate(&self) -> Result<()> {
        if self.min_year > self.max_year {
            return Err(ForecastError::ConfigError(format!(
                "min_year {} is after max_year {}",
                self.min_year, self.max_year
            )));
        }
        Ok(())
    }

    /// Check a requested year against the selectable range
    pub fn check_year(&self, year: i32) -> Result<()> {
        if year < self.min_year || year > self.max_year {
            return Err(ForecastError::InvalidPeriod(format!(
                "year {} outside {}-{}",
                year, self.min_year, self.max_year
            )));
        }
        Ok(())
    }
}
