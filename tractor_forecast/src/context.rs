//! Process-wide series and model, loaded once

use crate::config::AppConfig;
use crate::data::DataLoader;
use crate::error::{ForecastError, Result};
use crate::models::{FittedHoltWinters, ForecastModel, SynchronizedModel};
use crate::period::Period;
use crate::resolver::{self, Resolution};
use crate::series::SeriesStore;
use std::sync::{Arc, OnceLock};
use tracing::info;

static GLOBAL: OnceLock<ForecastContext> = OnceLock::new();

/// Read-only series plus the shared model fitted on it
#[derive(Debug, Clone)]
pub struct ForecastContext {
    store: Arc<SeriesStore>,
    model: SynchronizedModel<FittedHoltWinters>,
}

impl ForecastContext {
    /// Pair a series with its model, checking the model is anchored at the series' end
    pub fn new(store: SeriesStore, model: FittedHoltWinters) -> Result<Self> {
        let last = store.last_period()?;
        if let Some(anchor) = model.anchor() {
            if anchor != last {
                return Err(ForecastError::ModelMismatch {
                    model: anchor,
                    series: last,
                });
            }
        }
        Ok(Self {
            store: Arc::new(store),
            model: SynchronizedModel::new(model),
        })
    }

    /// Load the series and model named by the configuration
    pub fn load(config: &AppConfig) -> Result<Self> {
        let store = DataLoader::from_csv(&config.data_path)?;
        let model = FittedHoltWinters::from_json_file(&config.model_path)?;
        let context = Self::new(store, model)?;
        info!(
            observations = context.store.len(),
            model = context.model.name(),
            "forecast context ready"
        );
        Ok(context)
    }

    /// Process-wide context, loaded on first call
    ///
    /// Later calls return the first instance and ignore `config`.
    pub fn global(config: &AppConfig) -> Result<&'static ForecastContext> {
        if let Some(context) = GLOBAL.get() {
            return Ok(context);
        }
        let context = Self::load(config)?;
        // A concurrent initializer may have won; either instance is equivalent
        let _ = GLOBAL.set(context);
        GLOBAL
            .get()
            .ok_or_else(|| ForecastError::ConfigError("context not initialized".to_string()))
    }

    /// Historical series
    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    /// Shared model
    pub fn model(&self) -> &SynchronizedModel<FittedHoltWinters> {
        &self.model
    }

    /// Resolve a target period against this context
    pub fn resolve(&self, target: Period) -> Result<Resolution> {
        resolver::resolve(target, &self.store, &self.model)
    }

    /// Forecast every month from the end of the series through `target`
    pub fn forecast_path(&self, target: Period) -> Result<Vec<(Period, f64)>> {
        resolver::forecast_path(target, &self.store, &self.model)
    }
}
