//! Forecasting models for monthly sales

use crate::error::{ForecastError, Result};
use crate::period::Period;
use statrs::distribution::{ContinuousCDF, Normal};
use std::fmt::Debug;

/// Forecast result containing predicted values
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    /// Forecasted values, one per step
    values: Vec<f64>,
    /// Number of periods forecasted
    horizons: usize,
    /// Standard deviation of the one-step residuals (optional)
    residual_std: Option<f64>,
}

impl ForecastResult {
    /// Create a new forecast result
    pub fn new(values: Vec<f64>, horizons: usize) -> Result<Self> {
        if values.len() != horizons {
            return Err(ForecastError::ForecastFailed(format!(
                "Values length ({}) doesn't match horizons ({})",
                values.len(),
                horizons
            )));
        }

        Ok(Self {
            values,
            horizons,
            residual_std: None,
        })
    }

    /// Attach the residual standard deviation used for intervals
    pub fn with_residual_std(mut self, residual_std: Option<f64>) -> Self {
        self.residual_std = residual_std;
        self
    }

    /// Get the forecasted values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the number of periods forecasted
    pub fn horizons(&self) -> usize {
        self.horizons
    }

    /// Value for the final forecasted period
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Prediction intervals at the given confidence level
    ///
    /// Uses a normal approximation whose width grows with the square root
    /// of the step number.
    pub fn confidence_intervals(&self, confidence_level: f64) -> Result<Vec<(f64, f64)>> {
        if !(confidence_level > 0.0 && confidence_level < 1.0) {
            return Err(ForecastError::ForecastFailed(
                "Confidence level must be between 0 and 1".to_string(),
            ));
        }
        let sigma = self.residual_std.ok_or_else(|| {
            ForecastError::ForecastFailed("Model provides no residual deviation".to_string())
        })?;

        let normal =
            Normal::new(0.0, 1.0).map_err(|e| ForecastError::ForecastFailed(e.to_string()))?;
        let z = normal.inverse_cdf(0.5 + confidence_level / 2.0);

        Ok(self
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let margin = z * sigma * ((i + 1) as f64).sqrt();
                (v - margin, v + margin)
            })
            .collect())
    }
}

/// A pre-fitted forecasting model
///
/// `forecast(n)` yields the `n` periods immediately following the model's
/// anchor period, in order. Implementations must not refit themselves.
pub trait ForecastModel: Debug {
    /// Generate forecast for the next `steps` periods
    fn forecast(&self, steps: usize) -> Result<ForecastResult>;

    /// Name of the model
    fn name(&self) -> &str;

    /// Last period the model was fitted on, if known
    fn anchor(&self) -> Option<Period> {
        None
    }
}

pub mod exponential_smoothing;
pub mod synchronized;

pub use exponential_smoothing::FittedHoltWinters;
pub use synchronized::SynchronizedModel;
