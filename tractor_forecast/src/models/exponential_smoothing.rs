//! Pre-fitted Holt-Winters exponential smoothing model

use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, ForecastResult};
use crate::period::Period;
use sales_math::SmoothingState;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

fn default_name() -> String {
    "Holt-Winters".to_string()
}

/// Smoothing coefficients the model was fitted with
///
/// Kept for reporting only; forecasting uses the final components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SmoothingCoefficients {
    /// Level smoothing
    pub alpha: Option<f64>,
    /// Trend smoothing
    pub beta: Option<f64>,
    /// Seasonal smoothing
    pub gamma: Option<f64>,
}

impl SmoothingCoefficients {
    fn validate(&self) -> Result<()> {
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta), ("gamma", self.gamma)] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ForecastError::DataError(format!(
                        "{} must be between 0 and 1, got {}",
                        name, v
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Holt-Winters model restored from its fitted parameters
///
/// The parameter file is JSON:
///
/// ```json
/// {
///   "anchor": "2014-12",
///   "trend": "additive",
///   "seasonal": "multiplicative",
///   "level": 612.4,
///   "slope": 4.9,
///   "seasonals": [0.81, 0.79, 0.88, 1.03, 1.21, 1.17, 1.09, 1.02, 0.89, 0.86, 0.79, 0.86],
///   "coefficients": { "alpha": 0.6, "beta": 0.05, "gamma": 0.3 },
///   "residual_std": 18.2
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedHoltWinters {
    /// Name of the model
    #[serde(default = "default_name")]
    name: String,
    /// Last period of the training series
    anchor: Period,
    /// Final smoothing components
    #[serde(flatten)]
    state: SmoothingState,
    /// Fitted coefficients
    #[serde(default)]
    coefficients: SmoothingCoefficients,
    /// Standard deviation of in-sample residuals
    #[serde(default)]
    residual_std: Option<f64>,
}

impl FittedHoltWinters {
    /// Create a model from its final state
    pub fn new(anchor: Period, state: SmoothingState) -> Result<Self> {
        let model = Self {
            name: default_name(),
            anchor,
            state,
            coefficients: SmoothingCoefficients::default(),
            residual_std: None,
        };
        model.validate()?;
        Ok(model)
    }

    /// Restore a model from its JSON parameters
    pub fn from_json_str(json: &str) -> Result<Self> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Restore a model from a JSON parameter file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading model parameters");
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize the parameters to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the residual standard deviation
    pub fn with_residual_std(mut self, residual_std: f64) -> Result<Self> {
        self.residual_std = Some(residual_std);
        self.validate()?;
        Ok(self)
    }

    /// Set the fitted coefficients
    pub fn with_coefficients(mut self, coefficients: SmoothingCoefficients) -> Result<Self> {
        self.coefficients = coefficients;
        self.validate()?;
        Ok(self)
    }

    /// Final smoothing components
    pub fn state(&self) -> &SmoothingState {
        &self.state
    }

    /// Fitted coefficients
    pub fn coefficients(&self) -> &SmoothingCoefficients {
        &self.coefficients
    }

    fn validate(&self) -> Result<()> {
        self.state.validate()?;
        self.coefficients.validate()?;
        if let Some(sigma) = self.residual_std {
            if !(sigma.is_finite() && sigma >= 0.0) {
                return Err(ForecastError::DataError(
                    "residual_std must be a non-negative number".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl ForecastModel for FittedHoltWinters {
    fn forecast(&self, steps: usize) -> Result<ForecastResult> {
        let values = self.state.forecast(steps)?;
        Ok(ForecastResult::new(values, steps)?.with_residual_std(self.residual_std))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn anchor(&self) -> Option<Period> {
        Some(self.anchor)
    }
}
