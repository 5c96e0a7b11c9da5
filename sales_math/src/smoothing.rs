//! Exponential smoothing state and its multi-step forecast recursion
//!
//! A fitted exponential smoothing model is fully described by its final
//! components:
//! - Level: the smoothed value at the anchor period
//! - Slope: the trend increment (additive) or growth factor (multiplicative)
//! - Seasonals: the last `m` seasonal factors, oldest first
//!
//! Forecasting never touches the smoothing coefficients, only these components.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Longest forecast, in steps, that `forecast` will compute
pub const MAX_HORIZON: usize = 1200;

/// How a trend or seasonal component combines with the level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Component absent
    #[default]
    None,
    /// Component is added to the level
    Additive,
    /// Component scales the level
    Multiplicative,
}

/// Final state of a fitted exponential smoothing model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothingState {
    /// Smoothed level at the anchor period
    pub level: f64,
    /// Trend term, ignored when `trend` is `None`
    #[serde(default)]
    pub slope: f64,
    /// Seasonal factors for the `m` periods ending at the anchor, oldest first
    #[serde(default)]
    pub seasonals: Vec<f64>,
    /// Trend component kind
    #[serde(default)]
    pub trend: ComponentKind,
    /// Seasonal component kind
    #[serde(default)]
    pub seasonal: ComponentKind,
    /// Damping factor phi applied to the trend, in (0, 1]
    #[serde(default)]
    pub damping: Option<f64>,
}

impl SmoothingState {
    /// Create a level-only state
    pub fn new(level: f64) -> Result<Self> {
        let state = Self {
            level,
            slope: 0.0,
            seasonals: Vec::new(),
            trend: ComponentKind::None,
            seasonal: ComponentKind::None,
            damping: None,
        };
        state.validate()?;
        Ok(state)
    }

    /// Add a trend component
    pub fn with_trend(mut self, kind: ComponentKind, slope: f64) -> Result<Self> {
        self.trend = kind;
        self.slope = slope;
        self.validate()?;
        Ok(self)
    }

    /// Add a seasonal component
    pub fn with_seasonal(mut self, kind: ComponentKind, seasonals: Vec<f64>) -> Result<Self> {
        self.seasonal = kind;
        self.seasonals = seasonals;
        self.validate()?;
        Ok(self)
    }

    /// Damp the trend with factor `phi`
    pub fn with_damping(mut self, phi: f64) -> Result<Self> {
        self.damping = Some(phi);
        self.validate()?;
        Ok(self)
    }

    /// Number of periods in one seasonal cycle, zero without seasonality
    pub fn seasonal_period(&self) -> usize {
        match self.seasonal {
            ComponentKind::None => 0,
            _ => self.seasonals.len(),
        }
    }

    /// Check that the components describe a usable model
    pub fn validate(&self) -> Result<()> {
        if !self.level.is_finite() {
            return Err(MathError::InvalidInput(
                "Level must be a finite number".to_string(),
            ));
        }

        match self.trend {
            ComponentKind::None => {}
            ComponentKind::Additive if !self.slope.is_finite() => {
                return Err(MathError::InvalidInput(
                    "Additive slope must be a finite number".to_string(),
                ));
            }
            ComponentKind::Multiplicative if !(self.slope.is_finite() && self.slope > 0.0) => {
                return Err(MathError::InvalidInput(
                    "Multiplicative slope must be a positive finite number".to_string(),
                ));
            }
            _ => {}
        }

        if self.seasonal != ComponentKind::None {
            if self.seasonals.len() < 2 {
                return Err(MathError::InsufficientData(format!(
                    "Seasonal component needs at least 2 factors, got {}",
                    self.seasonals.len()
                )));
            }
            if self.seasonals.iter().any(|s| !s.is_finite()) {
                return Err(MathError::InvalidInput(
                    "Seasonal factors must be finite numbers".to_string(),
                ));
            }
        }

        if let Some(phi) = self.damping {
            if self.trend == ComponentKind::None {
                return Err(MathError::InvalidInput(
                    "Damping requires a trend component".to_string(),
                ));
            }
            if !(phi > 0.0 && phi <= 1.0) {
                return Err(MathError::InvalidInput(
                    "Damping factor must be in (0, 1]".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Forecast the `horizon` periods immediately following the anchor, in order
    pub fn forecast(&self, horizon: usize) -> Result<Vec<f64>> {
        if horizon == 0 {
            return Err(MathError::InvalidInput(
                "Forecast horizon must be at least 1".to_string(),
            ));
        }
        if horizon > MAX_HORIZON {
            return Err(MathError::InvalidInput(format!(
                "Forecast horizon {} exceeds the maximum of {}",
                horizon, MAX_HORIZON
            )));
        }
        self.validate()?;

        let phi = self.damping.unwrap_or(1.0);
        let season_len = self.seasonal_period();

        // Running sum of phi^1 + ... + phi^h; equals h when undamped
        let mut trend_weight = 0.0;
        let mut phi_power = 1.0;
        let mut values = Vec::with_capacity(horizon);

        for h in 1..=horizon {
            phi_power *= phi;
            trend_weight += phi_power;

            let base = match self.trend {
                ComponentKind::None => self.level,
                ComponentKind::Additive => self.level + trend_weight * self.slope,
                ComponentKind::Multiplicative => self.level * self.slope.powf(trend_weight),
            };

            let value = match self.seasonal {
                ComponentKind::None => base,
                ComponentKind::Additive => base + self.seasonals[(h - 1) % season_len],
                ComponentKind::Multiplicative => base * self.seasonals[(h - 1) % season_len],
            };

            if !value.is_finite() {
                return Err(MathError::CalculationError(format!(
                    "Forecast diverged at step {}",
                    h
                )));
            }
            values.push(value);
        }

        Ok(values)
    }
}
