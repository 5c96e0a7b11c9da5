//! Error types for the tractor_forecast crate

use crate::period::Period;
use thiserror::Error;

/// Custom error types for the tractor_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The series store holds no observations
    #[error("Series is empty")]
    EmptySeries,

    /// A lookup was made for a period the store does not hold
    #[error("No observation for {0}")]
    NotFound(Period),

    /// The target lies inside the known range but has no observation
    #[error("Data not available for {target} (last observation {last})")]
    DataUnavailable {
        /// Requested period
        target: Period,
        /// Last period held by the series
        last: Period,
    },

    /// The forecast model failed or returned too few values
    #[error("Forecast failed: {0}")]
    ForecastFailed(String),

    /// A period could not be built or parsed
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// The model is anchored somewhere other than the series' last period
    #[error("Model anchored at {model} but series ends at {series}")]
    ModelMismatch {
        /// Anchor period of the model
        model: Period,
        /// Last period of the series
        series: Period,
    },

    /// Error in application configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error from JSON (de)serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the smoothing recursions
    #[error("Math error: {0}")]
    Math(#[from] sales_math::MathError),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
