//! # Sales Math
//!
//! Numeric building blocks for sales forecasting.
//! This crate holds the state of a fitted exponential smoothing model and the
//! recursion that extends it any number of steps past its anchor period. It
//! performs no I/O and knows nothing about calendars.

use thiserror::Error;

pub mod smoothing;

pub use smoothing::{ComponentKind, SmoothingState, MAX_HORIZON};

/// Errors that can occur in smoothing calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for sales math operations
pub type Result<T> = std::result::Result<T, MathError>;
