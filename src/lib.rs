//! # Tractor Forecast Workspace
//!
//! Umbrella crate re-exporting the workspace members:
//!
//! - [`tractor_forecast`]: periods, the sales series, models and the resolver
//! - [`sales_math`]: exponential smoothing recursions
//!
//! ## Example
//!
//! ```
//! use tractor_forecast_workspace::tractor_forecast::{months_between, Period};
//!
//! let last = Period::new(2023, 12).unwrap();
//! let target = Period::new(2025, 2).unwrap();
//! assert_eq!(months_between(last, target), 14);
//! ```

pub use sales_math;
pub use tractor_forecast;
