//! # Tractor Forecast
//!
//! Monthly tractor sales: historical lookup with a forecast fallback.
//!
//! ## Features
//!
//! - Month-granular periods with signed month arithmetic
//! - An immutable series store loaded from a `Month-Year` CSV
//! - A pre-fitted Holt-Winters model restored from JSON parameters
//! - A resolver that answers from history when it can and forecasts otherwise
//!
//! ## Resolution
//!
//! A target month found in the series is returned exactly. A target after the
//! last observation is forecast `offset` steps ahead, where `offset` is the
//! month distance from the last observation, and the final step is returned.
//! A target inside the series with no observation is a gap and yields
//! `ForecastError::DataUnavailable`.
//!
//! ## Quick Start
//!
//! ```rust
//! use sales_math::{ComponentKind, SmoothingState};
//! use tractor_forecast::{resolve, FittedHoltWinters, Observation, Period, SeriesStore, ValueSource};
//!
//! let last = Period::new(2023, 12)?;
//! let store = SeriesStore::new(vec![Observation::new(last, 350.0)])?;
//!
//! let state = SmoothingState::new(350.0)?.with_trend(ComponentKind::Additive, 2.0)?;
//! let model = FittedHoltWinters::new(last, state)?;
//!
//! let history = resolve(last, &store, &model)?;
//! assert_eq!(history.source, ValueSource::Historical);
//!
//! let forecast = resolve(Period::new(2024, 3)?, &store, &model)?;
//! assert_eq!(forecast.offset, 3);
//! assert_eq!(forecast.units(), 356);
//! # Ok::<(), tractor_forecast::ForecastError>(())
//! ```

pub mod config;
pub mod context;
pub mod data;
pub mod error;
pub mod models;
pub mod period;
pub mod resolver;
pub mod series;

// Re-export commonly used types
pub use crate::config::AppConfig;
pub use crate::context::ForecastContext;
pub use crate::data::DataLoader;
pub use crate::error::{ForecastError, Result};
pub use crate::models::{FittedHoltWinters, ForecastModel, ForecastResult, SynchronizedModel};
pub use crate::period::{months_between, Period};
pub use crate::resolver::{forecast_path, resolve, Resolution, ValueSource};
pub use crate::series::{Observation, SeriesStore};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
