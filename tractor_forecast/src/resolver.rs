//! Resolving a target month to a historical or forecasted sales figure
//!
//! A target found in the series is answered from the store, exactly and
//! without touching the model. Anything else is measured against the last
//! stored period:
//!
//! - offset > 0: the model forecasts `offset` steps and the final step is the answer
//! - offset <= 0: the series has a gap at the target, reported as `DataUnavailable`

use crate::error::{ForecastError, Result};
use crate::models::ForecastModel;
use crate::period::{months_between, Period};
use crate::series::SeriesStore;
use sales_math::smoothing::MAX_HORIZON;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Where a resolved value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    /// Looked up in the historical series
    Historical,
    /// Produced by the forecast model
    Forecast,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValueSource::Historical => "Historical Sales",
            ValueSource::Forecast => "Forecasted Sales",
        };
        f.pad(label)
    }
}

/// A resolved sales figure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Requested period
    pub period: Period,
    /// Unrounded sales figure
    pub value: f64,
    /// Lookup or forecast
    pub source: ValueSource,
    /// Months past the last observation; zero for historical values
    pub offset: usize,
}

impl Resolution {
    /// Value rounded to whole units
    pub fn units(&self) -> i64 {
        self.value.round() as i64
    }

    /// Whether the value came from the historical series
    pub fn is_historical(&self) -> bool {
        self.source == ValueSource::Historical
    }
}

/// Number of steps from the store's last period to a target in the future
fn forecast_offset(target: Period, store: &SeriesStore) -> Result<usize> {
    let last = store.last_period()?;
    let offset = months_between(last, target);
    if offset <= 0 {
        debug!(%target, %last, offset, "target falls inside series without an observation");
        return Err(ForecastError::DataUnavailable { target, last });
    }
    match usize::try_from(offset) {
        Ok(steps) if steps <= MAX_HORIZON => Ok(steps),
        _ => Err(ForecastError::ForecastFailed(format!(
            "{} is {} months past {}, beyond the {} month forecast horizon",
            target, offset, last, MAX_HORIZON
        ))),
    }
}

/// Ask the model for `offset` steps, requiring at least that many values
fn forecast_steps<M>(model: &M, offset: usize) -> Result<Vec<f64>>
where
    M: ForecastModel + ?Sized,
{
    let forecast = model
        .forecast(offset)
        .map_err(|e| ForecastError::ForecastFailed(format!("{}: {}", model.name(), e)))?;

    if forecast.values().len() < offset {
        return Err(ForecastError::ForecastFailed(format!(
            "{} returned {} values for {} steps",
            model.name(),
            forecast.values().len(),
            offset
        )));
    }
    Ok(forecast.values().to_vec())
}

/// Resolve a target period to a sales figure
pub fn resolve<M>(target: Period, store: &SeriesStore, model: &M) -> Result<Resolution>
where
    M: ForecastModel + ?Sized,
{
    if store.contains(target) {
        let value = store.get(target)?;
        debug!(%target, value, "resolved from history");
        return Ok(Resolution {
            period: target,
            value,
            source: ValueSource::Historical,
            offset: 0,
        });
    }

    let offset = forecast_offset(target, store)?;
    let values = forecast_steps(model, offset)?;
    let value = values[offset - 1];

    debug!(%target, offset, value, model = model.name(), "resolved from forecast");
    Ok(Resolution {
        period: target,
        value,
        source: ValueSource::Forecast,
        offset,
    })
}

/// Every forecasted step from the month after the last observation through `target`
pub fn forecast_path<M>(target: Period, store: &SeriesStore, model: &M) -> Result<Vec<(Period, f64)>>
where
    M: ForecastModel + ?Sized,
{
    let offset = forecast_offset(target, store)?;
    let last = store.last_period()?;
    let values = forecast_steps(model, offset)?;

    values[..offset]
        .iter()
        .enumerate()
        .map(|(i, value)| Ok((last.add_months(i as i64 + 1)?, *value)))
        .collect()
}
