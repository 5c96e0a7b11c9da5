//! Historical sales observations indexed by period

use crate::error::{ForecastError, Result};
use crate::period::Period;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single month of recorded sales
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Month the sales belong to
    pub period: Period,
    /// Units sold
    pub value: f64,
}

impl Observation {
    /// Create a new observation
    pub fn new(period: Period, value: f64) -> Self {
        Self { period, value }
    }
}

/// Immutable store of historical observations, one per period
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesStore {
    observations: BTreeMap<Period, f64>,
}

impl SeriesStore {
    /// Build a store from observations in any order
    ///
    /// Duplicate periods, negative and non-finite values are rejected.
    pub fn new<I>(observations: I) -> Result<Self>
    where
        I: IntoIterator<Item = Observation>,
    {
        let mut map = BTreeMap::new();
        for obs in observations {
            if !obs.value.is_finite() || obs.value < 0.0 {
                return Err(ForecastError::DataError(format!(
                    "sales for {} must be a non-negative number, got {}",
                    obs.period, obs.value
                )));
            }
            if map.insert(obs.period, obs.value).is_some() {
                return Err(ForecastError::DataError(format!(
                    "duplicate observation for {}",
                    obs.period
                )));
            }
        }
        Ok(Self { observations: map })
    }

    /// True iff an observation exists for exactly this period
    pub fn contains(&self, period: Period) -> bool {
        self.observations.contains_key(&period)
    }

    /// Stored value for a period
    pub fn get(&self, period: Period) -> Result<f64> {
        self.observations
            .get(&period)
            .copied()
            .ok_or(ForecastError::NotFound(period))
    }

    /// Most recent period in the store
    pub fn last_period(&self) -> Result<Period> {
        self.observations
            .keys()
            .next_back()
            .copied()
            .ok_or(ForecastError::EmptySeries)
    }

    /// Earliest period in the store
    pub fn first_period(&self) -> Result<Period> {
        self.observations
            .keys()
            .next()
            .copied()
            .ok_or(ForecastError::EmptySeries)
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Observations in chronological order
    pub fn iter(&self) -> impl Iterator<Item = Observation> + '_ {
        self.observations
            .iter()
            .map(|(period, value)| Observation::new(*period, *value))
    }

    /// Periods missing between the first and last observation
    pub fn gaps(&self) -> Vec<Period> {
        let periods: Vec<Period> = self.observations.keys().copied().collect();
        periods
            .windows(2)
            .flat_map(|pair| pair[0].months_until(pair[1]))
            .collect()
    }

    /// Whether every month between the first and last observation is present
    pub fn is_contiguous(&self) -> bool {
        self.gaps().is_empty()
    }
}
