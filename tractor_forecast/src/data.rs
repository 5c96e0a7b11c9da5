//! Loading the historical sales series from CSV

use crate::error::{ForecastError, Result};
use crate::period::Period;
use crate::series::{Observation, SeriesStore};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Header of the month-year label column
pub const PERIOD_COLUMN: &str = "Month-Year";

/// Header of the units sold column
pub const SALES_COLUMN: &str = "Number of Tractor Sold";

/// Data loader for monthly sales series
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a series from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<SeriesStore> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading sales series");
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a series from any CSV source with a header row
    pub fn from_reader<R: Read>(reader: R) -> Result<SeriesStore> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let (period_idx, sales_idx) = Self::detect_columns(&headers)?;

        let mut observations = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let line = row + 1;

            let label = record.get(period_idx).ok_or_else(|| {
                ForecastError::DataError(format!("row {}: missing period column", line))
            })?;
            let period = Period::from_label(label)
                .map_err(|e| ForecastError::DataError(format!("row {}: {}", line, e)))?;

            let raw = record.get(sales_idx).ok_or_else(|| {
                ForecastError::DataError(format!("row {}: missing sales column", line))
            })?;
            let value = raw.parse::<f64>().map_err(|_| {
                ForecastError::DataError(format!("row {}: invalid sales count '{}'", line, raw))
            })?;

            observations.push(Observation::new(period, value));
        }

        let store = SeriesStore::new(observations)?;
        info!(rows = store.len(), "loaded sales series");

        let gaps = store.gaps();
        if !gaps.is_empty() {
            warn!(missing = gaps.len(), first = %gaps[0], "sales series has gaps");
        }

        Ok(store)
    }

    /// Locate the period and sales columns, falling back to the first two
    fn detect_columns(headers: &csv::StringRecord) -> Result<(usize, usize)> {
        if headers.len() < 2 {
            return Err(ForecastError::DataError(format!(
                "expected at least 2 columns, found {}",
                headers.len()
            )));
        }

        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
        };

        match (find(PERIOD_COLUMN), find(SALES_COLUMN)) {
            (Some(period), Some(sales)) => Ok((period, sales)),
            (Some(period), None) => Ok((period, if period == 0 { 1 } else { 0 })),
            (None, Some(sales)) => Ok((if sales == 0 { 1 } else { 0 }, sales)),
            (None, None) => Ok((0, 1)),
        }
    }
}
