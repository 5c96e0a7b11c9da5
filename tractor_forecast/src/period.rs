//! Month-granular calendar periods

use crate::error::{ForecastError, Result};
use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month identified by year and month number
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a period, rejecting months outside 1..=12
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ForecastError::InvalidPeriod(format!(
                "month must be between 1 and 12, got {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// Create a period from a month name ("January", "jan") or number ("1")
    pub fn from_month_name(month: &str, year: i32) -> Result<Self> {
        let month = month.trim();
        if let Ok(number) = month.parse::<u32>() {
            return Self::new(year, number);
        }
        let parsed = month
            .parse::<Month>()
            .map_err(|_| ForecastError::InvalidPeriod(format!("unknown month '{}'", month)))?;
        Self::new(year, parsed.number_from_month())
    }

    /// Parse a month-year label such as "Jan-03"
    pub fn from_label(label: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(&format!("01-{}", label.trim()), "%d-%b-%y")
            .map_err(|e| {
                ForecastError::InvalidPeriod(format!("cannot parse label '{}': {}", label, e))
            })?;
        Ok(Self::from(date))
    }

    /// Calendar year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1 for January
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Ordinal month count since year 0, used for arithmetic
    fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    fn from_ordinal(ordinal: i64) -> Option<Self> {
        Some(Self {
            year: i32::try_from(ordinal.div_euclid(12)).ok()?,
            month: ordinal.rem_euclid(12) as u32 + 1,
        })
    }

    /// The period `n` months later (earlier when negative), `None` past the `i32` year range
    pub fn checked_add_months(&self, n: i64) -> Option<Self> {
        Self::from_ordinal(self.ordinal().checked_add(n)?)
    }

    /// The period `n` months later (earlier when negative)
    pub fn add_months(&self, n: i64) -> Result<Self> {
        self.checked_add_months(n).ok_or_else(|| {
            ForecastError::InvalidPeriod(format!("{} shifted by {} months is out of range", self, n))
        })
    }

    /// The following month
    pub fn succ(&self) -> Result<Self> {
        self.add_months(1)
    }

    /// Periods strictly between `self` and `later`, in order
    pub(crate) fn months_until(&self, later: Period) -> impl Iterator<Item = Period> {
        (self.ordinal() + 1..later.ordinal()).filter_map(Self::from_ordinal)
    }

    /// First day of the month
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Human readable form, e.g. "January 2024"
    pub fn long_name(&self) -> String {
        match Month::try_from(self.month as u8) {
            Ok(month) => format!("{} {}", month.name(), self.year),
            Err(_) => self.to_string(),
        }
    }
}

/// Signed number of months from `a` to `b`
///
/// `(b.year - a.year) * 12 + (b.month - a.month)`
pub fn months_between(a: Period, b: Period) -> i64 {
    (b.year as i64 - a.year as i64) * 12 + (b.month as i64 - a.month as i64)
}

impl From<NaiveDate> for Period {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = ForecastError;

    /// Accepts `YYYY-MM` (any sign, at least 4 year digits), falling back to the `Mon-YY` label form
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some((year, month)) = s.rsplit_once('-') {
            let digits = year.trim_start_matches(|c: char| c == '-' || c == '+');
            let signed = digits.len() != year.len();
            let numeric = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());
            if numeric && (signed || digits.len() >= 4) {
                let year = year.parse::<i32>().map_err(|e| {
                    ForecastError::InvalidPeriod(format!("invalid year in '{}': {}", s, e))
                })?;
                let month = month.parse::<u32>().map_err(|e| {
                    ForecastError::InvalidPeriod(format!("invalid month in '{}': {}", s, e))
                })?;
                return Self::new(year, month);
            }
        }
        Self::from_label(s)
    }
}

impl TryFrom<String> for Period {
    type Error = ForecastError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}
