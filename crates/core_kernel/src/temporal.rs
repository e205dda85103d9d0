//! Calendar helpers for cover periods and age checks
//!
//! All dates are calendar dates (`NaiveDate`); the only timestamps in the
//! system are record creation times, which are plain `DateTime<Utc>`.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must be before end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

/// Adds whole calendar years to a date
///
/// February 29th maps to February 28th in non-leap target years.
pub fn add_years(date: NaiveDate, years: u32) -> Result<NaiveDate, TemporalError> {
    date.checked_add_months(Months::new(years * 12))
        .ok_or_else(|| TemporalError::OutOfRange(format!("{} + {} years", date, years)))
}

/// Age in completed years on a given date
///
/// Negative when `on` precedes `date_of_birth`.
pub fn age_on(date_of_birth: NaiveDate, on: NaiveDate) -> i32 {
    let mut age = on.year() - date_of_birth.year();
    if (on.month(), on.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// The period a vehicle policy covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverPeriod {
    /// First covered day (inclusive)
    pub from: NaiveDate,
    /// End of cover
    pub to: NaiveDate,
}

impl CoverPeriod {
    /// Creates a period, rejecting empty or inverted ranges
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, TemporalError> {
        if from >= to {
            return Err(TemporalError::InvalidPeriod {
                start: from.to_string(),
                end: to.to_string(),
            });
        }
        Ok(Self { from, to })
    }

    /// Standard annual cover starting on `from`
    pub fn one_year_from(from: NaiveDate) -> Result<Self, TemporalError> {
        let to = add_years(from, 1)?;
        Self::new(from, to)
    }

    /// Checks whether the date falls inside the period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}
