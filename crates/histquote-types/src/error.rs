//! Error types for histquote records.

use chrono::NaiveDate;
use thiserror::Error;

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}

/// A provider series code that maps to no known series.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown series code '{0}', expected one of: d, w, m, v")]
pub struct UnknownSeriesCode(pub char);
