//! Optionally bounded date ranges.

use chrono::NaiveDate;

use crate::DateRangeError;

/// A range of dates for data retrieval.
///
/// Either side may be left open, in which case the provider decides where the
/// series starts or ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    /// Start date (inclusive), if bounded.
    pub start: Option<NaiveDate>,
    /// End date (inclusive), if bounded.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end when both are set.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, DateRangeError> {
        if let (Some(start), Some(end)) = (start, end)
            && start > end
        {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range with no bounds on either side.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Creates a range starting at `start` with no end.
    #[must_use]
    pub const fn starting(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Creates a range ending at `end` with no start.
    #[must_use]
    pub const fn until(end: NaiveDate) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// Creates a closed range.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        Self::new(Some(start), Some(end))
    }

    /// Returns true if neither side is bounded.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}
