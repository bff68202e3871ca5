//! Common behaviour of dated records.

use chrono::NaiveDate;

/// A record tied to a single calendar date.
pub trait Timestamped {
    /// Returns the date of the record.
    fn timestamp(&self) -> NaiveDate;
}
