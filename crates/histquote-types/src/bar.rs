//! Price bar representation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Timestamped;

/// One OHLCV sample for a single day, week, or month.
///
/// Values are stored exactly as the provider reported them. No consistency
/// checks (such as `high >= low`) are applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceBar {
    /// Date the sampling interval starts on.
    pub timestamp: NaiveDate,
    /// Opening price.
    pub open: Decimal,
    /// Highest price during the interval.
    pub high: Decimal,
    /// Lowest price during the interval.
    pub low: Decimal,
    /// Closing price.
    pub close: Decimal,
    /// Traded volume, in shares.
    pub volume: u64,
    /// Closing price adjusted for splits and dividends.
    pub adjusted_close: Decimal,
}

impl PriceBar {
    /// Creates a new price bar.
    #[must_use]
    pub const fn new(
        timestamp: NaiveDate,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: u64,
        adjusted_close: Decimal,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
            adjusted_close,
        }
    }
}

impl Timestamped for PriceBar {
    fn timestamp(&self) -> NaiveDate {
        self.timestamp
    }
}
