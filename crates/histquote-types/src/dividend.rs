//! Dividend events.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Timestamped;

/// A single dividend payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DividendTick {
    /// Date of the payment.
    pub timestamp: NaiveDate,
    /// Amount paid per share.
    pub amount: Decimal,
}

impl DividendTick {
    /// Creates a new dividend tick.
    #[must_use]
    pub const fn new(timestamp: NaiveDate, amount: Decimal) -> Self {
        Self { timestamp, amount }
    }
}

impl Timestamped for DividendTick {
    fn timestamp(&self) -> NaiveDate {
        self.timestamp
    }
}
