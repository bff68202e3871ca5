//! Sampling periods and provider series selection.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::UnknownSeriesCode;

/// Sampling period of price bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// One bar per trading day.
    #[default]
    Daily,
    /// One bar per week.
    Weekly,
    /// One bar per month.
    Monthly,
}

impl Period {
    /// Returns the period as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Returns all available periods.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Daily, Self::Weekly, Self::Monthly]
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "d" | "1d" | "day" | "daily" => Ok(Self::Daily),
            "w" | "1w" | "week" | "weekly" => Ok(Self::Weekly),
            "m" | "month" | "monthly" => Ok(Self::Monthly),
            _ => Err(PeriodParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid period string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodParseError(String);

impl std::fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid period '{}', expected one of: daily, weekly, monthly",
            self.0
        )
    }
}

impl std::error::Error for PeriodParseError {}

/// The data series requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesType {
    /// Daily price bars.
    DailyBars,
    /// Weekly price bars.
    WeeklyBars,
    /// Monthly price bars.
    MonthlyBars,
    /// Dividend payments.
    Dividends,
}

impl SeriesType {
    /// Returns the single-letter code the provider uses for this series.
    #[must_use]
    pub const fn code(&self) -> char {
        match self {
            Self::DailyBars => 'd',
            Self::WeeklyBars => 'w',
            Self::MonthlyBars => 'm',
            Self::Dividends => 'v',
        }
    }

    /// Looks up a series by its provider code.
    ///
    /// # Errors
    ///
    /// Returns an error if the code names no series.
    pub const fn from_code(code: char) -> Result<Self, UnknownSeriesCode> {
        match code {
            'd' => Ok(Self::DailyBars),
            'w' => Ok(Self::WeeklyBars),
            'm' => Ok(Self::MonthlyBars),
            'v' => Ok(Self::Dividends),
            other => Err(UnknownSeriesCode(other)),
        }
    }

    /// Returns true if the series yields price bars.
    #[must_use]
    pub const fn is_bars(&self) -> bool {
        !matches!(self, Self::Dividends)
    }
}

impl From<Period> for SeriesType {
    fn from(period: Period) -> Self {
        match period {
            Period::Daily => Self::DailyBars,
            Period::Weekly => Self::WeeklyBars,
            Period::Monthly => Self::MonthlyBars,
        }
    }
}
