//! Provider query construction.

use chrono::{Datelike, NaiveDate};
use histquote_types::{DateRange, SeriesType};
use reqwest::Url;

use crate::FetchError;

/// Default endpoint serving historical tables as CSV.
pub const BASE_URL: &str = "http://ichart.finance.yahoo.com/table.csv";

const SYMBOL_TAG: &str = "s";
const FROM_TAGS: DateTags = DateTags {
    month: "a",
    day: "b",
    year: "c",
};
const TO_TAGS: DateTags = DateTags {
    month: "d",
    day: "e",
    year: "f",
};
const TYPE_TAG: &str = "g";
const IGNORE_TAG: &str = "ignore";
const CSV_EXT_VALUE: &str = ".csv";

/// Parameter names for one side of the date range.
struct DateTags {
    month: &'static str,
    day: &'static str,
    year: &'static str,
}

impl DateTags {
    fn push(&self, params: &mut Vec<(&'static str, String)>, date: NaiveDate) {
        params.push((self.month, date.month().to_string()));
        params.push((self.day, date.day().to_string()));
        params.push((self.year, date.year().to_string()));
    }
}

/// Builds provider URLs against a fixed base endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuilder {
    base_url: Url,
}

impl QueryBuilder {
    /// Creates a query builder for the given base endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Configuration`] if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            FetchError::Configuration(format!("invalid base URL '{base_url}': {e}"))
        })?;
        Ok(Self { base_url })
    }

    /// Returns the base endpoint.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the full request URL.
    ///
    /// Query format: `s={SYMBOL}[&a&b&c][&d&e&f]&g={CODE}&ignore=.csv`
    ///
    /// A missing start or end date leaves its three parameters out entirely.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use histquote_fetch::query::QueryBuilder;
    /// use histquote_types::{DateRange, SeriesType};
    ///
    /// let builder = QueryBuilder::new("http://example.com/table.csv").unwrap();
    /// let start = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
    /// let url = builder.build("AAPL", &DateRange::starting(start), SeriesType::WeeklyBars);
    /// assert_eq!(url.query(), Some("s=AAPL&a=3&b=15&c=2020&g=w&ignore=.csv"));
    /// ```
    #[must_use]
    pub fn build(&self, symbol: &str, range: &DateRange, series: SeriesType) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().extend_pairs(params(symbol, range, series));
        url
    }
}

/// Returns the query parameters in the order the provider expects them.
fn params(symbol: &str, range: &DateRange, series: SeriesType) -> Vec<(&'static str, String)> {
    let mut params = Vec::with_capacity(9);
    params.push((SYMBOL_TAG, symbol.to_string()));
    if let Some(start) = range.start {
        FROM_TAGS.push(&mut params, start);
    }
    if let Some(end) = range.end {
        TO_TAGS.push(&mut params, end);
    }
    params.push((TYPE_TAG, series.code().to_string()));
    params.push((IGNORE_TAG, CSV_EXT_VALUE.to_string()));
    params
}
