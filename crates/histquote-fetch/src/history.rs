//! Price bar and dividend history retrieval.

use chrono::NaiveDate;
use histquote_types::{DateRange, DividendTick, Period, PriceBar, SeriesType, Timestamped};
use reqwest::Url;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::{FetchError, FromRow, HistoryClient, SortOrder, collect_records, sort_by_timestamp};

/// Parameters of a single history fetch.
///
/// Defaults to daily bars over the provider's full history, newest first.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use histquote_fetch::HistoryRequest;
/// use histquote_types::Period;
///
/// let request = HistoryRequest::new("AAPL")
///     .start(NaiveDate::from_ymd_opt(2020, 3, 15).unwrap())
///     .period(Period::Weekly)
///     .ascending(true);
/// assert_eq!(request.symbol(), "AAPL");
/// assert!(request.is_ascending());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    symbol: String,
    range: DateRange,
    period: Period,
    ascending: bool,
}

impl HistoryRequest {
    /// Creates a request for the given ticker symbol.
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            range: DateRange::unbounded(),
            period: Period::default(),
            ascending: false,
        }
    }

    /// Sets the first date to include.
    #[must_use]
    pub const fn start(mut self, date: NaiveDate) -> Self {
        self.range.start = Some(date);
        self
    }

    /// Sets the last date to include.
    #[must_use]
    pub const fn end(mut self, date: NaiveDate) -> Self {
        self.range.end = Some(date);
        self
    }

    /// Replaces both bounds.
    #[must_use]
    pub const fn range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    /// Sets the bar period. Ignored for dividends.
    #[must_use]
    pub const fn period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// Returns records oldest first when `true`, newest first otherwise.
    #[must_use]
    pub const fn ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    /// Returns the ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the requested date range.
    #[must_use]
    pub const fn date_range(&self) -> DateRange {
        self.range
    }

    /// Returns the bar period.
    #[must_use]
    pub const fn bar_period(&self) -> Period {
        self.period
    }

    /// Returns true if records are returned oldest first.
    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Returns the requested sort order.
    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        SortOrder::from_ascending(self.ascending)
    }
}

impl HistoryClient {
    /// Returns the URL a request resolves to for the given series.
    #[must_use]
    pub fn query_url(&self, request: &HistoryRequest, series: SeriesType) -> Url {
        self.query().build(request.symbol(), &request.date_range(), series)
    }

    /// Fetches price bars.
    ///
    /// # Errors
    ///
    /// Returns an error if the download fails or any row is malformed.
    pub async fn price_bars(&self, request: &HistoryRequest) -> Result<Vec<PriceBar>, FetchError> {
        self.price_bars_with_cancel(request, &CancellationToken::new()).await
    }

    /// Fetches price bars, aborting when `cancel` fires.
    ///
    /// # Errors
    ///
    /// As [`HistoryClient::price_bars`], plus [`FetchError::Cancelled`].
    pub async fn price_bars_with_cancel(
        &self,
        request: &HistoryRequest,
        cancel: &CancellationToken,
    ) -> Result<Vec<PriceBar>, FetchError> {
        self.fetch(request, SeriesType::from(request.bar_period()), cancel)
            .await
    }

    /// Fetches dividend payments.
    ///
    /// # Errors
    ///
    /// Returns an error if the download fails or any row is malformed.
    pub async fn dividends(
        &self,
        request: &HistoryRequest,
    ) -> Result<Vec<DividendTick>, FetchError> {
        self.dividends_with_cancel(request, &CancellationToken::new()).await
    }

    /// Fetches dividend payments, aborting when `cancel` fires.
    ///
    /// # Errors
    ///
    /// As [`HistoryClient::dividends`], plus [`FetchError::Cancelled`].
    pub async fn dividends_with_cancel(
        &self,
        request: &HistoryRequest,
        cancel: &CancellationToken,
    ) -> Result<Vec<DividendTick>, FetchError> {
        self.fetch(request, SeriesType::Dividends, cancel).await
    }

    /// Runs the query, download, parse and sort steps for one series.
    ///
    /// The date range is sent as given; an inverted range is left for the
    /// provider to answer.
    #[instrument(
        level = "trace",
        skip_all,
        fields(symbol = request.symbol(), series = %series.code())
    )]
    async fn fetch<T>(
        &self,
        request: &HistoryRequest,
        series: SeriesType,
        cancel: &CancellationToken,
    ) -> Result<Vec<T>, FetchError>
    where
        T: FromRow + Timestamped,
    {
        let url = self.query_url(request, series);
        let body = self.open(&url, cancel).await?;
        let mut records = collect_records::<T, _>(body, cancel).await?;
        debug!(count = records.len(), "parsed history table");

        sort_by_timestamp(&mut records, request.sort_order());
        Ok(records)
    }
}
