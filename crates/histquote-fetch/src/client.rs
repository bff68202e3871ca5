//! HTTP client for downloading history tables.

use bytes::Bytes;
use futures::TryStreamExt;
use futures::stream::{BoxStream, StreamExt};
use reqwest::{Client, Url};
use tokio_util::io::StreamReader;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::FetchError;
use crate::query::{BASE_URL, QueryBuilder};

/// Buffered reader over a streamed response body.
pub type BodyReader = StreamReader<BoxStream<'static, std::io::Result<Bytes>>, Bytes>;

/// Configuration for the history client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint the query parameters are appended to.
    pub base_url: String,
    /// Maximum idle pooled connections kept per host.
    pub pool_max_idle_per_host: usize,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            pool_max_idle_per_host: 4,
            user_agent: format!("histquote/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Sets the endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP client for historical price and dividend tables.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HistoryClient {
    client: Client,
    query: QueryBuilder,
    config: ClientConfig,
}

impl HistoryClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be created.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let query = QueryBuilder::new(&config.base_url)?;
        let client = Client::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .tcp_nodelay(true)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self {
            client,
            query,
            config,
        })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the query builder bound to the configured endpoint.
    #[must_use]
    pub const fn query(&self) -> &QueryBuilder {
        &self.query
    }

    /// Sends a single GET and opens the response body for reading.
    ///
    /// Dropping the returned reader releases the connection.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Cancelled`] if `cancel` fires before the response
    /// headers arrive, [`FetchError::Status`] for a non-success status, and
    /// [`FetchError::Http`] if the request itself fails.
    pub async fn open(
        &self,
        url: &Url,
        cancel: &CancellationToken,
    ) -> Result<BodyReader, FetchError> {
        debug!(%url, "requesting history table");

        let response = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(FetchError::Cancelled),
            response = self.client.get(url.clone()).send() => response?,
        };

        let status = response.status();
        debug!(status = status.as_u16(), "received response");
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes_stream().map_err(std::io::Error::other).boxed();
        Ok(StreamReader::new(body))
    }
}
