//! Error types for the fetch pipeline.

use histquote_types::UnknownSeriesCode;
use thiserror::Error;

use crate::ParseError;

/// Errors that can occur while fetching a history.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Server returned {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The requested URL.
        url: String,
    },

    /// Reading the response body failed.
    #[error("I/O error while reading response: {0}")]
    Io(#[from] std::io::Error),

    /// The caller cancelled the fetch.
    #[error("Fetch was cancelled")]
    Cancelled,

    /// A response row could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The client was set up with unusable settings.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl FetchError {
    /// Returns true if the error came from the network or the server.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. } | Self::Io(_))
    }

    /// Returns true if the fetch was aborted by the caller.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns the HTTP status for [`FetchError::Status`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<UnknownSeriesCode> for FetchError {
    fn from(err: UnknownSeriesCode) -> Self {
        Self::Configuration(err.to_string())
    }
}
