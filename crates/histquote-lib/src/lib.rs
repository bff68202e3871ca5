//! Rust client for historical daily, weekly and monthly price bars and dividends.
//!
//! This is a facade crate that re-exports functionality from the histquote
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use histquote_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HistoryClient::with_defaults()?;
//!
//!     let request = HistoryRequest::new("AAPL")
//!         .start(chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
//!         .period(Period::Weekly)
//!         .ascending(true);
//!
//!     for bar in client.price_bars(&request).await? {
//!         println!("{} close {}", bar.timestamp, bar.close);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/histquote/histquote/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use histquote_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use histquote_fetch::{
    CancellationToken, ClientConfig, FetchError, HistoryClient, HistoryRequest, ParseError,
    ParseErrorKind, SortOrder,
};

/// Prelude module for convenient imports.
///
/// ```
/// use histquote_lib::prelude::*;
/// ```
pub mod prelude {
    pub use histquote_types::{
        DateRange, DateRangeError, DividendTick, Period, PriceBar, SeriesType, Timestamped,
    };

    #[cfg(feature = "fetch")]
    pub use histquote_fetch::{
        CancellationToken, ClientConfig, FetchError, HistoryClient, HistoryRequest,
    };
}
