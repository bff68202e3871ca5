//! HTTP client and CSV parsing for the histquote historical quote client.
//!
//! This crate provides the fetch pipeline:
//!
//! - [`query::QueryBuilder`] - Builds provider query URLs
//! - [`HistoryClient`] - HTTP client issuing one cancellable GET per fetch
//! - [`parse::parse_row`] - Typed parsing of a single CSV row
//! - [`records`] - Lazy record stream over a response body
//! - [`sort_by_timestamp`] - Chronological ordering of the result
//! - [`HistoryClient::price_bars`] / [`HistoryClient::dividends`] - The full pipeline

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/histquote/histquote/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod error;
mod history;
mod order;
pub mod parse;
pub mod query;
mod stream;

pub use client::{BodyReader, ClientConfig, HistoryClient};
pub use error::FetchError;
pub use history::HistoryRequest;
pub use order::{SortOrder, sort_by_timestamp};
pub use parse::{FromRow, ParseError, ParseErrorKind, parse_row};
pub use stream::{Line, collect_records, lines, records};
pub use tokio_util::sync::CancellationToken;
