//! Core types for the histquote historical quote client.
//!
//! This crate provides the fundamental data structures used throughout histquote:
//!
//! - [`PriceBar`] - One daily, weekly, or monthly OHLCV sample
//! - [`DividendTick`] - One dividend payment
//! - [`Period`] - Sampling period for price bars
//! - [`SeriesType`] - Which series the provider is asked for
//! - [`DateRange`] - Optionally bounded date range for data retrieval

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/histquote/histquote/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod date_range;
mod dividend;
mod error;
mod period;
mod record;

pub use bar::PriceBar;
pub use date_range::DateRange;
pub use dividend::DividendTick;
pub use error::{DateRangeError, UnknownSeriesCode};
pub use period::{Period, PeriodParseError, SeriesType};
pub use record::Timestamped;
