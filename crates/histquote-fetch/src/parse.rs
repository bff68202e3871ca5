//! CSV row parsing.

use chrono::NaiveDate;
use histquote_types::{DividendTick, PriceBar};
use rust_decimal::Decimal;
use thiserror::Error;

/// Field delimiter used by the provider.
const DELIMITER: char = ',';

/// Date format used in the first column.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A row that could not be turned into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Parse error on line {line_number} ({line:?}): {kind}")]
pub struct ParseError {
    /// 1-based line number in the response body, header included.
    pub line_number: usize,
    /// The offending line, without its line terminator.
    pub line: String,
    /// What was wrong with it.
    pub kind: ParseErrorKind,
}

/// The reason a row was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Row had more or fewer fields than the record needs.
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Fields the record type needs.
        expected: usize,
        /// Fields present in the row.
        found: usize,
    },

    /// Date column is not `YYYY-MM-DD`.
    #[error("invalid date '{0}'")]
    InvalidDate(String),

    /// Price column is not a decimal number.
    #[error("invalid decimal '{0}'")]
    InvalidDecimal(String),

    /// Volume column is not a non-negative integer.
    #[error("invalid integer '{0}'")]
    InvalidInteger(String),

    /// Row bytes are not UTF-8.
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

/// A record that can be built from one CSV row.
pub trait FromRow: Sized {
    /// Number of comma-separated fields in a row.
    const FIELD_COUNT: usize;

    /// Builds the record from exactly [`Self::FIELD_COUNT`] fields.
    ///
    /// # Errors
    ///
    /// Returns the reason the first bad field was rejected.
    fn from_fields(fields: &[&str]) -> Result<Self, ParseErrorKind>;
}

impl FromRow for PriceBar {
    const FIELD_COUNT: usize = 7;

    fn from_fields(fields: &[&str]) -> Result<Self, ParseErrorKind> {
        Ok(Self::new(
            parse_date(fields[0])?,
            parse_decimal(fields[1])?,
            parse_decimal(fields[2])?,
            parse_decimal(fields[3])?,
            parse_decimal(fields[4])?,
            parse_integer(fields[5])?,
            parse_decimal(fields[6])?,
        ))
    }
}

impl FromRow for DividendTick {
    const FIELD_COUNT: usize = 2;

    fn from_fields(fields: &[&str]) -> Result<Self, ParseErrorKind> {
        Ok(Self::new(parse_date(fields[0])?, parse_decimal(fields[1])?))
    }
}

/// Parses one data row into a record.
///
/// # Arguments
///
/// * `line_number` - Position of the row in the body, used for diagnostics
/// * `line` - The row text without its line terminator
///
/// # Errors
///
/// Returns an error if the field count is wrong or any field fails to parse.
pub fn parse_row<T: FromRow>(line_number: usize, line: &str) -> Result<T, ParseError> {
    let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    let result = if fields.len() == T::FIELD_COUNT {
        T::from_fields(&fields)
    } else {
        Err(ParseErrorKind::FieldCount {
            expected: T::FIELD_COUNT,
            found: fields.len(),
        })
    };

    result.map_err(|kind| ParseError {
        line_number,
        line: line.to_string(),
        kind,
    })
}

fn parse_date(field: &str) -> Result<NaiveDate, ParseErrorKind> {
    NaiveDate::parse_from_str(field, DATE_FORMAT)
        .map_err(|_| ParseErrorKind::InvalidDate(field.to_string()))
}

fn parse_decimal(field: &str) -> Result<Decimal, ParseErrorKind> {
    if !is_plain_decimal(field) {
        return Err(ParseErrorKind::InvalidDecimal(field.to_string()));
    }
    field
        .parse()
        .map_err(|_| ParseErrorKind::InvalidDecimal(field.to_string()))
}

/// Accepts `[+-]digits[.digits]` only. `Decimal::from_str` alone also lets
/// through digit separators such as `1_0.5`.
fn is_plain_decimal(field: &str) -> bool {
    let unsigned = field.strip_prefix(['+', '-']).unwrap_or(field);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    !(whole.is_empty() && fraction.is_empty()) && digits(whole) && digits(fraction)
}

fn parse_integer(field: &str) -> Result<u64, ParseErrorKind> {
    field
        .parse()
        .map_err(|_| ParseErrorKind::InvalidInteger(field.to_string()))
}
