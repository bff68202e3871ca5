//! Benchmark fixtures for histquote.

use chrono::{Days, NaiveDate};
use std::fmt::Write;

/// Header line of a price bar table.
pub const BAR_HEADER: &str = "Date,Open,High,Low,Close,Volume,Adj Close";

/// Header line of a dividend table.
pub const DIVIDEND_HEADER: &str = "Date,Dividends";

/// Builds a price bar table with `rows` daily rows, newest first.
pub fn bar_table(rows: usize) -> String {
    let mut body = String::with_capacity((rows + 1) * 64);
    body.push_str(BAR_HEADER);
    body.push('\n');

    let first = NaiveDate::from_ymd_opt(1990, 1, 2).unwrap_or_default();
    for i in (0..rows).rev() {
        let date = first + Days::new(i as u64);
        let base = 100 + (i % 50);
        let _ = writeln!(
            body,
            "{date},{base}.25,{}.75,{}.10,{base}.50,{},{base}.4321",
            base + 2,
            base - 1,
            1_000_000 + i * 37
        );
    }
    body
}

/// Builds a dividend table with `rows` quarterly rows, newest first.
pub fn dividend_table(rows: usize) -> String {
    let mut body = String::with_capacity((rows + 1) * 20);
    body.push_str(DIVIDEND_HEADER);
    body.push('\n');

    let first = NaiveDate::from_ymd_opt(1990, 1, 2).unwrap_or_default();
    for i in (0..rows).rev() {
        let date = first + Days::new(i as u64 * 91);
        let _ = writeln!(body, "{date},0.{:02}", 10 + i % 90);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_table_shape() {
        let table = bar_table(3);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], BAR_HEADER);
        assert!(lines[1..].iter().all(|l| l.split(',').count() == 7));
    }

    #[test]
    fn test_dividend_table_shape() {
        let table = dividend_table(5);
        assert_eq!(table.lines().count(), 6);
        assert!(table.lines().skip(1).all(|l| l.split(',').count() == 2));
    }
}
