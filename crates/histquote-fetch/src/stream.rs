//! Streaming record parsing over a response body.

use futures::future;
use futures::stream::{self, Stream, StreamExt};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;

use crate::{FetchError, FromRow, ParseError, ParseErrorKind, parse_row};

/// The header line is always the first line of a body.
const HEADER_LINE: usize = 1;

/// One line of a response body, without its line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based position of the line in the body.
    pub number: usize,
    bytes: Vec<u8>,
}

impl Line {
    /// Returns true if this is the header line.
    #[must_use]
    pub const fn is_header(&self) -> bool {
        self.number == HEADER_LINE
    }

    /// Returns the raw bytes of the line.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the line as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not valid UTF-8.
    pub fn text(&self) -> Result<&str, ParseError> {
        std::str::from_utf8(&self.bytes).map_err(|_| ParseError {
            line_number: self.number,
            line: String::from_utf8_lossy(&self.bytes).into_owned(),
            kind: ParseErrorKind::InvalidUtf8,
        })
    }

    /// Parses the line as a record.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not a valid row for `T`.
    pub fn parse<T: FromRow>(&self) -> Result<T, ParseError> {
        parse_row(self.number, self.text()?)
    }
}

/// Splits a reader into a lazy stream of lines.
///
/// The stream is finite and single-pass. It ends at EOF, or right after the
/// first read error.
pub fn lines<R>(reader: R) -> impl Stream<Item = std::io::Result<Line>>
where
    R: AsyncBufRead + Unpin,
{
    stream::unfold(Some((reader, 0usize)), |state| async move {
        let (mut reader, count) = state?;
        let mut bytes = Vec::new();
        match reader.read_until(b'\n', &mut bytes).await {
            Ok(0) => None,
            Ok(_) => {
                strip_line_ending(&mut bytes);
                let number = count + 1;
                Some((Ok(Line { number, bytes }), Some((reader, number))))
            }
            Err(e) => Some((Err(e), None)),
        }
    })
}

/// Streams the records of a CSV body.
///
/// The first line is dropped without being inspected. Every other line must
/// be a valid row for `T`.
pub fn records<T, R>(reader: R) -> impl Stream<Item = Result<T, FetchError>>
where
    T: FromRow,
    R: AsyncBufRead + Unpin,
{
    lines(reader).filter_map(|line| {
        future::ready(match line {
            Ok(line) if line.is_header() => None,
            Ok(line) => Some(line.parse::<T>().map_err(FetchError::from)),
            Err(e) => Some(Err(FetchError::from(e))),
        })
    })
}

/// Reads every record of a CSV body.
///
/// Each read is raced against `cancel`. The reader is consumed and dropped
/// before this returns, whatever the outcome.
///
/// # Errors
///
/// Returns [`FetchError::Cancelled`] if `cancel` fires first, otherwise the
/// first read or parse error. No records are returned alongside an error.
pub async fn collect_records<T, R>(
    reader: R,
    cancel: &CancellationToken,
) -> Result<Vec<T>, FetchError>
where
    T: FromRow,
    R: AsyncBufRead + Unpin,
{
    let mut records = std::pin::pin!(records::<T, R>(reader));
    let mut collected = Vec::new();

    loop {
        let next = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(FetchError::Cancelled),
            next = records.next() => next,
        };

        match next {
            Some(record) => collected.push(record?),
            None => return Ok(collected),
        }
    }
}

fn strip_line_ending(bytes: &mut Vec<u8>) {
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
    }
}
