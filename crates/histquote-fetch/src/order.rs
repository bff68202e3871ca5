//! Chronological ordering of fetched records.

use histquote_types::Timestamped;

/// Direction of the returned records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Oldest first.
    Ascending,
    /// Newest first.
    #[default]
    Descending,
}

impl SortOrder {
    /// Maps an `ascending` flag to a sort order.
    #[must_use]
    pub const fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }
}

/// Sorts records by timestamp.
///
/// The sort is stable: records sharing a timestamp keep the order the
/// provider sent them in.
pub fn sort_by_timestamp<T: Timestamped>(records: &mut [T], order: SortOrder) {
    match order {
        SortOrder::Ascending => records.sort_by_key(T::timestamp),
        SortOrder::Descending => records.sort_by(|a, b| b.timestamp().cmp(&a.timestamp())),
    }
}
