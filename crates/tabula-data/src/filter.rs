//! Global text filter.
//!
//! A record matches when any column's display text contains the query,
//! both sides lower-cased. Matching is OR across columns; the empty query
//! matches everything. No trimming or pattern syntax is applied.

use crate::column::Column;
use crate::record::Record;

/// A lower-cased query ready for repeated matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    needle: String,
}

impl FilterQuery {
    /// Prepare a query.
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// True for the empty query, which matches every record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Check one record against the query.
    #[must_use]
    pub fn matches(&self, record: &Record, columns: &[Column]) -> bool {
        if self.is_empty() {
            return true;
        }
        columns.iter().any(|col| {
            record
                .value(&col.accessor)
                .display()
                .to_lowercase()
                .contains(&self.needle)
        })
    }
}

/// Indices of the records matching `query`, in source order.
#[must_use]
pub fn filter_indices(records: &[Record], columns: &[Column], query: &str) -> Vec<usize> {
    let query = FilterQuery::new(query);
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| query.matches(record, columns))
        .map(|(index, _)| index)
        .collect()
}

/// The records matching `query`, in source order.
#[must_use]
pub fn filter_records<'a>(
    records: &'a [Record],
    columns: &[Column],
    query: &str,
) -> Vec<&'a Record> {
    filter_indices(records, columns, query)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}
