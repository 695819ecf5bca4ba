//! Single-column stable sort.

use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Orient an ascending comparison result.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// `aria-sort` attribute value.
    #[must_use]
    pub const fn aria(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SortState {
    /// Accessor being sorted on, if any
    pub key: Option<String>,
    /// Direction
    pub direction: SortDirection,
}

impl SortState {
    /// No sort: records keep filtered order.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Sort on `key` in `direction`.
    #[must_use]
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: Some(key.into()),
            direction,
        }
    }

    /// Activate sorting on `accessor`: the active column flips direction,
    /// any other column becomes active ascending.
    #[must_use]
    pub fn toggled(&self, accessor: &str) -> Self {
        if self.key.as_deref() == Some(accessor) {
            Self {
                key: self.key.clone(),
                direction: self.direction.flipped(),
            }
        } else {
            Self::by(accessor, SortDirection::Ascending)
        }
    }

    /// Direction applied to `accessor`, if it is the active column.
    #[must_use]
    pub fn direction_for(&self, accessor: &str) -> Option<SortDirection> {
        (self.key.as_deref() == Some(accessor)).then_some(self.direction)
    }

    /// Check whether a column is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.key.is_some()
    }
}

/// Order `indices` (positions into `records`) by the sort state.
///
/// Returns a new vector; with no active key the input order is copied
/// unchanged. Ties keep their input order.
#[must_use]
pub fn sort_indices(records: &[Record], indices: &[usize], sort: &SortState) -> Vec<usize> {
    let mut order = indices.to_vec();
    if let Some(key) = sort.key.as_deref() {
        stable_sort_by(&mut order, |&a, &b| {
            sort.direction
                .apply(records[a].value(key).compare(records[b].value(key)))
        });
    }
    order
}

/// Sorted copies of record references.
#[must_use]
pub fn sort_records<'a>(records: &[&'a Record], sort: &SortState) -> Vec<&'a Record> {
    let mut sorted = records.to_vec();
    if let Some(key) = sort.key.as_deref() {
        stable_sort_by(&mut sorted, |a, b| {
            sort.direction.apply(a.value(key).compare(b.value(key)))
        });
    }
    sorted
}

/// Bottom-up merge sort.
///
/// Mixed-type value comparison is not a total order, and the standard
/// library sorts may panic when handed such a comparator. A merge never
/// inspects more than the pair in front of it, so it finishes on any
/// comparator and stays stable.
fn stable_sort_by<T, F>(items: &mut Vec<T>, mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }
    let mut scratch = items.clone();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);
            for slot in &mut scratch[start..end] {
                let take_left = right >= end
                    || (left < mid && compare(&items[right], &items[left]) != Ordering::Less);
                if take_left {
                    *slot = items[left];
                    left += 1;
                } else {
                    *slot = items[right];
                    right += 1;
                }
            }
            start = end;
        }
        std::mem::swap(items, &mut scratch);
        width *= 2;
    }
}
