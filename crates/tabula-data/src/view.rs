//! Derived view: filtered and sorted order plus the visible page.

use crate::column::Column;
use crate::filter::filter_indices;
use crate::paginate::{display_total_pages, page, total_pages};
use crate::record::Record;
use crate::sort::{sort_indices, SortState};
use crate::state::TableState;
use tracing::trace;

/// Filter then sort, returning positions into `records`.
#[must_use]
pub fn recompute(records: &[Record], columns: &[Column], state: &TableState) -> Vec<usize> {
    let filtered = filter_indices(records, columns, state.filter());
    sort_indices(records, &filtered, state.sort())
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewKey {
    revision: u64,
    filter: String,
    sort: SortState,
}

/// Cache hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Refreshes answered from the cache
    pub hits: u64,
    /// Refreshes that re-ran filter and sort
    pub misses: u64,
}

/// Memoized filtered/sorted order.
///
/// Keyed on the record list revision, filter text and sort state, so page
/// navigation and page size changes reuse the previous order.
#[derive(Debug, Default)]
pub struct ViewCache {
    key: Option<ViewKey>,
    order: Vec<usize>,
    stats: CacheStats,
}

impl ViewCache {
    /// Empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the cached order up to date. Returns true when it was recomputed.
    pub fn refresh(
        &mut self,
        revision: u64,
        records: &[Record],
        columns: &[Column],
        state: &TableState,
    ) -> bool {
        let fresh = self.key.as_ref().is_some_and(|key| {
            key.revision == revision && key.filter == state.filter() && &key.sort == state.sort()
        });
        if fresh {
            self.stats.hits += 1;
            trace!(revision, "view cache hit");
            return false;
        }
        self.stats.misses += 1;
        self.order = recompute(records, columns, state);
        self.key = Some(ViewKey {
            revision,
            filter: state.filter().to_string(),
            sort: state.sort().clone(),
        });
        trace!(revision, rows = self.order.len(), "view cache miss");
        true
    }

    /// Drop the cached order.
    pub fn invalidate(&mut self) {
        self.key = None;
    }

    /// Cached order (empty before the first refresh).
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Hit/miss counters.
    #[must_use]
    pub const fn stats(&self) -> CacheStats {
        self.stats
    }
}

/// A read-only window onto the current result.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    records: &'a [Record],
    order: &'a [usize],
    page_index: usize,
    page_size: usize,
}

impl<'a> TableView<'a> {
    /// Build a view over `order` (positions into `records`).
    #[must_use]
    pub const fn new(records: &'a [Record], order: &'a [usize], state: &TableState) -> Self {
        Self {
            records,
            order,
            page_index: state.page_index(),
            page_size: state.page_size(),
        }
    }

    /// Records surviving the filter.
    #[must_use]
    pub const fn filtered_count(&self) -> usize {
        self.order.len()
    }

    /// Records before filtering.
    #[must_use]
    pub const fn source_count(&self) -> usize {
        self.records.len()
    }

    /// True when nothing survived the filter.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page_index(&self) -> usize {
        self.page_index
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Pages in the result (zero when empty).
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        total_pages(self.order.len(), self.page_size)
    }

    /// Pages for display (at least one).
    #[must_use]
    pub const fn display_total_pages(&self) -> usize {
        display_total_pages(self.order.len(), self.page_size)
    }

    /// Whether "first"/"previous" are enabled.
    #[must_use]
    pub const fn can_go_previous(&self) -> bool {
        self.page_index > 0
    }

    /// Whether "next"/"last" are enabled.
    #[must_use]
    pub const fn can_go_next(&self) -> bool {
        self.page_index + 1 < self.total_pages()
    }

    /// Positions into the source list for the whole result.
    #[must_use]
    pub const fn order(&self) -> &'a [usize] {
        self.order
    }

    /// Positions into the source list for the visible page.
    #[must_use]
    pub fn page_indices(&self) -> &'a [usize] {
        page(self.order, self.page_size, self.page_index)
    }

    /// Records on the visible page.
    pub fn page_records(&self) -> impl Iterator<Item = &'a Record> + 'a {
        let records = self.records;
        self.page_indices().iter().map(move |&i| &records[i])
    }

    /// One-based inclusive row range shown, or None when the page is empty.
    #[must_use]
    pub fn visible_range(&self) -> Option<(usize, usize)> {
        let len = self.page_indices().len();
        if len == 0 {
            return None;
        }
        let first = self.page_index * self.page_size + 1;
        Some((first, first + len - 1))
    }

    /// "Page X of Y", with Y at least one.
    #[must_use]
    pub fn page_label(&self) -> String {
        format!(
            "Page {} of {}",
            self.page_index + 1,
            self.display_total_pages()
        )
    }

    /// "Showing X-Y of Z", or "No records" when empty.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.visible_range() {
            Some((first, last)) => format!("Showing {first}-{last} of {}", self.filtered_count()),
            None => "No records".to_string(),
        }
    }
}
