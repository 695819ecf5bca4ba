//! Interaction state and its transitions.
//!
//! [`TableState`] is an immutable value. Each user action produces a new
//! state through [`TableState::apply`]; nothing mutates in place.

use crate::options::TableOptions;
use crate::paginate::clamp_page_index;
use crate::sort::SortState;
use serde::{Deserialize, Serialize};

/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableAction {
    /// Replace the filter text
    SetFilter(String),
    /// Activate sorting on an accessor
    ToggleSort(String),
    /// Change rows per page
    SetPageSize(usize),
    /// Jump to the first page
    FirstPage,
    /// Step back one page
    PreviousPage,
    /// Step forward one page
    NextPage,
    /// Jump to the last page
    LastPage,
    /// Jump to a page, clamped into range
    GoToPage(usize),
}

/// Facts a transition needs that live outside the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionContext {
    /// Pages in the current filtered result
    pub total_pages: usize,
    /// Whether sorting is enabled
    pub sortable: bool,
}

/// Filter text, sort, page index and page size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableState {
    filter: String,
    sort: SortState,
    page_index: usize,
    page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(crate::options::DEFAULT_PAGE_SIZE)
    }
}

impl TableState {
    /// Fresh state: no filter, no sort, first page.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: String::new(),
            sort: SortState::none(),
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Fresh state for the given options.
    #[must_use]
    pub fn from_options(options: &TableOptions) -> Self {
        Self::new(options.page_size)
    }

    /// Current filter text.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Current sort.
    #[must_use]
    pub const fn sort(&self) -> &SortState {
        &self.sort
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

    /// Whether "first" and "previous" would move.
    #[must_use]
    pub const fn can_go_previous(&self) -> bool {
        self.page_index > 0
    }

    /// Whether "next" and "last" would move.
    #[must_use]
    pub const fn can_go_next(&self, total_pages: usize) -> bool {
        self.page_index + 1 < total_pages
    }

    /// The state after `action`.
    ///
    /// Filter and page size changes reset to the first page. Sort toggles are
    /// ignored when sorting is disabled. Navigation at a boundary returns an
    /// identical state.
    #[must_use]
    pub fn apply(&self, action: &TableAction, ctx: TransitionContext) -> Self {
        let mut next = self.clone();
        match action {
            TableAction::SetFilter(text) => {
                next.filter.clone_from(text);
                next.page_index = 0;
            }
            TableAction::ToggleSort(accessor) => {
                if ctx.sortable {
                    next.sort = self.sort.toggled(accessor);
                }
            }
            TableAction::SetPageSize(size) => {
                next.page_size = (*size).max(1);
                next.page_index = 0;
            }
            TableAction::FirstPage => next.page_index = 0,
            TableAction::PreviousPage => {
                next.page_index = self.page_index.saturating_sub(1);
            }
            TableAction::NextPage => {
                if self.can_go_next(ctx.total_pages) {
                    next.page_index = self.page_index + 1;
                }
            }
            TableAction::LastPage => {
                next.page_index = ctx.total_pages.saturating_sub(1);
            }
            TableAction::GoToPage(index) => {
                next.page_index = clamp_page_index(*index, ctx.total_pages);
            }
        }
        next
    }

    /// The same state with the page index pulled back into range.
    #[must_use]
    pub fn clamped(&self, total_pages: usize) -> Self {
        Self {
            page_index: clamp_page_index(self.page_index, total_pages),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortDirection;

    const CTX: TransitionContext = TransitionContext {
        total_pages: 3,
        sortable: true,
    };

    fn at_page(index: usize) -> TableState {
        TableState::new(2).apply(&TableAction::GoToPage(index), CTX)
    }

    #[test]
    fn test_new_defaults() {
        let s = TableState::default();
        assert_eq!(s.filter(), "");
        assert!(!s.sort().is_active());
        assert_eq!(s.page_index(), 0);
        assert_eq!(s.page_size(), 10);
    }

    #[test]
    fn test_zero_page_size_clamped() {
        assert_eq!(TableState::new(0).page_size(), 1);
        let s = TableState::new(5).apply(&TableAction::SetPageSize(0), CTX);
        assert_eq!(s.page_size(), 1);
    }

    #[test]
    fn test_set_filter_resets_page() {
        let s = at_page(2).apply(&TableAction::SetFilter("amy".into()), CTX);
        assert_eq!(s.filter(), "amy");
        assert_eq!(s.page_index(), 0);
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let s = at_page(2).apply(&TableAction::SetPageSize(25), CTX);
        assert_eq!(s.page_size(), 25);
        assert_eq!(s.page_index(), 0);
    }

    #[test]
    fn test_toggle_sort() {
        let s = TableState::default().apply(&TableAction::ToggleSort("age".into()), CTX);
        assert_eq!(s.sort(), &SortState::by("age", SortDirection::Ascending));
        let s = s.apply(&TableAction::ToggleSort("age".into()), CTX);
        assert_eq!(s.sort().direction, SortDirection::Descending);
    }

    #[test]
    fn test_toggle_sort_keeps_page() {
        let s = at_page(1).apply(&TableAction::ToggleSort("age".into()), CTX);
        assert_eq!(s.page_index(), 1);
    }

    #[test]
    fn test_toggle_sort_disabled_is_noop() {
        let ctx = TransitionContext {
            sortable: false,
            ..CTX
        };
        let s = TableState::default();
        assert_eq!(s.apply(&TableAction::ToggleSort("age".into()), ctx), s);
    }

    #[test]
    fn test_previous_at_first_is_noop() {
        let s = TableState::new(2);
        assert!(!s.can_go_previous());
        assert_eq!(s.apply(&TableAction::PreviousPage, CTX), s);
        assert_eq!(s.apply(&TableAction::FirstPage, CTX), s);
    }

    #[test]
    fn test_next_at_last_is_noop() {
        let s = at_page(2);
        assert!(!s.can_go_next(3));
        assert_eq!(s.apply(&TableAction::NextPage, CTX), s);
        assert_eq!(s.apply(&TableAction::LastPage, CTX), s);
    }

    #[test]
    fn test_navigation_steps() {
        let s = TableState::new(2);
        let s = s.apply(&TableAction::NextPage, CTX);
        assert_eq!(s.page_index(), 1);
        let s = s.apply(&TableAction::LastPage, CTX);
        assert_eq!(s.page_index(), 2);
        let s = s.apply(&TableAction::PreviousPage, CTX);
        assert_eq!(s.page_index(), 1);
        let s = s.apply(&TableAction::FirstPage, CTX);
        assert_eq!(s.page_index(), 0);
    }

    #[test]
    fn test_navigation_with_no_pages() {
        let ctx = TransitionContext {
            total_pages: 0,
            sortable: true,
        };
        let s = TableState::new(2);
        assert_eq!(s.apply(&TableAction::NextPage, ctx).page_index(), 0);
        assert_eq!(s.apply(&TableAction::LastPage, ctx).page_index(), 0);
        assert_eq!(s.apply(&TableAction::GoToPage(4), ctx).page_index(), 0);
    }

    #[test]
    fn test_go_to_page_clamps() {
        assert_eq!(at_page(99).page_index(), 2);
    }

    #[test]
    fn test_clamped() {
        let s = at_page(2).clamped(1);
        assert_eq!(s.page_index(), 0);
        assert_eq!(at_page(1).clamped(3).page_index(), 1);
    }

    #[test]
    fn test_apply_does_not_mutate() {
        let s = at_page(1);
        let before = s.clone();
        let _ = s.apply(&TableAction::SetFilter("x".into()), CTX);
        assert_eq!(s, before);
    }
}
