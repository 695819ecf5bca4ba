//! Headless table controller.

use crate::actions::{RowAction, RowActionHandler};
use crate::column::Column;
use crate::options::{TableConfig, TableOptions};
use crate::record::Record;
use crate::state::{TableAction, TableState, TransitionContext};
use crate::view::{CacheStats, TableView, ViewCache};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Records, columns, options and interaction state, with the derived view
/// recomputed after every change.
pub struct Table {
    records: Vec<Record>,
    revision: u64,
    columns: Vec<Column>,
    options: TableOptions,
    state: TableState,
    cache: ViewCache,
    actions: Option<Arc<dyn RowActionHandler>>,
}

impl Table {
    /// Create a table with the given columns, no records and default options.
    #[must_use]
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Self {
        let options = TableOptions::default();
        let mut table = Self {
            records: Vec::new(),
            revision: 0,
            columns: columns.into_iter().collect(),
            state: TableState::from_options(&options),
            options,
            cache: ViewCache::new(),
            actions: None,
        };
        table.recompute();
        table
    }

    /// Create a table from a loaded configuration.
    #[must_use]
    pub fn from_config(config: TableConfig) -> Self {
        Self::new(config.columns)
            .with_options(config.options)
            .with_records(config.records)
    }

    /// Replace the options. Resets interaction state.
    #[must_use]
    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.options = options.normalized();
        self.state = TableState::from_options(&self.options);
        self.recompute();
        self
    }

    /// Replace the records.
    #[must_use]
    pub fn with_records(mut self, records: impl IntoIterator<Item = Record>) -> Self {
        self.set_records(records.into_iter().collect());
        self
    }

    /// Install a row action handler.
    #[must_use]
    pub fn with_actions(mut self, handler: impl RowActionHandler + 'static) -> Self {
        self.actions = Some(Arc::new(handler));
        self
    }

    /// Source records.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Column descriptors.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Options in effect.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Interaction state.
    #[must_use]
    pub const fn state(&self) -> &TableState {
        &self.state
    }

    /// Record list revision; bumped on every replacement.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// View cache counters.
    #[must_use]
    pub const fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Replace the record list.
    ///
    /// Sort and filter are kept; the page index is pulled back into range if
    /// the result shrank.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.revision += 1;
        self.recompute();
        let total = self.view().total_pages();
        let clamped = self.state.clamped(total);
        if clamped != self.state {
            debug!(
                from = self.state.page_index(),
                to = clamped.page_index(),
                "page index clamped after data change"
            );
            self.state = clamped;
        }
        debug!(
            revision = self.revision,
            rows = self.records.len(),
            "records replaced"
        );
    }

    /// Replace the column descriptors.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
        self.cache.invalidate();
        self.recompute();
        self.state = self.state.clamped(self.view().total_pages());
    }

    /// Apply a user action. Returns true when the state changed.
    ///
    /// Sort requests for accessors that are not columns are ignored.
    pub fn dispatch(&mut self, action: TableAction) -> bool {
        if let TableAction::ToggleSort(accessor) = &action {
            if !self.columns.iter().any(|c| &c.accessor == accessor) {
                debug!(accessor = %accessor, "sort ignored: unknown column");
                return false;
            }
        }
        let ctx = TransitionContext {
            total_pages: self.view().total_pages(),
            sortable: self.options.sortable,
        };
        let next = self.state.apply(&action, ctx);
        if next == self.state {
            debug!(?action, "action had no effect");
            return false;
        }
        debug!(
            ?action,
            page = next.page_index(),
            page_size = next.page_size(),
            "table state changed"
        );
        self.state = next;
        self.recompute();
        true
    }

    /// Current derived view.
    #[must_use]
    pub fn view(&self) -> TableView<'_> {
        TableView::new(&self.records, self.cache.order(), &self.state)
    }

    /// Whether the installed handler offers `action`.
    #[must_use]
    pub fn supports(&self, action: RowAction) -> bool {
        self.actions.as_ref().is_some_and(|h| h.supports(action))
    }

    /// Row actions the handler offers, in button order.
    #[must_use]
    pub fn supported_actions(&self) -> Vec<RowAction> {
        RowAction::ALL
            .into_iter()
            .filter(|a| self.supports(*a))
            .collect()
    }

    /// Forward `action` for the record in visible row `page_row`.
    ///
    /// Returns the forwarded record, or None when the row does not exist or
    /// no handler supports the action. The record list is left untouched.
    pub fn request(&self, action: RowAction, page_row: usize) -> Option<&Record> {
        let handler = self.actions.as_ref().filter(|h| h.supports(action))?;
        let index = *self.view().page_indices().get(page_row)?;
        let record = &self.records[index];
        debug!(?action, row = page_row, source_index = index, "row action forwarded");
        handler.handle(action, record);
        Some(record)
    }

    fn recompute(&mut self) {
        self.cache
            .refresh(self.revision, &self.records, &self.columns, &self.state);
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("records", &self.records.len())
            .field("revision", &self.revision)
            .field("columns", &self.columns)
            .field("options", &self.options)
            .field("state", &self.state)
            .field("actions", &self.supported_actions())
            .finish_non_exhaustive()
    }
}
