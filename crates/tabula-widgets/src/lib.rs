//! Widgets for Tabula.
//!
//! [`DataTable`] renders a [`tabula_data::Table`]: a global filter input,
//! sortable headers, the current page of rows with optional delete/archive
//! buttons, and a pager. Interactions come back from
//! [`Widget::event`](tabula_core::Widget::event) as the message structs
//! exported here.

mod data_table;
mod markup;
mod regions;

pub use data_table::{
    DataTable, TableFilterChanged, TablePageChanged, TablePageSizeChanged, TableRowActionRequested,
    TableSortChanged,
};
pub use regions::{PagerButton, TableRegion};
