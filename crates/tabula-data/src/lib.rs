//! Client-side data pipeline for Tabula tables.
//!
//! Records flow one way through three pure stages:
//!
//! 1. [`filter`]: keep records where any column contains the query
//!    (case-insensitive)
//! 2. [`sort`]: stable single-column sort
//! 3. [`paginate`]: slice out the current page
//!
//! [`TableState`] holds the interaction state as an immutable value and
//! [`Table`] ties records, columns, options and state together, memoizing
//! the filtered/sorted order between page changes.
//!
//! ```
//! use tabula_data::{Column, Record, Table, TableAction};
//!
//! let mut table = Table::new([Column::new("Name", "name"), Column::new("Age", "age")])
//!     .with_records([
//!         Record::new().field("name", "Bob").field("age", 30),
//!         Record::new().field("name", "Amy").field("age", 25),
//!     ]);
//! table.dispatch(TableAction::ToggleSort("age".into()));
//! let first = table.view().page_records().next().map(|r| r.value("name").to_string());
//! assert_eq!(first.as_deref(), Some("Amy"));
//! ```

pub mod actions;
pub mod column;
pub mod error;
pub mod filter;
pub mod options;
pub mod paginate;
pub mod record;
pub mod sort;
pub mod state;
mod table;
pub mod value;
pub mod view;

pub use actions::{RowAction, RowActionFns, RowActionHandler};
pub use column::{Column, TextAlign};
pub use error::{Error, Result};
pub use filter::{filter_indices, filter_records, FilterQuery};
pub use options::{TableConfig, TableOptions};
pub use record::{records_from_json, records_from_json_str, Record};
pub use sort::{sort_indices, sort_records, SortDirection, SortState};
pub use state::{TableAction, TableState, TransitionContext};
pub use table::Table;
pub use value::Value;
pub use view::{recompute, CacheStats, TableView, ViewCache};
