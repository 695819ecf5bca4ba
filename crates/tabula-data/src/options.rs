//! Table options and configuration loading.

use crate::column::Column;
use crate::error::Result;
use crate::record::Record;
use serde::{Deserialize, Serialize};

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Default selectable page sizes.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 25, 50, 100];
/// Default accessible name.
pub const DEFAULT_ARIA_LABEL: &str = "Data table";

/// Behavior switches supplied by the embedding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Initial rows per page
    pub page_size: usize,
    /// Page sizes offered to the user
    pub page_size_options: Vec<usize>,
    /// Show the global filter input
    pub show_filter: bool,
    /// Allow sorting by clicking headers
    pub sortable: bool,
    /// Accessible name of the table
    pub aria_label: String,
    /// Placeholder shown in an empty filter input
    pub filter_placeholder: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            show_filter: true,
            sortable: true,
            aria_label: DEFAULT_ARIA_LABEL.to_string(),
            filter_placeholder: "Filter...".to_string(),
        }
    }
}

impl TableOptions {
    /// Set the page size.
    #[must_use]
    pub const fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the selectable page sizes.
    #[must_use]
    pub fn page_size_options(mut self, options: impl IntoIterator<Item = usize>) -> Self {
        self.page_size_options = options.into_iter().collect();
        self
    }

    /// Show or hide the filter input.
    #[must_use]
    pub const fn show_filter(mut self, show: bool) -> Self {
        self.show_filter = show;
        self
    }

    /// Enable or disable sorting.
    #[must_use]
    pub const fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = label.into();
        self
    }

    /// Clamp into a usable shape.
    ///
    /// Page size zero becomes one. Selectable sizes drop zeros, are sorted and
    /// deduplicated, and always include the active page size.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.page_size = self.page_size.max(1);
        self.page_size_options.retain(|&n| n > 0);
        self.page_size_options.push(self.page_size);
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();
        self
    }
}

/// A complete table description: columns, options and optional seed rows.
///
/// ```yaml
/// columns:
///   - label: Name
///     accessor: name
///   - label: Age
///     accessor: age
///     align: right
/// options:
///   page_size: 25
///   aria_label: Staff
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Column descriptors in display order
    pub columns: Vec<Column>,
    /// Behavior switches
    #[serde(default)]
    pub options: TableOptions,
    /// Initial records
    #[serde(default)]
    pub records: Vec<Record>,
}

impl TableConfig {
    /// Parse from YAML. Options are normalized.
    pub fn from_yaml(input: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(input)?;
        Ok(config.normalized())
    }

    /// Parse from JSON. Options are normalized.
    pub fn from_json(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input)?;
        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        self.options = self.options.normalized();
        self
    }
}
