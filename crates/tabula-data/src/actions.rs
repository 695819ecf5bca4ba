//! Row action capability.
//!
//! The table never removes or edits records itself. A delete or archive
//! request hands the selected record to the embedding application, which
//! updates its own data and feeds the new record list back in.

use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-row requests the table can forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowAction {
    /// Ask the application to delete the record
    Delete,
    /// Ask the application to archive the record
    Archive,
}

impl RowAction {
    /// Every action, in button order.
    pub const ALL: [Self; 2] = [Self::Delete, Self::Archive];

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Delete => "Delete",
            Self::Archive => "Archive",
        }
    }
}

/// Receiver for row action requests.
pub trait RowActionHandler: Send + Sync {
    /// Whether the handler wants `action` offered at all.
    fn supports(&self, action: RowAction) -> bool;

    /// Deletion requested for `record`.
    fn on_delete(&self, record: &Record);

    /// Archival requested for `record`.
    fn on_archive(&self, record: &Record);

    /// Route `action` to the matching callback.
    fn handle(&self, action: RowAction, record: &Record) {
        match action {
            RowAction::Delete => self.on_delete(record),
            RowAction::Archive => self.on_archive(record),
        }
    }
}

type RecordFn = Box<dyn Fn(&Record) + Send + Sync>;

/// A [`RowActionHandler`] built from optional closures. An action is
/// supported exactly when its closure is set.
#[derive(Default)]
pub struct RowActionFns {
    delete: Option<RecordFn>,
    archive: Option<RecordFn>,
}

impl RowActionFns {
    /// No callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delete callback.
    #[must_use]
    pub fn with_delete(mut self, f: impl Fn(&Record) + Send + Sync + 'static) -> Self {
        self.delete = Some(Box::new(f));
        self
    }

    /// Set the archive callback.
    #[must_use]
    pub fn with_archive(mut self, f: impl Fn(&Record) + Send + Sync + 'static) -> Self {
        self.archive = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for RowActionFns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowActionFns")
            .field("delete", &self.delete.is_some())
            .field("archive", &self.archive.is_some())
            .finish()
    }
}

impl RowActionHandler for RowActionFns {
    fn supports(&self, action: RowAction) -> bool {
        match action {
            RowAction::Delete => self.delete.is_some(),
            RowAction::Archive => self.archive.is_some(),
        }
    }

    fn on_delete(&self, record: &Record) {
        if let Some(f) = &self.delete {
            f(record);
        }
    }

    fn on_archive(&self, record: &Record) {
        if let Some(f) = &self.archive {
            f(record);
        }
    }
}
