//! Column descriptors.

use serde::{Deserialize, Serialize};

/// A column: a display label and the record field it reads.
///
/// Column order is display order. Every column takes part in global
/// filtering and may be sorted on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Header text
    pub label: String,
    /// Field name read from each record
    pub accessor: String,
    /// Preferred width in pixels (None = auto)
    #[serde(default)]
    pub width: Option<f32>,
    /// Cell text alignment
    #[serde(default)]
    pub align: TextAlign,
}

impl Column {
    /// Minimum column width.
    pub const MIN_WIDTH: f32 = 40.0;
    /// Width used when none is set.
    pub const AUTO_WIDTH: f32 = 120.0;

    /// Create a column reading `accessor`, headed by `label`.
    #[must_use]
    pub fn new(label: impl Into<String>, accessor: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            accessor: accessor.into(),
            width: None,
            align: TextAlign::Left,
        }
    }

    /// Set the preferred width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width.max(Self::MIN_WIDTH));
        self
    }

    /// Set text alignment.
    #[must_use]
    pub const fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Width to lay out with.
    #[must_use]
    pub fn resolved_width(&self) -> f32 {
        self.width.unwrap_or(Self::AUTO_WIDTH).max(Self::MIN_WIDTH)
    }
}

/// Text alignment within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// CSS `text-align` value.
    #[must_use]
    pub const fn css(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_new() {
        let col = Column::new("Name", "name");
        assert_eq!(col.label, "Name");
        assert_eq!(col.accessor, "name");
        assert!(col.width.is_none());
        assert_eq!(col.align, TextAlign::Left);
        assert_eq!(col.resolved_width(), Column::AUTO_WIDTH);
    }

    #[test]
    fn test_column_width_min() {
        let col = Column::new("ID", "id").width(5.0);
        assert_eq!(col.width, Some(Column::MIN_WIDTH));
    }

    #[test]
    fn test_column_align() {
        let col = Column::new("Age", "age").align(TextAlign::Right);
        assert_eq!(col.align.css(), "right");
    }

    #[test]
    fn test_column_yaml_defaults() {
        let col: Column =
            serde_yaml_ng::from_str("label: Joined\naccessor: joined\nalign: center\n")
                .expect("valid yaml");
        assert_eq!(col.accessor, "joined");
        assert_eq!(col.align, TextAlign::Center);
        assert!(col.width.is_none());
    }
}
