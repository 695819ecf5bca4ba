//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle:
//!
//! 1. **Measure**: compute the preferred size under [`Constraints`]
//! 2. **Layout**: accept final bounds and position internal regions
//! 3. **Paint**: emit draw operations onto a [`Canvas`]
//!
//! Input arrives through [`Widget::event`], which may return a boxed message
//! describing what changed. Messages are plain structs; callers downcast them.

use crate::brick::Brick;
use crate::color::Color;
use crate::event::Event;
use crate::geometry::{Constraints, Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait.
pub trait Widget: Brick + Send + Sync {
    /// Type identifier for this widget.
    fn type_id(&self) -> TypeId;

    /// Preferred size under the given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept final bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Emit draw operations.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle an input event, optionally returning a message.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Child widgets.
    fn children(&self) -> &[Box<dyn Widget>];

    /// Whether the widget accepts input.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Whether the widget can take keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Accessible name for assistive technology.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Foreground and background colors used for body text, if any.
    fn text_colors(&self) -> Option<(Color, Color)> {
        None
    }

    /// Bounds from the last layout.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Drawing surface.
pub trait Canvas {
    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Draw text with its baseline-left anchor at `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Draw a line segment.
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);

    /// Restrict drawing to `rect` until the matching `pop_clip`.
    fn push_clip(&mut self, rect: Rect);

    /// Remove the innermost clip.
    fn pop_clip(&mut self);
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 14.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Accessible roles, named after their ARIA counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    #[default]
    Generic,
    Button,
    SearchBox,
    Table,
    Row,
    ColumnHeader,
    Cell,
    Navigation,
    Status,
}

impl AccessibleRole {
    /// ARIA role attribute value.
    #[must_use]
    pub const fn aria(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Button => "button",
            Self::SearchBox => "searchbox",
            Self::Table => "table",
            Self::Row => "row",
            Self::ColumnHeader => "columnheader",
            Self::Cell => "cell",
            Self::Navigation => "navigation",
            Self::Status => "status",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_id_distinguishes_types() {
        assert_eq!(TypeId::of::<String>(), TypeId::of::<String>());
        assert_ne!(TypeId::of::<String>(), TypeId::of::<u32>());
    }

    #[test]
    fn test_text_style_default() {
        let style = TextStyle::default();
        assert_eq!(style.size, 14.0);
        assert_eq!(style.weight, FontWeight::Normal);
    }

    #[test]
    fn test_accessible_role_aria() {
        assert_eq!(AccessibleRole::default(), AccessibleRole::Generic);
        assert_eq!(AccessibleRole::Table.aria(), "table");
        assert_eq!(AccessibleRole::ColumnHeader.aria(), "columnheader");
        assert_eq!(AccessibleRole::SearchBox.aria(), "searchbox");
    }

    #[test]
    fn test_layout_result_default() {
        assert_eq!(LayoutResult::default().size, Size::ZERO);
    }
}
