//! Core types and traits for Tabula widgets.
//!
//! - Geometry: [`Point`], [`Size`], [`Rect`], [`Constraints`]
//! - Color with WCAG contrast math: [`Color`]
//! - Input: [`Event`], [`Key`], [`MouseButton`]
//! - Contracts: [`Widget`], [`Canvas`], [`Brick`]
//! - Test support: [`RecordingCanvas`]

mod brick;
mod canvas;
mod color;
mod event;
mod geometry;
pub mod widget;

pub use brick::{Brick, BrickAssertion, BrickVerification};
pub use canvas::{DrawCommand, RecordingCanvas};
pub use color::Color;
pub use event::{Event, Key, MouseButton};
pub use geometry::{Constraints, Point, Rect, Size};
pub use widget::{AccessibleRole, Canvas, FontWeight, LayoutResult, TextStyle, TypeId, Widget};
