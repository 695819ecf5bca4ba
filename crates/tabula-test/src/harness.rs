//! Test harness for Tabula widgets.

use std::any::Any;
use std::collections::VecDeque;
use tabula_core::{Constraints, Event, Key, MouseButton, Point, Rect, RecordingCanvas, Widget};

/// Drives a widget with simulated input.
///
/// The widget is laid out in the viewport on creation. Every event is
/// delivered in order and any message the widget returns is kept for
/// inspection.
pub struct Harness<W: Widget> {
    root: W,
    event_queue: VecDeque<Event>,
    viewport: Rect,
    messages: Vec<Box<dyn Any + Send>>,
}

impl<W: Widget> Harness<W> {
    /// Create a harness with the default 1280x720 viewport.
    pub fn new(root: W) -> Self {
        let mut harness = Self {
            root,
            event_queue: VecDeque::new(),
            viewport: Rect::new(0.0, 0.0, 1280.0, 720.0),
            messages: Vec::new(),
        };
        harness.relayout();
        harness
    }

    /// Set the viewport size and lay the widget out again.
    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Rect::new(0.0, 0.0, width, height);
        self.relayout();
        self
    }

    /// The widget under test.
    pub const fn widget(&self) -> &W {
        &self.root
    }

    /// Mutable access to the widget under test.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.root
    }

    /// Measure and lay out the widget within the viewport.
    pub fn relayout(&mut self) -> &mut Self {
        let size = self.root.measure(Constraints::loose(self.viewport.size()));
        self.root
            .layout(Rect::new(self.viewport.x, self.viewport.y, size.width, size.height));
        self
    }

    // === Event Simulation ===

    /// Click the center of `rect`.
    pub fn click(&mut self, rect: Rect) -> &mut Self {
        self.click_at(rect.center())
    }

    /// Click at a point.
    pub fn click_at(&mut self, position: Point) -> &mut Self {
        self.event_queue.push_back(Event::MouseMove { position });
        self.event_queue.push_back(Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        self.event_queue.push_back(Event::MouseUp {
            position,
            button: MouseButton::Left,
        });
        self.process_events();
        self
    }

    /// Give the widget keyboard focus.
    pub fn focus(&mut self) -> &mut Self {
        self.send(Event::FocusIn)
    }

    /// Take keyboard focus away.
    pub fn blur(&mut self) -> &mut Self {
        self.send(Event::FocusOut)
    }

    /// Type text one character at a time.
    pub fn type_text(&mut self, text: &str) -> &mut Self {
        for c in text.chars() {
            self.event_queue.push_back(Event::TextInput {
                text: c.to_string(),
            });
        }
        self.process_events();
        self
    }

    /// Press and release a key.
    pub fn press_key(&mut self, key: Key) -> &mut Self {
        self.event_queue.push_back(Event::KeyDown { key });
        self.event_queue.push_back(Event::KeyUp { key });
        self.process_events();
        self
    }

    /// Deliver a single raw event.
    pub fn send(&mut self, event: Event) -> &mut Self {
        self.event_queue.push_back(event);
        self.process_events();
        self
    }

    // === Queries ===

    /// Paint the widget onto a fresh recording canvas.
    pub fn paint(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.root.paint(&mut canvas);
        canvas
    }

    /// Every message emitted so far, oldest first.
    pub fn messages(&self) -> &[Box<dyn Any + Send>] {
        &self.messages
    }

    /// Messages of type `T`, oldest first.
    pub fn messages_of<T: 'static>(&self) -> Vec<&T> {
        self.messages
            .iter()
            .filter_map(|m| m.downcast_ref::<T>())
            .collect()
    }

    /// Most recent message of type `T`.
    pub fn last_message<T: 'static>(&self) -> Option<&T> {
        self.messages.iter().rev().find_map(|m| m.downcast_ref::<T>())
    }

    /// Drop collected messages.
    pub fn clear_messages(&mut self) -> &mut Self {
        self.messages.clear();
        self
    }

    // === Assertions ===

    /// Assert that exactly `expected` messages of type `T` were emitted.
    ///
    /// # Panics
    ///
    /// Panics if the count differs.
    pub fn assert_message_count<T: 'static>(&self, expected: usize) -> &Self {
        let actual = self.messages_of::<T>().len();
        assert_eq!(
            actual,
            expected,
            "Expected {expected} messages of type {} but found {actual}",
            std::any::type_name::<T>()
        );
        self
    }

    /// Assert that painting produces the given text.
    ///
    /// # Panics
    ///
    /// Panics if no text command matches.
    pub fn assert_painted_text(&self, expected: &str) -> &Self {
        let canvas = self.paint();
        assert!(
            canvas.has_text(expected),
            "Expected painted text '{expected}' but found {:?}",
            canvas.texts()
        );
        self
    }

    // === Internal ===

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            if let Some(message) = self.root.event(&event) {
                self.messages.push(message);
            }
        }
    }
}
