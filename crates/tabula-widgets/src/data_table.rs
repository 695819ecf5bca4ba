//! Filterable, sortable, paginated data table widget.

use crate::markup;
use crate::regions::{LayoutInput, Metrics, PagerButton, Regions, TableRegion};
use serde::{Deserialize, Serialize};
use std::any::Any;
use tabula_core::{
    AccessibleRole, Brick, BrickAssertion, BrickVerification, Canvas, Color, Constraints, Event,
    FontWeight, Key, LayoutResult, MouseButton, Point, Rect, Size, TextStyle, TypeId, Widget,
};
use tabula_data::{
    Column, Record, RowAction, RowActionHandler, SortDirection, Table, TableAction, TableConfig,
    TableOptions, TableView, TextAlign,
};
use tracing::trace;

const PADDING: f32 = 8.0;
const FONT_SIZE: f32 = 14.0;
// average glyph advance as a fraction of font size
const GLYPH_ADVANCE: f32 = 0.6;
const EMPTY_TEXT: &str = "No records";

/// The filter query changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFilterChanged {
    /// New query
    pub query: String,
}

/// The sort column or direction changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSortChanged {
    /// Accessor now sorted on
    pub column: String,
    /// Direction now applied
    pub direction: SortDirection,
}

/// The visible page changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePageChanged {
    /// Zero-based page index
    pub page_index: usize,
}

/// The page size changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePageSizeChanged {
    /// Rows per page
    pub page_size: usize,
}

/// A row action button was pressed and the record forwarded.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRowActionRequested {
    /// Action requested
    pub action: RowAction,
    /// Zero-based row within the visible page
    pub row: usize,
    /// Record handed to the handler
    pub record: Record,
}

fn message<T: Any + Send>(msg: T) -> Box<dyn Any + Send> {
    Box::new(msg)
}

/// Data table widget.
///
/// Wraps a headless [`Table`] and adds layout, painting, input handling and
/// an HTML rendition. Every user interaction goes through
/// [`Table::dispatch`], so the widget never holds derived data of its own
/// beyond hit regions.
pub struct DataTable {
    /// Records, columns, options and interaction state
    table: Table,
    /// Fixed sizes
    metrics: Metrics,
    /// Hit regions from the last layout
    regions: Regions,
    /// Striped rows
    striped: bool,
    /// Show outer border
    bordered: bool,
    /// Header background color
    header_bg: Color,
    /// Row background color
    row_bg: Color,
    /// Alternate row background color
    row_alt_bg: Color,
    /// Border color
    border_color: Color,
    /// Text color
    text_color: Color,
    /// Header text color
    header_text_color: Color,
    /// Placeholder and disabled button text
    muted_text_color: Color,
    /// Focus ring and active page size
    accent_color: Color,
    /// Keyboard focus is inside the table
    focused: bool,
    /// Keyboard focus is on the filter input
    filter_focused: bool,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    bounds: Rect,
}

impl DataTable {
    const ASSERTIONS: &'static [BrickAssertion] = &[
        BrickAssertion::ContrastRatio(4.5),
        BrickAssertion::AccessibleName,
        BrickAssertion::Focusable,
    ];

    /// Create a table with the given columns and no records.
    #[must_use]
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Self {
        Self::from_table(Table::new(columns))
    }

    /// Wrap an existing controller.
    #[must_use]
    pub fn from_table(table: Table) -> Self {
        Self {
            table,
            metrics: Metrics::default(),
            regions: Regions::default(),
            striped: true,
            bordered: true,
            header_bg: Color::new(0.95, 0.95, 0.95, 1.0),
            row_bg: Color::WHITE,
            row_alt_bg: Color::new(0.98, 0.98, 0.98, 1.0),
            border_color: Color::new(0.85, 0.85, 0.85, 1.0),
            text_color: Color::BLACK,
            header_text_color: Color::new(0.2, 0.2, 0.2, 1.0),
            muted_text_color: Color::rgb8(110, 110, 110),
            accent_color: Color::rgb8(25, 103, 210),
            focused: false,
            filter_focused: false,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Build from a loaded configuration.
    #[must_use]
    pub fn from_config(config: TableConfig) -> Self {
        Self::from_table(Table::from_config(config))
    }

    /// Set the records.
    #[must_use]
    pub fn records(mut self, records: impl IntoIterator<Item = Record>) -> Self {
        self.table = self.table.with_records(records);
        self.relayout();
        self
    }

    /// Set the options. Resets interaction state.
    #[must_use]
    pub fn options(mut self, options: TableOptions) -> Self {
        self.table = self.table.with_options(options);
        self.relayout();
        self
    }

    /// Install a row action handler.
    #[must_use]
    pub fn actions(mut self, handler: impl RowActionHandler + 'static) -> Self {
        self.table = self.table.with_actions(handler);
        self.relayout();
        self
    }

    /// Set row height.
    #[must_use]
    pub fn row_height(mut self, height: f32) -> Self {
        self.metrics.row_height = height.max(20.0);
        self.relayout();
        self
    }

    /// Set header height.
    #[must_use]
    pub fn header_height(mut self, height: f32) -> Self {
        self.metrics.header_height = height.max(20.0);
        self.relayout();
        self
    }

    /// Enable or disable striped rows.
    #[must_use]
    pub const fn striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }

    /// Enable or disable the outer border.
    #[must_use]
    pub const fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    /// Set header background color.
    #[must_use]
    pub const fn header_bg(mut self, color: Color) -> Self {
        self.header_bg = color;
        self
    }

    /// Set row background color.
    #[must_use]
    pub const fn row_bg(mut self, color: Color) -> Self {
        self.row_bg = color;
        self
    }

    /// Set alternate row background color.
    #[must_use]
    pub const fn row_alt_bg(mut self, color: Color) -> Self {
        self.row_alt_bg = color;
        self
    }

    /// Set text color.
    #[must_use]
    pub const fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set header text color.
    #[must_use]
    pub const fn header_text_color(mut self, color: Color) -> Self {
        self.header_text_color = color;
        self
    }

    /// Set accent color.
    #[must_use]
    pub const fn accent_color(mut self, color: Color) -> Self {
        self.accent_color = color;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// The underlying controller.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Current derived view.
    #[must_use]
    pub fn view(&self) -> TableView<'_> {
        self.table.view()
    }

    /// Whether the table has keyboard focus.
    #[must_use]
    pub const fn has_focus(&self) -> bool {
        self.focused
    }

    /// Whether the filter input has keyboard focus.
    #[must_use]
    pub const fn is_filter_focused(&self) -> bool {
        self.filter_focused
    }

    /// Bounds of a region in the current layout.
    #[must_use]
    pub fn region_bounds(&self, region: TableRegion) -> Option<Rect> {
        self.regions.bounds_of(region)
    }

    /// Region under `point`.
    #[must_use]
    pub fn region_at(&self, point: &Point) -> Option<TableRegion> {
        self.regions.hit_test(point)
    }

    /// Replace the records, keeping sort and filter.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.table.set_records(records);
        self.relayout();
    }

    /// Apply an action programmatically. Returns true when state changed.
    pub fn dispatch(&mut self, action: TableAction) -> bool {
        let changed = self.table.dispatch(action);
        if changed {
            self.relayout();
        }
        changed
    }

    fn relayout(&mut self) {
        let actions = self.table.supported_actions();
        let view = self.table.view();
        let input = LayoutInput {
            columns: self.table.columns(),
            actions: &actions,
            show_filter: self.table.options().show_filter,
            visible_rows: view.page_indices().len(),
            page_sizes: &self.table.options().page_size_options,
        };
        self.regions = Regions::compute(self.bounds, &self.metrics, &input);
    }

    fn columns_width(&self) -> f32 {
        let columns: f32 = self.table.columns().iter().map(Column::resolved_width).sum();
        let actions = self.table.supported_actions().len() as f32;
        actions.mul_add(self.metrics.action_width, columns)
    }

    fn pager_width(&self) -> f32 {
        let m = &self.metrics;
        let sizes = self.table.options().page_size_options.len() as f32;
        4.0f32.mul_add(m.nav_width + 4.0, m.label_width + 8.0) + sizes * (m.page_size_width + 4.0)
    }

    // === Input ===

    fn set_filter(&mut self, query: String) -> Option<Box<dyn Any + Send>> {
        self.dispatch(TableAction::SetFilter(query.clone()))
            .then(|| message(TableFilterChanged { query }))
    }

    fn navigate(&mut self, action: TableAction) -> Option<Box<dyn Any + Send>> {
        self.dispatch(action).then(|| {
            message(TablePageChanged {
                page_index: self.table.state().page_index(),
            })
        })
    }

    fn activate(&mut self, region: TableRegion) -> Option<Box<dyn Any + Send>> {
        match region {
            TableRegion::Filter | TableRegion::Row(_) => None,
            TableRegion::Header(i) => {
                let column = self.table.columns().get(i)?.accessor.clone();
                self.dispatch(TableAction::ToggleSort(column.clone())).then(|| {
                    message(TableSortChanged {
                        column,
                        direction: self.table.state().sort().direction,
                    })
                })
            }
            TableRegion::Action { row, action } => {
                let record = self.table.request(action, row)?.clone();
                Some(message(TableRowActionRequested { action, row, record }))
            }
            TableRegion::Pager(button) => self.navigate(match button {
                PagerButton::First => TableAction::FirstPage,
                PagerButton::Previous => TableAction::PreviousPage,
                PagerButton::Next => TableAction::NextPage,
                PagerButton::Last => TableAction::LastPage,
            }),
            TableRegion::PageSize(page_size) => self
                .dispatch(TableAction::SetPageSize(page_size))
                .then(|| message(TablePageSizeChanged { page_size })),
        }
    }

    fn key_down(&mut self, key: Key) -> Option<Box<dyn Any + Send>> {
        if self.filter_focused {
            match key {
                Key::Backspace => {
                    let mut query = self.table.state().filter().to_string();
                    query.pop()?;
                    return self.set_filter(query);
                }
                Key::Escape => {
                    if self.table.state().filter().is_empty() {
                        return None;
                    }
                    return self.set_filter(String::new());
                }
                _ => {}
            }
        }
        if !self.focused {
            return None;
        }
        match key {
            Key::PageDown => self.navigate(TableAction::NextPage),
            Key::PageUp => self.navigate(TableAction::PreviousPage),
            Key::Home if !self.filter_focused => self.navigate(TableAction::FirstPage),
            Key::End if !self.filter_focused => self.navigate(TableAction::LastPage),
            _ => None,
        }
    }

    // === Painting ===

    fn paint_filter(&self, canvas: &mut dyn Canvas, rect: Rect) {
        canvas.fill_rect(rect, self.row_bg);
        let ring = if self.filter_focused {
            self.accent_color
        } else {
            self.border_color
        };
        canvas.stroke_rect(rect, ring, if self.filter_focused { 2.0 } else { 1.0 });

        let query = self.table.state().filter();
        let (text, color) = if query.is_empty() {
            (self.table.options().filter_placeholder.as_str(), self.muted_text_color)
        } else {
            (query, self.text_color)
        };
        canvas.push_clip(rect);
        canvas.draw_text(
            text,
            Point::new(rect.x + PADDING, rect.y + rect.height / 2.0),
            &text_style(color, FontWeight::Normal),
        );
        canvas.pop_clip();
    }

    fn paint_header(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.regions.header, self.header_bg);
        let sort = self.table.state().sort();
        let style = text_style(self.header_text_color, FontWeight::Bold);
        for (column, cell) in self.table.columns().iter().zip(&self.regions.headers) {
            let label = match sort.direction_for(&column.accessor) {
                Some(direction) => format!("{} {}", column.label, sort_glyph(direction)),
                None => column.label.clone(),
            };
            canvas.push_clip(*cell);
            canvas.draw_text(&label, text_origin(*cell, &label, column.align), &style);
            canvas.pop_clip();
        }
        if !self.table.supported_actions().is_empty() {
            let x = self.regions.headers.last().map_or(self.regions.header.x, Rect::right);
            canvas.draw_text(
                "Actions",
                Point::new(x + PADDING, self.regions.header.y + self.regions.header.height / 2.0),
                &style,
            );
        }
        canvas.draw_line(
            Point::new(self.regions.header.x, self.regions.header.bottom()),
            Point::new(self.regions.header.right(), self.regions.header.bottom()),
            self.border_color,
            1.0,
        );
    }

    fn paint_body(&self, canvas: &mut dyn Canvas) {
        let body = self.regions.body;
        canvas.push_clip(body);
        let view = self.table.view();
        if view.is_empty() {
            let style = text_style(self.muted_text_color, FontWeight::Normal);
            canvas.draw_text(EMPTY_TEXT, text_origin(body, EMPTY_TEXT, TextAlign::Center), &style);
            canvas.pop_clip();
            return;
        }

        let style = text_style(self.text_color, FontWeight::Normal);
        for (i, (record, row)) in view.page_records().zip(&self.regions.rows).enumerate() {
            let bg = if self.striped && i % 2 == 1 {
                self.row_alt_bg
            } else {
                self.row_bg
            };
            canvas.fill_rect(*row, bg);

            for (column, header) in self.table.columns().iter().zip(&self.regions.headers) {
                let cell = Rect::new(header.x, row.y, header.width, row.height);
                let text = record.value(&column.accessor).display();
                canvas.push_clip(cell);
                canvas.draw_text(&text, text_origin(cell, &text, column.align), &style);
                canvas.pop_clip();
            }
        }

        for (_, action, rect) in &self.regions.actions {
            canvas.stroke_rect(*rect, self.border_color, 1.0);
            canvas.draw_text(
                action.label(),
                text_origin(*rect, action.label(), TextAlign::Center),
                &style,
            );
        }
        canvas.pop_clip();
    }

    fn paint_pager(&self, canvas: &mut dyn Canvas) {
        let view = self.table.view();
        let pager = self.regions.pager;
        canvas.draw_line(
            Point::new(pager.x, pager.y),
            Point::new(pager.right(), pager.y),
            self.border_color,
            1.0,
        );

        for (button, rect) in &self.regions.nav {
            let enabled = match button {
                PagerButton::First | PagerButton::Previous => view.can_go_previous(),
                PagerButton::Next | PagerButton::Last => view.can_go_next(),
            };
            let color = if enabled {
                self.text_color
            } else {
                self.muted_text_color
            };
            canvas.stroke_rect(*rect, self.border_color, 1.0);
            canvas.draw_text(
                button.glyph(),
                text_origin(*rect, button.glyph(), TextAlign::Center),
                &text_style(color, FontWeight::Normal),
            );
        }

        let label = view.page_label();
        canvas.draw_text(
            &label,
            text_origin(self.regions.page_label, &label, TextAlign::Center),
            &text_style(self.text_color, FontWeight::Normal),
        );

        for (size, rect) in &self.regions.page_sizes {
            let text = size.to_string();
            let color = if *size == view.page_size() {
                canvas.fill_rect(*rect, self.accent_color);
                Color::WHITE
            } else {
                canvas.stroke_rect(*rect, self.border_color, 1.0);
                self.text_color
            };
            canvas.draw_text(
                &text,
                text_origin(*rect, &text, TextAlign::Center),
                &text_style(color, FontWeight::Normal),
            );
        }
    }
}

const fn text_style(color: Color, weight: FontWeight) -> TextStyle {
    TextStyle {
        size: FONT_SIZE,
        color,
        weight,
    }
}

const fn sort_glyph(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    }
}

/// Left-middle anchor for `text` aligned within `cell`.
fn text_origin(cell: Rect, text: &str, align: TextAlign) -> Point {
    let width = text.chars().count() as f32 * FONT_SIZE * GLYPH_ADVANCE;
    let x = match align {
        TextAlign::Left => cell.x + PADDING,
        TextAlign::Center => cell.x + (cell.width - width) / 2.0,
        TextAlign::Right => cell.right() - PADDING - width,
    };
    Point::new(x.max(cell.x), cell.y + cell.height / 2.0)
}

impl std::fmt::Debug for DataTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("table", &self.table)
            .field("focused", &self.focused)
            .field("filter_focused", &self.filter_focused)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl Widget for DataTable {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let m = &self.metrics;
        let width = self.columns_width().max(self.pager_width());
        let filter = if self.table.options().show_filter {
            m.filter_height
        } else {
            0.0
        };
        let rows = self.table.state().page_size() as f32;
        let height = rows.mul_add(m.row_height, filter + m.header_height + m.pager_height);
        constraints.constrain(Size::new(width, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.relayout();
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounds, self.row_bg);
        if let Some(filter) = self.regions.filter {
            self.paint_filter(canvas, filter);
        }
        self.paint_header(canvas);
        self.paint_body(canvas);
        self.paint_pager(canvas);
        if self.bordered {
            canvas.stroke_rect(self.bounds, self.border_color, 1.0);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                if !self.bounds.contains_point(position) {
                    self.focused = false;
                    self.filter_focused = false;
                    return None;
                }
                self.focused = true;
                let region = self.regions.hit_test(position);
                self.filter_focused = region == Some(TableRegion::Filter);
                trace!(?region, "pointer down");
                region.and_then(|r| self.activate(r))
            }
            Event::FocusIn => {
                self.focused = true;
                None
            }
            Event::FocusOut => {
                self.focused = false;
                self.filter_focused = false;
                None
            }
            Event::TextInput { text } if self.filter_focused => {
                let mut query = self.table.state().filter().to_string();
                query.push_str(text);
                self.set_filter(query)
            }
            Event::KeyDown { key } => self.key_down(*key),
            _ => None,
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(self.table.options().aria_label.as_str())
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Table
    }

    fn text_colors(&self) -> Option<(Color, Color)> {
        Some((self.text_color, self.row_bg))
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Brick for DataTable {
    fn brick_name(&self) -> &'static str {
        "DataTable"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        Self::ASSERTIONS
    }

    fn verify(&self) -> BrickVerification {
        BrickVerification::run(self.assertions(), |assertion| match assertion {
            BrickAssertion::ContrastRatio(min) => {
                let mut pairs = vec![
                    ("body text", self.text_color, self.row_bg),
                    ("header text", self.header_text_color, self.header_bg),
                ];
                if self.striped {
                    pairs.push(("striped row text", self.text_color, self.row_alt_bg));
                }
                pairs
                    .into_iter()
                    .map(|(what, fg, bg)| (what, fg.contrast_ratio(&bg)))
                    .find(|(_, ratio)| ratio < min)
                    .map_or(Ok(()), |(what, ratio)| {
                        Err(format!("{what} contrast {ratio:.2}:1 below {min}:1"))
                    })
            }
            BrickAssertion::AccessibleName => {
                if self.table.options().aria_label.trim().is_empty() {
                    Err("table has no accessible name".to_string())
                } else {
                    Ok(())
                }
            }
            BrickAssertion::Focusable => Ok(()),
        })
    }

    fn to_html(&self) -> String {
        markup::render(&self.table, self.test_id_value.as_deref().unwrap_or("data-table"))
    }

    fn to_css(&self) -> String {
        let mut css = format!(
            ".tabula-table {{ display: flex; flex-direction: column; gap: 4px; font-size: {FONT_SIZE}px; }}\n\
             .tabula-table table {{ border-collapse: collapse; width: 100%; color: {text}; background: {row}; }}\n\
             .tabula-table th {{ background: {header}; color: {header_text}; text-align: left; }}\n\
             .tabula-table td, .tabula-table th {{ padding: 0 {PADDING}px; height: {row_height}px; }}\n\
             .tabula-table button[aria-pressed=\"true\"] {{ background: {accent}; color: {white}; }}\n\
             .tabula-table :focus-visible {{ outline: 2px solid {accent}; }}\n",
            text = self.text_color.to_css(),
            row = self.row_bg.to_css(),
            header = self.header_bg.to_css(),
            header_text = self.header_text_color.to_css(),
            row_height = self.metrics.row_height,
            accent = self.accent_color.to_css(),
            white = Color::WHITE.to_css(),
        );
        if self.striped {
            css.push_str(&format!(
                ".tabula-table tbody tr:nth-child(even) {{ background: {}; }}\n",
                self.row_alt_bg.to_css()
            ));
        }
        if self.bordered {
            css.push_str(&format!(
                ".tabula-table table {{ border: 1px solid {}; }}\n",
                self.border_color.to_css()
            ));
        }
        css
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}
