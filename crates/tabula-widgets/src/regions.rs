//! Hit regions of a laid-out data table.

use serde::{Deserialize, Serialize};
use tabula_core::{Point, Rect};
use tabula_data::{Column, RowAction};

/// Pager navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PagerButton {
    First,
    Previous,
    Next,
    Last,
}

impl PagerButton {
    /// Buttons in display order.
    pub const ALL: [Self; 4] = [Self::First, Self::Previous, Self::Next, Self::Last];

    /// Glyph drawn on the button.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::First => "«",
            Self::Previous => "‹",
            Self::Next => "›",
            Self::Last => "»",
        }
    }

    /// Accessible name.
    #[must_use]
    pub const fn aria_label(self) -> &'static str {
        match self {
            Self::First => "First page",
            Self::Previous => "Previous page",
            Self::Next => "Next page",
            Self::Last => "Last page",
        }
    }
}

/// An addressable part of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableRegion {
    /// The global filter input
    Filter,
    /// Header cell of column `n`
    Header(usize),
    /// Visible body row `n` (zero-based within the page)
    Row(usize),
    /// Row action button
    Action {
        /// Visible row
        row: usize,
        /// Action offered
        action: RowAction,
    },
    /// Pager navigation button
    Pager(PagerButton),
    /// Page size choice
    PageSize(usize),
}

/// Fixed sizes used by the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Metrics {
    pub(crate) filter_height: f32,
    pub(crate) header_height: f32,
    pub(crate) row_height: f32,
    pub(crate) pager_height: f32,
    pub(crate) action_width: f32,
    pub(crate) nav_width: f32,
    pub(crate) page_size_width: f32,
    pub(crate) label_width: f32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            filter_height: 44.0,
            header_height: 44.0,
            row_height: 40.0,
            pager_height: 44.0,
            action_width: 80.0,
            nav_width: 36.0,
            page_size_width: 44.0,
            label_width: 120.0,
        }
    }
}

/// What the layout needs to know about the table.
pub(crate) struct LayoutInput<'a> {
    pub(crate) columns: &'a [Column],
    pub(crate) actions: &'a [RowAction],
    pub(crate) show_filter: bool,
    pub(crate) visible_rows: usize,
    pub(crate) page_sizes: &'a [usize],
}

/// Computed rectangles for every region.
#[derive(Debug, Clone, Default)]
pub(crate) struct Regions {
    pub(crate) filter: Option<Rect>,
    pub(crate) header: Rect,
    pub(crate) headers: Vec<Rect>,
    pub(crate) body: Rect,
    pub(crate) rows: Vec<Rect>,
    pub(crate) actions: Vec<(usize, RowAction, Rect)>,
    pub(crate) pager: Rect,
    pub(crate) nav: Vec<(PagerButton, Rect)>,
    pub(crate) page_label: Rect,
    pub(crate) page_sizes: Vec<(usize, Rect)>,
}

impl Regions {
    pub(crate) fn compute(bounds: Rect, metrics: &Metrics, input: &LayoutInput<'_>) -> Self {
        let (filter, rest) = if input.show_filter {
            let (top, rest) = bounds.split_top(metrics.filter_height);
            (Some(top.inset(6.0)), rest)
        } else {
            (None, bounds)
        };
        let (header, rest) = rest.split_top(metrics.header_height);
        let (body, pager) = rest.split_bottom(metrics.pager_height);

        let mut headers = Vec::with_capacity(input.columns.len());
        let mut x = header.x;
        for col in input.columns {
            let width = col.resolved_width();
            headers.push(Rect::new(x, header.y, width, header.height));
            x += width;
        }
        let actions_x = x;

        let rows: Vec<Rect> = (0..input.visible_rows)
            .map(|i| {
                Rect::new(
                    body.x,
                    (i as f32).mul_add(metrics.row_height, body.y),
                    body.width,
                    metrics.row_height,
                )
            })
            .collect();

        let mut actions = Vec::with_capacity(rows.len() * input.actions.len());
        for (row, rect) in rows.iter().enumerate() {
            for (k, action) in input.actions.iter().enumerate() {
                let cell = Rect::new(
                    (k as f32).mul_add(metrics.action_width, actions_x),
                    rect.y,
                    metrics.action_width,
                    rect.height,
                );
                actions.push((row, *action, cell.inset(6.0)));
            }
        }

        let mut nav = Vec::with_capacity(PagerButton::ALL.len());
        let mut cursor = pager.x + 4.0;
        let button = |x: f32| Rect::new(x, pager.y + 4.0, metrics.nav_width, pager.height - 8.0);
        for b in [PagerButton::First, PagerButton::Previous] {
            nav.push((b, button(cursor)));
            cursor += metrics.nav_width + 4.0;
        }
        let page_label = Rect::new(cursor, pager.y, metrics.label_width, pager.height);
        cursor += metrics.label_width + 4.0;
        for b in [PagerButton::Next, PagerButton::Last] {
            nav.push((b, button(cursor)));
            cursor += metrics.nav_width + 4.0;
        }

        let mut size_x = (input.page_sizes.len() as f32)
            .mul_add(-(metrics.page_size_width + 4.0), pager.right())
            .max(cursor);
        let page_sizes = input
            .page_sizes
            .iter()
            .map(|&size| {
                let rect = Rect::new(
                    size_x,
                    pager.y + 4.0,
                    metrics.page_size_width,
                    pager.height - 8.0,
                );
                size_x += metrics.page_size_width + 4.0;
                (size, rect)
            })
            .collect();

        Self {
            filter,
            header,
            headers,
            body,
            rows,
            actions,
            pager,
            nav,
            page_label,
            page_sizes,
        }
    }

    /// Innermost region under `point`. Buttons win over the rows they sit on.
    pub(crate) fn hit_test(&self, point: &Point) -> Option<TableRegion> {
        if self.filter.is_some_and(|r| r.contains_point(point)) {
            return Some(TableRegion::Filter);
        }
        if let Some(i) = self.headers.iter().position(|r| r.contains_point(point)) {
            return Some(TableRegion::Header(i));
        }
        // rows can overflow a short body; only the visible part is live
        if self.body.contains_point(point) {
            if let Some((row, action, _)) = self
                .actions
                .iter()
                .find(|(_, _, r)| r.contains_point(point))
            {
                return Some(TableRegion::Action {
                    row: *row,
                    action: *action,
                });
            }
            if let Some(i) = self.rows.iter().position(|r| r.contains_point(point)) {
                return Some(TableRegion::Row(i));
            }
        }
        if let Some((b, _)) = self.nav.iter().find(|(_, r)| r.contains_point(point)) {
            return Some(TableRegion::Pager(*b));
        }
        self.page_sizes
            .iter()
            .find(|(_, r)| r.contains_point(point))
            .map(|(size, _)| TableRegion::PageSize(*size))
    }

    /// Bounds of a region, if it exists in the current layout.
    pub(crate) fn bounds_of(&self, region: TableRegion) -> Option<Rect> {
        match region {
            TableRegion::Filter => self.filter,
            TableRegion::Header(i) => self.headers.get(i).copied(),
            TableRegion::Row(i) => self.rows.get(i).copied(),
            TableRegion::Action { row, action } => self
                .actions
                .iter()
                .find(|(r, a, _)| *r == row && *a == action)
                .map(|(_, _, rect)| *rect),
            TableRegion::Pager(button) => self
                .nav
                .iter()
                .find(|(b, _)| *b == button)
                .map(|(_, rect)| *rect),
            TableRegion::PageSize(size) => self
                .page_sizes
                .iter()
                .find(|(s, _)| *s == size)
                .map(|(_, rect)| *rect),
        }
    }
}
