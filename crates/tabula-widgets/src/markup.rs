//! HTML rendition of a table.

use crate::regions::PagerButton;
use tabula_data::{Column, Table, TextAlign};

/// Escape text for use in element content and quoted attributes.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn disabled(flag: bool) -> &'static str {
    if flag {
        " disabled"
    } else {
        ""
    }
}

fn align_style(column: &Column) -> String {
    match column.align {
        TextAlign::Left => String::new(),
        align => format!(r#" style="text-align: {}""#, align.css()),
    }
}

/// Render the current page of `table`.
pub(crate) fn render(table: &Table, test_id: &str) -> String {
    let view = table.view();
    let options = table.options();
    let state = table.state();
    let actions = table.supported_actions();

    let mut html = format!(r#"<div class="tabula-table" data-testid="{}">"#, escape(test_id));

    if options.show_filter {
        html.push_str(&format!(
            r#"<input type="search" class="tabula-filter" aria-label="Filter rows" placeholder="{}" value="{}">"#,
            escape(&options.filter_placeholder),
            escape(state.filter())
        ));
    }

    html.push_str(&format!(r#"<table aria-label="{}">"#, escape(&options.aria_label)));

    html.push_str("<thead><tr>");
    for column in table.columns() {
        let label = escape(&column.label);
        let aria_sort = state
            .sort()
            .direction_for(&column.accessor)
            .map_or("none", |d| d.aria());
        if options.sortable {
            html.push_str(&format!(
                r#"<th scope="col" aria-sort="{aria_sort}"><button type="button" class="tabula-sort">{label}</button></th>"#
            ));
        } else {
            html.push_str(&format!(r#"<th scope="col" aria-sort="{aria_sort}">{label}</th>"#));
        }
    }
    if !actions.is_empty() {
        html.push_str(r#"<th scope="col">Actions</th>"#);
    }
    html.push_str("</tr></thead>");

    html.push_str("<tbody>");
    let first = view.page_index() * view.page_size();
    for (i, record) in view.page_records().enumerate() {
        html.push_str("<tr>");
        for column in table.columns() {
            html.push_str(&format!(
                "<td{}>{}</td>",
                align_style(column),
                escape(&record.value(&column.accessor).display())
            ));
        }
        if !actions.is_empty() {
            html.push_str(r#"<td class="tabula-actions">"#);
            for action in &actions {
                html.push_str(&format!(
                    r#"<button type="button" aria-label="{label} row {n}">{label}</button>"#,
                    label = action.label(),
                    n = first + i + 1
                ));
            }
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    if view.is_empty() {
        let span = table.columns().len() + usize::from(!actions.is_empty());
        html.push_str(&format!(
            r#"<tr><td class="tabula-empty" colspan="{}">No records</td></tr>"#,
            span.max(1)
        ));
    }
    html.push_str("</tbody></table>");

    html.push_str(r#"<nav class="tabula-pager" aria-label="Pagination">"#);
    for button in PagerButton::ALL {
        let off = match button {
            PagerButton::First | PagerButton::Previous => !view.can_go_previous(),
            PagerButton::Next | PagerButton::Last => !view.can_go_next(),
        };
        html.push_str(&format!(
            r#"<button type="button" aria-label="{}"{}>{}</button>"#,
            button.aria_label(),
            disabled(off),
            button.glyph()
        ));
        if button == PagerButton::Previous {
            html.push_str(&format!(
                r#"<span role="status" aria-live="polite">{}</span>"#,
                view.page_label()
            ));
        }
    }
    html.push_str(r#"<div role="group" aria-label="Rows per page">"#);
    for &size in &options.page_size_options {
        html.push_str(&format!(
            r#"<button type="button" aria-pressed="{}">{size}</button>"#,
            size == view.page_size()
        ));
    }
    html.push_str("</div></nav>");

    html.push_str(&format!(r#"<p class="tabula-summary">{}</p>"#, view.summary()));
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_data::{Record, RowActionFns, TableAction, TableOptions};

    fn table() -> Table {
        Table::new([
            Column::new("Name", "name"),
            Column::new("Age", "age").align(TextAlign::Right),
        ])
        .with_options(TableOptions::default().page_size(2).aria_label("Staff"))
        .with_records([
            Record::new().field("name", "Bob").field("age", 30),
            Record::new().field("name", "Amy").field("age", 25),
            Record::new().field("name", "Cid").field("age", 25),
        ])
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<b a="1">&'"#), "&lt;b a=&quot;1&quot;&gt;&amp;&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_render_structure() {
        let html = render(&table(), "staff");
        assert!(html.starts_with(r#"<div class="tabula-table" data-testid="staff">"#));
        assert!(html.contains(r#"aria-label="Filter rows""#));
        assert!(html.contains(r#"<table aria-label="Staff">"#));
        assert!(html.contains(r#"<th scope="col" aria-sort="none">"#));
        assert!(html.contains(r#"<td style="text-align: right">30</td>"#));
        assert!(html.contains(r#"<nav class="tabula-pager" aria-label="Pagination">"#));
        assert!(html.contains("Page 1 of 2"));
        assert!(html.contains("Showing 1-2 of 3"));
    }

    #[test]
    fn test_render_boundary_buttons() {
        let mut t = table();
        let html = render(&t, "t");
        assert!(html.contains(r#"aria-label="Previous page" disabled"#));
        assert!(html.contains(r#"aria-label="Next page">"#));
        t.dispatch(TableAction::LastPage);
        let html = render(&t, "t");
        assert!(html.contains(r#"aria-label="Next page" disabled"#));
        assert!(html.contains(r#"aria-label="First page">"#));
    }

    #[test]
    fn test_render_sort_and_page_size_state() {
        let mut t = table();
        t.dispatch(TableAction::ToggleSort("age".into()));
        t.dispatch(TableAction::ToggleSort("age".into()));
        let html = render(&t, "t");
        assert!(html.contains(r#"aria-sort="descending""#));
        assert!(html.contains(r#"<button type="button" aria-pressed="true">2</button>"#));
        assert!(html.contains(r#"<button type="button" aria-pressed="false">10</button>"#));
    }

    #[test]
    fn test_render_action_labels_use_absolute_row() {
        let mut t = table().with_actions(
            RowActionFns::new()
                .with_delete(|_| {})
                .with_archive(|_| {}),
        );
        t.dispatch(TableAction::NextPage);
        let html = render(&t, "t");
        assert!(html.contains(r#"<th scope="col">Actions</th>"#));
        assert!(html.contains(r#"aria-label="Delete row 3""#));
        assert!(html.contains(r#"aria-label="Archive row 3""#));
        assert!(!html.contains("Delete row 1"));
    }

    #[test]
    fn test_render_empty_state() {
        let mut t = table();
        t.dispatch(TableAction::SetFilter("zzz".into()));
        let html = render(&t, "t");
        assert!(html.contains(r#"colspan="2">No records</td>"#));
        assert!(html.contains("Page 1 of 1"));
    }

    #[test]
    fn test_render_escapes_user_text() {
        let mut t = Table::new([Column::new("<Name>", "name")])
            .with_records([Record::new().field("name", "<script>alert(1)</script>")]);
        t.dispatch(TableAction::SetFilter("<s".into()));
        let html = render(&t, "a\"b");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&lt;Name&gt;"));
        assert!(html.contains(r#"value="&lt;s""#));
        assert!(html.contains(r#"data-testid="a&quot;b""#));
    }

    #[test]
    fn test_render_without_filter_or_sort() {
        let t = table().with_options(TableOptions::default().show_filter(false).sortable(false));
        let html = render(&t, "t");
        assert!(!html.contains(r#"type="search""#));
        assert!(!html.contains("tabula-sort"));
    }
}
