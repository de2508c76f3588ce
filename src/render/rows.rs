//! Per-row, per-cell rendering through the column hooks.

use serde_json::Value;

use crate::types::{Column, Row};

/// One rendered body cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCell {
    pub field: String,
    /// Display text (formatter output when a formatter is set).
    pub value: String,
    pub title: Option<String>,
    /// Inline style: alignment first, then the row styler output.
    pub style: Option<String>,
}

/// One rendered body row, tagged with its position in the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub index: usize,
    pub cells: Vec<RenderedCell>,
}

/// Display text for a raw value. Strings are used as is; `null` shows empty.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render every row against the data-bearing columns.
///
/// Hooks run synchronously in column order; a panicking hook aborts the
/// whole render.
pub fn render_rows(rows: &[Row], columns: &[Column]) -> Vec<RenderedRow> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| RenderedRow {
            index,
            cells: columns
                .iter()
                .filter_map(|col| {
                    let field = col.field()?;
                    Some(render_cell(field, col, index, row))
                })
                .collect(),
        })
        .collect()
}

fn render_cell(field: &str, col: &Column, index: usize, row: &Row) -> RenderedCell {
    let raw = row
        .get(field)
        .cloned()
        .unwrap_or_else(|| Value::String(String::new()));

    // Style sees the raw value even when the formatter changes the display
    let styled = col
        .hooks
        .row_styler
        .as_ref()
        .map(|styler| (**styler)(&raw, index, row))
        .unwrap_or_default();

    let (value, shown) = match &col.hooks.formatter {
        Some(formatter) => {
            let text = (**formatter)(&raw, index, row);
            let shown = Value::String(text.clone());
            (text, shown)
        }
        None => (display_text(&raw), raw),
    };

    let title = match &col.hooks.tooltip {
        Some(tooltip) => Some((**tooltip)(&shown, index, row)),
        None if col.tooltip => Some(value.clone()),
        None => None,
    }
    .filter(|t| !t.is_empty());

    let style = match col.align {
        Some(align) => Some(format!("text-align:{};{styled}", align.as_css())),
        None => Some(styled).filter(|s| !s.is_empty()),
    };

    RenderedCell {
        field: field.to_string(),
        value,
        title,
        style,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::types::{Align, CellHook};
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_missing_fields_render_empty() {
        let cols = vec![Column::leaf("id", "ID"), Column::leaf("nope", "Nope")];
        let rows = vec![json!({"id": 7}), json!("not an object")];
        let out = render_rows(&rows, &cols);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].cells[0].value, "7");
        assert_eq!(out[0].cells[1].value, "");
        assert_eq!(out[1].index, 1);
        assert_eq!(out[1].cells[0].value, "");
        assert!(out[0].cells[0].title.is_none());
        assert!(out[0].cells[0].style.is_none());
    }

    #[test]
    fn test_group_columns_skipped() {
        let cols = vec![Column::group("G", 2), Column::leaf("a", "A")];
        let out = render_rows(&[json!({"a": true})], &cols);
        assert_eq!(out[0].cells.len(), 1);
        assert_eq!(out[0].cells[0].value, "true");
    }

    #[test]
    fn test_formatter_feeds_tooltip() {
        let mut col = Column::leaf("name", "Name").with_tooltip(true);
        col.hooks.formatter = Some(CellHook::cell(|v, _, _| {
            v.as_str().unwrap_or_default().to_uppercase()
        }));
        let out = render_rows(&[json!({"name": "ada"})], &[col]);
        let cell = &out[0].cells[0];
        assert_eq!(cell.value, "ADA");
        assert_eq!(cell.title.as_deref(), Some("ADA"));
    }

    #[test]
    fn test_tooltip_hook_receives_formatted_value() {
        let mut col = Column::leaf("n", "N");
        col.hooks.formatter = Some(CellHook::cell(|v, _, _| format!("#{v}")));
        col.hooks.tooltip = Some(CellHook::cell(|v, i, _| format!("{}@{i}", display_text(v))));
        let out = render_rows(&[json!({"n": 1}), json!({"n": 2})], &[col]);
        assert_eq!(out[1].cells[0].title.as_deref(), Some("#2@1"));
    }

    #[test]
    fn test_row_styler_sees_raw_value() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let mut col = Column::leaf("score", "Score");
        col.hooks.row_styler = Some(CellHook::cell(move |v, i, row| {
            log.borrow_mut().push((v.clone(), i, row.clone()));
            if v.as_i64().unwrap_or(0) < 50 {
                "color:red;".to_string()
            } else {
                String::new()
            }
        }));
        col.hooks.formatter = Some(CellHook::cell(|v, _, _| format!("{v} pts")));
        let rows = vec![json!({"score": 10}), json!({"score": 90})];
        let out = render_rows(&rows, &[col]);

        assert_eq!(out[0].cells[0].style.as_deref(), Some("color:red;"));
        assert_eq!(out[0].cells[0].value, "10 pts");
        assert!(out[1].cells[0].style.is_none());
        let seen = seen.borrow();
        assert_eq!(seen[0], (json!(10), 0, rows[0].clone()));
        assert_eq!(seen[1].1, 1);
    }

    #[test]
    fn test_alignment_precedes_row_style() {
        let mut col = Column::leaf("a", "A").with_align(Align::Right);
        col.hooks.row_styler = Some(CellHook::cell(|_, _, _| "font-weight:bold;".to_string()));
        let out = render_rows(&[json!({"a": 1})], &[col]);
        assert_eq!(
            out[0].cells[0].style.as_deref(),
            Some("text-align:right;font-weight:bold;")
        );

        let plain = Column::leaf("a", "A").with_align(Align::Center);
        let out = render_rows(&[json!({"a": 1})], &[plain]);
        assert_eq!(out[0].cells[0].style.as_deref(), Some("text-align:center;"));
    }

    #[test]
    fn test_empty_tooltip_omitted() {
        let col = Column::leaf("a", "A").with_tooltip(true);
        let out = render_rows(&[json!({})], &[col]);
        assert!(out[0].cells[0].title.is_none());
    }
}
