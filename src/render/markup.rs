//! HTML fragments shared by every surface backend.
//!
//! Cell and header text is emitted verbatim so formatters can return
//! markup. Attribute values are escaped.

use std::fmt::Write;

use crate::header::HeaderRow;
use crate::layout::WidthRule;

use super::classes;
use super::RenderedRow;

/// Attribute marking injected width rule blocks.
pub const STYLE_MARKER_ATTR: &str = "csgrid";
/// Attribute naming the instance a width rule block belongs to.
pub const STYLE_TARGET_ATTR: &str = "data-target";

/// Escape text for use inside a double-quoted attribute.
pub fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn cell_class(field: &str) -> String {
    format!("{} {}-{}", classes::CELL, classes::CELL, escape_attr(field))
}

/// `<tr>` elements of the header table.
pub fn header_rows_html(rows: &[HeaderRow]) -> String {
    let mut html = String::new();
    for row in rows {
        html.push_str("<tr>");
        for cell in &row.cells {
            html.push_str("<td");
            if let Some(colspan) = cell.colspan {
                let _ = write!(html, " colspan=\"{colspan}\"");
            }
            if let Some(rowspan) = cell.rowspan {
                let _ = write!(html, " rowspan=\"{rowspan}\"");
            }
            html.push_str("><div");
            if let Some(field) = &cell.field {
                let _ = write!(html, " class=\"{}\"", cell_class(field));
            }
            if let Some(halign) = cell.halign {
                let _ = write!(html, " style=\"text-align:{};\"", halign.as_css());
            }
            let _ = write!(
                html,
                " title=\"{}\">{}</div></td>",
                escape_attr(cell.tooltip()),
                cell.title
            );
        }
        html.push_str("</tr>");
    }
    html
}

/// `<tr>` elements of the body table.
pub fn body_rows_html(rows: &[RenderedRow]) -> String {
    let mut html = String::new();
    for row in rows {
        let _ = write!(html, "<tr data-index=\"{}\">", row.index);
        for cell in &row.cells {
            let _ = write!(html, "<td><div class=\"{}\"", cell_class(&cell.field));
            if let Some(style) = &cell.style {
                let _ = write!(html, " style=\"{}\"", escape_attr(style));
            }
            if let Some(title) = &cell.title {
                let _ = write!(html, " title=\"{}\"", escape_attr(title));
            }
            let _ = write!(html, ">{}</div></td>", cell.value);
        }
        html.push_str("</tr>");
    }
    html
}

/// Stylesheet text for the width rules of one instance.
pub fn width_rules_css(instance_id: &str, rules: &[WidthRule]) -> String {
    let mut css = String::new();
    for rule in rules {
        let _ = writeln!(
            css,
            "#{instance_id} .{}-{}{{width:{}px}}",
            classes::CELL,
            rule.field,
            rule.width
        );
    }
    css
}

/// Complete `<style>` element for the width rules of one instance.
pub fn width_rules_block(instance_id: &str, rules: &[WidthRule]) -> String {
    format!(
        "<style type=\"text/css\" {STYLE_MARKER_ATTR}=\"true\" {STYLE_TARGET_ATTR}=\"{}\">\n{}</style>",
        escape_attr(instance_id),
        width_rules_css(instance_id, rules)
    )
}

pub fn no_data_html(text: &str) -> String {
    format!("<div class=\"{}\">{text}</div>", classes::NO_DATA)
}
