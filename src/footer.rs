//! Footer text: template placeholders or a caller-supplied renderer.

use serde_json::Value;

use crate::render::display_text;
use crate::types::{GridOptions, ShapedData};

/// Replace `{key}` placeholders with values from `data`.
///
/// Keys are looked up on the serialized shaped result (`total`, `rows`).
/// Unknown keys are left in place; without data the template is returned
/// untouched.
pub fn fill_template(template: &str, data: Option<&ShapedData>) -> String {
    let Some(data) = data else {
        return template.to_string();
    };
    let Ok(Value::Object(fields)) = serde_json::to_value(data) else {
        return template.to_string();
    };

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let (before, tail) = rest.split_at(open);
        out.push_str(before);
        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };
        let placeholder = tail.get(..=close).unwrap_or(tail);
        let key = tail.get(1..close).unwrap_or("");
        match fields.get(key) {
            Some(value) => out.push_str(&display_text(value)),
            None => out.push_str(placeholder),
        }
        rest = tail.get(close + 1..).unwrap_or("");
    }
    out.push_str(rest);
    out
}

/// Footer markup for the current options, or `None` when no footer is
/// configured. A footer hook wins over `footer: true`.
pub fn footer_html(options: &GridOptions, data: Option<&ShapedData>) -> Option<String> {
    if let Some(hook) = &options.hooks.footer {
        return Some((**hook)(data));
    }
    options
        .footer
        .then(|| fill_template(&options.footer_msg, data))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::types::FooterHook;
    use serde_json::json;

    fn data(total: u64) -> ShapedData {
        ShapedData {
            total,
            rows: vec![json!({"id": 1})],
        }
    }

    #[test]
    fn test_template_total() {
        assert_eq!(
            fill_template("Total {total} items", Some(&data(42))),
            "Total 42 items"
        );
    }

    #[test]
    fn test_template_unknown_and_unbalanced() {
        assert_eq!(
            fill_template("{missing} / {total} {", Some(&data(1))),
            "{missing} / 1 {"
        );
        assert_eq!(fill_template("Total {total}", None), "Total {total}");
    }

    #[test]
    fn test_footer_disabled_by_default() {
        assert!(footer_html(&GridOptions::default(), Some(&data(1))).is_none());
    }

    #[test]
    fn test_footer_hook_wins() {
        let mut options = GridOptions {
            footer: true,
            ..GridOptions::default()
        };
        assert_eq!(
            footer_html(&options, Some(&data(3))).as_deref(),
            Some("Total 3 items")
        );
        options.hooks.footer = Some(FooterHook::footer(|d| {
            format!("{} shown", d.map_or(0, |d| d.rows.len()))
        }));
        assert_eq!(footer_html(&options, Some(&data(3))).as_deref(), Some("1 shown"));
        assert_eq!(footer_html(&options, None).as_deref(), Some("0 shown"));
    }
}
