//! Column width resolution against the available container width.

use crate::types::{Column, WidthSpec};

/// Horizontal allowance for cell border and padding, in pixels.
pub const CELL_ALLOWANCE: i64 = 2;

/// Resolved width of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Explicit width in pixels (may be negative for tiny specs).
    Px(i64),
    /// No width rule; the column sizes to its content.
    Auto,
}

impl ColumnWidth {
    pub fn px(self) -> Option<i64> {
        match self {
            ColumnWidth::Px(px) => Some(px),
            ColumnWidth::Auto => None,
        }
    }
}

/// Leading-integer parse: optional whitespace, optional sign, then decimal
/// digits. Anything after the digits is ignored (`"12px"` is 12).
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, trimmed.get(1..).unwrap_or("")),
        Some(b'+') => (false, trimmed.get(1..).unwrap_or("")),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let digits = rest.get(..digits_len).filter(|d| !d.is_empty())?;
    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Truncate toward zero, rejecting non-finite values.
#[allow(clippy::cast_possible_truncation)]
fn trunc_to_i64(v: f64) -> Option<i64> {
    v.is_finite().then(|| v.trunc() as i64)
}

/// Compute the pixel width for `spec` given the usable container width.
///
/// - unparsable or missing spec: [`ColumnWidth::Auto`]
/// - `"N%"`: `trunc(N / 100 * total_width)`
/// - anything else: `N` pixels
///
/// The cell allowance is subtracted from the result; a width too small to
/// take it is `Auto`.
pub fn column_width(spec: Option<&WidthSpec>, total_width: i64) -> ColumnWidth {
    let (magnitude, percent) = match spec {
        Some(WidthSpec::Number(n)) => (trunc_to_i64(*n), false),
        Some(WidthSpec::Text(s)) => (parse_leading_int(s), s.ends_with('%')),
        None => (None, false),
    };
    let Some(magnitude) = magnitude else {
        return ColumnWidth::Auto;
    };
    let base = if percent {
        #[allow(clippy::cast_precision_loss)]
        let scaled = magnitude as f64 / 100.0 * total_width as f64;
        match trunc_to_i64(scaled) {
            Some(px) => px,
            None => return ColumnWidth::Auto,
        }
    } else {
        magnitude
    };
    base.checked_sub(CELL_ALLOWANCE)
        .map_or(ColumnWidth::Auto, ColumnWidth::Px)
}

/// A width rule for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthRule {
    pub field: String,
    pub width: i64,
}

/// Width rules for every leaf column with a non-auto width, in column order.
pub fn width_rules(columns: &[Column], total_width: i64) -> Vec<WidthRule> {
    columns
        .iter()
        .filter_map(|col| {
            let field = col.field()?;
            let width = column_width(col.width.as_ref(), total_width).px()?;
            Some(WidthRule {
                field: field.to_string(),
                width,
            })
        })
        .collect()
}
