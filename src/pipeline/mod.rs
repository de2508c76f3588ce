//! Data pipeline: turns raw local or remote data into a shaped `{total, rows}`.
//!
//! Order of operations for every load:
//! 1. the load filter (if any) rewrites the raw data,
//! 2. arrays are sliced to the current page and wrapped with their
//!    pre-slice length as `total`,
//! 3. objects are trusted as already shaped (server-side paging),
//! 4. anything else is treated as no data.

mod remote;

pub use remote::{build_query, QueryRequest};

use log::trace;
use serde_json::Value;

use crate::types::{GridOptions, PageWindow, Row, ShapedData};

/// Shape raw data into `{total, rows}`.
///
/// Only arrays are paged. `total` always reports the length before slicing
/// so callers can compute the page count.
pub fn shape(data: Option<&Value>, window: Option<PageWindow>) -> Option<ShapedData> {
    match data? {
        Value::Array(items) => {
            let rows = match window {
                Some(window) => items.get(window.range(items.len())).unwrap_or_default().to_vec(),
                None => items.clone(),
            };
            Some(ShapedData {
                total: items.len() as u64,
                rows,
            })
        }
        Value::Object(map) => Some(ShapedData {
            total: map.get("total").and_then(total_of).unwrap_or(0),
            rows: map
                .get("rows")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default(),
        }),
        _ => None,
    }
}

fn total_of(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Apply the load filter, then shape with the options' page window.
///
/// The filter works on a copy; the stored source data is never rewritten,
/// so reloading does not filter twice.
pub fn prepare(source: Option<&Value>, options: &GridOptions) -> Option<ShapedData> {
    let window = options.page_window();
    match &options.hooks.load_filter {
        Some(filter) => {
            let filtered = (**filter)(source.cloned().unwrap_or(Value::Null));
            trace!("load filter applied");
            shape(Some(&filtered), window)
        }
        None => shape(source, window),
    }
}

/// Rows to render, or `None` when the no-data placeholder applies.
pub fn visible_rows(data: Option<&ShapedData>) -> Option<&[Row]> {
    data.filter(|d| !d.is_empty()).map(|d| d.rows.as_slice())
}
