//! csgrid - data grid widget for the web
//!
//! Renders tabular data into a host document:
//! - Flat or two-tier column specs (group headers spanning leaf columns)
//! - Multi-row headers built from arbitrarily nested column trees
//! - Pixel and percentage column widths, scrollbar-aware
//! - Local or remote data with paging, query/load filters and cell hooks
//!
//! # Usage (Rust)
//!
//! ```
//! use csgrid::{Grid, GridOptions, HtmlSurface};
//!
//! let options = GridOptions::from_json(r#"{
//!     "columns": [{"field": "id", "title": "ID", "width": 60}],
//!     "data": [{"id": 1}, {"id": 2}]
//! }"#).unwrap();
//! let mut grid = Grid::new(HtmlSurface::new(400), options);
//! grid.init().unwrap();
//! assert_eq!(grid.data().map(|d| d.total), Some(2));
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { CsGrid } from 'csgrid';
//! await init();
//! const grid = new CsGrid(document.getElementById('users'), { columns, url: '/api/users', pager: true });
//! grid.init();
//! ```

pub mod columns;
pub mod error;
pub mod footer;
pub mod grid;
pub mod header;
pub mod layout;
pub mod pipeline;
pub mod render;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod web;

use wasm_bindgen::prelude::*;

pub use grid::{Grid, LoadStatus};
pub use render::{HtmlSurface, Surface};
pub use types::*;

#[cfg(target_arch = "wasm32")]
pub use web::CsGrid;

/// Render a grid described by `options_json` to static HTML.
///
/// Only local data is rendered; a configured `url` leaves the body empty.
/// Returns an empty string when no columns are configured.
///
/// # Errors
/// Returns an error if the options are not valid JSON for [`GridOptions`].
pub fn render_html(options_json: &str, container_width: i64) -> error::Result<String> {
    let options = GridOptions::from_json(options_json)?;
    let mut grid = Grid::new(HtmlSurface::new(container_width), options);
    if grid.init()? == LoadStatus::Skipped {
        return Ok(String::new());
    }
    Ok(grid.surface().to_html())
}

/// Render a grid from JSON options to an HTML string.
///
/// # Errors
/// Returns an error if the options cannot be parsed.
#[wasm_bindgen]
pub fn render_grid_html(options_json: &str, container_width: i32) -> Result<String, JsValue> {
    render_html(options_json, i64::from(container_width)).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
