//! Common test utilities: option fixtures and grid construction helpers.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::cast_possible_truncation
)]

use serde_json::{json, Value};

use csgrid::{Grid, GridOptions, HtmlSurface, LoadStatus};

/// Container width used by every fixture grid.
pub const WIDTH: i64 = 400;

/// `n` user rows with ids starting at 1.
#[must_use]
pub fn users(n: usize) -> Value {
    Value::Array(
        (1..=n)
            .map(|i| json!({"id": i, "name": format!("user{i}"), "age": 20 + i}))
            .collect(),
    )
}

/// Flat id/name/age columns.
#[must_use]
pub fn flat_columns() -> Value {
    json!([
        {"field": "id", "title": "ID", "width": 60},
        {"field": "name", "title": "Name", "width": "50%"},
        {"field": "age", "title": "Age", "align": "right"}
    ])
}

/// Options from a JSON literal. Panics on invalid input.
#[must_use]
pub fn options(json: Value) -> GridOptions {
    serde_json::from_value(json).expect("valid grid options")
}

/// Flat columns over local `data`.
#[must_use]
pub fn local_options(data: Value) -> GridOptions {
    options(json!({"columns": flat_columns(), "data": data}))
}

#[must_use]
pub fn grid(options: GridOptions) -> Grid<HtmlSurface> {
    Grid::new(HtmlSurface::new(WIDTH), options)
}

/// Build and init a grid, asserting the init did not fail.
#[must_use]
pub fn init_grid(options: GridOptions) -> (Grid<HtmlSurface>, LoadStatus) {
    let mut grid = grid(options);
    let status = grid.init().expect("init");
    (grid, status)
}

/// Display values of one column across the rendered body.
#[must_use]
pub fn column_values(grid: &Grid<HtmlSurface>, field: &str) -> Vec<String> {
    grid.surface()
        .body_rows()
        .iter()
        .filter_map(|row| row.cells.iter().find(|c| c.field == field))
        .map(|c| c.value.clone())
        .collect()
}
