//! Browser tests for the DOM surface and the JavaScript entry points.
//!
//! Run with: wasm-pack test --headless --firefox
#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::json;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use csgrid::render::DomSurface;
use csgrid::{render_grid_html, Grid, GridOptions, LoadStatus};

wasm_bindgen_test_configure!(run_in_browser);

fn host() -> HtmlElement {
    let doc = web_sys::window().unwrap().document().unwrap();
    let el: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

fn options() -> GridOptions {
    serde_json::from_value(json!({
        "columns": [
            {"field": "id", "title": "ID", "width": 60},
            {"field": "name", "title": "Name"}
        ],
        "data": [{"id": 1, "name": "ada"}, {"id": 2, "name": "bob"}],
        "footer": true
    }))
    .unwrap()
}

#[wasm_bindgen_test]
fn test_render_grid_html_export() {
    let html = render_grid_html(
        r#"{"columns": [{"field": "id", "title": "ID"}], "data": [{"id": 1}]}"#,
        300,
    )
    .unwrap();
    assert!(html.contains("csgrid-cell-id"));
}

#[wasm_bindgen_test]
fn test_dom_grid_builds_structure() {
    let host = host();
    let mut grid = Grid::new(DomSurface::new(host.clone()), options());
    let status = grid.init().unwrap();
    assert_eq!(status, LoadStatus::Rendered { rows: 2 });

    let root = host.parent_element().unwrap();
    assert_eq!(root.id(), grid.instance_id());
    assert!(root.class_list().contains("csgrid"));
    assert!(host.class_list().contains("csgrid-f"));

    let tbody = root.query_selector(".csgrid-body tbody").unwrap().unwrap();
    assert_eq!(tbody.child_element_count(), 2);
    let first_row = tbody.first_element_child().unwrap();
    assert_eq!(first_row.child_element_count(), 2);
    let footer = root.query_selector(".csgrid-footer").unwrap().unwrap();
    assert_eq!(footer.text_content().as_deref(), Some("Total 2 items"));
}

#[wasm_bindgen_test]
fn test_dom_grid_no_data() {
    let host = host();
    let mut grid = Grid::new(DomSurface::new(host.clone()), options());
    grid.init().unwrap();
    assert_eq!(grid.load_data(json!([])).unwrap(), LoadStatus::NoData);

    let root = host.parent_element().unwrap();
    let placeholder = root.query_selector(".csgrid-nodata").unwrap().unwrap();
    assert_eq!(placeholder.text_content().as_deref(), Some("No Data"));
}
