use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::{CellHook, GridHooks, HeaderNode, PageWindow};

pub const DEFAULT_PAGE_SIZE: u32 = 5;
pub const DEFAULT_ROW_HEIGHT: u32 = 40;
pub const DEFAULT_NO_DATA_TEXT: &str = "No Data";
pub const DEFAULT_FOOTER_MSG: &str = "Total {total} items";

fn default_page_number() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_row_height() -> u32 {
    DEFAULT_ROW_HEIGHT
}

fn default_no_data_text() -> String {
    DEFAULT_NO_DATA_TEXT.to_string()
}

fn default_footer_msg() -> String {
    DEFAULT_FOOTER_MSG.to_string()
}

/// `null` or a malformed column tree reads as no columns, so `init` skips
/// instead of the whole options document failing to parse.
fn lenient_columns<'de, D>(deserializer: D) -> Result<Vec<HeaderNode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    match serde_json::from_value::<Option<Vec<HeaderNode>>>(raw) {
        Ok(nodes) => Ok(nodes.unwrap_or_default()),
        Err(e) => {
            debug!("ignoring malformed column spec: {e}");
            Ok(Vec::new())
        }
    }
}

/// Construction options for a grid.
///
/// Caller-owned and never written by the pipeline; derived state lives in
/// the grid itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    /// Column tree. Empty means `init` builds nothing.
    #[serde(default, deserialize_with = "lenient_columns")]
    pub columns: Vec<HeaderNode>,
    /// Local data: an array of rows or an already shaped `{total, rows}`.
    #[serde(default)]
    pub data: Option<Value>,
    /// Remote endpoint. Takes precedence over `data` when set.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub query_params: Map<String, Value>,
    #[serde(default)]
    pub pager: bool,
    #[serde(default = "default_page_number")]
    pub page_number: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_row_height")]
    pub row_height: u32,
    /// Maximum body height; rows beyond it scroll.
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default = "default_no_data_text")]
    pub no_data_text: String,
    #[serde(default)]
    pub footer: bool,
    #[serde(default = "default_footer_msg")]
    pub footer_msg: String,
    /// Drop remote responses that complete after a newer load was issued.
    #[serde(default)]
    pub discard_stale_responses: bool,
    #[serde(skip)]
    pub hooks: GridHooks,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            data: None,
            url: None,
            query_params: Map::new(),
            pager: false,
            page_number: default_page_number(),
            page_size: DEFAULT_PAGE_SIZE,
            row_height: DEFAULT_ROW_HEIGHT,
            height: None,
            no_data_text: default_no_data_text(),
            footer: false,
            footer_msg: default_footer_msg(),
            discard_stale_responses: false,
            hooks: GridHooks::default(),
        }
    }
}

impl GridOptions {
    /// Parse options from a JSON document. Hooks must be attached afterwards.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The active page, or `None` when paging is off.
    pub fn page_window(&self) -> Option<PageWindow> {
        self.pager
            .then(|| PageWindow::new(self.page_number, self.page_size))
    }

    /// Body height before any data has been loaded.
    pub fn initial_body_height(&self) -> u32 {
        self.height
            .filter(|h| *h > 0)
            .unwrap_or_else(|| self.page_size.saturating_mul(self.row_height))
    }

    pub fn set_formatter(&mut self, field: &str, hook: CellHook) {
        self.update_columns(field, |col| col.hooks.formatter = Some(hook.clone()));
    }

    pub fn set_tooltip(&mut self, field: &str, hook: CellHook) {
        self.update_columns(field, |col| col.hooks.tooltip = Some(hook.clone()));
    }

    pub fn set_row_styler(&mut self, field: &str, hook: CellHook) {
        self.update_columns(field, |col| col.hooks.row_styler = Some(hook.clone()));
    }

    /// Apply `f` to every leaf bound to `field`, at any depth of the tree.
    fn update_columns(&mut self, field: &str, mut f: impl FnMut(&mut super::Column)) {
        for node in &mut self.columns {
            node.for_each_leaf_mut(&mut |col| {
                if col.field() == Some(field) {
                    f(col);
                }
            });
        }
    }

    /// Shallow-merge `patch` into these options.
    pub fn apply(&mut self, patch: OptionsPatch) {
        let OptionsPatch {
            data,
            url,
            query_params,
            pager,
            page_number,
            page_size,
            row_height,
            height,
            no_data_text,
            footer,
            footer_msg,
        } = patch;

        if let Some(v) = data {
            self.data = Some(v);
        }
        if let Some(v) = url {
            self.url = Some(v);
        }
        if let Some(v) = query_params {
            self.query_params = v;
        }
        if let Some(v) = pager {
            self.pager = v;
        }
        if let Some(v) = page_number {
            self.page_number = v;
        }
        if let Some(v) = page_size {
            self.page_size = v;
        }
        if let Some(v) = row_height {
            self.row_height = v;
        }
        if let Some(v) = height {
            self.height = Some(v);
        }
        if let Some(v) = no_data_text {
            self.no_data_text = v;
        }
        if let Some(v) = footer {
            self.footer = v;
        }
        if let Some(v) = footer_msg {
            self.footer_msg = v;
        }
    }
}

/// Partial options for `reload`. Absent fields keep their current value.
///
/// Columns are fixed at `init`; re-run `init` to change them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionsPatch {
    pub data: Option<Value>,
    pub url: Option<String>,
    pub query_params: Option<Map<String, Value>>,
    pub pager: Option<bool>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub row_height: Option<u32>,
    pub height: Option<u32>,
    pub no_data_text: Option<String>,
    pub footer: Option<bool>,
    pub footer_msg: Option<String>,
}

impl OptionsPatch {
    pub fn page(page_number: u32) -> Self {
        Self {
            page_number: Some(page_number),
            ..Self::default()
        }
    }

    pub fn data(data: Value) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_from_empty_json() {
        let opts = GridOptions::from_json("{}").unwrap();
        assert!(opts.columns.is_empty());
        assert_eq!(opts.page_number, 1);
        assert_eq!(opts.page_size, 5);
        assert_eq!(opts.row_height, 40);
        assert_eq!(opts.no_data_text, "No Data");
        assert_eq!(opts.footer_msg, "Total {total} items");
        assert!(!opts.pager);
        assert!(opts.page_window().is_none());
    }

    #[test]
    fn test_null_columns_read_as_empty() {
        let opts = GridOptions::from_json(r#"{"columns": null, "pageSize": 9}"#).unwrap();
        assert!(opts.columns.is_empty());
        assert_eq!(opts.page_size, 9);
    }

    #[test]
    fn test_malformed_columns_read_as_empty() {
        let opts =
            GridOptions::from_json(r#"{"columns": [{"field": "y", "title": 2020}], "pager": true}"#)
                .unwrap();
        assert!(opts.columns.is_empty());
        assert!(opts.pager);

        let opts = GridOptions::from_json(r#"{"columns": "id,name"}"#).unwrap();
        assert!(opts.columns.is_empty());
    }

    #[test]
    fn test_camel_case_keys() {
        let opts = GridOptions::from_json(
            r#"{"pager": true, "pageNumber": 3, "pageSize": 10, "noDataText": "Empty",
                "queryParams": {"q": "x"}, "rowHeight": 30, "height": 200}"#,
        )
        .unwrap();
        assert_eq!(opts.page_window(), Some(PageWindow::new(3, 10)));
        assert_eq!(opts.no_data_text, "Empty");
        assert_eq!(opts.query_params.get("q"), Some(&json!("x")));
        assert_eq!(opts.initial_body_height(), 200);
    }

    #[test]
    fn test_initial_body_height_falls_back_to_page() {
        let opts = GridOptions::default();
        assert_eq!(opts.initial_body_height(), 5 * 40);
    }

    #[test]
    fn test_apply_patch_is_shallow() {
        let mut opts = GridOptions {
            pager: true,
            page_size: 2,
            ..GridOptions::default()
        };
        opts.apply(OptionsPatch::page(4));
        assert_eq!(opts.page_number, 4);
        assert_eq!(opts.page_size, 2);
        assert!(opts.pager);

        opts.apply(OptionsPatch::data(json!([1, 2])));
        assert_eq!(opts.data, Some(json!([1, 2])));
        assert_eq!(opts.page_number, 4);
    }

    #[test]
    fn test_set_formatter_reaches_nested_leaves() {
        let mut opts = GridOptions::from_json(
            r#"{"columns": [[{"title": "G", "colspan": 1}], [{"field": "a"}]]}"#,
        )
        .unwrap();
        opts.set_formatter("a", CellHook::cell(|_, _, _| "x".to_string()));
        let leaf = opts.columns[1].as_group().unwrap()[0].as_leaf().unwrap();
        assert!(leaf.hooks.formatter.is_some());
    }
}
