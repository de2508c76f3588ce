//! Remote query construction.
//!
//! The grid does not own a transport. A remote load produces a
//! [`QueryRequest`]; the host performs the POST and hands the response body
//! back through `Grid::complete_load`.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::types::GridOptions;

/// Query parameter carrying the 1-based page number.
pub const PAGE_PARAM: &str = "page";
/// Query parameter carrying the page size.
pub const ROWS_PARAM: &str = "row";

/// An outbound remote load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRequest {
    /// Load generation this request belongs to.
    pub generation: u64,
    pub url: String,
    pub params: Map<String, Value>,
}

impl QueryRequest {
    /// Parameters as an `application/x-www-form-urlencoded` body.
    pub fn form_body(&self) -> String {
        let mut form = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.params {
            form.append_pair(key, &param_text(value));
        }
        form.finish()
    }
}

fn param_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Build the request for a remote load, or `None` when no `url` is set.
///
/// With paging on, `page`/`row` are merged over a copy of the base query
/// parameters and the result goes through the query filter. Without paging
/// the base parameters are sent as they are.
pub fn build_query(options: &GridOptions, generation: u64) -> Option<QueryRequest> {
    let url = options.url.as_deref().filter(|u| !u.is_empty())?;
    let mut params = options.query_params.clone();
    if let Some(window) = options.page_window() {
        params.insert(PAGE_PARAM.to_string(), Value::from(window.page_number()));
        params.insert(ROWS_PARAM.to_string(), Value::from(window.page_size()));
        if let Some(filter) = &options.hooks.query_filter {
            params = (**filter)(params);
        }
    }
    Some(QueryRequest {
        generation,
        url: url.to_string(),
        params,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::types::QueryFilter;
    use serde_json::json;

    fn remote_options() -> GridOptions {
        let mut options = GridOptions {
            url: Some("/api/users".to_string()),
            pager: true,
            page_number: 3,
            page_size: 20,
            ..GridOptions::default()
        };
        options
            .query_params
            .insert("q".to_string(), json!("smith"));
        options
    }

    #[test]
    fn test_no_url_no_request() {
        assert!(build_query(&GridOptions::default(), 1).is_none());
    }

    #[test]
    fn test_paging_params_merged() {
        let options = remote_options();
        let req = build_query(&options, 7).unwrap();
        assert_eq!(req.generation, 7);
        assert_eq!(req.url, "/api/users");
        assert_eq!(req.params.get("page"), Some(&json!(3)));
        assert_eq!(req.params.get("row"), Some(&json!(20)));
        assert_eq!(req.params.get("q"), Some(&json!("smith")));
        // caller's base parameters untouched
        assert!(options.query_params.get("page").is_none());
    }

    #[test]
    fn test_query_filter_replaces_params() {
        let mut options = remote_options();
        options.hooks.query_filter = Some(QueryFilter::query(|params| {
            let mut out = Map::new();
            out.insert(
                "offset".to_string(),
                json!((params["page"].as_u64().unwrap() - 1) * params["row"].as_u64().unwrap()),
            );
            out
        }));
        let req = build_query(&options, 1).unwrap();
        assert_eq!(req.params.len(), 1);
        assert_eq!(req.params.get("offset"), Some(&json!(40)));
    }

    #[test]
    fn test_unpaged_skips_filter() {
        let mut options = remote_options();
        options.pager = false;
        options.hooks.query_filter = Some(QueryFilter::query(|_| Map::new()));
        let req = build_query(&options, 1).unwrap();
        assert_eq!(req.params.len(), 1);
        assert_eq!(req.params.get("q"), Some(&json!("smith")));
    }

    #[test]
    fn test_form_body() {
        let mut params = Map::new();
        params.insert("name".to_string(), json!("a b&c"));
        params.insert("page".to_string(), json!(2));
        params.insert("none".to_string(), Value::Null);
        let req = QueryRequest {
            generation: 0,
            url: "/x".to_string(),
            params,
        };
        assert_eq!(req.form_body(), "name=a+b%26c&none=&page=2");
    }
}
