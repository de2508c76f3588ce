//! Structured error types for csgrid.
//!
//! Bad widths become `auto` and missing fields render empty, so errors are
//! limited to option parsing, lifecycle misuse and failures reported by the
//! host surface.

/// All errors that can occur while configuring or driving a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Options or row data could not be parsed from JSON.
    #[error("Invalid options: {0}")]
    Options(#[from] serde_json::Error),

    /// The host surface rejected an operation (DOM failure on wasm32).
    #[error("Surface error: {0}")]
    Surface(String),

    /// An operation that needs merged columns was called before `init`
    /// built them.
    #[error("Grid is not initialized (no columns configured)")]
    NotInitialized,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for GridError {
    fn from(v: wasm_bindgen::JsValue) -> Self {
        Self::Surface(v.as_string().unwrap_or_else(|| format!("{v:?}")))
    }
}
