//! User-supplied callbacks invoked at fixed points of the load/render pipeline.
//!
//! Hooks are plain function values stored on columns and options. The
//! pipeline calls a hook when it is present and skips the step otherwise.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use serde_json::{Map, Value};

use super::{Row, ShapedData};

/// Shared, cheaply cloned function value.
pub struct Hook<F: ?Sized>(Rc<F>);

impl<F: ?Sized> Clone for Hook<F> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<F: ?Sized> fmt::Debug for Hook<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hook(..)")
    }
}

impl<F: ?Sized> Deref for Hook<F> {
    type Target = F;

    fn deref(&self) -> &F {
        &self.0
    }
}

/// Per-cell hook: `(value, row_index, row) -> text`.
///
/// Used for formatters, tooltips and row stylers.
pub type CellHook = Hook<dyn Fn(&Value, usize, &Row) -> String>;

/// Outbound remote query transform.
pub type QueryFilter = Hook<dyn Fn(Map<String, Value>) -> Map<String, Value>>;

/// Inbound raw data transform, applied before pagination shaping.
pub type LoadFilter = Hook<dyn Fn(Value) -> Value>;

/// Footer renderer receiving the shaped result.
pub type FooterHook = Hook<dyn Fn(Option<&ShapedData>) -> String>;

/// Fired at the start of every load.
pub type BeforeLoadHook = Hook<dyn Fn()>;

/// Fired after every shaping pass, with or without data.
pub type LoadSuccessHook = Hook<dyn Fn(Option<&ShapedData>)>;

impl CellHook {
    pub fn cell(f: impl Fn(&Value, usize, &Row) -> String + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl QueryFilter {
    pub fn query(f: impl Fn(Map<String, Value>) -> Map<String, Value> + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl LoadFilter {
    pub fn load(f: impl Fn(Value) -> Value + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl FooterHook {
    pub fn footer(f: impl Fn(Option<&ShapedData>) -> String + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl BeforeLoadHook {
    pub fn before_load(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl LoadSuccessHook {
    pub fn load_success(f: impl Fn(Option<&ShapedData>) + 'static) -> Self {
        Self(Rc::new(f))
    }
}

/// Hooks attached to a single leaf column.
#[derive(Debug, Clone, Default)]
pub struct ColumnHooks {
    pub formatter: Option<CellHook>,
    /// Takes precedence over the boolean `tooltip` flag on the column.
    pub tooltip: Option<CellHook>,
    pub row_styler: Option<CellHook>,
}

/// Grid-level hooks. Kept apart from the serializable options.
#[derive(Debug, Clone, Default)]
pub struct GridHooks {
    pub query_filter: Option<QueryFilter>,
    pub load_filter: Option<LoadFilter>,
    /// Takes precedence over `footer: true`.
    pub footer: Option<FooterHook>,
    pub on_before_load: Option<BeforeLoadHook>,
    pub on_load_success: Option<LoadSuccessHook>,
}
