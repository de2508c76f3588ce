//! Adapters turning JavaScript function options into grid hooks.
//!
//! Unlike Rust hooks, whose panics abort the render, a JS function that
//! throws or returns something unusable degrades to the identity (filters)
//! or the empty string (text hooks). The failure is logged with `warn!`.

use js_sys::{Array, Function, Reflect};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::types::{
    BeforeLoadHook, CellHook, FooterHook, GridOptions, LoadFilter, LoadSuccessHook, QueryFilter,
};

fn function_at(target: &JsValue, key: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

fn from_js<T: DeserializeOwned>(name: &str, value: JsValue) -> Option<T> {
    match serde_wasm_bindgen::from_value(value) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("{name} returned an unusable value: {e}");
            None
        }
    }
}

/// Text returned by a hook. Numbers and booleans are stringified.
fn text_of(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        s
    } else if let Some(n) = value.as_f64() {
        n.to_string()
    } else if let Some(b) = value.as_bool() {
        b.to_string()
    } else {
        String::new()
    }
}

fn cell_hook(name: &'static str, f: Function) -> CellHook {
    CellHook::cell(move |value, index, row| {
        let index = u32::try_from(index).map_or(JsValue::NULL, JsValue::from);
        match f.call3(&JsValue::NULL, &to_js(value), &index, &to_js(row)) {
            Ok(out) => text_of(&out),
            Err(e) => {
                warn!("{name} threw: {e:?}");
                String::new()
            }
        }
    })
}

/// Walk the JS column tree and attach per-column hooks by field.
fn attach_column_hooks(options: &mut GridOptions, node: &JsValue) {
    if Array::is_array(node) {
        for child in Array::from(node).iter() {
            attach_column_hooks(options, &child);
        }
        return;
    }
    let Some(field) = Reflect::get(node, &JsValue::from_str("field"))
        .ok()
        .and_then(|f| f.as_string())
    else {
        return;
    };
    if let Some(f) = function_at(node, "formatter") {
        options.set_formatter(&field, cell_hook("formatter", f));
    }
    if let Some(f) = function_at(node, "tooltip") {
        options.set_tooltip(&field, cell_hook("tooltip", f));
    }
    if let Some(f) = function_at(node, "rowStyler") {
        options.set_row_styler(&field, cell_hook("rowStyler", f));
    }
}

/// Install every function-valued option of `js_options` as a hook.
pub fn attach(options: &mut GridOptions, js_options: &JsValue) -> Result<(), JsValue> {
    if !js_options.is_object() {
        return Ok(());
    }

    if let Ok(columns) = Reflect::get(js_options, &JsValue::from_str("columns")) {
        attach_column_hooks(options, &columns);
    }

    if let Some(f) = function_at(js_options, "queryFilter") {
        options.hooks.query_filter = Some(QueryFilter::query(move |params| {
            let fallback = params.clone();
            f.call1(&JsValue::NULL, &to_js(&params))
                .map_err(|e| warn!("queryFilter threw: {e:?}"))
                .ok()
                .and_then(|out| from_js::<Map<String, Value>>("queryFilter", out))
                .unwrap_or(fallback)
        }));
    }

    if let Some(f) = function_at(js_options, "loadFilter") {
        options.hooks.load_filter = Some(LoadFilter::load(move |data| {
            f.call1(&JsValue::NULL, &to_js(&data))
                .map_err(|e| warn!("loadFilter threw: {e:?}"))
                .ok()
                .and_then(|out| from_js::<Value>("loadFilter", out))
                .unwrap_or(data)
        }));
    }

    if let Some(f) = function_at(js_options, "footer") {
        options.hooks.footer = Some(FooterHook::footer(move |data| {
            let arg = data.map_or(JsValue::NULL, |d| to_js(d));
            match f.call1(&JsValue::NULL, &arg) {
                Ok(out) => text_of(&out),
                Err(e) => {
                    warn!("footer threw: {e:?}");
                    String::new()
                }
            }
        }));
    }

    if let Some(f) = function_at(js_options, "onBeforeLoad") {
        options.hooks.on_before_load = Some(BeforeLoadHook::before_load(move || {
            if let Err(e) = f.call0(&JsValue::NULL) {
                warn!("onBeforeLoad threw: {e:?}");
            }
        }));
    }

    if let Some(f) = function_at(js_options, "onLoadSuccess") {
        options.hooks.on_load_success = Some(LoadSuccessHook::load_success(move |data| {
            let arg = data.map_or(JsValue::NULL, |d| to_js(d));
            if let Err(e) = f.call1(&JsValue::NULL, &arg) {
                warn!("onLoadSuccess threw: {e:?}");
            }
        }));
    }

    Ok(())
}
