//! JavaScript entry point: the `CsGrid` class (wasm32 only).
//!
//! Wires a DOM host element, JSON-compatible options and JavaScript function
//! hooks into a [`Grid`]. Remote loads are performed with `fetch` as a
//! form-encoded POST; the response JSON completes the load.

mod hooks;

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Headers, HtmlElement, Request, RequestInit, Response};

use crate::grid::{Grid, LoadStatus};
use crate::pipeline::QueryRequest;
use crate::render::dom::{DomSurface, GridPart};
use crate::types::{GridOptions, OptionsPatch};

type SharedGrid = Rc<RefCell<Grid<DomSurface>>>;

#[wasm_bindgen]
pub struct CsGrid {
    inner: SharedGrid,
}

fn busy() -> JsValue {
    JsValue::from_str("grid is busy (called from inside a hook?)")
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// JSON view of a JS value; functions are dropped.
fn json_of(value: &JsValue) -> Result<String, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok("{}".to_string());
    }
    js_sys::JSON::stringify(value)?
        .as_string()
        .ok_or_else(|| JsValue::from_str("options are not serializable"))
}

async fn fetch_json(request: &QueryRequest) -> Result<Value, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let headers = Headers::new()?;
    headers.set(
        "Content-Type",
        "application/x-www-form-urlencoded; charset=UTF-8",
    )?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&request.form_body()));

    let req = Request::new_with_str_and_init(&request.url, &init)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&req))
        .await?
        .dyn_into()?;
    let json = JsFuture::from(response.json()?).await?;
    Ok(serde_wasm_bindgen::from_value(json)?)
}

/// Start the transport for a pending remote load.
///
/// There is no retry and no failure callback: a failed request leaves the
/// body as it is.
fn dispatch(inner: &SharedGrid, status: &LoadStatus) {
    let LoadStatus::Pending(request) = status else {
        return;
    };
    let inner = Rc::clone(inner);
    let request = request.clone();
    spawn_local(async move {
        let body = match fetch_json(&request).await {
            Ok(body) => body,
            Err(e) => {
                warn!("remote load from {} failed: {e:?}", request.url);
                return;
            }
        };
        match inner.try_borrow_mut() {
            Ok(mut grid) => {
                if let Err(e) = grid.complete_load(request.generation, body) {
                    warn!("remote load from {} not applied: {e}", request.url);
                }
            }
            Err(_) => warn!("grid busy, response from {} dropped", request.url),
        }
    });
}

#[wasm_bindgen]
impl CsGrid {
    /// Create a grid over `host`. Call `init()` to build it.
    #[wasm_bindgen(constructor)]
    pub fn new(host: HtmlElement, options: JsValue) -> Result<CsGrid, JsValue> {
        console_error_panic_hook::set_once();
        let mut opts = GridOptions::from_json(&json_of(&options)?)?;
        hooks::attach(&mut opts, &options)?;
        Ok(CsGrid {
            inner: Rc::new(RefCell::new(Grid::new(DomSurface::new(host), opts))),
        })
    }

    pub fn init(&self) -> Result<(), JsValue> {
        let status = self.inner.try_borrow_mut().map_err(|_| busy())?.init()?;
        dispatch(&self.inner, &status);
        Ok(())
    }

    /// Shallow-merge `patch` into the options and reload.
    pub fn reload(&self, patch: JsValue) -> Result<(), JsValue> {
        let patch: OptionsPatch = serde_json::from_str(&json_of(&patch)?)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let status = self
            .inner
            .try_borrow_mut()
            .map_err(|_| busy())?
            .reload(patch)?;
        dispatch(&self.inner, &status);
        Ok(())
    }

    #[wasm_bindgen(js_name = "loadData")]
    pub fn load_data(&self, data: JsValue) -> Result<(), JsValue> {
        let data: Value = serde_wasm_bindgen::from_value(data)?;
        let status = self
            .inner
            .try_borrow_mut()
            .map_err(|_| busy())?
            .load_data(data)?;
        dispatch(&self.inner, &status);
        Ok(())
    }

    pub fn resize(&self) -> Result<(), JsValue> {
        self.inner.try_borrow_mut().map_err(|_| busy())?.resize()?;
        Ok(())
    }

    /// Last shaped result as `{total, rows}`, or `null`.
    #[wasm_bindgen(js_name = "getData")]
    pub fn get_data(&self) -> Result<JsValue, JsValue> {
        let grid = self.inner.try_borrow().map_err(|_| busy())?;
        match grid.data() {
            Some(data) => to_js(data),
            None => Ok(JsValue::NULL),
        }
    }

    /// Current options (without hooks).
    pub fn options(&self) -> Result<JsValue, JsValue> {
        let grid = self.inner.try_borrow().map_err(|_| busy())?;
        to_js(grid.options())
    }

    /// Grid element, or one of its parts: `"header"`, `"body"`, `"footer"`.
    pub fn grid(&self, part: Option<String>) -> Result<Option<HtmlElement>, JsValue> {
        let part = GridPart::from_name(part.as_deref().unwrap_or(""))
            .ok_or_else(|| JsValue::from_str("unknown grid part"))?;
        let grid = self.inner.try_borrow().map_err(|_| busy())?;
        Ok(grid.surface().part(part).cloned())
    }

    pub fn body(&self) -> Result<Option<HtmlElement>, JsValue> {
        self.grid(Some("body".to_string()))
    }

    #[wasm_bindgen(js_name = "instanceId")]
    pub fn instance_id(&self) -> Result<String, JsValue> {
        let grid = self.inner.try_borrow().map_err(|_| busy())?;
        Ok(grid.instance_id().to_string())
    }
}
