//! Grid controller: owns one instance's options, derived state and surface.
//!
//! Lifecycle:
//! - `init` merges columns, builds the header and runs the first load
//! - `reload` shallow-merges an options patch and loads again
//! - remote loads return a [`QueryRequest`]; the host completes them with
//!   [`Grid::complete_load`]
//! - `resize` re-runs width reconciliation after container changes

mod instance;

pub use instance::next_instance_id;

use log::debug;
use serde_json::Value;

use crate::columns::merge_nodes;
use crate::error::{GridError, Result};
use crate::footer::footer_html;
use crate::header::build_header;
use crate::layout::{resize, ResizeOutcome};
use crate::pipeline::{build_query, prepare, visible_rows, QueryRequest};
use crate::render::{render_rows, BodyHeight, Surface};
use crate::types::{Column, GridOptions, OptionsPatch, ShapedData};

/// Derived per-instance state. Never visible through the options.
#[derive(Debug, Clone, Default)]
struct GridState {
    /// Merged data columns
    columns: Vec<Column>,
    /// Raw data feeding the local path: caller data or the last response
    source: Option<Value>,
    /// Last shaped result, replaced wholesale on every load
    data: Option<ShapedData>,
}

/// Result of a load step.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    /// No columns configured; nothing was built.
    Skipped,
    /// A remote request must be performed by the host.
    Pending(QueryRequest),
    /// Rows were rendered into the body.
    Rendered { rows: usize },
    /// The no-data placeholder was shown.
    NoData,
    /// A remote response arrived for an outdated load and was dropped.
    Discarded { generation: u64 },
}

pub struct Grid<S: Surface> {
    instance_id: String,
    surface: S,
    options: GridOptions,
    state: Option<GridState>,
    /// Incremented on every load; identifies the latest remote request.
    generation: u64,
}

impl<S: Surface> Grid<S> {
    pub fn new(surface: S, options: GridOptions) -> Self {
        Self {
            instance_id: next_instance_id(),
            surface,
            options,
            state: None,
            generation: 0,
        }
    }

    /// Build the grid and run the first load.
    ///
    /// Without columns this does nothing and reports [`LoadStatus::Skipped`].
    pub fn init(&mut self) -> Result<LoadStatus> {
        if self.options.columns.is_empty() {
            debug!("{}: no columns configured, init skipped", self.instance_id);
            return Ok(LoadStatus::Skipped);
        }

        let columns = merge_nodes(&self.options.columns);
        debug!(
            "{}: init with {} data columns",
            self.instance_id,
            columns.len()
        );
        self.state = Some(GridState {
            columns,
            source: self.options.data.clone(),
            data: Some(ShapedData::default()),
        });

        self.surface.mount(&self.instance_id)?;
        self.resize()?;
        self.surface.set_header(&build_header(&self.options.columns))?;
        self.load()
    }

    /// Merge `patch` into the options and load again.
    pub fn reload(&mut self, patch: OptionsPatch) -> Result<LoadStatus> {
        let state = self.state.as_mut().ok_or(GridError::NotInitialized)?;
        if let Some(data) = &patch.data {
            state.source = Some(data.clone());
        }
        self.options.apply(patch);
        self.load()
    }

    /// Replace the local data and reload.
    pub fn load_data(&mut self, data: Value) -> Result<LoadStatus> {
        self.reload(OptionsPatch::data(data))
    }

    /// Hand the response body of a remote request back to the grid.
    ///
    /// Responses for outdated requests overwrite newer state unless
    /// `discardStaleResponses` is set.
    pub fn complete_load(&mut self, generation: u64, body: Value) -> Result<LoadStatus> {
        let state = self.state.as_mut().ok_or(GridError::NotInitialized)?;
        if self.options.discard_stale_responses && generation != self.generation {
            debug!(
                "{}: dropping response for load {generation}, latest is {}",
                self.instance_id, self.generation
            );
            return Ok(LoadStatus::Discarded { generation });
        }
        state.source = Some(body);
        self.load_local()
    }

    /// Re-run width reconciliation for the current container size.
    pub fn resize(&mut self) -> Result<ResizeOutcome> {
        let state = self.state.as_ref().ok_or(GridError::NotInitialized)?;
        resize(&mut self.surface, &self.instance_id, &state.columns)
    }

    fn load(&mut self) -> Result<LoadStatus> {
        self.generation += 1;
        self.surface
            .reset_body(BodyHeight::Px(self.options.initial_body_height()))?;
        if let Some(hook) = &self.options.hooks.on_before_load {
            (**hook)();
        }

        if let Some(request) = build_query(&self.options, self.generation) {
            debug!(
                "{}: remote load {} from {}",
                self.instance_id, request.generation, request.url
            );
            return Ok(LoadStatus::Pending(request));
        }
        self.load_local()
    }

    fn load_local(&mut self) -> Result<LoadStatus> {
        let state = self.state.as_mut().ok_or(GridError::NotInitialized)?;
        state.data = prepare(state.source.as_ref(), &self.options);

        if let Some(html) = footer_html(&self.options, state.data.as_ref()) {
            self.surface.set_footer(&html)?;
        }

        let status = match visible_rows(state.data.as_ref()) {
            None => {
                debug!("{}: no data", self.instance_id);
                self.surface.reset_body(BodyHeight::Auto)?;
                self.surface.show_no_data(&self.options.no_data_text)?;
                LoadStatus::NoData
            }
            Some(rows) => {
                let height = u32::try_from(rows.len())
                    .unwrap_or(u32::MAX)
                    .saturating_mul(self.options.row_height);
                if self.options.height.map_or(true, |max| max == 0 || max > height) {
                    self.surface.set_body_height(BodyHeight::Px(height))?;
                }
                self.surface.create_body_table(height)?;
                resize(&mut self.surface, &self.instance_id, &state.columns)?;
                let rendered = render_rows(rows, &state.columns);
                self.surface.fill_body(&rendered)?;
                LoadStatus::Rendered {
                    rows: rendered.len(),
                }
            }
        };

        if let Some(hook) = &self.options.hooks.on_load_success {
            (**hook)(state.data.as_ref());
        }
        Ok(status)
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Merged data columns; empty before `init`.
    pub fn columns(&self) -> &[Column] {
        self.state.as_ref().map_or(&[], |s| s.columns.as_slice())
    }

    /// Last shaped result.
    pub fn data(&self) -> Option<&ShapedData> {
        self.state.as_ref().and_then(|s| s.data.as_ref())
    }

    /// Generation of the most recent load.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
