//! Host surface trait for pluggable document backends.
//!
//! The grid never touches a document directly. Everything it measures or
//! writes goes through `Surface`, so the same controller drives the browser
//! DOM on wasm32 and the in-memory [`HtmlSurface`](super::HtmlSurface)
//! everywhere else.

use crate::error::Result;
use crate::header::HeaderRow;
use crate::layout::WidthRule;

use super::RenderedRow;

/// CSS class vocabulary shared by every backend.
pub mod classes {
    pub const ROOT: &str = "csgrid";
    /// Marks the host element once the grid structure has been built
    pub const LOADED: &str = "csgrid-f";
    pub const HEADER: &str = "csgrid-header";
    pub const BODY: &str = "csgrid-body";
    pub const FOOTER: &str = "csgrid-footer";
    pub const NO_DATA: &str = "csgrid-nodata";
    pub const CELL: &str = "csgrid-cell";
    /// Header filler aligned with the body scrollbar gutter
    pub const EMPTY_CELL: &str = "csgrid-emptycell";
}

/// Body container height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyHeight {
    /// Fit the content (used for the no-data placeholder).
    Auto,
    Px(u32),
}

/// Operations the grid needs from its host document.
///
/// Measurements return `None` when the measured element does not exist or
/// has no usable size.
pub trait Surface {
    /// Build the header/body containers and tag them with `instance_id`.
    /// Calling it again on a mounted surface is a no-op.
    fn mount(&mut self, instance_id: &str) -> Result<()>;

    /// Whether the grid container is currently displayed.
    fn is_visible(&self) -> bool;

    /// Current width of the grid container, in whole pixels.
    fn container_width(&self) -> Option<i64>;

    /// Visible height of the body container.
    fn body_viewport_height(&self) -> Option<i64>;

    /// Explicit height of the body table, if a table is present.
    fn body_table_height(&self) -> Option<i64>;

    /// Explicit width of the body table, if a table is present.
    fn body_table_width(&self) -> Option<i64>;

    /// Whether a width rule block for `instance_id` is currently installed.
    fn has_width_rules(&self, instance_id: &str) -> bool;

    /// Add the header filler cell unless one is already present.
    fn ensure_filler_cell(&mut self) -> Result<()>;

    /// Set the width of the header and body tables (whichever exist).
    fn set_table_width(&mut self, width: i64) -> Result<()>;

    /// Remove every width rule block installed in this grid.
    fn remove_width_rules(&mut self) -> Result<()>;

    /// Install a width rule block scoped to `instance_id`.
    fn inject_width_rules(&mut self, instance_id: &str, rules: &[WidthRule]) -> Result<()>;

    /// Replace the header table.
    fn set_header(&mut self, rows: &[HeaderRow]) -> Result<()>;

    /// Empty the body and set its container height.
    fn reset_body(&mut self, height: BodyHeight) -> Result<()>;

    /// Change the body container height without touching its content.
    fn set_body_height(&mut self, height: BodyHeight) -> Result<()>;

    /// Show the no-data placeholder in the (already reset) body.
    fn show_no_data(&mut self, text: &str) -> Result<()>;

    /// Append an empty body table with an explicit height.
    fn create_body_table(&mut self, height: u32) -> Result<()>;

    /// Fill the body table created by [`Surface::create_body_table`].
    fn fill_body(&mut self, rows: &[RenderedRow]) -> Result<()>;

    /// Set footer markup, creating the footer on first use.
    fn set_footer(&mut self, html: &str) -> Result<()>;
}
