//! Width reconciliation between the container and the header/body tables.

use log::{debug, trace};

use crate::error::Result;
use crate::render::Surface;
use crate::types::Column;

use super::width_rules;

/// Width reserved for a vertical scrollbar, in pixels.
pub const SCROLLBAR_GUTTER: i64 = 20;

/// What a call to [`resize`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// Container hidden or unmeasurable; nothing touched.
    Hidden,
    /// Tables already at `width` and rules installed; nothing rewritten.
    Unchanged { width: i64 },
    /// Table widths and width rules rewritten for `width`.
    Applied { width: i64, scrollbar: bool },
}

/// True when the body content is taller than the body viewport.
pub fn has_scrollbar(surface: &impl Surface) -> bool {
    match (surface.body_viewport_height(), surface.body_table_height()) {
        (Some(viewport), Some(content)) => viewport < content,
        _ => false,
    }
}

/// Re-layout column widths for the current container size.
///
/// Safe to call repeatedly. The skip check only looks at whether a rule
/// block exists for the instance, not at its content: changing column
/// widths without a container width change will not re-layout.
pub fn resize<S: Surface>(
    surface: &mut S,
    instance_id: &str,
    columns: &[Column],
) -> Result<ResizeOutcome> {
    if !surface.is_visible() {
        trace!("{instance_id}: resize skipped, container hidden");
        return Ok(ResizeOutcome::Hidden);
    }
    let Some(mut width) = surface.container_width() else {
        trace!("{instance_id}: resize skipped, container has no width");
        return Ok(ResizeOutcome::Hidden);
    };

    let scrollbar = has_scrollbar(surface);
    if scrollbar {
        width -= SCROLLBAR_GUTTER;
        surface.ensure_filler_cell()?;
    }

    if surface.body_table_width() == Some(width) && surface.has_width_rules(instance_id) {
        trace!("{instance_id}: resize skipped, width {width} already applied");
        return Ok(ResizeOutcome::Unchanged { width });
    }

    surface.set_table_width(width)?;
    surface.remove_width_rules()?;
    let rules = width_rules(columns, width);
    surface.inject_width_rules(instance_id, &rules)?;
    debug!(
        "{instance_id}: applied width {width} ({} rules, scrollbar: {scrollbar})",
        rules.len()
    );
    Ok(ResizeOutcome::Applied { width, scrollbar })
}
