//! Layout: column width resolution and container reconciliation.
//!
//! This module handles:
//! - Resolving authored widths (pixels or percentages) against the container
//! - Reserving the scrollbar gutter when the body overflows
//! - Deciding when width rules need to be rewritten

mod reconcile;
mod width;

pub use reconcile::{has_scrollbar, resize, ResizeOutcome, SCROLLBAR_GUTTER};
pub use width::{column_width, parse_leading_int, width_rules, ColumnWidth, WidthRule, CELL_ALLOWANCE};
