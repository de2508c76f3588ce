use std::sync::atomic::{AtomicU64, Ordering};

use crate::render::classes;

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Unique element id for a new grid instance, e.g. `csgrid7`.
///
/// Width rules are scoped by this id, so two grids on one page never share
/// rules.
pub fn next_instance_id() -> String {
    let n = NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed);
    format!("{}{n}", classes::ROOT)
}
