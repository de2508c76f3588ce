use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One data row. Opaque to the grid apart from the fields named by the
/// merged columns; rows that are not objects simply have no fields.
pub type Row = Value;

/// The `{total, rows}` envelope produced by the data pipeline.
///
/// `total` is the size of the whole result set, which may exceed
/// `rows.len()` when the rows are a single page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapedData {
    pub total: u64,
    pub rows: Vec<Row>,
}

impl ShapedData {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Current page of a paged grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page_number: u32,
    page_size: u32,
}

impl PageWindow {
    /// Page numbers are 1-based; `0` is clamped to the first page.
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size,
        }
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Half-open index range `[start, end)` of this page, clipped to `len`.
    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        let size = self.page_size as usize;
        let end = (self.page_number as usize).saturating_mul(size);
        let start = end.saturating_sub(size);
        start.min(len)..end.min(len)
    }
}
