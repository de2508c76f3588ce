//! Multi-row header layout from the authored column tree.

use crate::types::{Align, Column, HeaderNode};

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub title: String,
    /// Keys the label element for width rules; absent on group cells.
    pub field: Option<String>,
    pub colspan: Option<u32>,
    pub rowspan: Option<u32>,
    pub halign: Option<Align>,
}

impl HeaderCell {
    fn from_column(col: &Column) -> Self {
        Self {
            title: col.title.clone().unwrap_or_default(),
            field: col.field.clone(),
            colspan: col.colspan.filter(|n| *n > 0),
            rowspan: col.rowspan.filter(|n| *n > 0),
            halign: col.halign,
        }
    }

    /// Label tooltip; always the title text.
    pub fn tooltip(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRow {
    pub cells: Vec<HeaderCell>,
}

/// Build header rows from the column tree.
///
/// Each nesting level collects its leaf cells into one row. A group entry
/// recurses first, appending whatever rows it produces, and marks the
/// current level as multi-row: such a level emits no row of its own, so its
/// loose leaves are dropped. A tree without any groups yields exactly one
/// row.
pub fn build_header(nodes: &[HeaderNode]) -> Vec<HeaderRow> {
    let mut rows = Vec::new();
    fill_rows(&mut rows, nodes);
    rows
}

fn fill_rows(rows: &mut Vec<HeaderRow>, nodes: &[HeaderNode]) {
    let mut row = HeaderRow::default();
    let mut single_row = true;
    for node in nodes {
        match node {
            HeaderNode::Group(children) => {
                single_row = false;
                fill_rows(rows, children);
            }
            HeaderNode::Leaf(col) => row.cells.push(HeaderCell::from_column(col)),
        }
    }
    if single_row {
        rows.push(row);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_tree_single_row() {
        let nodes: Vec<HeaderNode> = vec![
            Column::leaf("id", "ID").into(),
            Column::leaf("name", "Name").into(),
        ];
        let rows = build_header(&nodes);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells.len(), 2);
        assert_eq!(rows[0].cells[0].field.as_deref(), Some("id"));
        assert_eq!(rows[0].cells[1].tooltip(), "Name");
    }

    #[test]
    fn test_grouped_header_two_rows() {
        let nodes = vec![
            HeaderNode::from(vec![Column::group("Info", 2)]),
            HeaderNode::from(vec![Column::leaf("id", "ID"), Column::leaf("name", "Name")]),
        ];
        let rows = build_header(&nodes);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells.len(), 1);
        assert_eq!(rows[0].cells[0].colspan, Some(2));
        assert!(rows[0].cells[0].field.is_none());
        assert_eq!(rows[1].cells.len(), 2);
        assert_eq!(rows[1].cells[0].title, "ID");
    }

    #[test]
    fn test_deep_nesting_emits_rows_in_traversal_order() {
        let nodes = vec![
            HeaderNode::Group(vec![
                HeaderNode::from(vec![Column::group("Top", 2)]),
                HeaderNode::from(vec![Column::group("Mid", 2)]),
            ]),
            HeaderNode::from(vec![Column::leaf("a", "A"), Column::leaf("b", "B")]),
        ];
        let rows = build_header(&nodes);
        let titles: Vec<&str> = rows
            .iter()
            .map(|r| r.cells[0].title.as_str())
            .collect();
        assert_eq!(titles, vec!["Top", "Mid", "A"]);
    }

    #[test]
    fn test_mixed_level_drops_loose_leaves() {
        let nodes = vec![
            Column::leaf("loose", "Loose").into(),
            HeaderNode::from(vec![Column::leaf("a", "A")]),
        ];
        let rows = build_header(&nodes);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells[0].title, "A");
    }

    #[test]
    fn test_span_and_alignment_carried() {
        let mut col = Column::leaf("age", "Age");
        col.rowspan = Some(2);
        col.halign = Some(Align::Center);
        let rows = build_header(&[col.into()]);
        let cell = &rows[0].cells[0];
        assert_eq!(cell.rowspan, Some(2));
        assert_eq!(cell.colspan, None);
        assert_eq!(cell.halign, Some(Align::Center));
    }
}
