//! Column model: flattening the authored column tree into data columns.
//!
//! The merge only ever looks at two tiers. A first tier of group cells
//! (`colspan` without `field`) claims leaves from the second tier in order;
//! anything nested deeper is header decoration and never carries data.

use crate::types::{Column, HeaderNode};

/// Column specification as seen by the merge: one flat list, or exactly two
/// tiers.
#[derive(Debug, Clone)]
pub enum ColumnSpec {
    Flat(Vec<Column>),
    Tiered {
        first: Vec<Column>,
        second: Vec<Column>,
    },
}

impl ColumnSpec {
    /// Project the authored tree onto the two-tier merge input.
    ///
    /// The tree is tiered when its first entry is a group. Nested groups
    /// inside a tier contribute nothing to the data columns and are dropped.
    pub fn from_nodes(nodes: &[HeaderNode]) -> Self {
        match nodes.first() {
            Some(HeaderNode::Group(first)) => ColumnSpec::Tiered {
                first: leaves(first),
                second: nodes
                    .get(1)
                    .and_then(HeaderNode::as_group)
                    .map(leaves)
                    .unwrap_or_default(),
            },
            _ => ColumnSpec::Flat(leaves(nodes)),
        }
    }
}

fn leaves(nodes: &[HeaderNode]) -> Vec<Column> {
    nodes.iter().filter_map(HeaderNode::as_leaf).cloned().collect()
}

/// Merge a column spec into the ordered list of columns used for data.
///
/// Flat input comes back unchanged. For tiered input, first-tier leaves with
/// a `field` are kept in place and each fieldless group splices in the next
/// `colspan` unclaimed second-tier columns.
pub fn merge(spec: &ColumnSpec) -> Vec<Column> {
    match spec {
        ColumnSpec::Flat(cols) => cols.clone(),
        ColumnSpec::Tiered { first, second } => {
            let mut pending = second.iter();
            let mut merged = Vec::with_capacity(second.len() + first.len());
            for col in first {
                if col.field.is_some() {
                    merged.push(col.clone());
                    continue;
                }
                // Zero or missing colspan: header-only, nothing to claim
                let span = col.colspan.unwrap_or(0) as usize;
                merged.extend(pending.by_ref().take(span).cloned());
            }
            merged
        }
    }
}

/// Merge straight from the authored tree.
pub fn merge_nodes(nodes: &[HeaderNode]) -> Vec<Column> {
    merge(&ColumnSpec::from_nodes(nodes))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn fields(cols: &[Column]) -> Vec<&str> {
        cols.iter().filter_map(Column::field).collect()
    }

    #[test]
    fn test_flat_input_unchanged() {
        let cols = vec![Column::leaf("id", "ID"), Column::leaf("name", "Name")];
        let merged = merge(&ColumnSpec::Flat(cols.clone()));
        assert_eq!(fields(&merged), fields(&cols));
        assert_eq!(merged.len(), cols.len());
    }

    #[test]
    fn test_grouped_header_merge() {
        let nodes = vec![
            HeaderNode::from(vec![Column::group("Info", 2)]),
            HeaderNode::from(vec![Column::leaf("id", "ID"), Column::leaf("name", "Name")]),
        ];
        let merged = merge_nodes(&nodes);
        assert_eq!(fields(&merged), vec!["id", "name"]);
    }

    #[test]
    fn test_leaves_keep_first_tier_position() {
        let nodes = vec![
            HeaderNode::from(vec![
                Column::leaf("no", "No"),
                Column::group("A", 2),
                Column::leaf("mid", "Mid"),
                Column::group("B", 1),
            ]),
            HeaderNode::from(vec![
                Column::leaf("a1", "A1"),
                Column::leaf("a2", "A2"),
                Column::leaf("b1", "B1"),
            ]),
        ];
        let merged = merge_nodes(&nodes);
        assert_eq!(fields(&merged), vec!["no", "a1", "a2", "mid", "b1"]);
    }

    #[test]
    fn test_span_conservation_bounded_by_second_tier() {
        let nodes = vec![
            HeaderNode::from(vec![
                Column::leaf("x", "X"),
                Column::group("A", 2),
                Column::group("B", 3),
            ]),
            HeaderNode::from(vec![
                Column::leaf("a", "a"),
                Column::leaf("b", "b"),
                Column::leaf("c", "c"),
            ]),
        ];
        // 1 leaf + min(2 + 3, 3) claimed
        let merged = merge_nodes(&nodes);
        assert_eq!(merged.len(), 4);
        assert_eq!(fields(&merged), vec!["x", "a", "b", "c"]);
    }

    #[test]
    fn test_zero_or_missing_colspan_dropped() {
        let mut spacer = Column::group("Spacer", 0);
        spacer.colspan = None;
        let nodes = vec![
            HeaderNode::from(vec![spacer, Column::group("Zero", 0), Column::group("G", 1)]),
            HeaderNode::from(vec![Column::leaf("a", "a"), Column::leaf("b", "b")]),
        ];
        assert_eq!(fields(&merge_nodes(&nodes)), vec!["a"]);
    }

    #[test]
    fn test_group_without_second_tier_contributes_nothing() {
        let nodes = vec![HeaderNode::from(vec![
            Column::group("G", 2),
            Column::leaf("a", "a"),
        ])];
        assert_eq!(fields(&merge_nodes(&nodes)), vec!["a"]);
    }

    #[test]
    fn test_third_tier_ignored() {
        let nodes = vec![
            HeaderNode::from(vec![Column::group("G", 1)]),
            HeaderNode::from(vec![Column::leaf("a", "a")]),
            HeaderNode::from(vec![Column::leaf("deep", "Deep")]),
        ];
        assert_eq!(fields(&merge_nodes(&nodes)), vec!["a"]);
    }
}
