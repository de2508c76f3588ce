use serde::{Deserialize, Serialize};

use super::ColumnHooks;

/// Horizontal alignment for header labels and body cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_css(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

/// Raw width as authored: a pixel number or a string such as `"120"`,
/// `"120px"` or `"25%"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WidthSpec {
    Number(f64),
    Text(String),
}

impl From<f64> for WidthSpec {
    fn from(v: f64) -> Self {
        WidthSpec::Number(v)
    }
}

impl From<u32> for WidthSpec {
    fn from(v: u32) -> Self {
        WidthSpec::Number(f64::from(v))
    }
}

impl From<&str> for WidthSpec {
    fn from(v: &str) -> Self {
        WidthSpec::Text(v.to_string())
    }
}

/// A single column entry: either a data-bearing leaf (`field` set) or a
/// header-only group cell spanning `colspan` leaves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Column {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<WidthSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colspan: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rowspan: Option<u32>,
    /// Body cell alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    /// Header label alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub halign: Option<Align>,
    /// Copy the displayed value into the cell tooltip
    pub tooltip: bool,
    #[serde(skip)]
    pub hooks: ColumnHooks,
}

impl Column {
    /// Leaf column bound to `field`.
    pub fn leaf(field: &str, title: &str) -> Self {
        Self {
            field: Some(field.to_string()),
            title: Some(title.to_string()),
            ..Self::default()
        }
    }

    /// Header-only group spanning `colspan` leaf columns.
    pub fn group(title: &str, colspan: u32) -> Self {
        Self {
            title: Some(title.to_string()),
            colspan: Some(colspan),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: impl Into<WidthSpec>) -> Self {
        self.width = Some(width.into());
        self
    }

    #[must_use]
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: bool) -> Self {
        self.tooltip = tooltip;
        self
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

/// Node of the authored column tree. Header building recurses through
/// groups to any depth.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeaderNode {
    Group(Vec<HeaderNode>),
    Leaf(Column),
}

impl HeaderNode {
    pub fn as_leaf(&self) -> Option<&Column> {
        match self {
            HeaderNode::Leaf(col) => Some(col),
            HeaderNode::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&[HeaderNode]> {
        match self {
            HeaderNode::Group(nodes) => Some(nodes),
            HeaderNode::Leaf(_) => None,
        }
    }

    /// Apply `f` to every leaf in this subtree.
    pub(crate) fn for_each_leaf_mut(&mut self, f: &mut dyn FnMut(&mut Column)) {
        match self {
            HeaderNode::Leaf(col) => f(col),
            HeaderNode::Group(nodes) => {
                for node in nodes {
                    node.for_each_leaf_mut(f);
                }
            }
        }
    }
}

impl From<Column> for HeaderNode {
    fn from(col: Column) -> Self {
        HeaderNode::Leaf(col)
    }
}

impl From<Vec<Column>> for HeaderNode {
    fn from(cols: Vec<Column>) -> Self {
        HeaderNode::Group(cols.into_iter().map(HeaderNode::Leaf).collect())
    }
}
